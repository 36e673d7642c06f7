//! The populated object-relational model produced by the
//! [`ModelFactory`](crate::ModelFactory) and consumed by code generators.

mod entity;
pub use entity::{Entity, EntityId, TableBinding};

mod foreign_key;
pub use foreign_key::{DeleteBehavior, ForeignKey, ForeignKeyId};

mod index;
pub use index::Index;

mod key;
pub use key::Key;

mod navigation;
pub use navigation::{Navigation, NavigationId};

mod note;
pub use note::Note;

mod property;
pub use property::{Property, PropertyId, ValueGeneration};

mod sequence;
pub use sequence::Sequence;

mod verify;

use indexmap::IndexMap;

#[derive(Debug, Default)]
pub struct Model {
    pub database_name: Option<String>,

    pub default_schema: Option<String>,

    pub collation: Option<String>,

    /// Entities in table order.
    pub entities: IndexMap<EntityId, Entity>,

    pub sequences: Vec<Sequence>,

    /// Problems that do not belong to a single entity.
    pub notes: Vec<Note>,
}

impl Model {
    pub fn entity(&self, id: impl Into<EntityId>) -> &Entity {
        self.entities.get(&id.into()).expect("invalid entity ID")
    }

    pub fn entity_mut(&mut self, id: impl Into<EntityId>) -> &mut Entity {
        self.entities
            .get_mut(&id.into())
            .expect("invalid entity ID")
    }

    pub fn entities(&self) -> impl ExactSizeIterator<Item = &Entity> + '_ {
        self.entities.values()
    }

    pub fn property(&self, id: PropertyId) -> &Property {
        &self.entity(id.entity).properties[id.index]
    }

    pub fn foreign_key(&self, id: ForeignKeyId) -> &ForeignKey {
        &self.entity(id.entity).foreign_keys[id.index]
    }

    pub fn navigation(&self, id: NavigationId) -> &Navigation {
        &self.entity(id.entity).navigations[id.index]
    }

    /// Notes on the model and on every entity.
    pub fn all_notes(&self) -> impl Iterator<Item = &Note> + '_ {
        self.notes
            .iter()
            .chain(self.entities().flat_map(|entity| entity.notes.iter()))
    }
}
