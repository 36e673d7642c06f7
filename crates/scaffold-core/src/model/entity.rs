use super::{ForeignKey, Index, Key, Navigation, Note, Property};
use crate::db::TableKind;

use std::fmt;

#[derive(Debug, Clone)]
pub struct Entity {
    /// Uniquely identifies the entity within the model
    pub id: EntityId,

    /// Type name of the entity
    pub name: String,

    /// Name of the collection accessor on the context
    pub db_set_name: String,

    pub table: TableBinding,

    pub comment: Option<String>,

    pub properties: Vec<Property>,

    /// `None` for keyless entities.
    pub primary_key: Option<Key>,

    pub indexes: Vec<Index>,

    /// Foreign keys declared by this entity's table.
    pub foreign_keys: Vec<ForeignKey>,

    pub navigations: Vec<Navigation>,

    /// Problems found while scaffolding this entity.
    pub notes: Vec<Note>,
}

/// The table or view an entity is mapped to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableBinding {
    pub name: String,
    pub schema: Option<String>,
    pub kind: TableKind,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub usize);

impl Entity {
    pub(crate) fn new(id: EntityId, name: String, table: TableBinding) -> Entity {
        Entity {
            id,
            name,
            db_set_name: String::new(),
            table,
            comment: None,
            properties: vec![],
            primary_key: None,
            indexes: vec![],
            foreign_keys: vec![],
            navigations: vec![],
            notes: vec![],
        }
    }

    pub fn property_by_name(&self, name: &str) -> Option<&Property> {
        self.properties
            .iter()
            .find(|property| property.name == name)
    }

    pub fn property_by_column(&self, column: &str) -> Option<&Property> {
        self.properties
            .iter()
            .find(|property| property.column_name == column)
    }

    pub fn is_keyless(&self) -> bool {
        self.primary_key.is_none()
    }

    pub fn is_view(&self) -> bool {
        self.table.kind == TableKind::View
    }
}

impl EntityId {
    pub(crate) fn placeholder() -> EntityId {
        EntityId(usize::MAX)
    }
}

impl From<&Entity> for EntityId {
    fn from(value: &Entity) -> Self {
        value.id
    }
}

impl From<&mut Entity> for EntityId {
    fn from(value: &mut Entity) -> Self {
        value.id
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "EntityId({})", self.0)
    }
}
