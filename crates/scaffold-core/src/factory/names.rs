use super::ModelFactory;
use crate::db::{Column, Table};
use crate::naming::{
    candidate_identifier, sanitize_identifier, NameComparer, NameRegistry, UniqueNamer,
};
use crate::ModelReverseEngineerOptions;

/// Name registries for one model.
pub(super) struct Names<'a> {
    factory: &'a ModelFactory,

    options: &'a ModelReverseEngineerOptions,

    /// Entity type names. Compared ignoring case so file names stay distinct
    /// on case-insensitive file systems.
    entities: UniqueNamer<'a, Table>,

    /// Collection accessor names on the context
    db_sets: NameRegistry,
}

impl<'a> Names<'a> {
    pub(super) fn new(factory: &'a ModelFactory, options: &'a ModelReverseEngineerOptions) -> Self {
        let mut entities =
            UniqueNamer::new(move |table: &Table| candidate(options, &table.name))
                .comparer(NameComparer::IgnoreCase)
                .reserve(options.context_name.iter().cloned());

        if !options.no_pluralize {
            entities = entities.inflect(move |name| factory.pluralizer().singularize(name));
        }

        let mut db_sets = NameRegistry::default();
        if let Some(context_name) = &options.context_name {
            db_sets.reserve(context_name.clone());
        }

        Self {
            factory,
            options,
            entities,
            db_sets,
        }
    }

    pub(super) fn entity_name(&mut self, table: &'a Table) -> String {
        self.entities.get_name(table)
    }

    pub(super) fn db_set_name(&mut self, entity_name: &str) -> String {
        let name = sanitize_identifier(&self.pluralize(entity_name));
        self.db_sets.uniquify(&name)
    }

    /// A namer for the properties of one entity. A member may not share the
    /// name of its enclosing type.
    pub(super) fn property_namer(&self, entity_name: &str) -> UniqueNamer<'a, Column> {
        let options = self.options;

        UniqueNamer::new(move |column: &Column| candidate(options, &column.name))
            .reserve([entity_name])
    }

    pub(super) fn pluralize(&self, name: &str) -> String {
        if self.options.no_pluralize {
            name.to_string()
        } else {
            self.factory.pluralizer().pluralize(name)
        }
    }
}

fn candidate(options: &ModelReverseEngineerOptions, name: &str) -> String {
    if options.use_database_names {
        name.to_string()
    } else {
        candidate_identifier(name)
    }
}
