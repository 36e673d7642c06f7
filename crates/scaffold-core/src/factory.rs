mod names;
mod relationships;

use crate::db::{self, DatabaseModel, Table, TableId};
use crate::model::{
    Entity, EntityId, Index, Key, Model, Note, Property, PropertyId, Sequence, TableBinding,
    ValueGeneration,
};
use crate::naming::{EnglishPluralizer, Pluralizer};
use crate::type_map::{ScaffoldingTypeMapper, StoreType, TargetType, TypeScaffoldingInfo};
use crate::{ModelReverseEngineerOptions, Result};
use names::Names;

use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

/// Builds the populated model from a raw database schema.
pub struct ModelFactory {
    type_mapper: ScaffoldingTypeMapper,
    pluralizer: Box<dyn Pluralizer>,
}

/// Used to track state while the model is built
struct BuildModel<'a> {
    factory: &'a ModelFactory,

    options: &'a ModelReverseEngineerOptions,

    database: &'a DatabaseModel,

    names: Names<'a>,

    model: Model,

    /// Entities created for each scaffolded table
    entity_lookup: HashMap<TableId, EntityId>,
}

impl ModelFactory {
    pub fn new(type_mapper: ScaffoldingTypeMapper, pluralizer: impl Pluralizer + 'static) -> Self {
        Self {
            type_mapper,
            pluralizer: Box::new(pluralizer),
        }
    }

    pub fn type_mapper(&self) -> &ScaffoldingTypeMapper {
        &self.type_mapper
    }

    pub fn pluralizer(&self) -> &dyn Pluralizer {
        &*self.pluralizer
    }

    /// Creates the model for `database`.
    ///
    /// Fails only when the database model itself is malformed. Tables,
    /// columns and keys that cannot be scaffolded are skipped and recorded as
    /// [`Note`]s on the returned model.
    pub fn create(
        &self,
        database: &DatabaseModel,
        options: &ModelReverseEngineerOptions,
    ) -> Result<Model> {
        database.verify()?;

        let mut builder = BuildModel {
            factory: self,
            options,
            database,
            names: Names::new(self, options),
            model: Model {
                database_name: database.database_name.clone(),
                default_schema: database.default_schema.clone(),
                collation: database.collation.clone(),
                ..Model::default()
            },
            entity_lookup: HashMap::new(),
        };

        for table in &database.tables {
            builder.build_entity(table);
        }

        builder.build_relationships();
        builder.build_sequences();

        let model = builder.model;
        model.verify()?;

        for note in model.all_notes() {
            warn!("{note}");
        }

        debug!(
            tables = database.tables.len(),
            entities = model.entities.len(),
            "created model"
        );

        Ok(model)
    }
}

impl Default for ModelFactory {
    fn default() -> Self {
        Self::new(ScaffoldingTypeMapper::default(), EnglishPluralizer)
    }
}

impl<'a> BuildModel<'a> {
    fn build_entity(&mut self, table: &'a Table) {
        let key_or_index = key_or_index_columns(table);
        let mut notes = vec![];
        let mut mapped: Vec<(&'a db::Column, TypeScaffoldingInfo)> = vec![];

        for column in &table.columns {
            let mapping = column.store_type.as_deref().and_then(|store_type| {
                self.factory.type_mapper.find_mapping(
                    store_type,
                    key_or_index.contains(column.name.as_str()),
                    column.is_row_version(),
                )
            });

            match mapping {
                Some(mapping) => mapped.push((column, mapping)),
                None => notes.push(Note::UnmappedColumn {
                    table: table.display_name(),
                    column: column.name.clone(),
                    store_type: column.store_type.clone(),
                }),
            }
        }

        if mapped.is_empty() {
            self.model.notes.extend(notes);
            self.model.notes.push(Note::NoUsableColumns {
                table: table.display_name(),
            });
            return;
        }

        let id = EntityId(self.model.entities.len());
        let name = self.names.entity_name(table);
        let db_set_name = self.names.db_set_name(&name);

        let mut entity = Entity::new(
            id,
            name,
            TableBinding {
                name: table.name.clone(),
                schema: table.schema.clone(),
                kind: table.kind,
            },
        );
        entity.db_set_name = db_set_name;
        entity.comment = table.comment.clone();

        let mut property_namer = self.names.property_namer(&entity.name);

        for (index, (column, mapping)) in mapped.iter().enumerate() {
            let row_version = column.is_row_version();

            entity.properties.push(Property {
                id: PropertyId { entity: id, index },
                name: property_namer.get_name(*column),
                column_name: column.name.clone(),
                ty: mapping.ty,
                nullable: column.nullable,
                mapping: mapping.clone(),
                default_value_sql: column.default_value_sql.clone(),
                computed_column_sql: column.computed_column_sql.clone(),
                computed_column_stored: column.computed_column_stored,
                value_generated: None,
                concurrency_token: column.concurrency_token && !row_version,
                row_version,
                comment: column.comment.clone(),
                collation: column.collation.clone(),
            });
        }

        entity.primary_key = build_primary_key(table, &entity, &mut notes);

        let single_key = match &entity.primary_key {
            Some(Key { properties, .. }) if properties.len() == 1 => Some(properties[0]),
            _ => None,
        };

        for (property, (column, _)) in entity.properties.iter_mut().zip(&mapped) {
            property.value_generated =
                value_generation(column, property, single_key == Some(property.id));
        }

        entity.indexes = build_indexes(table, &entity, &mut notes);
        entity.notes = notes;

        self.entity_lookup.insert(table.id, id);
        self.model.entities.insert(id, entity);
    }

    fn build_sequences(&mut self) {
        for sequence in &self.database.sequences {
            let store_type = sequence.store_type.as_deref().unwrap_or("bigint");
            let mapping = self
                .factory
                .type_mapper
                .source()
                .find_by_store_type(&StoreType::parse(store_type));

            match mapping {
                Some(mapping) if mapping.ty.is_integer() || mapping.ty == TargetType::Decimal => {
                    self.model.sequences.push(Sequence {
                        name: sequence.name.clone(),
                        schema: sequence.schema.clone(),
                        ty: mapping.ty,
                        start_value: sequence.start_value,
                        increment_by: sequence.increment_by,
                        min_value: sequence.min_value,
                        max_value: sequence.max_value,
                        cyclic: sequence.cyclic,
                    });
                }
                _ => self.model.notes.push(Note::UnmappedSequence {
                    name: sequence.name.clone(),
                    store_type: store_type.to_string(),
                }),
            }
        }
    }
}

/// Columns taking part in a key, constraint, index or foreign key.
fn key_or_index_columns(table: &Table) -> HashSet<&str> {
    let primary_key = table.primary_key.iter().flat_map(|pk| &pk.columns);
    let unique = table.unique_constraints.iter().flat_map(|uc| &uc.columns);
    let indexes = table.indexes.iter().flat_map(|index| &index.columns);
    let foreign_keys = table.foreign_keys.iter().flat_map(|fk| &fk.columns);

    primary_key
        .chain(unique)
        .chain(indexes)
        .chain(foreign_keys)
        .map(String::as_str)
        .collect()
}

fn build_primary_key(table: &Table, entity: &Entity, notes: &mut Vec<Note>) -> Option<Key> {
    let Some(primary_key) = &table.primary_key else {
        // Views are keyless without comment
        if !table.is_view() {
            notes.push(Note::MissingPrimaryKey {
                table: table.display_name(),
            });
        }
        return None;
    };

    let properties = resolve_columns(entity, &primary_key.columns);

    let Some(properties) = properties else {
        notes.push(Note::MissingPrimaryKey {
            table: table.display_name(),
        });
        return None;
    };

    let conventional = format!("PK_{}", table.name);

    Some(Key {
        name: primary_key
            .name
            .clone()
            .filter(|name| *name != conventional),
        properties,
    })
}

fn build_indexes(table: &Table, entity: &Entity, notes: &mut Vec<Note>) -> Vec<Index> {
    let primary_key = entity.primary_key.as_ref().map(|key| &key.properties);

    let unique_constraints = table
        .unique_constraints
        .iter()
        .map(|uc| (&uc.name, &uc.columns, true, None));
    let indexes = table
        .indexes
        .iter()
        .map(|ix| (&ix.name, &ix.columns, ix.unique, ix.filter.as_ref()));

    let mut ret: Vec<Index> = vec![];

    for (name, columns, unique, filter) in unique_constraints.chain(indexes) {
        let Some(properties) = resolve_columns(entity, columns) else {
            notes.push(Note::SkippedIndex {
                table: table.display_name(),
                name: name.clone(),
                reason: "one of its columns was skipped".to_string(),
            });
            continue;
        };

        // Redundant with the primary key
        if filter.is_none() && primary_key == Some(&properties) {
            continue;
        }

        ret.push(Index {
            name: name.clone(),
            properties,
            unique,
            filter: filter.cloned(),
        });
    }

    ret
}

/// Maps column names to the entity's properties, in the given order.
/// Returns `None` when a column was not scaffolded.
fn resolve_columns(entity: &Entity, columns: &[String]) -> Option<Vec<PropertyId>> {
    columns
        .iter()
        .map(|column| Some(entity.property_by_column(column)?.id))
        .collect()
}

/// The value generation that must be configured, if the convention does not
/// already produce it.
///
/// By convention a single integer key is generated on add and nothing else
/// is generated.
fn value_generation(
    column: &db::Column,
    property: &Property,
    single_key: bool,
) -> Option<ValueGeneration> {
    let conventional_key = single_key && property.ty.is_integer();
    let implied = column.default_value_sql.is_some() || column.computed_column_sql.is_some();

    match column.value_generated {
        None if conventional_key && !implied => Some(ValueGeneration::Never),
        None => None,
        Some(db::ValueGenerated::OnAdd) if conventional_key || implied => None,
        Some(db::ValueGenerated::OnAdd) => Some(ValueGeneration::OnAdd),
        Some(db::ValueGenerated::OnAddOrUpdate) if property.row_version || implied => None,
        Some(db::ValueGenerated::OnAddOrUpdate) => Some(ValueGeneration::OnAddOrUpdate),
    }
}
