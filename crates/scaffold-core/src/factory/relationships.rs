use super::{resolve_columns, BuildModel};
use crate::db::{self, ReferentialAction, Table};
use crate::model::{
    DeleteBehavior, EntityId, ForeignKey, ForeignKeyId, Navigation, NavigationId, Note,
};
use crate::naming::{common_prefix, sanitize_identifier, strip_id, uniquify_navigation};

use std::collections::HashSet;

impl BuildModel<'_> {
    pub(super) fn build_relationships(&mut self) {
        let database = self.database;

        for table in &database.tables {
            let Some(&dependent) = self.entity_lookup.get(&table.id) else {
                continue;
            };

            for fk in &table.foreign_keys {
                match self.build_foreign_key(table, dependent, fk) {
                    Ok(mut foreign_key) => {
                        let entity = self.model.entity_mut(dependent);
                        foreign_key.id = ForeignKeyId {
                            entity: dependent,
                            index: entity.foreign_keys.len(),
                        };
                        entity.foreign_keys.push(foreign_key);
                    }
                    Err(reason) => {
                        self.model.entity_mut(dependent).notes.push(Note::SkippedForeignKey {
                            table: table.display_name(),
                            name: fk.name.clone(),
                            reason,
                        });
                    }
                }
            }
        }

        let foreign_keys: Vec<ForeignKeyId> = self
            .model
            .entities()
            .flat_map(|entity| entity.foreign_keys.iter().map(|fk| fk.id))
            .collect();

        for id in foreign_keys {
            self.build_navigations(id);
        }
    }

    fn build_foreign_key(
        &self,
        table: &Table,
        dependent: EntityId,
        fk: &db::ForeignKey,
    ) -> Result<ForeignKey, String> {
        let principal_schema = fk.principal_schema.as_deref().or(table.schema.as_deref());

        let table_name = &fk.principal_table;
        let Some(principal_table) = self.database.find_table(principal_schema, table_name) else {
            return Err(format!("the principal table '{table_name}' was not found"));
        };

        let Some(&principal) = self.entity_lookup.get(&principal_table.id) else {
            return Err(format!(
                "the principal table '{}' was skipped",
                principal_table.display_name()
            ));
        };

        let dependent_entity = self.model.entity(dependent);
        let principal_entity = self.model.entity(principal);

        let Some(properties) = resolve_columns(dependent_entity, &fk.columns) else {
            return Err("one of its columns was skipped".to_string());
        };

        let Some(principal_properties) = resolve_columns(principal_entity, &fk.principal_columns)
        else {
            return Err("one of its principal columns was skipped".to_string());
        };

        let principal_key_is_primary = principal_entity
            .primary_key
            .as_ref()
            .is_some_and(|key| key.properties == principal_properties);

        let columns: HashSet<_> = properties.iter().collect();
        let unique = dependent_entity
            .primary_key
            .iter()
            .map(|key| &key.properties)
            .chain(
                dependent_entity
                    .indexes
                    .iter()
                    .filter(|index| index.unique && index.filter.is_none())
                    .map(|index| &index.properties),
            )
            .any(|key| key.iter().collect::<HashSet<_>>() == columns);

        let required = properties
            .iter()
            .all(|id| !dependent_entity.properties[id.index].nullable);

        let on_delete = match fk.on_delete {
            ReferentialAction::Cascade => DeleteBehavior::Cascade,
            ReferentialAction::SetNull => DeleteBehavior::SetNull,
            _ => DeleteBehavior::ClientSetNull,
        };

        let conventional = format!(
            "FK_{}_{}_{}",
            table.name,
            principal_table.name,
            fk.columns.join("_")
        );

        Ok(ForeignKey {
            id: ForeignKeyId {
                entity: dependent,
                index: usize::MAX,
            },
            name: fk.name.clone().filter(|name| *name != conventional),
            properties,
            principal,
            principal_properties,
            principal_key_is_primary,
            unique,
            required,
            on_delete,
            dependent_to_principal: None,
            principal_to_dependent: None,
        })
    }

    /// Adds both ends of a relationship and pairs them.
    fn build_navigations(&mut self, id: ForeignKeyId) {
        let fk = self.model.foreign_key(id);
        let dependent = self.model.entity(id.entity);
        let principal = self.model.entity(fk.principal);
        let self_referencing = dependent.id == principal.id;

        let property_names: Vec<&str> = fk
            .properties
            .iter()
            .map(|property| self.model.property(*property).name.as_str())
            .collect();

        let candidate = strip_id(&common_prefix(&property_names)).to_string();
        let candidate = if candidate.is_empty() {
            principal.name.clone()
        } else {
            sanitize_identifier(&candidate)
        };

        let mut dependent_members = member_names(dependent);
        let dependent_name = uniquify_navigation(&candidate, &dependent_members);
        dependent_members.push(dependent_name.clone());

        let parallel = dependent
            .foreign_keys
            .iter()
            .filter(|other| other.principal == fk.principal)
            .count();

        let mut candidate = if self_referencing {
            format!("Inverse{dependent_name}")
        } else if parallel > 1 {
            format!("{dependent_name}{}", dependent.name)
        } else {
            dependent.name.clone()
        };

        if !fk.unique && !self_referencing && !self.options.no_pluralize {
            candidate = self.factory.pluralizer().pluralize(&candidate);
        }

        let principal_members = if self_referencing {
            dependent_members
        } else {
            member_names(principal)
        };
        let principal_name =
            uniquify_navigation(&sanitize_identifier(&candidate), &principal_members);

        let collection = !fk.unique;
        let dependent_id = id.entity;
        let principal_id = fk.principal;

        let dependent_nav = NavigationId {
            entity: dependent_id,
            index: dependent.navigations.len(),
        };
        let principal_nav = NavigationId {
            entity: principal_id,
            index: if self_referencing {
                dependent.navigations.len() + 1
            } else {
                principal.navigations.len()
            },
        };

        self.model.entity_mut(dependent_id).navigations.push(Navigation {
            id: dependent_nav,
            name: dependent_name,
            target: principal_id,
            foreign_key: id,
            collection: false,
            on_dependent: true,
            inverse: Some(principal_nav),
        });

        self.model.entity_mut(principal_id).navigations.push(Navigation {
            id: principal_nav,
            name: principal_name,
            target: dependent_id,
            foreign_key: id,
            collection,
            on_dependent: false,
            inverse: Some(dependent_nav),
        });

        let fk = &mut self.model.entity_mut(dependent_id).foreign_keys[id.index];
        fk.dependent_to_principal = Some(dependent_nav);
        fk.principal_to_dependent = Some(principal_nav);
    }
}

/// Names already declared on an entity, including the entity's own.
fn member_names(entity: &crate::model::Entity) -> Vec<String> {
    let properties = entity.properties.iter().map(|p| p.name.clone());
    let navigations = entity.navigations.iter().map(|n| n.name.clone());

    std::iter::once(entity.name.clone())
        .chain(properties)
        .chain(navigations)
        .collect()
}
