use super::{EntityId, Model, NavigationId, PropertyId};
use crate::{Error, Result};

struct Verify<'a> {
    model: &'a Model,
}

impl Model {
    /// Checks the model's internal references.
    ///
    /// Every id must be populated and resolve, and every navigation's
    /// inverse must name it back.
    pub fn verify(&self) -> Result<()> {
        Verify { model: self }.verify()
    }
}

impl Verify<'_> {
    fn verify(&self) -> Result<()> {
        debug_assert!(self.verify_ids_populated());

        self.verify_properties_resolve()?;
        self.verify_navigation_symmetry()?;
        self.verify_foreign_key_navigations()?;
        Ok(())
    }

    fn verify_ids_populated(&self) -> bool {
        for (id, entity) in &self.model.entities {
            assert_eq!(*id, entity.id);
            assert_ne!(entity.id, EntityId::placeholder());

            for property in &entity.properties {
                assert_ne!(property.id, PropertyId::placeholder());
            }

            for navigation in &entity.navigations {
                assert_ne!(navigation.id, NavigationId::placeholder());
            }
        }

        true
    }

    fn verify_properties_resolve(&self) -> Result<()> {
        for entity in self.model.entities() {
            let key = entity.primary_key.iter().flat_map(|key| &key.properties);
            let indexes = entity.indexes.iter().flat_map(|index| &index.properties);
            let foreign_keys = entity
                .foreign_keys
                .iter()
                .flat_map(|fk| fk.properties.iter().chain(&fk.principal_properties));

            for id in key.chain(indexes).chain(foreign_keys) {
                let resolves = self
                    .model
                    .entities
                    .get(&id.entity)
                    .is_some_and(|owner| id.index < owner.properties.len());

                if !resolves {
                    return Err(Error::from_args(format_args!(
                        "entity `{}` refers to missing property {:?}",
                        entity.name, id
                    )));
                }
            }
        }

        Ok(())
    }

    fn verify_navigation_symmetry(&self) -> Result<()> {
        for entity in self.model.entities() {
            for navigation in &entity.navigations {
                let Some(inverse) = navigation.inverse else {
                    continue;
                };

                let pair = self.model.navigation(inverse);

                if pair.inverse != Some(navigation.id) {
                    return Err(Error::from_args(format_args!(
                        "navigation `{}.{}` names `{}` as its inverse, but the inverse does not name it back",
                        entity.name,
                        navigation.name,
                        pair.name
                    )));
                }

                if pair.foreign_key != navigation.foreign_key
                    || pair.on_dependent == navigation.on_dependent
                {
                    return Err(Error::from_args(format_args!(
                        "navigation `{}.{}` and its inverse `{}` are not the two ends of one foreign key",
                        entity.name,
                        navigation.name,
                        pair.name
                    )));
                }
            }
        }

        Ok(())
    }

    fn verify_foreign_key_navigations(&self) -> Result<()> {
        for entity in self.model.entities() {
            for fk in &entity.foreign_keys {
                let ends = [fk.dependent_to_principal, fk.principal_to_dependent];

                for id in ends.into_iter().flatten() {
                    if self.model.navigation(id).foreign_key != fk.id {
                        return Err(Error::from_args(format_args!(
                            "foreign key {:?} on `{}` lists a navigation of another foreign key",
                            fk.id, entity.name
                        )));
                    }
                }

                if let [Some(dependent), Some(principal)] = ends {
                    let dependent = self.model.navigation(dependent);
                    if dependent.inverse != Some(principal) {
                        return Err(Error::from_args(format_args!(
                            "the navigations of foreign key {:?} on `{}` are not paired",
                            fk.id, entity.name
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}
