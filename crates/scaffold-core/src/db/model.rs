use super::{Table, TableId};
use crate::{Error, Result};

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Structural metadata of one database.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseModel {
    pub database_name: Option<String>,

    pub default_schema: Option<String>,

    pub collation: Option<String>,

    pub tables: Vec<Table>,

    pub sequences: Vec<super::Sequence>,
}

impl DatabaseModel {
    pub fn table(&self, id: TableId) -> &Table {
        &self.tables[id.0]
    }

    /// Finds a table by name. A `None` schema matches the default schema or
    /// a table without one.
    pub fn find_table(&self, schema: Option<&str>, name: &str) -> Option<&Table> {
        let schema = schema.or(self.default_schema.as_deref());
        let mut candidates = self.tables.iter().filter(|table| table.name == name);

        candidates
            .clone()
            .find(|table| table.schema.as_deref() == schema)
            .or_else(|| candidates.find(|table| table.schema.is_none() || schema.is_none()))
    }

    /// Populates every table id and child back-reference.
    pub fn link(&mut self) {
        for (index, table) in self.tables.iter_mut().enumerate() {
            let id = TableId(index);
            table.id = id;

            for column in &mut table.columns {
                column.table = id;
            }

            if let Some(primary_key) = &mut table.primary_key {
                primary_key.table = id;
            }

            for unique_constraint in &mut table.unique_constraints {
                unique_constraint.table = id;
            }

            for index in &mut table.indexes {
                index.table = id;
            }

            for foreign_key in &mut table.foreign_keys {
                foreign_key.table = id;
            }
        }
    }

    /// Builder-style [`link`](DatabaseModel::link).
    pub fn linked(mut self) -> Self {
        self.link();
        self
    }

    /// Checks that back-references are populated and consistent, and that
    /// every key refers to columns of its own table.
    pub fn verify(&self) -> Result<()> {
        let mut names = HashSet::new();

        for (index, table) in self.tables.iter().enumerate() {
            let id = TableId(index);

            if table.id != id {
                return Err(Error::invalid_database_model(format!(
                    "table `{}` has id {:?}, expected {:?}",
                    table.display_name(),
                    table.id,
                    id
                )));
            }

            if !names.insert((table.schema.as_deref(), table.name.as_str())) {
                return Err(Error::invalid_database_model(format!(
                    "duplicate table `{}`",
                    table.display_name()
                )));
            }

            let mut back_references = table
                .columns
                .iter()
                .map(|column| ("column", column.name.as_str(), column.table))
                .collect::<Vec<_>>();

            if let Some(primary_key) = &table.primary_key {
                back_references.push(("primary key", "", primary_key.table));
                verify_columns(table, "primary key", &primary_key.columns)?;
            }

            for unique_constraint in &table.unique_constraints {
                back_references.push(("unique constraint", "", unique_constraint.table));
                verify_columns(table, "unique constraint", &unique_constraint.columns)?;
            }

            for index in &table.indexes {
                back_references.push(("index", "", index.table));
                verify_columns(table, "index", &index.columns)?;
            }

            for foreign_key in &table.foreign_keys {
                back_references.push(("foreign key", "", foreign_key.table));
                verify_columns(table, "foreign key", &foreign_key.columns)?;

                if foreign_key.columns.len() != foreign_key.principal_columns.len() {
                    return Err(Error::invalid_database_model(format!(
                        "foreign key on `{}` pairs {} columns with {} principal columns",
                        table.display_name(),
                        foreign_key.columns.len(),
                        foreign_key.principal_columns.len()
                    )));
                }
            }

            for (what, name, table_id) in back_references {
                if table_id != id {
                    let what = if name.is_empty() {
                        what.to_string()
                    } else {
                        format!("{what} `{name}`")
                    };

                    return Err(Error::invalid_database_model(format!(
                        "{what} of table `{}` is not linked to its table",
                        table.display_name()
                    )));
                }
            }
        }

        Ok(())
    }
}

fn verify_columns(table: &Table, what: &str, columns: &[String]) -> Result<()> {
    if columns.is_empty() {
        return Err(Error::invalid_database_model(format!(
            "{what} of table `{}` has no columns",
            table.display_name()
        )));
    }

    for name in columns {
        if table.column(name).is_none() {
            return Err(Error::invalid_database_model(format!(
                "{what} of table `{}` references missing column `{name}`",
                table.display_name()
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{Column, PrimaryKey};

    fn blogs() -> DatabaseModel {
        let mut table = Table::new("Blogs");
        table.columns.push(Column::new("Id", "int"));
        table.primary_key = Some(PrimaryKey::new(["Id"]));

        DatabaseModel {
            tables: vec![table],
            ..DatabaseModel::default()
        }
    }

    #[test]
    fn unlinked_model_is_rejected() {
        let err = blogs().verify().unwrap_err();
        assert!(err.is_invalid_database_model());
    }

    #[test]
    fn linked_model_verifies() {
        blogs().linked().verify().unwrap();
    }

    #[test]
    fn stale_back_reference_is_rejected() {
        let mut model = blogs().linked();
        model.tables[0].columns.push(Column::new("Name", "nvarchar(max)"));

        let err = model.verify().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid database model: column `Name` of table `Blogs` is not linked to its table"
        );
    }

    #[test]
    fn key_on_missing_column_is_rejected() {
        let mut model = blogs();
        model.tables[0].primary_key = Some(PrimaryKey::new(["BlogId"]));

        let err = model.linked().verify().unwrap_err();
        assert!(err.to_string().contains("missing column `BlogId`"));
    }
}
