use scaffold_core::db::Table;
use scaffold_core::{DatabaseModel, Error, Result};

use std::path::Path;
use tracing::{debug, info};

/// Reads the schema of a database.
pub trait DatabaseModelFactory {
    fn create(
        &self,
        connection_string: &str,
        options: &DatabaseModelFactoryOptions,
    ) -> Result<IntrospectedDatabase>;
}

/// Result of introspecting a database.
#[derive(Debug, Clone, Default)]
pub struct IntrospectedDatabase {
    /// The linked schema.
    pub model: DatabaseModel,

    /// Connection string the database was actually reached with, when the
    /// introspection layer rewrote the one it was given. Generated code
    /// embeds this value instead of the caller's.
    pub connection_string: Option<String>,
}

/// Restricts introspection to some tables and schemas.
///
/// With no filters every table is included. Otherwise a table is included
/// when its schema is listed or its name is listed, either bare (`Blogs`) or
/// schema-qualified (`dbo.Blogs`, `[dbo].[Blogs]`).
#[derive(Debug, Clone, Default)]
pub struct DatabaseModelFactoryOptions {
    pub tables: Vec<String>,
    pub schemas: Vec<String>,
}

/// Introspection backed by a JSON schema dump. The connection string is the
/// path of the dump file.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonDatabaseModelFactory;

impl DatabaseModelFactoryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.tables.push(table.into());
        self
    }

    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.schemas.push(schema.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty() && self.schemas.is_empty()
    }

    pub fn includes_table(&self, table: &Table) -> bool {
        if self.is_empty() {
            return true;
        }

        let schema_listed = table
            .schema
            .as_deref()
            .is_some_and(|schema| self.includes_schema(schema));

        schema_listed
            || self.tables.iter().any(|filter| {
                let (schema, name) = split_table_name(filter);
                name.eq_ignore_ascii_case(&table.name)
                    && match (schema, &table.schema) {
                        (None, _) => true,
                        (Some(schema), Some(table_schema)) => {
                            schema.eq_ignore_ascii_case(table_schema)
                        }
                        (Some(_), None) => false,
                    }
            })
    }

    fn includes_schema(&self, schema: &str) -> bool {
        self.schemas
            .iter()
            .any(|filter| unquote(filter).eq_ignore_ascii_case(schema))
    }

    /// Drops excluded tables and sequences, then links the schema.
    pub fn apply(&self, mut database: DatabaseModel) -> DatabaseModel {
        if !self.is_empty() {
            database.tables.retain(|table| self.includes_table(table));
            database.sequences.retain(|sequence| {
                sequence
                    .schema
                    .as_deref()
                    .is_some_and(|schema| self.includes_schema(schema))
            });
        }

        database.linked()
    }
}

impl DatabaseModelFactory for JsonDatabaseModelFactory {
    fn create(
        &self,
        connection_string: &str,
        options: &DatabaseModelFactoryOptions,
    ) -> Result<IntrospectedDatabase> {
        let path = Path::new(connection_string.trim());
        debug!(path = %path.display(), "reading schema dump");

        let json = std::fs::read_to_string(path).map_err(|err| Error::io(path, err))?;
        let database: DatabaseModel = serde_json::from_str(&json).map_err(|err| {
            Error::invalid_database_model(format!("{}: {err}", path.display()))
        })?;

        let total = database.tables.len();
        let model = options.apply(database);

        info!(
            tables = model.tables.len(),
            excluded = total - model.tables.len(),
            sequences = model.sequences.len(),
            "introspected schema dump"
        );

        Ok(IntrospectedDatabase {
            model,
            connection_string: None,
        })
    }
}

/// Splits `schema.table`, removing `[...]` quoting.
fn split_table_name(name: &str) -> (Option<&str>, &str) {
    match name.rsplit_once("].[").or_else(|| name.rsplit_once('.')) {
        Some((schema, table)) => (Some(unquote(schema)), unquote(table)),
        None => (None, unquote(name)),
    }
}

fn unquote(name: &str) -> &str {
    let name = name.trim();
    let name = name.strip_prefix('[').unwrap_or(name);
    name.strip_suffix(']').unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(schema: Option<&str>, name: &str) -> Table {
        let mut table = Table::new(name);
        table.schema = schema.map(str::to_string);
        table
    }

    #[test]
    fn table_names() {
        assert_eq!(split_table_name("Blogs"), (None, "Blogs"));
        assert_eq!(split_table_name("dbo.Blogs"), (Some("dbo"), "Blogs"));
        assert_eq!(split_table_name("[dbo].[Blogs]"), (Some("dbo"), "Blogs"));
        assert_eq!(split_table_name("[Blogs]"), (None, "Blogs"));
    }

    #[test]
    fn filters() {
        let everything = DatabaseModelFactoryOptions::new();
        assert!(everything.includes_table(&table(Some("dbo"), "Blogs")));

        let options = DatabaseModelFactoryOptions::new()
            .table("dbo.Blogs")
            .table("Posts")
            .schema("[audit]");

        assert!(options.includes_table(&table(Some("dbo"), "Blogs")));
        assert!(options.includes_table(&table(Some("dbo"), "blogs")));
        assert!(!options.includes_table(&table(Some("blog"), "Blogs")));
        assert!(options.includes_table(&table(Some("blog"), "Posts")));
        assert!(options.includes_table(&table(Some("audit"), "Changes")));
        assert!(!options.includes_table(&table(None, "Changes")));
    }
}
