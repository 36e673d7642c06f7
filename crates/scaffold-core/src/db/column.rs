use super::TableId;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Column {
    /// The table owning this column.
    #[serde(skip)]
    pub table: TableId,

    /// The name of the column in the database.
    pub name: String,

    /// The provider-specific store type, such as `nvarchar(200)`. `None`
    /// when introspection could not determine it.
    pub store_type: Option<String>,

    pub nullable: bool,

    pub default_value_sql: Option<String>,

    pub computed_column_sql: Option<String>,

    /// Whether a computed column is persisted. `None` lets the provider
    /// decide.
    pub computed_column_stored: Option<bool>,

    pub value_generated: Option<ValueGenerated>,

    pub concurrency_token: bool,

    pub comment: Option<String>,

    pub collation: Option<String>,
}

/// When the database generates a value for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueGenerated {
    OnAdd,
    OnAddOrUpdate,
}

impl Column {
    pub fn new(name: impl Into<String>, store_type: impl Into<String>) -> Column {
        Column {
            name: name.into(),
            store_type: Some(store_type.into()),
            ..Column::default()
        }
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn value_generated(mut self, value_generated: ValueGenerated) -> Self {
        self.value_generated = Some(value_generated);
        self
    }

    /// Row-version columns are regenerated on every write and act as a
    /// concurrency token.
    pub fn is_row_version(&self) -> bool {
        self.value_generated == Some(ValueGenerated::OnAddOrUpdate) && self.concurrency_token
    }
}
