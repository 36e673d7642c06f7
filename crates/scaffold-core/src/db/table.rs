use super::{Column, ForeignKey, Index, PrimaryKey, UniqueConstraint};

use serde::{Deserialize, Serialize};
use std::fmt;

/// A database table or view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Table {
    /// Position of the table in its database model. Populated by
    /// [`DatabaseModel::link`](super::DatabaseModel::link).
    #[serde(skip)]
    pub id: TableId,

    pub name: String,

    pub schema: Option<String>,

    pub kind: TableKind,

    pub comment: Option<String>,

    pub columns: Vec<Column>,

    pub primary_key: Option<PrimaryKey>,

    pub unique_constraints: Vec<UniqueConstraint>,

    pub indexes: Vec<Index>,

    pub foreign_keys: Vec<ForeignKey>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableKind {
    #[default]
    Table,
    View,
}

/// Uniquely identifies a table within a database model
#[derive(PartialEq, Eq, Clone, Copy, Hash)]
pub struct TableId(pub usize);

impl Table {
    pub fn new(name: impl Into<String>) -> Table {
        Table {
            name: name.into(),
            ..Table::default()
        }
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn is_view(&self) -> bool {
        self.kind == TableKind::View
    }

    /// The schema-qualified name, used in notes and log output.
    pub fn display_name(&self) -> String {
        match &self.schema {
            Some(schema) => format!("{schema}.{}", self.name),
            None => self.name.clone(),
        }
    }
}

impl TableId {
    pub fn placeholder() -> TableId {
        TableId(usize::MAX)
    }

    pub fn is_placeholder(self) -> bool {
        self.0 == usize::MAX
    }
}

impl Default for TableId {
    fn default() -> TableId {
        TableId::placeholder()
    }
}

impl fmt::Debug for TableId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_placeholder() {
            write!(fmt, "TableId(_)")
        } else {
            write!(fmt, "TableId({})", self.0)
        }
    }
}
