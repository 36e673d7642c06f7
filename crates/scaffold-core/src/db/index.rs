use super::TableId;

use serde::{Deserialize, Serialize};

/// A table's primary key. Columns are listed in declaration order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PrimaryKey {
    #[serde(skip)]
    pub table: TableId,

    pub name: Option<String>,

    pub columns: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UniqueConstraint {
    #[serde(skip)]
    pub table: TableId,

    pub name: Option<String>,

    pub columns: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Index {
    #[serde(skip)]
    pub table: TableId,

    pub name: Option<String>,

    pub columns: Vec<String>,

    pub unique: bool,

    /// Filter predicate of a partial index.
    pub filter: Option<String>,
}

impl PrimaryKey {
    pub fn new<I, S>(columns: I) -> PrimaryKey
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PrimaryKey {
            columns: columns.into_iter().map(Into::into).collect(),
            ..PrimaryKey::default()
        }
    }
}

impl Index {
    pub fn new<I, S>(name: impl Into<String>, columns: I) -> Index
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Index {
            name: Some(name.into()),
            columns: columns.into_iter().map(Into::into).collect(),
            ..Index::default()
        }
    }
}
