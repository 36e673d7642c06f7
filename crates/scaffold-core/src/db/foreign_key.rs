use super::TableId;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ForeignKey {
    /// The dependent table declaring the constraint.
    #[serde(skip)]
    pub table: TableId,

    pub name: Option<String>,

    /// Dependent columns, in constraint order.
    pub columns: Vec<String>,

    /// Schema of the principal table. Defaults to the dependent table's
    /// schema.
    pub principal_schema: Option<String>,

    pub principal_table: String,

    /// Principal columns, paired positionally with `columns`.
    pub principal_columns: Vec<String>,

    pub on_delete: ReferentialAction,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferentialAction {
    #[default]
    NoAction,
    Restrict,
    Cascade,
    SetNull,
    SetDefault,
}

impl ForeignKey {
    pub fn new<C, P, S>(
        columns: C,
        principal_table: impl Into<String>,
        principal_columns: P,
    ) -> ForeignKey
    where
        C: IntoIterator<Item = S>,
        P: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ForeignKey {
            columns: columns.into_iter().map(Into::into).collect(),
            principal_table: principal_table.into(),
            principal_columns: principal_columns.into_iter().map(Into::into).collect(),
            ..ForeignKey::default()
        }
    }
}
