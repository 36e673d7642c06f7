use super::PropertyId;

/// A primary key. Properties keep the declared column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    /// Constraint name, set only when it differs from the conventional
    /// `PK_{table}`.
    pub name: Option<String>,

    pub properties: Vec<PropertyId>,
}
