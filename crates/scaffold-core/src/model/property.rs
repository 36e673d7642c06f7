use super::EntityId;
use crate::type_map::{TargetType, TypeScaffoldingInfo};

use std::fmt;

#[derive(Debug, Clone)]
pub struct Property {
    /// Uniquely identifies the property within the model
    pub id: PropertyId,

    /// Member name, unique within the owning entity
    pub name: String,

    /// Name of the mapped column
    pub column_name: String,

    pub ty: TargetType,

    pub nullable: bool,

    /// Which type facets must be stated in generated code.
    pub mapping: TypeScaffoldingInfo,

    pub default_value_sql: Option<String>,

    pub computed_column_sql: Option<String>,

    pub computed_column_stored: Option<bool>,

    /// Value generation that must be configured explicitly. `None` when the
    /// convention already matches the database.
    pub value_generated: Option<ValueGeneration>,

    pub concurrency_token: bool,

    pub row_version: bool,

    pub comment: Option<String>,

    pub collation: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueGeneration {
    Never,
    OnAdd,
    OnAddOrUpdate,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct PropertyId {
    pub entity: EntityId,
    pub index: usize,
}

impl Property {
    /// Whether the column name must be configured.
    pub fn has_custom_column_name(&self) -> bool {
        self.column_name != self.name
    }
}

impl PropertyId {
    pub(crate) fn placeholder() -> PropertyId {
        PropertyId {
            entity: EntityId::placeholder(),
            index: usize::MAX,
        }
    }
}

impl From<&Property> for PropertyId {
    fn from(value: &Property) -> Self {
        value.id
    }
}

impl fmt::Debug for PropertyId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "PropertyId({}/{})", self.entity.0, self.index)
    }
}
