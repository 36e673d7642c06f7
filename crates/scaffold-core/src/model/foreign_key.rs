use super::{EntityId, NavigationId, PropertyId};

use std::fmt;

/// A relationship from a dependent entity to its principal.
#[derive(Debug, Clone)]
pub struct ForeignKey {
    pub id: ForeignKeyId,

    /// Constraint name, set only when it differs from the conventional
    /// `FK_{table}_{principal table}_{columns}`.
    pub name: Option<String>,

    /// Dependent properties, in constraint order.
    pub properties: Vec<PropertyId>,

    pub principal: EntityId,

    /// Principal properties, paired positionally with `properties`.
    pub principal_properties: Vec<PropertyId>,

    /// Whether `principal_properties` are the principal's primary key.
    pub principal_key_is_primary: bool,

    /// One-to-one when set.
    pub unique: bool,

    /// Set when every dependent property is non-nullable.
    pub required: bool,

    pub on_delete: DeleteBehavior,

    /// Navigation on the dependent entity pointing at the principal.
    pub dependent_to_principal: Option<NavigationId>,

    /// Navigation on the principal entity pointing at the dependents.
    pub principal_to_dependent: Option<NavigationId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteBehavior {
    Cascade,
    SetNull,
    ClientSetNull,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct ForeignKeyId {
    pub entity: EntityId,
    pub index: usize,
}

impl ForeignKey {
    /// The delete behavior used when none is configured.
    pub fn conventional_on_delete(&self) -> DeleteBehavior {
        if self.required {
            DeleteBehavior::Cascade
        } else {
            DeleteBehavior::ClientSetNull
        }
    }
}

impl DeleteBehavior {
    pub fn as_str(self) -> &'static str {
        match self {
            DeleteBehavior::Cascade => "Cascade",
            DeleteBehavior::SetNull => "SetNull",
            DeleteBehavior::ClientSetNull => "ClientSetNull",
        }
    }
}

impl fmt::Debug for ForeignKeyId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ForeignKeyId({}/{})", self.entity.0, self.index)
    }
}
