use super::{EntityId, ForeignKeyId};

use std::fmt;

/// One end of a relationship.
///
/// The two ends generated from a foreign key point at each other through
/// `inverse`. Either both ends name each other or the navigation has no
/// inverse.
#[derive(Debug, Clone)]
pub struct Navigation {
    pub id: NavigationId,

    /// Member name on the declaring entity
    pub name: String,

    /// Entity the navigation points at
    pub target: EntityId,

    pub foreign_key: ForeignKeyId,

    /// Collection-valued when the declaring entity is the principal of a
    /// non-unique foreign key.
    pub collection: bool,

    /// Declared on the dependent entity.
    pub on_dependent: bool,

    pub inverse: Option<NavigationId>,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct NavigationId {
    pub entity: EntityId,
    pub index: usize,
}

impl NavigationId {
    pub(crate) fn placeholder() -> NavigationId {
        NavigationId {
            entity: EntityId::placeholder(),
            index: usize::MAX,
        }
    }
}

impl fmt::Debug for NavigationId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "NavigationId({}/{})", self.entity.0, self.index)
    }
}
