//! The raw database schema consumed by the model factory.
//!
//! These types are produced by an introspection collaborator. Child objects
//! carry a back-reference to their owning table which must be populated
//! (see [`DatabaseModel::link`]) before the model is scaffolded.

mod column;
pub use column::{Column, ValueGenerated};

mod foreign_key;
pub use foreign_key::{ForeignKey, ReferentialAction};

mod index;
pub use index::{Index, PrimaryKey, UniqueConstraint};

mod model;
pub use model::DatabaseModel;

mod sequence;
pub use sequence::Sequence;

mod table;
pub use table::{Table, TableId, TableKind};
