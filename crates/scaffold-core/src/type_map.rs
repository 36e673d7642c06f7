//! Mapping between provider store types and target types.
//!
//! A [`TypeMappingSource`] knows the provider's conventions in both
//! directions. The [`ScaffoldingTypeMapper`] uses those conventions to decide
//! which facets of a store type must be spelled out in generated code and
//! which ones a convention would reproduce on its own.

mod info;
pub use info::{MappingHints, RelationalTypeMapping, TypeScaffoldingInfo};

mod mapper;
pub use mapper::ScaffoldingTypeMapper;

mod sql_server;
pub use sql_server::SqlServerTypeMappingSource;

mod store_type;
pub use store_type::{StoreSize, StoreType};

mod target_type;
pub use target_type::TargetType;

/// Provider type conventions.
pub trait TypeMappingSource {
    /// Maps a parsed store type to its target type and facets. Returns `None`
    /// for store types with no target type.
    fn find_by_store_type(&self, store_type: &StoreType) -> Option<RelationalTypeMapping>;

    /// Maps a target type to the store type the provider would pick by
    /// convention, honoring `hints`.
    fn find_by_type(&self, ty: TargetType, hints: &MappingHints) -> Option<RelationalTypeMapping>;
}
