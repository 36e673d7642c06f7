use super::TargetType;

/// A provider mapping between a store type and a target type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationalTypeMapping {
    pub ty: TargetType,

    /// Canonical store type, as produced by [`StoreType`](super::StoreType)'s
    /// `Display`.
    pub store_type: String,

    pub size: Option<u32>,

    pub unicode: bool,

    pub fixed_length: bool,

    pub precision: Option<u32>,

    pub scale: Option<u32>,

    pub row_version: bool,
}

/// Facet requests passed to [`TypeMappingSource::find_by_type`](super::TypeMappingSource::find_by_type).
///
/// A `None` facet means "use the convention".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MappingHints {
    pub key_or_index: bool,
    pub row_version: bool,
    pub unicode: Option<bool>,
    pub size: Option<u32>,
    pub fixed_length: Option<bool>,
    pub precision: Option<u32>,
    pub scale: Option<u32>,
}

/// What scaffolded code must state about a column's type.
///
/// When `is_inferred` is set, the convention mapping of `ty` reproduces the
/// store type and nothing needs to be generated. Otherwise the facets that
/// are `Some` are emitted, or the full store type when no facet applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeScaffoldingInfo {
    pub ty: TargetType,

    /// The canonical store type that was mapped.
    pub store_type: String,

    pub is_inferred: bool,

    pub max_length: Option<u32>,

    pub unicode: Option<bool>,

    pub fixed_length: Option<bool>,

    pub precision: Option<u32>,

    pub scale: Option<u32>,
}

impl RelationalTypeMapping {
    pub(crate) fn new(ty: TargetType, store_type: impl Into<String>) -> RelationalTypeMapping {
        RelationalTypeMapping {
            ty,
            store_type: store_type.into(),
            size: None,
            unicode: false,
            fixed_length: false,
            precision: None,
            scale: None,
            row_version: false,
        }
    }
}

impl TypeScaffoldingInfo {
    pub(crate) fn new(ty: TargetType, store_type: impl Into<String>) -> TypeScaffoldingInfo {
        TypeScaffoldingInfo {
            ty,
            store_type: store_type.into(),
            is_inferred: false,
            max_length: None,
            unicode: None,
            fixed_length: None,
            precision: None,
            scale: None,
        }
    }

    pub fn has_facets(&self) -> bool {
        self.max_length.is_some()
            || self.unicode.is_some()
            || self.fixed_length.is_some()
            || self.precision.is_some()
            || self.scale.is_some()
    }

    /// Whether generated code must name the store type verbatim.
    pub fn needs_column_type(&self) -> bool {
        !self.is_inferred && !self.has_facets()
    }
}
