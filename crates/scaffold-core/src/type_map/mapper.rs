use super::{
    MappingHints, RelationalTypeMapping, SqlServerTypeMappingSource, StoreType, TargetType,
    TypeMappingSource, TypeScaffoldingInfo,
};

/// Decides which parts of a column's store type scaffolded code must state.
pub struct ScaffoldingTypeMapper {
    source: Box<dyn TypeMappingSource>,
}

impl ScaffoldingTypeMapper {
    pub fn new(source: impl TypeMappingSource + 'static) -> ScaffoldingTypeMapper {
        ScaffoldingTypeMapper {
            source: Box::new(source),
        }
    }

    pub fn source(&self) -> &dyn TypeMappingSource {
        &*self.source
    }

    /// Maps `store_type` for a column with the given role.
    ///
    /// Returns `None` when the store type has no target type. A facet is
    /// reported only when it differs from what the convention would choose
    /// without it. A column flagged as a row version whose store type is not
    /// the provider's row-version type is never inferred, so the generated
    /// configuration keeps its exact store type.
    pub fn find_mapping(
        &self,
        store_type: &str,
        key_or_index: bool,
        row_version: bool,
    ) -> Option<TypeScaffoldingInfo> {
        let parsed = StoreType::parse(store_type);
        let mapping = self.source.find_by_store_type(&parsed)?;
        let canonical = parsed.to_string();

        let hints = MappingHints {
            key_or_index,
            row_version,
            ..MappingHints::default()
        };

        let mut info = TypeScaffoldingInfo::new(mapping.ty, canonical.clone());
        let mut can_infer = false;

        if let Some(default) = self.source.find_by_type(mapping.ty, &hints) {
            if default.store_type == canonical {
                can_infer = true;
            } else {
                can_infer = match mapping.ty {
                    TargetType::String | TargetType::ByteArray => {
                        self.infer_sized(&mapping, &default, hints, &mut info)
                    }
                    ty if ty.has_precision() => self.infer_precision(&mapping, hints, &mut info),
                    _ => false,
                };
            }
        }

        if row_version && parsed.base != "rowversion" {
            can_infer = false;
        }

        if !can_infer {
            info.max_length = None;
            info.unicode = None;
            info.fixed_length = None;
            info.precision = None;
            info.scale = None;
        }

        info.is_inferred = can_infer && !info.has_facets();
        Some(info)
    }

    fn infer_sized(
        &self,
        mapping: &RelationalTypeMapping,
        default: &RelationalTypeMapping,
        hints: MappingHints,
        info: &mut TypeScaffoldingInfo,
    ) -> bool {
        let mut hints = hints;

        if mapping.ty == TargetType::String {
            hints.unicode = Some(mapping.unicode);
            match self.source.find_by_type(mapping.ty, &hints) {
                Some(unicode) if unicode.unicode != default.unicode => {
                    info.unicode = Some(mapping.unicode);
                }
                _ => {}
            }
        }

        hints.fixed_length = Some(mapping.fixed_length);
        let Some(fixed) = self.source.find_by_type(mapping.ty, &hints) else {
            return false;
        };
        if fixed.fixed_length != default.fixed_length {
            info.fixed_length = Some(mapping.fixed_length);
        }

        if fixed.size != mapping.size {
            match mapping.size {
                Some(size) => {
                    info.max_length = Some(size);
                    hints.size = Some(size);
                }
                // Unbounded on a key: no facet can express it
                None => return false,
            }
        }

        self.source
            .find_by_type(mapping.ty, &hints)
            .is_some_and(|sized| sized.store_type == mapping.store_type)
    }

    fn infer_precision(
        &self,
        mapping: &RelationalTypeMapping,
        hints: MappingHints,
        info: &mut TypeScaffoldingInfo,
    ) -> bool {
        let hints = MappingHints {
            precision: mapping.precision,
            scale: mapping.scale,
            ..hints
        };

        match self.source.find_by_type(mapping.ty, &hints) {
            Some(precise) if precise.store_type == mapping.store_type => {
                info.precision = mapping.precision;
                info.scale = mapping.scale.filter(|_| mapping.ty == TargetType::Decimal);
                true
            }
            _ => false,
        }
    }
}

impl Default for ScaffoldingTypeMapper {
    fn default() -> ScaffoldingTypeMapper {
        ScaffoldingTypeMapper::new(SqlServerTypeMappingSource)
    }
}

impl std::fmt::Debug for ScaffoldingTypeMapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScaffoldingTypeMapper")
            .finish_non_exhaustive()
    }
}
