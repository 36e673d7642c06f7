use super::{
    MappingHints, RelationalTypeMapping, StoreSize, StoreType, TargetType, TypeMappingSource,
};

/// Largest `nvarchar` length before `max` is required.
const MAX_UNICODE_LENGTH: u32 = 4000;

/// Largest `varchar` and `varbinary` length before `max` is required.
const MAX_ANSI_LENGTH: u32 = 8000;

/// Default string length for key and index columns, keeping the key within
/// the 900 byte index limit.
const KEY_UNICODE_LENGTH: u32 = 450;
const KEY_ANSI_LENGTH: u32 = 900;

const DEFAULT_DECIMAL_PRECISION: u32 = 18;
const DEFAULT_DECIMAL_SCALE: u32 = 2;

/// Temporal types default to precision 7, which is left unstated.
const DEFAULT_TEMPORAL_PRECISION: u32 = 7;

/// Type conventions of Microsoft SQL Server.
#[derive(Debug, Default, Clone, Copy)]
pub struct SqlServerTypeMappingSource;

impl TypeMappingSource for SqlServerTypeMappingSource {
    fn find_by_store_type(&self, store_type: &StoreType) -> Option<RelationalTypeMapping> {
        use TargetType::*;

        let canonical = store_type.to_string();
        let simple = |ty| Some(RelationalTypeMapping::new(ty, canonical.clone()));

        match store_type.base.as_str() {
            "bit" => simple(Bool),
            "tinyint" => simple(Byte),
            "smallint" => simple(Int16),
            "int" => simple(Int32),
            "bigint" => simple(Int64),
            "real" => simple(Single),
            "float" => match store_type.length() {
                Some(n) if n <= 24 => simple(Single),
                _ => simple(Double),
            },
            "money" | "smallmoney" => simple(Decimal),
            "decimal" | "numeric" => {
                let mut mapping = RelationalTypeMapping::new(Decimal, canonical);
                match store_type.size {
                    Some(StoreSize::PrecisionScale(p, s)) => {
                        mapping.precision = Some(p);
                        mapping.scale = Some(s);
                    }
                    Some(StoreSize::Length(p)) => {
                        mapping.precision = Some(p);
                        mapping.scale = Some(0);
                    }
                    _ => {
                        mapping.precision = Some(DEFAULT_DECIMAL_PRECISION);
                        mapping.scale = Some(0);
                    }
                }
                Some(mapping)
            }
            "char" | "varchar" | "text" | "nchar" | "nvarchar" | "ntext" | "xml" => {
                let base = store_type.base.as_str();
                let mut mapping = RelationalTypeMapping::new(String, canonical);
                mapping.unicode = base.starts_with('n') || base == "xml";
                mapping.fixed_length = base.ends_with("char") && !base.contains("var");
                mapping.size = sized(store_type, !matches!(base, "text" | "ntext" | "xml"));
                Some(mapping)
            }
            "binary" | "varbinary" | "image" => {
                let base = store_type.base.as_str();
                let mut mapping = RelationalTypeMapping::new(ByteArray, canonical);
                mapping.fixed_length = base == "binary";
                mapping.size = sized(store_type, base != "image");
                Some(mapping)
            }
            "rowversion" => {
                let mut mapping = RelationalTypeMapping::new(ByteArray, canonical);
                mapping.size = Some(8);
                mapping.row_version = true;
                Some(mapping)
            }
            "date" => simple(DateOnly),
            "datetime" | "smalldatetime" => simple(DateTime),
            "datetime2" => Some(temporal(DateTime, store_type, canonical)),
            "datetimeoffset" => Some(temporal(DateTimeOffset, store_type, canonical)),
            "time" => Some(temporal(TimeOnly, store_type, canonical)),
            "uniqueidentifier" => simple(Guid),
            // Spatial, hierarchy and variant types have no target type here
            _ => None,
        }
    }

    fn find_by_type(&self, ty: TargetType, hints: &MappingHints) -> Option<RelationalTypeMapping> {
        use TargetType::*;

        let simple = |store: &str| Some(RelationalTypeMapping::new(ty, store));

        match ty {
            Bool => simple("bit"),
            Byte => simple("tinyint"),
            Int16 => simple("smallint"),
            Int32 => simple("int"),
            Int64 => simple("bigint"),
            Single => simple("real"),
            Double => simple("float"),
            Guid => simple("uniqueidentifier"),
            DateOnly => simple("date"),
            Decimal => {
                let precision = hints.precision.unwrap_or(DEFAULT_DECIMAL_PRECISION);
                let scale = match hints.precision {
                    Some(_) => hints.scale.unwrap_or(0),
                    None => hints.scale.unwrap_or(DEFAULT_DECIMAL_SCALE),
                };
                let mut mapping =
                    RelationalTypeMapping::new(ty, format!("decimal({precision},{scale})"));
                mapping.precision = Some(precision);
                mapping.scale = Some(scale);
                Some(mapping)
            }
            DateTime => Some(temporal_by_type(ty, "datetime2", hints)),
            DateTimeOffset => Some(temporal_by_type(ty, "datetimeoffset", hints)),
            TimeOnly | TimeSpan => Some(temporal_by_type(ty, "time", hints)),
            String => {
                let unicode = hints.unicode.unwrap_or(true);
                let fixed_length = hints.fixed_length.unwrap_or(false);
                let (max, key) = if unicode {
                    (MAX_UNICODE_LENGTH, KEY_UNICODE_LENGTH)
                } else {
                    (MAX_ANSI_LENGTH, KEY_ANSI_LENGTH)
                };

                let base = match (unicode, fixed_length) {
                    (true, true) => "nchar",
                    (true, false) => "nvarchar",
                    (false, true) => "char",
                    (false, false) => "varchar",
                };

                let size = hints
                    .size
                    .or(hints.key_or_index.then_some(key))
                    .or(fixed_length.then_some(1));

                let mut mapping = RelationalTypeMapping::new(ty, sized_store_type(base, size, max));
                mapping.unicode = unicode;
                mapping.fixed_length = fixed_length;
                mapping.size = size.filter(|size| *size <= max);
                Some(mapping)
            }
            ByteArray => {
                if hints.row_version {
                    let mut mapping = RelationalTypeMapping::new(ty, "rowversion");
                    mapping.size = Some(8);
                    mapping.row_version = true;
                    return Some(mapping);
                }

                let fixed_length = hints.fixed_length.unwrap_or(false);
                let base = if fixed_length { "binary" } else { "varbinary" };
                let size = hints
                    .size
                    .or(hints.key_or_index.then_some(KEY_ANSI_LENGTH))
                    .or(fixed_length.then_some(1));

                let mut mapping =
                    RelationalTypeMapping::new(ty, sized_store_type(base, size, MAX_ANSI_LENGTH));
                mapping.fixed_length = fixed_length;
                mapping.size = size.filter(|size| *size <= MAX_ANSI_LENGTH);
                Some(mapping)
            }
        }
    }
}

/// Length of a sized store type. A bare sizable type has length 1.
fn sized(store_type: &StoreType, sizable: bool) -> Option<u32> {
    match store_type.size {
        Some(StoreSize::Length(n)) => Some(n),
        None if sizable => Some(1),
        _ => None,
    }
}

fn sized_store_type(base: &str, size: Option<u32>, max: u32) -> String {
    match size {
        Some(size) if size <= max => format!("{base}({size})"),
        _ => format!("{base}(max)"),
    }
}

fn temporal(ty: TargetType, store_type: &StoreType, canonical: String) -> RelationalTypeMapping {
    let mut mapping = RelationalTypeMapping::new(ty, canonical);
    mapping.precision = Some(store_type.length().unwrap_or(DEFAULT_TEMPORAL_PRECISION));
    mapping
}

fn temporal_by_type(ty: TargetType, base: &str, hints: &MappingHints) -> RelationalTypeMapping {
    let precision = hints.precision.unwrap_or(DEFAULT_TEMPORAL_PRECISION);
    let store_type = if precision == DEFAULT_TEMPORAL_PRECISION {
        base.to_string()
    } else {
        format!("{base}({precision})")
    };

    let mut mapping = RelationalTypeMapping::new(ty, store_type);
    mapping.precision = Some(precision);
    mapping
}
