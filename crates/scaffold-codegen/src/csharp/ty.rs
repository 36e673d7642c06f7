use scaffold_core::model::{Model, Navigation, Property};
use scaffold_core::type_map::TargetType;

/// The C# keyword or type name for a target type.
pub(super) fn type_name(ty: TargetType) -> &'static str {
    use TargetType::*;

    match ty {
        Bool => "bool",
        Byte => "byte",
        Int16 => "short",
        Int32 => "int",
        Int64 => "long",
        Decimal => "decimal",
        Double => "double",
        Single => "float",
        String => "string",
        DateTime => "DateTime",
        DateTimeOffset => "DateTimeOffset",
        DateOnly => "DateOnly",
        TimeOnly => "TimeOnly",
        TimeSpan => "TimeSpan",
        Guid => "Guid",
        ByteArray => "byte[]",
    }
}

/// Declared type of a property and its initializer, if any.
pub(super) fn property_type(
    property: &Property,
    nullable_reference_types: bool,
) -> (String, &'static str) {
    let name = type_name(property.ty);

    if !property.ty.is_reference() {
        let suffix = if property.nullable { "?" } else { "" };
        return (format!("{name}{suffix}"), "");
    }

    match (nullable_reference_types, property.nullable) {
        (false, _) => (name.to_string(), ""),
        (true, true) => (format!("{name}?"), ""),
        (true, false) => (name.to_string(), " = null!;"),
    }
}

/// Declared type of a navigation and its initializer.
pub(super) fn navigation_type(
    model: &Model,
    navigation: &Navigation,
    nullable_reference_types: bool,
) -> (String, String) {
    let target = &model.entity(navigation.target).name;

    if navigation.collection {
        return (
            format!("ICollection<{target}>"),
            format!(" = new List<{target}>();"),
        );
    }

    // The principal end of a one-to-one relationship is always optional.
    let optional = !navigation.on_dependent || !model.foreign_key(navigation.foreign_key).required;

    match (nullable_reference_types, optional) {
        (false, _) => (target.clone(), String::new()),
        (true, true) => (format!("{target}?"), String::new()),
        (true, false) => (target.clone(), " = null!;".to_string()),
    }
}
