const KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

/// Returns `true` if `name` is a reserved C# keyword.
pub fn is_keyword(name: &str) -> bool {
    KEYWORDS.contains(&name)
}

/// Turns an arbitrary string into a legal C# identifier.
///
/// Characters that cannot appear in an identifier become `_`, a name that
/// does not start with a letter or `_` gets a leading `_`, an empty name
/// becomes `_`, and a keyword is escaped with `@`. Sanitizing an already
/// sanitized identifier returns it unchanged.
pub fn sanitize_identifier(name: &str) -> String {
    // An escaped keyword is already sanitized; any other `@` is invalid.
    let name = match name.strip_prefix('@') {
        Some(bare) if is_keyword(bare) => bare,
        _ => name,
    };

    let mut ret: String = name
        .chars()
        .map(|c| if is_part_char(c) { c } else { '_' })
        .collect();

    match ret.chars().next() {
        None => ret.push('_'),
        Some(c) if !is_start_char(c) => ret.insert(0, '_'),
        Some(_) => {}
    }

    if is_keyword(&ret) {
        ret.insert(0, '@');
    }

    ret
}

/// Returns `true` if `name` can be used verbatim as a C# identifier.
///
/// A keyword is only valid when escaped with `@`.
pub fn is_valid_identifier(name: &str) -> bool {
    let (escaped, bare) = match name.strip_prefix('@') {
        Some(bare) => (true, bare),
        None => (false, name),
    };

    let mut chars = bare.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    is_start_char(first) && chars.all(is_part_char) && (escaped || !is_keyword(bare))
}

fn is_start_char(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

fn is_part_char(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}
