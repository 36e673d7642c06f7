use super::{Formatter, ToCode};

use std::fmt;

/// A C# string literal.
#[derive(Debug, Clone, Copy)]
pub(super) struct Str<'a>(pub(super) &'a str);

/// A parameter lambda selecting one or more members, such as `e => e.Id` or
/// `e => new { e.Key, e.Serial }`.
#[derive(Debug, Clone)]
pub(super) struct Lambda<'a> {
    pub(super) param: &'a str,
    pub(super) members: Vec<&'a str>,
}

impl fmt::Display for Str<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"")?;
        for c in self.0.chars() {
            match c {
                '"' => f.write_str("\\\"")?,
                '\\' => f.write_str("\\\\")?,
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                '\t' => f.write_str("\\t")?,
                '\0' => f.write_str("\\0")?,
                c if c.is_control() => write!(f, "\\u{:04X}", c as u32)?,
                c => write!(f, "{c}")?,
            }
        }
        f.write_str("\"")
    }
}

impl fmt::Display for Lambda<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let param = self.param;

        match &self.members[..] {
            [member] => write!(f, "{param} => {param}.{member}"),
            members => {
                write!(f, "{param} => new {{ ")?;
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{param}.{member}")?;
                }
                f.write_str(" }")
            }
        }
    }
}

impl ToCode for Str<'_> {
    fn to_code(self, f: &mut Formatter<'_>) {
        fmt!(f, self.to_string());
    }
}

/// Escapes text for an XML doc comment.
pub(super) fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_literals_escape() {
        assert_eq!(
            Str("Server=.;Database=Blogging").to_string(),
            "\"Server=.;Database=Blogging\""
        );
        assert_eq!(Str("a \"b\" \\c").to_string(), r#""a \"b\" \\c""#);
        assert_eq!(Str("line\nnext").to_string(), r#""line\nnext""#);
        assert_eq!(Str("\u{1}").to_string(), r#""\u0001""#);
    }

    #[test]
    fn lambdas() {
        let single = Lambda {
            param: "e",
            members: vec!["Id"],
        };
        assert_eq!(single.to_string(), "e => e.Id");

        let composite = Lambda {
            param: "d",
            members: vec!["Key", "Serial"],
        };
        assert_eq!(composite.to_string(), "d => new { d.Key, d.Serial }");
    }
}
