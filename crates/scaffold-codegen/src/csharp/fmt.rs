macro_rules! fmt {
    ($f:expr, $( $fragments:expr )*) => {{
        $(
            $fragments.to_code($f);
        )*
    }};
}

/// Writes C# source text, indenting every non-empty line to the current
/// block depth.
pub(super) struct Formatter<'a> {
    dst: &'a mut String,

    /// Current block depth
    depth: usize,

    line_start: bool,
}

pub(super) trait ToCode {
    fn to_code(self, f: &mut Formatter<'_>);
}

impl<'a> Formatter<'a> {
    pub(super) fn new(dst: &'a mut String) -> Formatter<'a> {
        Formatter {
            dst,
            depth: 0,
            line_start: true,
        }
    }

    fn push(&mut self, text: &str) {
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                self.dst.push('\n');
                self.line_start = true;
            }

            if line.is_empty() {
                continue;
            }

            if self.line_start {
                for _ in 0..self.depth {
                    self.dst.push_str("    ");
                }
                self.line_start = false;
            }

            self.dst.push_str(line);
        }
    }

    /// Writes `{`, the body one level deeper, then `}` with `close` appended.
    pub(super) fn block(&mut self, close: &str, body: impl FnOnce(&mut Formatter<'_>)) {
        fmt!(self, "{\n");
        self.indented(body);
        fmt!(self, "}" close "\n");
    }

    pub(super) fn indented(&mut self, body: impl FnOnce(&mut Formatter<'_>)) {
        self.depth += 1;
        body(self);
        self.depth -= 1;
    }
}

/// Renders fragments into a fresh string.
pub(super) fn render(body: impl FnOnce(&mut Formatter<'_>)) -> String {
    let mut dst = String::new();
    body(&mut Formatter::new(&mut dst));
    dst
}

impl ToCode for &str {
    fn to_code(self, f: &mut Formatter<'_>) {
        f.push(self);
    }
}

impl ToCode for &String {
    fn to_code(self, f: &mut Formatter<'_>) {
        f.push(self);
    }
}

impl ToCode for String {
    fn to_code(self, f: &mut Formatter<'_>) {
        f.push(&self);
    }
}

impl<T: ToCode> ToCode for Option<T> {
    fn to_code(self, f: &mut Formatter<'_>) {
        if let Some(fragment) = self {
            fragment.to_code(f);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_blocks_indent_non_empty_lines() {
        let code = render(|f| {
            fmt!(f, "class A\n");
            f.block("", |f| {
                fmt!(f, "int X;\n\nvoid M()\n");
                f.block("", |f| fmt!(f, "return;\n"));
            });
        });

        assert_eq!(
            code,
            "class A\n{\n    int X;\n\n    void M()\n    {\n        return;\n    }\n}\n"
        );
    }
}
