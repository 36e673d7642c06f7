use super::{Formatter, ToCode};

/// A fluent API statement: a receiver expression followed by chained calls.
///
/// A statement with at most one chained call is written on one line,
/// otherwise each call goes on its own indented line.
#[derive(Debug, Clone)]
pub(super) struct Fluent {
    head: String,
    calls: Vec<String>,
}

impl Fluent {
    pub(super) fn new(head: impl Into<String>) -> Fluent {
        Fluent {
            head: head.into(),
            calls: vec![],
        }
    }

    pub(super) fn call(&mut self, call: impl Into<String>) -> &mut Self {
        self.calls.push(call.into());
        self
    }

    pub(super) fn has_calls(&self) -> bool {
        !self.calls.is_empty()
    }
}

impl ToCode for &Fluent {
    fn to_code(self, f: &mut Formatter<'_>) {
        match &self.calls[..] {
            [] => fmt!(f, &self.head ";\n"),
            [call] => fmt!(f, &self.head "." call ";\n"),
            calls => {
                fmt!(f, &self.head "\n");
                f.indented(|f| {
                    for (i, call) in calls.iter().enumerate() {
                        let end = if i + 1 == calls.len() { ";" } else { "" };
                        fmt!(f, "." call end "\n");
                    }
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::render;
    use super::*;

    #[test]
    fn chains_break_after_one_call() {
        let mut statement = Fluent::new("entity.Property(e => e.Title)");
        assert_eq!(
            render(|f| fmt!(f, &statement)),
            "entity.Property(e => e.Title);\n"
        );

        statement.call("HasMaxLength(200)");
        assert_eq!(
            render(|f| fmt!(f, &statement)),
            "entity.Property(e => e.Title).HasMaxLength(200);\n"
        );

        statement.call("IsUnicode(false)");
        assert_eq!(
            render(|f| fmt!(f, &statement)),
            "entity.Property(e => e.Title)\n    .HasMaxLength(200)\n    .IsUnicode(false);\n"
        );
    }
}
