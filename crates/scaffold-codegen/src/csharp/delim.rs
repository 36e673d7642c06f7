use super::{Formatter, ToCode};

pub(super) struct Comma<L>(pub(super) L);

impl<L> ToCode for Comma<L>
where
    L: IntoIterator,
    L::Item: ToCode,
{
    fn to_code(self, f: &mut Formatter<'_>) {
        let mut s = "";
        for i in self.0 {
            fmt!(f, s i);
            s = ", ";
        }
    }
}

/// Fragments separated by one blank line.
pub(super) struct Paragraphs<L>(pub(super) L);

impl<L> ToCode for Paragraphs<L>
where
    L: IntoIterator,
    L::Item: ToCode,
{
    fn to_code(self, f: &mut Formatter<'_>) {
        let mut s = "";
        for i in self.0 {
            fmt!(f, s i);
            s = "\n";
        }
    }
}
