/// Inflects identifiers between their singular and plural forms.
pub trait Pluralizer {
    fn pluralize(&self, identifier: &str) -> String;

    fn singularize(&self, identifier: &str) -> String;
}

/// English inflection backed by the `pluralizer` crate.
///
/// Only the last PascalCase word is inflected, so `OrderDetail` becomes
/// `OrderDetails` and `People` becomes `Person`.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishPluralizer;

/// Leaves identifiers untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPluralizer;

impl Pluralizer for EnglishPluralizer {
    fn pluralize(&self, identifier: &str) -> String {
        inflect_last_word(identifier, |word| pluralizer::pluralize(word, 2, false))
    }

    fn singularize(&self, identifier: &str) -> String {
        inflect_last_word(identifier, |word| pluralizer::pluralize(word, 1, false))
    }
}

impl Pluralizer for NullPluralizer {
    fn pluralize(&self, identifier: &str) -> String {
        identifier.to_string()
    }

    fn singularize(&self, identifier: &str) -> String {
        identifier.to_string()
    }
}

fn inflect_last_word(identifier: &str, inflect: impl Fn(&str) -> String) -> String {
    let (head, word) = identifier.split_at(last_word_start(identifier));

    // Words ending in digits or underscores have no inflected form.
    if !word.chars().last().is_some_and(char::is_alphabetic) {
        return identifier.to_string();
    }

    format!("{head}{}", inflect(word))
}

fn last_word_start(identifier: &str) -> usize {
    let mut start = 0;
    let mut prev: Option<char> = None;

    for (i, c) in identifier.char_indices() {
        if let Some(p) = prev {
            if (c.is_uppercase() && !p.is_uppercase()) || (p == '_' && c != '_') {
                start = i;
            }
        }
        prev = Some(c);
    }

    start
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inflects_last_word_only() {
        let p = EnglishPluralizer;
        assert_eq!(p.pluralize("OrderDetail"), "OrderDetails");
        assert_eq!(p.pluralize("Blog"), "Blogs");
        assert_eq!(p.singularize("Blogs"), "Blog");
        assert_eq!(p.singularize("OrderDetails"), "OrderDetail");
    }

    #[test]
    fn trailing_digits_are_not_inflected() {
        let p = EnglishPluralizer;
        assert_eq!(p.pluralize("Table1"), "Table1");
    }

    #[test]
    fn null_pluralizer() {
        assert_eq!(NullPluralizer.pluralize("Blog"), "Blog");
        assert_eq!(NullPluralizer.singularize("Blogs"), "Blogs");
    }
}
