use heck::ToUpperCamelCase;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Turns a raw database object name into a PascalCase candidate identifier.
///
/// Letters and digits are kept, every other character acts as a word
/// boundary and is dropped. Accented letters lose their diacritics.
/// Digits stay attached to the word they follow. The result may be empty
/// when the input contains no letters or digits; sanitizing is left to the
/// namer.
///
/// ```
/// use scaffold_core::naming::candidate_identifier;
///
/// assert_eq!(candidate_identifier("customer_orders"), "CustomerOrders");
/// assert_eq!(candidate_identifier("tbl2Items"), "Tbl2Items");
/// assert_eq!(candidate_identifier("###"), "");
/// ```
pub fn candidate_identifier(name: &str) -> String {
    let folded: String = name.nfd().filter(|c| !is_combining_mark(*c)).collect();
    folded.to_upper_camel_case()
}

/// Strips a trailing `Id` (or `_Id`) from a name, ignoring case.
///
/// Names shorter than three characters are returned unchanged so that a
/// bare `Id` survives.
pub fn strip_id(name: &str) -> &str {
    if name.chars().count() < 3 || !ends_with_ignore_case(name, "id") {
        return name;
    }

    if name.len() > 4 && ends_with_ignore_case(name, "_id") {
        &name[..name.len() - 3]
    } else {
        &name[..name.len() - 2]
    }
}

/// Returns the longest common leading substring of `names`.
pub fn common_prefix<S: AsRef<str>>(names: &[S]) -> String {
    let Some((first, rest)) = names.split_first() else {
        return String::new();
    };

    let first = first.as_ref();
    let mut len = first.len();

    for name in rest {
        let common = first
            .char_indices()
            .zip(name.as_ref().chars())
            .take_while(|((_, a), b)| a == b)
            .last()
            .map(|((i, c), _)| i + c.len_utf8())
            .unwrap_or(0);
        len = len.min(common);
    }

    first[..len].to_string()
}

fn ends_with_ignore_case(name: &str, suffix: &str) -> bool {
    name.len() >= suffix.len()
        && name.is_char_boundary(name.len() - suffix.len())
        && name[name.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_separators_into_words() {
        assert_eq!(candidate_identifier("customer_orders"), "CustomerOrders");
        assert_eq!(candidate_identifier("order details"), "OrderDetails");
        assert_eq!(candidate_identifier("ORDER-LINE"), "OrderLine");
        assert_eq!(candidate_identifier("CustomerID"), "CustomerId");
    }

    #[test]
    fn digits_stay_with_their_word() {
        assert_eq!(candidate_identifier("tbl2Items"), "Tbl2Items");
        assert_eq!(candidate_identifier("123abc"), "123abc");
    }

    #[test]
    fn symbols_only_is_empty() {
        assert_eq!(candidate_identifier("###"), "");
        assert_eq!(candidate_identifier(""), "");
    }

    #[test]
    fn combining_marks_are_dropped() {
        assert_eq!(candidate_identifier("cafe\u{0301}"), "Cafe");
    }

    #[test]
    fn precomposed_accents_are_dropped() {
        assert_eq!(candidate_identifier("caf\u{e9}"), "Cafe");
        assert_eq!(
            candidate_identifier("Cr\u{e8}me Br\u{fb}l\u{e9}e"),
            "CremeBrulee"
        );
        assert_eq!(candidate_identifier("\u{c9}l\u{e8}ve"), "Eleve");
    }

    #[test]
    fn strip_id_suffixes() {
        assert_eq!(strip_id("Id"), "Id");
        assert_eq!(strip_id("BlogId"), "Blog");
        assert_eq!(strip_id("blog_id"), "blog");
        assert_eq!(strip_id("Blog"), "Blog");
        assert_eq!(strip_id("_id"), "_");
    }

    #[test]
    fn common_prefix_of_names() {
        assert_eq!(common_prefix(&["OrderId", "OrderLine"]), "Order");
        assert_eq!(common_prefix(&["BlogId"]), "BlogId");
        assert_eq!(common_prefix(&["A", "B"]), "");
        assert_eq!(common_prefix::<&str>(&[]), "");
    }
}
