/// Makes a navigation name distinct from the members already declared on
/// its entity.
///
/// A taken name first gets a `Navigation` suffix, then `Navigation1`,
/// `Navigation2` and so on.
pub fn uniquify_navigation<S: AsRef<str>>(proposed: &str, existing: &[S]) -> String {
    let taken = |name: &str| existing.iter().any(|member| member.as_ref() == name);

    if !taken(proposed) {
        return proposed.to_string();
    }

    let mut name = format!("{proposed}Navigation");
    let mut suffix = 1;

    while taken(&name) {
        name = format!("{proposed}Navigation{suffix}");
        suffix += 1;
    }

    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_name_is_kept() {
        assert_eq!(uniquify_navigation("Blog", &["BlogId"]), "Blog");
    }

    #[test]
    fn navigation_suffix_then_numbers() {
        assert_eq!(uniquify_navigation("Blog", &["Blog"]), "BlogNavigation");
        assert_eq!(
            uniquify_navigation("Blog", &["Blog", "BlogNavigation"]),
            "BlogNavigation1"
        );
        assert_eq!(
            uniquify_navigation("Blog", &["Blog", "BlogNavigation", "BlogNavigation1"]),
            "BlogNavigation2"
        );
    }
}
