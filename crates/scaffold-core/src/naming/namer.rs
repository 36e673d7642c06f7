use super::{sanitize_identifier, NameComparer, NameRegistry};

use by_address::ByAddress;
use std::collections::HashMap;

type Projection<'a, T> = Box<dyn Fn(&T) -> String + 'a>;
type Inflection<'a> = Box<dyn Fn(&str) -> String + 'a>;

/// Assigns a sanitized, optionally inflected name to each source object.
///
/// Names are memoized by the source object's address: asking again for the
/// same object returns the first answer, even if a similar object with the
/// same raw name was named in between.
pub struct Namer<'a, T: ?Sized> {
    name_of: Projection<'a, T>,
    inflect: Option<Inflection<'a>>,
    names: HashMap<ByAddress<&'a T>, String>,
}

/// A [`Namer`] whose names are pairwise distinct.
///
/// When a generated name is taken, the smallest free numeric suffix is
/// appended. The first object to claim a name always gets it unsuffixed.
pub struct UniqueNamer<'a, T: ?Sized> {
    namer: Namer<'a, T>,
    registry: NameRegistry,
    names: HashMap<ByAddress<&'a T>, String>,
}

impl<'a, T: ?Sized> Namer<'a, T> {
    pub fn new(name_of: impl Fn(&T) -> String + 'a) -> Namer<'a, T> {
        Namer {
            name_of: Box::new(name_of),
            inflect: None,
            names: HashMap::new(),
        }
    }

    /// Applies `inflect` to every name after it has been sanitized.
    pub fn inflect(mut self, inflect: impl Fn(&str) -> String + 'a) -> Self {
        self.inflect = Some(Box::new(inflect));
        self
    }

    pub fn get_name(&mut self, item: &'a T) -> String {
        if let Some(name) = self.names.get(&ByAddress(item)) {
            return name.clone();
        }

        let name = self.generate(item);
        self.names.insert(ByAddress(item), name.clone());
        name
    }

    fn generate(&self, item: &T) -> String {
        let name = sanitize_identifier(&(self.name_of)(item));

        match &self.inflect {
            // Inflection may produce a keyword or an empty string
            Some(inflect) => sanitize_identifier(&inflect(&name)),
            None => name,
        }
    }
}

impl<'a, T: ?Sized> UniqueNamer<'a, T> {
    pub fn new(name_of: impl Fn(&T) -> String + 'a) -> UniqueNamer<'a, T> {
        UniqueNamer {
            namer: Namer::new(name_of),
            registry: NameRegistry::default(),
            names: HashMap::new(),
        }
    }

    pub fn inflect(mut self, inflect: impl Fn(&str) -> String + 'a) -> Self {
        self.namer = self.namer.inflect(inflect);
        self
    }

    /// Sets how names are compared when checking for collisions.
    pub fn comparer(mut self, comparer: NameComparer) -> Self {
        let reserved = self.registry.names().to_vec();
        self.registry = NameRegistry::new(comparer);
        for name in reserved {
            self.registry.reserve(name);
        }
        self
    }

    /// Marks names that must never be handed out, such as the name of the
    /// enclosing type.
    pub fn reserve<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.registry.reserve(name);
        }
        self
    }

    pub fn get_name(&mut self, item: &'a T) -> String {
        if let Some(name) = self.names.get(&ByAddress(item)) {
            return name.clone();
        }

        let base = self.namer.get_name(item);
        let name = self.registry.uniquify(&base);
        self.names.insert(ByAddress(item), name.clone());
        name
    }

    /// Every name handed out or reserved so far.
    pub fn taken(&self) -> &[String] {
        self.registry.names()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Column {
        name: &'static str,
    }

    #[test]
    fn memoized_by_identity() {
        let a = Column { name: "Id" };
        let b = Column { name: "Id" };
        let mut namer = UniqueNamer::new(|c: &Column| c.name.to_string());

        assert_eq!(namer.get_name(&a), "Id");
        assert_eq!(namer.get_name(&b), "Id1");
        assert_eq!(namer.get_name(&a), "Id");
        assert_eq!(namer.get_name(&b), "Id1");
    }

    #[test]
    fn reserved_names_are_skipped() {
        let a = Column { name: "Blog" };
        let mut namer = UniqueNamer::new(|c: &Column| c.name.to_string()).reserve(["Blog"]);

        assert_eq!(namer.get_name(&a), "Blog1");
    }

    #[test]
    fn inflects_after_sanitizing() {
        let a = Column { name: "blog posts" };
        let mut namer = Namer::new(|c: &Column| c.name.to_string()).inflect(|name| {
            assert_eq!(name, "blog_posts");
            name.to_uppercase()
        });

        assert_eq!(namer.get_name(&a), "BLOG_POSTS");
    }
}
