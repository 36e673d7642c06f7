/// Decides whether two generated names collide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NameComparer {
    /// Names collide only when identical.
    #[default]
    Ordinal,

    /// Names collide when equal ignoring case.
    IgnoreCase,
}

impl NameComparer {
    pub fn eq(self, a: &str, b: &str) -> bool {
        match self {
            NameComparer::Ordinal => a == b,
            NameComparer::IgnoreCase => a.to_lowercase() == b.to_lowercase(),
        }
    }
}

/// The set of names already handed out by one unique namer.
#[derive(Debug, Clone, Default)]
pub struct NameRegistry {
    comparer: NameComparer,
    names: Vec<String>,
}

impl NameRegistry {
    pub fn new(comparer: NameComparer) -> NameRegistry {
        NameRegistry {
            comparer,
            names: vec![],
        }
    }

    /// Marks `name` as taken without handing it out.
    pub fn reserve(&mut self, name: impl Into<String>) {
        self.names.push(name.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|taken| self.comparer.eq(taken, name))
    }

    /// Registers and returns `name`, or `name` followed by the smallest
    /// positive suffix that is free.
    pub fn uniquify(&mut self, name: &str) -> String {
        let mut candidate = name.to_string();
        let mut suffix = 1usize;

        while self.contains(&candidate) {
            candidate = format!("{name}{suffix}");
            suffix += 1;
        }

        self.names.push(candidate.clone());
        candidate
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}
