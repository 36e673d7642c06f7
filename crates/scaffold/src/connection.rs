use indexmap::IndexMap;
use scaffold_core::Result;

/// Turns a named connection reference into a literal connection string.
///
/// Anything that is not a recognized name is returned unchanged.
pub trait ConnectionStringResolver {
    fn resolve(&self, connection: &str) -> Result<String>;
}

impl<F> ConnectionStringResolver for F
where
    F: Fn(&str) -> String,
{
    fn resolve(&self, connection: &str) -> Result<String> {
        Ok(self(connection))
    }
}

/// Resolves `Name=<key>` references from a table of named connections.
///
/// Keys may be written `ConnectionStrings:<key>`, as in application
/// configuration files.
#[derive(Debug, Clone, Default)]
pub struct NamedConnections {
    connections: IndexMap<String, String>,
}

impl NamedConnections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn connection(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.connections.insert(name.into(), value.into());
        self
    }

    /// The key of a `Name=<key>` reference.
    pub fn parse_name(connection: &str) -> Option<&str> {
        let connection = connection.trim();
        let prefix = connection.get(..5)?;
        if !prefix.eq_ignore_ascii_case("name=") {
            return None;
        }

        let name = connection[5..].trim();
        Some(name.strip_prefix("ConnectionStrings:").unwrap_or(name))
    }
}

impl<K, V> FromIterator<(K, V)> for NamedConnections
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        NamedConnections {
            connections: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

impl ConnectionStringResolver for NamedConnections {
    fn resolve(&self, connection: &str) -> Result<String> {
        let resolved = NamedConnections::parse_name(connection)
            .and_then(|name| self.connections.get(name));

        Ok(resolved.cloned().unwrap_or_else(|| connection.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        assert_eq!(
            NamedConnections::parse_name("Name=Blogging"),
            Some("Blogging")
        );
        assert_eq!(NamedConnections::parse_name(" name = Blogging "), None);
        assert_eq!(
            NamedConnections::parse_name("name=Blogging "),
            Some("Blogging")
        );
        assert_eq!(
            NamedConnections::parse_name("Name=ConnectionStrings:Blogging"),
            Some("Blogging")
        );
        assert_eq!(NamedConnections::parse_name("blogging.json"), None);
    }

    #[test]
    fn unknown_names_pass_through() {
        let connections = NamedConnections::new().connection("Blogging", "schema/blogging.json");

        assert_eq!(
            connections.resolve("Name=Blogging").unwrap(),
            "schema/blogging.json"
        );
        assert_eq!(connections.resolve("Name=Other").unwrap(), "Name=Other");
        assert_eq!(connections.resolve("other.json").unwrap(), "other.json");
    }
}
