/// How generated code selects a database provider.
pub trait ProviderConfiguration {
    /// Options builder extension method, such as `UseSqlServer`.
    fn use_provider_method(&self) -> &str;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SqlServerProviderConfiguration;

impl ProviderConfiguration for SqlServerProviderConfiguration {
    fn use_provider_method(&self) -> &str {
        "UseSqlServer"
    }
}
