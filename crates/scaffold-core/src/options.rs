use std::path::PathBuf;

/// Configuration for generating source code from a scaffolded model.
///
/// Generators only ever borrow the options. The orchestrator fills unset
/// values on its own copy.
#[derive(Debug, Clone)]
pub struct ModelCodeGenerationOptions {
    /// Namespace of the entity types
    pub model_namespace: String,

    /// Namespace of the context type. Defaults to `model_namespace`.
    pub context_namespace: Option<String>,

    /// Directory of the context file, relative to the output directory.
    pub context_dir: Option<PathBuf>,

    /// Name of the context type. Derived from the database name when unset.
    pub context_name: Option<String>,

    /// Connection string embedded in the generated options hook.
    pub connection_string: Option<String>,

    pub use_nullable_reference_types: bool,

    /// Emit one configuration type per entity instead of configuring every
    /// entity inline in the context.
    pub generate_entity_type_configuration_files: bool,

    pub entity_type_configuration_suffix: String,

    /// Output language tag used to select a generator
    pub language: String,

    /// Project directory searched for code templates.
    pub project_dir: Option<PathBuf>,

    /// Leave the connection string out of the generated options hook.
    pub suppress_connection_string: bool,

    /// Leave the options hook out entirely.
    pub suppress_on_configuring: bool,
}

/// Configuration for deriving the model from the database schema.
#[derive(Debug, Clone, Default)]
pub struct ModelReverseEngineerOptions {
    /// Keep database names verbatim instead of folding them into PascalCase.
    pub use_database_names: bool,

    /// Skip singularizing entity names and pluralizing collection names.
    pub no_pluralize: bool,

    /// Name of the context type. Entity and collection names never take it.
    pub context_name: Option<String>,
}

impl Default for ModelCodeGenerationOptions {
    fn default() -> Self {
        Self {
            model_namespace: "Models".to_string(),
            context_namespace: None,
            context_dir: None,
            context_name: None,
            connection_string: None,
            use_nullable_reference_types: false,
            generate_entity_type_configuration_files: false,
            entity_type_configuration_suffix: "Configuration".to_string(),
            language: "C#".to_string(),
            project_dir: None,
            suppress_connection_string: false,
            suppress_on_configuring: false,
        }
    }
}

impl ModelCodeGenerationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.model_namespace = namespace.into();
        self
    }

    pub fn context_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.context_namespace = Some(namespace.into());
        self
    }

    pub fn context_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.context_dir = Some(dir.into());
        self
    }

    pub fn context_name(mut self, name: impl Into<String>) -> Self {
        self.context_name = Some(name.into());
        self
    }

    pub fn connection_string(mut self, connection_string: impl Into<String>) -> Self {
        self.connection_string = Some(connection_string.into());
        self
    }

    pub fn use_nullable_reference_types(mut self, enabled: bool) -> Self {
        self.use_nullable_reference_types = enabled;
        self
    }

    pub fn generate_entity_type_configuration_files(mut self, enabled: bool) -> Self {
        self.generate_entity_type_configuration_files = enabled;
        self
    }

    pub fn entity_type_configuration_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.entity_type_configuration_suffix = suffix.into();
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn project_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.project_dir = Some(dir.into());
        self
    }

    pub fn suppress_connection_string(mut self, suppress: bool) -> Self {
        self.suppress_connection_string = suppress;
        self
    }

    pub fn suppress_on_configuring(mut self, suppress: bool) -> Self {
        self.suppress_on_configuring = suppress;
        self
    }

    /// The context namespace, falling back to the model namespace.
    pub fn effective_context_namespace(&self) -> &str {
        self.context_namespace
            .as_deref()
            .unwrap_or(&self.model_namespace)
    }

    /// The context name, falling back to `ModelContext`.
    pub fn effective_context_name(&self) -> &str {
        self.context_name.as_deref().unwrap_or("ModelContext")
    }
}

impl ModelReverseEngineerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn use_database_names(mut self, enabled: bool) -> Self {
        self.use_database_names = enabled;
        self
    }

    pub fn no_pluralize(mut self, enabled: bool) -> Self {
        self.no_pluralize = enabled;
        self
    }

    pub fn context_name(mut self, name: impl Into<String>) -> Self {
        self.context_name = Some(name.into());
        self
    }
}
