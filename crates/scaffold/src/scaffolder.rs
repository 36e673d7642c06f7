use crate::save::{self, SavedModelFiles};
use crate::{ConnectionStringResolver, DatabaseModelFactory, DatabaseModelFactoryOptions};

use scaffold_codegen::{
    CSharpModelGenerator, ModelCodeGeneratorSelector, ScaffoldedModel, TemplatedModelGenerator,
};
use scaffold_core::naming::{candidate_identifier, is_valid_identifier, sanitize_identifier};
use scaffold_core::{
    Error, ModelCodeGenerationOptions, ModelFactory, ModelReverseEngineerOptions, Result,
};

use std::path::Path;
use tracing::{debug, info};

/// Reverse engineers a database into source files.
///
/// Each call builds its own naming state, so one scaffolder can serve any
/// number of runs.
pub struct ReverseEngineerScaffolder {
    database_model_factory: Box<dyn DatabaseModelFactory>,
    model_factory: ModelFactory,
    generators: ModelCodeGeneratorSelector,
    resolver: Box<dyn ConnectionStringResolver>,
}

impl ReverseEngineerScaffolder {
    /// A scaffolder with the SQL Server type mappings, the English
    /// pluralizer, the C# generators and no named connections.
    pub fn new(database_model_factory: impl DatabaseModelFactory + 'static) -> Self {
        ReverseEngineerScaffolder {
            database_model_factory: Box::new(database_model_factory),
            model_factory: ModelFactory::default(),
            generators: ModelCodeGeneratorSelector::new()
                .register(CSharpModelGenerator::default())
                .register(TemplatedModelGenerator::default()),
            resolver: Box::new(|connection: &str| connection.to_string()),
        }
    }

    pub fn model_factory(mut self, model_factory: ModelFactory) -> Self {
        self.model_factory = model_factory;
        self
    }

    pub fn generators(mut self, generators: ModelCodeGeneratorSelector) -> Self {
        self.generators = generators;
        self
    }

    pub fn connection_resolver(
        mut self,
        resolver: impl ConnectionStringResolver + 'static,
    ) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    /// Introspects the database behind `connection` and generates code for
    /// it.
    ///
    /// `connection` is either a literal connection string or a `Name=...`
    /// reference resolved through the connection resolver. The options are
    /// not modified; unset values are filled on copies.
    pub fn scaffold_model(
        &self,
        connection: &str,
        database_options: &DatabaseModelFactoryOptions,
        model_options: &ModelReverseEngineerOptions,
        code_options: &ModelCodeGenerationOptions,
    ) -> Result<ScaffoldedModel> {
        let requested_name = code_options
            .context_name
            .as_deref()
            .or(model_options.context_name.as_deref());

        if let Some(name) = requested_name {
            if !is_valid_identifier(name) {
                return Err(Error::invalid_identifier(name));
            }
        }

        let resolved = self.resolver.resolve(connection)?;
        if resolved != connection {
            debug!("resolved named connection");
        }

        let introspected = self
            .database_model_factory
            .create(&resolved, database_options)
            .map_err(|err| err.context(scaffold_core::err!("introspecting the database")))?;
        let database = introspected.model;

        let context_name = match requested_name {
            Some(name) => name.to_string(),
            None => default_context_name(database.database_name.as_deref()),
        };

        let mut model_options = model_options.clone();
        model_options.context_name = Some(context_name.clone());

        let mut code_options = code_options.clone();
        code_options.context_name = Some(context_name);
        code_options.connection_string = introspected
            .connection_string
            .or(code_options.connection_string)
            .or_else(|| Some(connection.to_string()));

        let model = self.model_factory.create(&database, &model_options)?;

        info!(
            entities = model.entities.len(),
            notes = model.all_notes().count(),
            "created model"
        );

        let generator = self.generators.select(&code_options)?;
        generator.generate_model(&model, &code_options)
    }

    /// Writes a scaffolded model to disk.
    ///
    /// File paths are relative to `output_dir`. Nothing is written when any
    /// target already exists and `overwrite` is not set, or when any target
    /// is read-only.
    pub fn save(
        &self,
        scaffolded: &ScaffoldedModel,
        output_dir: impl AsRef<Path>,
        overwrite: bool,
    ) -> Result<SavedModelFiles> {
        save::save(scaffolded, output_dir.as_ref(), overwrite)
    }
}

/// `{Database}Context`, or `ModelContext` when the database has no usable
/// name.
fn default_context_name(database_name: Option<&str>) -> String {
    let candidate = database_name.map(candidate_identifier).unwrap_or_default();

    if candidate.is_empty() {
        "ModelContext".to_string()
    } else {
        format!("{}Context", sanitize_identifier(&candidate))
    }
}
