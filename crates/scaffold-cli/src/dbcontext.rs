use crate::Config;

use anyhow::Result;
use clap::Parser;
use console::style;
use scaffold::{
    DatabaseModelFactoryOptions, JsonDatabaseModelFactory, ModelCodeGenerationOptions,
    ModelReverseEngineerOptions, NamedConnections, ReverseEngineerScaffolder,
};
use std::path::PathBuf;
use tracing::debug;

/// Arguments of `scaffold dbcontext`.
#[derive(Parser, Debug, Default)]
pub struct DbContextCommand {
    /// Path to a JSON schema dump, or `Name=<key>` of a configured connection
    pub connection: String,

    /// Directory for entity type files
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Directory for the context file, relative to the output directory
    #[arg(long)]
    pub context_dir: Option<PathBuf>,

    /// Name of the generated context class
    #[arg(short, long)]
    pub context: Option<String>,

    /// Namespace of the entity types
    #[arg(short, long)]
    pub namespace: Option<String>,

    /// Namespace of the context class
    #[arg(long)]
    pub context_namespace: Option<String>,

    /// Tables to scaffold; all when neither tables nor schemas are given
    #[arg(short, long = "table")]
    pub tables: Vec<String>,

    /// Schemas whose tables are scaffolded
    #[arg(long = "schema")]
    pub schemas: Vec<String>,

    /// Use table and column names exactly as in the database
    #[arg(long)]
    pub use_database_names: bool,

    /// Don't pluralize or singularize names
    #[arg(long)]
    pub no_pluralize: bool,

    /// Enable nullable reference types in generated code
    #[arg(long)]
    pub nullable: bool,

    /// Generate one configuration class per entity type
    #[arg(long)]
    pub configuration_files: bool,

    /// Suffix of the configuration classes
    #[arg(long)]
    pub configuration_suffix: Option<String>,

    /// Project directory searched for code templates
    #[arg(long)]
    pub project_dir: Option<PathBuf>,

    /// Overwrite existing files
    #[arg(short, long)]
    pub force: bool,
}

/// Everything one run needs, after merging flags over the config file.
#[derive(Debug, Clone)]
pub struct DbContextPlan {
    pub connection: String,
    pub output_dir: PathBuf,
    pub overwrite: bool,
    pub database: DatabaseModelFactoryOptions,
    pub model: ModelReverseEngineerOptions,
    pub code: ModelCodeGenerationOptions,
}

impl DbContextCommand {
    pub fn plan(&self, config: &Config) -> DbContextPlan {
        let defaults = &config.scaffold;

        let output_dir = self
            .output_dir
            .clone()
            .or_else(|| defaults.output_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."));

        let tables = if self.tables.is_empty() && self.schemas.is_empty() {
            defaults.tables.clone()
        } else {
            self.tables.clone()
        };

        let schemas = if self.tables.is_empty() && self.schemas.is_empty() {
            defaults.schemas.clone()
        } else {
            self.schemas.clone()
        };

        let nullable = self.nullable || defaults.nullable;
        let configuration_files = self.configuration_files || defaults.configuration_files;
        let mut code = ModelCodeGenerationOptions::new()
            .use_nullable_reference_types(nullable)
            .generate_entity_type_configuration_files(configuration_files);

        if let Some(namespace) = flag_or(&self.namespace, &defaults.namespace) {
            code = code.model_namespace(namespace);
        }

        if let Some(namespace) = flag_or(&self.context_namespace, &defaults.context_namespace) {
            code = code.context_namespace(namespace);
        }

        if let Some(dir) = flag_or(&self.context_dir, &defaults.context_dir) {
            code = code.context_dir(dir);
        }

        if let Some(name) = flag_or(&self.context, &defaults.context) {
            code = code.context_name(name);
        }

        if let Some(suffix) = flag_or(&self.configuration_suffix, &defaults.configuration_suffix) {
            code = code.entity_type_configuration_suffix(suffix);
        }

        if let Some(dir) = flag_or(&self.project_dir, &defaults.project_dir) {
            code = code.project_dir(dir);
        }

        DbContextPlan {
            connection: self.connection.clone(),
            output_dir,
            overwrite: self.force || defaults.force,
            database: DatabaseModelFactoryOptions { tables, schemas },
            model: ModelReverseEngineerOptions::new()
                .use_database_names(self.use_database_names || defaults.use_database_names)
                .no_pluralize(self.no_pluralize || defaults.no_pluralize),
            code,
        }
    }

    pub(crate) fn run(self, config: &Config) -> Result<()> {
        println!();
        println!(
            "  {}",
            style("Scaffold DbContext").cyan().bold().underlined()
        );
        println!();

        let plan = self.plan(config);
        debug!(?plan, "scaffolding");

        let scaffolder = ReverseEngineerScaffolder::new(JsonDatabaseModelFactory)
            .connection_resolver(config.connections.iter().collect::<NamedConnections>());

        let scaffolded =
            scaffolder.scaffold_model(&plan.connection, &plan.database, &plan.model, &plan.code)?;
        let saved = scaffolder.save(&scaffolded, &plan.output_dir, plan.overwrite)?;

        for path in saved.files() {
            println!(
                "  {} {}",
                style("✓").green().bold(),
                style(format!("Wrote {}", path.display())).dim()
            );
        }

        let summary = format!("Scaffolded {} file(s)", saved.files().count());
        println!();
        println!("  {}", style(summary).green().bold());
        println!();

        Ok(())
    }
}

/// A flag's value, falling back to the config file's.
fn flag_or<'a, T>(flag: &'a Option<T>, default: &'a Option<T>) -> Option<&'a T> {
    flag.as_ref().or(default.as_ref())
}
