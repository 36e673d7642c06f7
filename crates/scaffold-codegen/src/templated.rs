//! Output driven by user-supplied templates in the project directory.
//!
//! Templates live under `{project_dir}/CodeTemplates/Scaffold/`. The context
//! template is required; entity type and configuration templates are
//! optional and fall back to the fixed C# output. Every template is fed
//! fragments pre-rendered by [`CSharpModelGenerator`].

mod engine;
pub use engine::{PlaceholderEngine, TemplateEngine, TemplateVars};

mod source;
pub use source::{FileTemplates, TemplateSource};

use crate::csharp::Fragments;
use crate::{CSharpModelGenerator, ModelCodeGenerator, ScaffoldedFile, ScaffoldedModel};
use scaffold_core::model::{Entity, Model};
use scaffold_core::{Error, ModelCodeGenerationOptions, Result};

use std::path::Path;
use tracing::debug;

/// Template directory, relative to the project directory.
pub const TEMPLATE_DIR: &str = "CodeTemplates/Scaffold";

pub const DB_CONTEXT_TEMPLATE: &str = "DbContext.tmpl";

pub const ENTITY_TYPE_TEMPLATE: &str = "EntityType.tmpl";

pub const ENTITY_TYPE_CONFIGURATION_TEMPLATE: &str = "EntityTypeConfiguration.tmpl";

pub struct TemplatedModelGenerator {
    source: Box<dyn TemplateSource>,
    engine: Box<dyn TemplateEngine>,
    fallback: CSharpModelGenerator,
}

impl TemplatedModelGenerator {
    pub fn new(
        source: impl TemplateSource + 'static,
        engine: impl TemplateEngine + 'static,
    ) -> Self {
        TemplatedModelGenerator {
            source: Box::new(source),
            engine: Box::new(engine),
            fallback: CSharpModelGenerator::default(),
        }
    }

    /// Replaces the generator used for fragments and for missing templates.
    pub fn fallback(mut self, fallback: CSharpModelGenerator) -> Self {
        self.fallback = fallback;
        self
    }

    fn render(
        &self,
        project_dir: &Path,
        name: &str,
        vars: &TemplateVars,
    ) -> Result<Option<String>> {
        let Some(template) = self.source.load(project_dir, name)? else {
            return Ok(None);
        };

        self.engine.render(name, &template, vars).map(Some)
    }

    fn context_vars(&self, model: &Model, options: &ModelCodeGenerationOptions) -> TemplateVars {
        let Fragments {
            usings,
            nullable,
            notes,
            body,
            on_configuring,
            db_sets,
        } = self.fallback.context_fragments(model, options);
        let context_namespace = options.effective_context_namespace();
        let connection_string = options.connection_string.clone().unwrap_or_default();

        TemplateVars::from([
            ("context_name", options.effective_context_name().to_string()),
            ("context_namespace", context_namespace.to_string()),
            ("model_namespace", options.model_namespace.clone()),
            ("connection_string", connection_string),
            ("usings", usings),
            ("nullable", nullable),
            ("notes", notes),
            ("db_sets", db_sets),
            ("on_configuring", on_configuring),
            ("on_model_creating", body),
        ])
    }

    fn entity_type_vars(
        &self,
        model: &Model,
        entity: &Entity,
        options: &ModelCodeGenerationOptions,
    ) -> TemplateVars {
        let fragments = self.fallback.entity_type_fragments(model, entity, options);

        TemplateVars::from([
            ("entity_name", entity.name.clone()),
            ("table_name", entity.table.name.clone()),
            ("schema", entity.table.schema.clone().unwrap_or_default()),
            ("namespace", options.model_namespace.clone()),
            ("usings", fragments.usings),
            ("nullable", fragments.nullable),
            ("notes", fragments.notes),
            ("members", fragments.body),
        ])
    }

    fn configuration_vars(
        &self,
        model: &Model,
        entity: &Entity,
        options: &ModelCodeGenerationOptions,
    ) -> TemplateVars {
        let fragments = self
            .fallback
            .configuration_fragments(model, entity, options);
        let suffix = &options.entity_type_configuration_suffix;
        let namespace = options.effective_context_namespace();

        TemplateVars::from([
            ("entity_name", entity.name.clone()),
            ("configuration_name", format!("{}{suffix}", entity.name)),
            ("namespace", namespace.to_string()),
            ("model_namespace", options.model_namespace.clone()),
            ("usings", fragments.usings),
            ("nullable", fragments.nullable),
            ("configuration", fragments.body),
        ])
    }
}

impl Default for TemplatedModelGenerator {
    fn default() -> Self {
        TemplatedModelGenerator::new(FileTemplates, PlaceholderEngine)
    }
}

impl ModelCodeGenerator for TemplatedModelGenerator {
    fn language(&self) -> &str {
        self.fallback.language()
    }

    fn is_templated(&self) -> bool {
        true
    }

    fn has_templates(&self, project_dir: &Path) -> bool {
        self.source.has_template(project_dir, DB_CONTEXT_TEMPLATE)
    }

    fn generate_model(
        &self,
        model: &Model,
        options: &ModelCodeGenerationOptions,
    ) -> Result<ScaffoldedModel> {
        let Some(project_dir) = options
            .project_dir
            .as_deref()
            .filter(|dir| self.has_templates(dir))
        else {
            debug!("no code templates found; using fixed output");
            return self.fallback.generate_model(model, options);
        };

        let context_vars = self.context_vars(model, options);
        let context = self
            .render(project_dir, DB_CONTEXT_TEMPLATE, &context_vars)?
            .ok_or_else(|| Error::template(DB_CONTEXT_TEMPLATE, "template not found"))?;

        let mut scaffolded = ScaffoldedModel::new(ScaffoldedFile::new(
            CSharpModelGenerator::context_path(options),
            context,
        ));

        let fixed = self.fallback.generate_model(model, options)?;

        for entity in model.entities() {
            let path = CSharpModelGenerator::entity_type_path(entity);
            let vars = self.entity_type_vars(model, entity, options);

            let code = match self.render(project_dir, ENTITY_TYPE_TEMPLATE, &vars)? {
                Some(code) => code,
                None => fixed_code(&fixed, &path)?,
            };

            scaffolded.push(ScaffoldedFile::new(path, code))?;
        }

        if options.generate_entity_type_configuration_files {
            for entity in model.entities() {
                let path = CSharpModelGenerator::configuration_path(entity, options);
                let vars = self.configuration_vars(model, entity, options);

                let template = ENTITY_TYPE_CONFIGURATION_TEMPLATE;
                let code = match self.render(project_dir, template, &vars)? {
                    Some(code) => code,
                    None => fixed_code(&fixed, &path)?,
                };

                scaffolded.push(ScaffoldedFile::new(path, code))?;
            }
        }

        debug!(
            dir = %project_dir.display(),
            files = scaffolded.additional_files().len(),
            "generated model from templates"
        );

        Ok(scaffolded)
    }
}

fn fixed_code(fixed: &ScaffoldedModel, path: &Path) -> Result<String> {
    fixed
        .file(path)
        .map(|file| file.code.clone())
        .ok_or_else(|| scaffold_core::err!("no generated file for '{}'", path.display()))
}
