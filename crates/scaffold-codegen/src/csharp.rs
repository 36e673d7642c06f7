#[macro_use]
mod fmt;
use fmt::{render, Formatter, ToCode};

mod configuration;
mod context;

mod delim;
use delim::{Comma, Paragraphs};

mod entity_type;

mod fluent;
use fluent::Fluent;

mod literal;
use literal::{xml_escape, Lambda, Str};

mod ty;
use ty::{navigation_type, property_type, type_name};

use crate::{
    ModelCodeGenerator, ProviderConfiguration, ScaffoldedFile, ScaffoldedModel,
    SqlServerProviderConfiguration,
};
use scaffold_core::model::{Entity, Model, Note};
use scaffold_core::{ModelCodeGenerationOptions, Result};

use std::path::PathBuf;
use tracing::debug;

/// Generates C# entity types and a context with fluent configuration.
pub struct CSharpModelGenerator {
    provider: Box<dyn ProviderConfiguration>,
}

/// Pre-rendered pieces of generated files, handed to templates.
///
/// Multi-line fragments are unindented and end without a trailing newline.
#[derive(Debug, Clone, Default)]
pub(crate) struct Fragments {
    pub(crate) usings: String,
    pub(crate) nullable: String,
    pub(crate) notes: String,
    pub(crate) body: String,
    pub(crate) on_configuring: String,
    pub(crate) db_sets: String,
}

impl CSharpModelGenerator {
    pub fn new(provider: impl ProviderConfiguration + 'static) -> CSharpModelGenerator {
        CSharpModelGenerator {
            provider: Box::new(provider),
        }
    }

    pub fn provider(&self) -> &dyn ProviderConfiguration {
        &*self.provider
    }

    pub(crate) fn context_path(options: &ModelCodeGenerationOptions) -> PathBuf {
        context_dir(options).join(format!("{}.cs", options.effective_context_name()))
    }

    pub(crate) fn entity_type_path(entity: &Entity) -> PathBuf {
        PathBuf::from(format!("{}.cs", entity.name))
    }

    pub(crate) fn configuration_path(
        entity: &Entity,
        options: &ModelCodeGenerationOptions,
    ) -> PathBuf {
        context_dir(options).join(format!(
            "{}{}.cs",
            entity.name, options.entity_type_configuration_suffix
        ))
    }

    pub(crate) fn context_fragments(
        &self,
        model: &Model,
        options: &ModelCodeGenerationOptions,
    ) -> Fragments {
        Fragments {
            usings: usings(&context::usings(options)),
            nullable: nullable(options),
            notes: trim(render(|f| note_comments(f, &model.notes))),
            body: trim(context::on_model_creating_body(model, options)),
            on_configuring: trim(context::on_configuring(options, self.provider())),
            db_sets: trim(context::db_sets(model, options)),
        }
    }

    pub(crate) fn entity_type_fragments(
        &self,
        model: &Model,
        entity: &Entity,
        options: &ModelCodeGenerationOptions,
    ) -> Fragments {
        Fragments {
            usings: usings(&entity_type::usings()),
            nullable: nullable(options),
            notes: trim(render(|f| note_comments(f, &entity.notes))),
            body: trim(entity_type::members(model, entity, options)),
            ..Fragments::default()
        }
    }

    pub(crate) fn configuration_fragments(
        &self,
        model: &Model,
        entity: &Entity,
        options: &ModelCodeGenerationOptions,
    ) -> Fragments {
        Fragments {
            usings: usings(&configuration::usings(options)),
            nullable: nullable(options),
            notes: String::new(),
            body: trim(configuration::configure_body(model, entity, options)),
            ..Fragments::default()
        }
    }
}

impl Default for CSharpModelGenerator {
    fn default() -> Self {
        CSharpModelGenerator::new(SqlServerProviderConfiguration)
    }
}

impl std::fmt::Debug for CSharpModelGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CSharpModelGenerator")
            .field("provider", &self.provider.use_provider_method())
            .finish()
    }
}

impl ModelCodeGenerator for CSharpModelGenerator {
    fn language(&self) -> &str {
        "C#"
    }

    fn generate_model(
        &self,
        model: &Model,
        options: &ModelCodeGenerationOptions,
    ) -> Result<ScaffoldedModel> {
        let mut scaffolded = ScaffoldedModel::new(ScaffoldedFile::new(
            Self::context_path(options),
            context::generate_context(model, options, self.provider()),
        ));

        for entity in model.entities() {
            scaffolded.push(ScaffoldedFile::new(
                Self::entity_type_path(entity),
                entity_type::generate_entity_type(model, entity, options),
            ))?;
        }

        if options.generate_entity_type_configuration_files {
            for entity in model.entities() {
                scaffolded.push(ScaffoldedFile::new(
                    Self::configuration_path(entity, options),
                    configuration::generate_configuration_file(model, entity, options),
                ))?;
            }
        }

        debug!(
            context = %scaffolded.context_file.path.display(),
            files = scaffolded.additional_files().len(),
            "generated C# model"
        );

        Ok(scaffolded)
    }
}

fn context_dir(options: &ModelCodeGenerationOptions) -> PathBuf {
    options.context_dir.clone().unwrap_or_default()
}

/// Writes the using directives, nullable context and file-scoped namespace.
fn header(
    f: &mut Formatter<'_>,
    namespaces: &[String],
    options: &ModelCodeGenerationOptions,
    namespace: &str,
) {
    fmt!(f, usings(namespaces) "\n\n");

    if !options.use_nullable_reference_types {
        fmt!(f, "#nullable disable\n\n");
    }

    fmt!(f, "namespace " namespace ";\n\n");
}

fn usings(namespaces: &[String]) -> String {
    namespaces
        .iter()
        .map(|namespace| format!("using {namespace};"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn nullable(options: &ModelCodeGenerationOptions) -> String {
    if options.use_nullable_reference_types {
        String::new()
    } else {
        "#nullable disable".to_string()
    }
}

fn note_comments(f: &mut Formatter<'_>, notes: &[Note]) {
    for note in notes {
        fmt!(f, "// " note.to_string() "\n");
    }
}

fn doc_comment(f: &mut Formatter<'_>, comment: Option<&str>) {
    let Some(comment) = comment else {
        return;
    };

    fmt!(f, "/// <summary>\n");
    for line in comment.lines() {
        fmt!(f, "/// " xml_escape(line) "\n");
    }
    fmt!(f, "/// </summary>\n");
}

fn trim(text: String) -> String {
    text.trim_end_matches('\n').to_string()
}
