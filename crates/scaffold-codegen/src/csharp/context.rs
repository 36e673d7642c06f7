use super::{note_comments, render, Paragraphs, Str, ToCode};
use crate::ProviderConfiguration;

use scaffold_core::model::Model;
use scaffold_core::ModelCodeGenerationOptions;

const SENSITIVE_INFORMATION_WARNING: &str = concat!(
    "#warning To protect potentially sensitive information in your connection string, ",
    "you should move it out of source code. Use the Name= syntax to read it from ",
    "configuration instead."
);

pub(super) fn generate_context(
    model: &Model,
    options: &ModelCodeGenerationOptions,
    provider: &dyn ProviderConfiguration,
) -> String {
    let context_name = options.effective_context_name();
    let namespace = options.effective_context_namespace();

    let db_sets = db_sets(model, options);
    let on_configuring = on_configuring(options, provider);
    let body = on_model_creating_body(model, options);

    render(|f| {
        super::header(f, &usings(options), options, namespace);
        note_comments(f, &model.notes);

        fmt!(f, "public partial class " context_name " : DbContext\n");
        f.block("", |f| {
            fmt!(f, "public " context_name "()\n");
            f.block("", |_| {});

            fmt!(f, "\npublic " context_name "(DbContextOptions<" context_name "> options)\n");
            f.indented(|f| fmt!(f, ": base(options)\n"));
            f.block("", |_| {});

            if !db_sets.is_empty() {
                fmt!(f, "\n" db_sets);
            }

            if !on_configuring.is_empty() {
                fmt!(f, "\n" on_configuring);
            }

            fmt!(f, "\nprotected override void OnModelCreating(ModelBuilder modelBuilder)\n");
            f.block("", |f| fmt!(f, body));

            fmt!(f, "\npartial void OnModelCreatingPartial(ModelBuilder modelBuilder);\n");
        });
    })
}

pub(super) fn usings(options: &ModelCodeGenerationOptions) -> Vec<String> {
    let mut usings = vec![
        "System".to_string(),
        "System.Collections.Generic".to_string(),
        "Microsoft.EntityFrameworkCore".to_string(),
    ];

    if options.effective_context_namespace() != options.model_namespace {
        usings.push(options.model_namespace.clone());
    }

    usings
}

/// One collection accessor per entity, separated by blank lines.
pub(super) fn db_sets(model: &Model, options: &ModelCodeGenerationOptions) -> String {
    let initializer = if options.use_nullable_reference_types {
        " = null!;"
    } else {
        ""
    };

    let lines: Vec<String> = model
        .entities()
        .map(|entity| {
            format!(
                "public virtual DbSet<{}> {} {{ get; set; }}{initializer}\n",
                entity.name, entity.db_set_name
            )
        })
        .collect();

    render(|f| fmt!(f, Paragraphs(lines)))
}

/// The options hook, or nothing when it is suppressed.
pub(super) fn on_configuring(
    options: &ModelCodeGenerationOptions,
    provider: &dyn ProviderConfiguration,
) -> String {
    if options.suppress_on_configuring {
        return String::new();
    }

    let connection = options
        .connection_string
        .as_deref()
        .filter(|_| !options.suppress_connection_string);

    render(|f| {
        fmt!(f, "protected override void OnConfiguring(DbContextOptionsBuilder optionsBuilder)\n");

        if connection.is_some_and(|connection| !is_named_connection(connection)) {
            fmt!(f, SENSITIVE_INFORMATION_WARNING "\n");
        }

        f.indented(|f| {
            fmt!(f, "=> optionsBuilder." provider.use_provider_method() "(");
            fmt!(f, connection.map(Str) ");\n");
        });
    })
}

/// Statements inside `OnModelCreating`, ending with the partial hook call.
pub(super) fn on_model_creating_body(
    model: &Model,
    options: &ModelCodeGenerationOptions,
) -> String {
    let mut sections = vec![];

    if let Some(collation) = &model.collation {
        sections.push(format!("modelBuilder.UseCollation({});\n", Str(collation)));
    }

    if options.generate_entity_type_configuration_files {
        let lines: String = model
            .entities()
            .map(|entity| {
                format!(
                    "modelBuilder.ApplyConfiguration(new {}{}());\n",
                    entity.name, options.entity_type_configuration_suffix
                )
            })
            .collect();

        if !lines.is_empty() {
            sections.push(lines);
        }
    } else {
        for entity in model.entities() {
            let statements = super::configuration::entity_statements(model, entity, options);
            if statements.is_empty() {
                continue;
            }

            let entity_name = entity.name.as_str();
            sections.push(render(|f| {
                fmt!(f, "modelBuilder.Entity<" entity_name ">(entity =>\n");
                f.block(");", |f| fmt!(f, Paragraphs(&statements)));
            }));
        }
    }

    for statement in super::configuration::sequence_statements(model) {
        sections.push(render(|f| fmt!(f, &statement)));
    }

    sections.push("OnModelCreatingPartial(modelBuilder);\n".to_string());

    render(|f| fmt!(f, Paragraphs(sections)))
}

/// `Name=...` references are resolved from configuration at run time.
fn is_named_connection(connection: &str) -> bool {
    connection
        .trim_start()
        .get(..5)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("name="))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_connections() {
        assert!(is_named_connection("Name=ConnectionStrings:Blogging"));
        assert!(is_named_connection("  name=Blogging"));
        assert!(!is_named_connection("Server=.;Database=Blogging"));
        assert!(!is_named_connection("Name"));
    }
}
