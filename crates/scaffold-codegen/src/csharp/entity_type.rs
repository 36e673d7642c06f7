use super::{doc_comment, navigation_type, note_comments, property_type, render, Paragraphs, ToCode};

use scaffold_core::model::{Entity, Model};
use scaffold_core::ModelCodeGenerationOptions;

pub(super) fn generate_entity_type(
    model: &Model,
    entity: &Entity,
    options: &ModelCodeGenerationOptions,
) -> String {
    let entity_name = entity.name.as_str();
    let members = members(model, entity, options);

    render(|f| {
        super::header(f, &usings(), options, &options.model_namespace);
        note_comments(f, &entity.notes);
        doc_comment(f, entity.comment.as_deref());

        fmt!(f, "public partial class " entity_name "\n");
        f.block("", |f| fmt!(f, members));
    })
}

pub(super) fn usings() -> Vec<String> {
    vec![
        "System".to_string(),
        "System.Collections.Generic".to_string(),
    ]
}

/// Property and navigation declarations, separated by blank lines.
pub(super) fn members(
    model: &Model,
    entity: &Entity,
    options: &ModelCodeGenerationOptions,
) -> String {
    let nullable_reference_types = options.use_nullable_reference_types;
    let mut members = vec![];

    for property in &entity.properties {
        let (ty, initializer) = property_type(property, nullable_reference_types);
        let name = property.name.as_str();

        members.push(render(|f| {
            doc_comment(f, property.comment.as_deref());
            fmt!(f, "public " ty " " name " { get; set; }" initializer "\n");
        }));
    }

    for navigation in &entity.navigations {
        let (ty, initializer) = navigation_type(model, navigation, nullable_reference_types);
        let name = navigation.name.as_str();

        members.push(render(|f| {
            fmt!(f, "public virtual " ty " " name " { get; set; }" initializer "\n");
        }));
    }

    render(|f| fmt!(f, Paragraphs(members)))
}
