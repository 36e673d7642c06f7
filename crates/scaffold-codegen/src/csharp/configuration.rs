use super::{render, Comma, Fluent, Lambda, Paragraphs, Str, ToCode};

use scaffold_core::model::{
    Entity, ForeignKey, Index, Model, Property, PropertyId, Sequence, ValueGeneration,
};
use scaffold_core::type_map::TargetType;
use scaffold_core::ModelCodeGenerationOptions;

/// Fluent statements configuring one entity, in emission order: key, table
/// binding, indexes, properties, then relationships.
pub(super) fn entity_statements(
    model: &Model,
    entity: &Entity,
    options: &ModelCodeGenerationOptions,
) -> Vec<Fluent> {
    let mut statements = vec![];

    key(model, entity, &mut statements);
    table(model, entity, &mut statements);

    for index in &entity.indexes {
        statements.push(self::index(model, index));
    }

    for property in &entity.properties {
        let statement = self::property(entity, property, options);
        if statement.has_calls() {
            statements.push(statement);
        }
    }

    for fk in &entity.foreign_keys {
        statements.push(relationship(model, entity, fk));
    }

    statements
}

/// `HasSequence` statements on the model builder.
pub(super) fn sequence_statements(model: &Model) -> Vec<Fluent> {
    model.sequences.iter().map(sequence).collect()
}

/// A standalone `IEntityTypeConfiguration<T>` class for one entity.
pub(super) fn generate_configuration_file(
    model: &Model,
    entity: &Entity,
    options: &ModelCodeGenerationOptions,
) -> String {
    let entity_name = entity.name.as_str();
    let class_name = format!("{entity_name}{}", options.entity_type_configuration_suffix);
    let body = configure_body(model, entity, options);

    let namespace = options.effective_context_namespace();

    render(|f| {
        super::header(f, &usings(options), options, namespace);

        fmt!(f, "public partial class " class_name.as_str());
        fmt!(f, " : IEntityTypeConfiguration<" entity_name ">\n");
        f.block("", |f| {
            fmt!(f, "public void Configure(EntityTypeBuilder<" entity_name "> entity)\n");
            f.block("", |f| fmt!(f, body));
            fmt!(f, "\npartial void OnConfigurePartial(EntityTypeBuilder<" entity_name ">");
            fmt!(f, " entity);\n");
        });
    })
}

pub(super) fn usings(options: &ModelCodeGenerationOptions) -> Vec<String> {
    let mut usings = vec![
        "System".to_string(),
        "System.Collections.Generic".to_string(),
        "Microsoft.EntityFrameworkCore".to_string(),
        "Microsoft.EntityFrameworkCore.Metadata.Builders".to_string(),
    ];

    if options.effective_context_namespace() != options.model_namespace {
        usings.push(options.model_namespace.clone());
    }

    usings
}

/// Statements inside `Configure`, ending with the partial hook call.
pub(super) fn configure_body(
    model: &Model,
    entity: &Entity,
    options: &ModelCodeGenerationOptions,
) -> String {
    let statements = entity_statements(model, entity, options);

    render(|f| {
        fmt!(f, Paragraphs(&statements));
        if !statements.is_empty() {
            fmt!(f, "\n");
        }
        fmt!(f, "OnConfigurePartial(entity);\n");
    })
}

fn key(model: &Model, entity: &Entity, statements: &mut Vec<Fluent>) {
    let Some(key) = &entity.primary_key else {
        statements.push(Fluent::new("entity.HasNoKey()"));
        return;
    };

    if key.name.is_none() && is_conventional_key(model, entity, &key.properties) {
        return;
    }

    let columns = lambda(model, "e", &key.properties);
    let mut statement = Fluent::new(format!("entity.HasKey({columns})"));
    if let Some(name) = &key.name {
        statement.call(format!("HasName({})", Str(name)));
    }
    statements.push(statement);
}

/// A single `Id` or `{Entity}Id` property is discovered as the key without
/// configuration.
fn is_conventional_key(model: &Model, entity: &Entity, properties: &[PropertyId]) -> bool {
    let [property] = properties else {
        return false;
    };

    let name = &model.property(*property).name;
    name.eq_ignore_ascii_case("Id") || name.eq_ignore_ascii_case(&format!("{}Id", entity.name))
}

fn table(model: &Model, entity: &Entity, statements: &mut Vec<Fluent>) {
    let binding = &entity.table;
    let schema = binding
        .schema
        .as_deref()
        .filter(|schema| Some(*schema) != model.default_schema.as_deref());

    let method = if entity.is_view() {
        "ToView"
    } else if binding.name != entity.db_set_name || schema.is_some() {
        "ToTable"
    } else {
        ""
    };

    if !method.is_empty() {
        let args = match schema {
            Some(schema) => format!("{}, {}", Str(&binding.name), Str(schema)),
            None => Str(&binding.name).to_string(),
        };
        statements.push(Fluent::new(format!("entity.{method}({args})")));
    }

    if let Some(comment) = &entity.comment {
        statements.push(Fluent::new(format!("entity.HasComment({})", Str(comment))));
    }
}

fn index(model: &Model, index: &Index) -> Fluent {
    let columns = lambda(model, "e", &index.properties);
    let mut statement = match &index.name {
        Some(name) => Fluent::new(format!("entity.HasIndex({columns}, {})", Str(name))),
        None => Fluent::new(format!("entity.HasIndex({columns})")),
    };

    if index.unique {
        statement.call("IsUnique()");
    }

    if let Some(filter) = &index.filter {
        statement.call(format!("HasFilter({})", Str(filter)));
    }

    statement
}

fn property(entity: &Entity, property: &Property, options: &ModelCodeGenerationOptions) -> Fluent {
    let mut statement = Fluent::new(format!("entity.Property(e => e.{})", property.name));
    let mapping = &property.mapping;

    let in_key = entity
        .primary_key
        .as_ref()
        .is_some_and(|key| key.properties.contains(&property.id));

    if property.ty.is_reference()
        && !property.nullable
        && !options.use_nullable_reference_types
        && !in_key
    {
        statement.call("IsRequired()");
    }

    if let Some(max_length) = mapping.max_length {
        statement.call(format!("HasMaxLength({max_length})"));
    }

    match mapping.unicode {
        Some(true) => {
            statement.call("IsUnicode()");
        }
        Some(false) => {
            statement.call("IsUnicode(false)");
        }
        None => {}
    }

    match mapping.fixed_length {
        Some(true) => {
            statement.call("IsFixedLength()");
        }
        Some(false) => {
            statement.call("IsFixedLength(false)");
        }
        None => {}
    }

    match (mapping.precision, mapping.scale) {
        (Some(precision), Some(scale)) => {
            statement.call(format!("HasPrecision({precision}, {scale})"));
        }
        (Some(precision), None) => {
            statement.call(format!("HasPrecision({precision})"));
        }
        _ => {}
    }

    if mapping.needs_column_type() {
        statement.call(format!("HasColumnType({})", Str(&mapping.store_type)));
    }

    if let Some(sql) = &property.default_value_sql {
        statement.call(format!("HasDefaultValueSql({})", Str(sql)));
    }

    if let Some(sql) = &property.computed_column_sql {
        match property.computed_column_stored {
            Some(stored) => statement.call(format!("HasComputedColumnSql({}, {stored})", Str(sql))),
            None => statement.call(format!("HasComputedColumnSql({})", Str(sql))),
        };
    }

    match property.value_generated {
        Some(ValueGeneration::Never) => {
            statement.call("ValueGeneratedNever()");
        }
        Some(ValueGeneration::OnAdd) => {
            statement.call("ValueGeneratedOnAdd()");
        }
        Some(ValueGeneration::OnAddOrUpdate) => {
            statement.call("ValueGeneratedOnAddOrUpdate()");
        }
        None => {}
    }

    if property.row_version {
        statement.call("IsRowVersion()");
    } else if property.concurrency_token {
        statement.call("IsConcurrencyToken()");
    }

    if let Some(comment) = &property.comment {
        statement.call(format!("HasComment({})", Str(comment)));
    }

    if let Some(collation) = &property.collation {
        statement.call(format!("UseCollation({})", Str(collation)));
    }

    if property.has_custom_column_name() {
        statement.call(format!("HasColumnName({})", Str(&property.column_name)));
    }

    statement
}

fn relationship(model: &Model, entity: &Entity, fk: &ForeignKey) -> Fluent {
    let principal = model.entity(fk.principal);

    let has_one = match fk.dependent_to_principal {
        Some(id) => format!("HasOne(d => d.{})", model.navigation(id).name),
        None => format!("HasOne<{}>()", principal.name),
    };

    let inverse = fk
        .principal_to_dependent
        .map(|id| format!("p => p.{}", model.navigation(id).name))
        .unwrap_or_default();

    let with = if fk.unique { "WithOne" } else { "WithMany" };
    let mut statement = Fluent::new(format!("entity.{has_one}.{with}({inverse})"));

    // One-to-one relationships name the side that declares the key.
    let (dependent_arg, principal_arg) = if fk.unique {
        (
            format!("<{}>", entity.name),
            format!("<{}>", principal.name),
        )
    } else {
        (String::new(), String::new())
    };

    statement.call(format!(
        "HasForeignKey{dependent_arg}({})",
        lambda(model, "d", &fk.properties)
    ));

    if !fk.principal_key_is_primary {
        statement.call(format!(
            "HasPrincipalKey{principal_arg}({})",
            lambda(model, "p", &fk.principal_properties)
        ));
    }

    if fk.on_delete != fk.conventional_on_delete() {
        let behavior = fk.on_delete.as_str();
        statement.call(format!("OnDelete(DeleteBehavior.{behavior})"));
    }

    if let Some(name) = &fk.name {
        statement.call(format!("HasConstraintName({})", Str(name)));
    }

    statement
}

fn sequence(sequence: &Sequence) -> Fluent {
    let generic = match sequence.ty {
        TargetType::Int64 => String::new(),
        ty => format!("<{}>", super::type_name(ty)),
    };

    let args = match &sequence.schema {
        Some(schema) => render(|f| fmt!(f, Comma([Str(&sequence.name), Str(schema)]))),
        None => Str(&sequence.name).to_string(),
    };

    let mut statement = Fluent::new(format!("modelBuilder.HasSequence{generic}({args})"));

    if let Some(start) = sequence.start_value {
        statement.call(format!("StartsAt({start})"));
    }

    if let Some(increment) = sequence.increment_by {
        statement.call(format!("IncrementsBy({increment})"));
    }

    if let Some(min) = sequence.min_value {
        statement.call(format!("HasMin({min})"));
    }

    if let Some(max) = sequence.max_value {
        statement.call(format!("HasMax({max})"));
    }

    if sequence.cyclic {
        statement.call("IsCyclic()");
    }

    statement
}

fn lambda<'a>(model: &'a Model, param: &'a str, properties: &[PropertyId]) -> Lambda<'a> {
    Lambda {
        param,
        members: properties
            .iter()
            .map(|id| model.property(*id).name.as_str())
            .collect(),
    }
}
