use pretty_assertions::assert_eq;
use scaffold::{
    DatabaseModelFactory, DatabaseModelFactoryOptions, IntrospectedDatabase,
    JsonDatabaseModelFactory, NamedConnections, ReverseEngineerScaffolder,
};
use scaffold_core::db::{Column, DatabaseModel, PrimaryKey, Table};
use scaffold_core::{ModelCodeGenerationOptions, ModelReverseEngineerOptions, Result};

use std::cell::RefCell;
use std::fs;
use std::rc::Rc;

fn blogging() -> DatabaseModel {
    let mut blogs = Table::new("Blogs");
    blogs.schema = Some("dbo".to_string());
    blogs.columns = vec![
        Column::new("Id", "int"),
        Column::new("Url", "nvarchar(max)"),
    ];
    blogs.primary_key = Some(PrimaryKey::new(["Id"]));

    let mut audit = Table::new("Changes");
    audit.schema = Some("audit".to_string());
    audit.columns = vec![Column::new("Id", "bigint")];
    audit.primary_key = Some(PrimaryKey::new(["Id"]));

    DatabaseModel {
        database_name: Some("Blogging".to_string()),
        default_schema: Some("dbo".to_string()),
        tables: vec![blogs, audit],
        ..DatabaseModel::default()
    }
}

/// Serves a fixed schema and records the connection strings it was given.
#[derive(Clone, Default)]
struct InMemory {
    connection_override: Option<String>,
    seen: Rc<RefCell<Vec<String>>>,
}

impl DatabaseModelFactory for InMemory {
    fn create(
        &self,
        connection_string: &str,
        options: &DatabaseModelFactoryOptions,
    ) -> Result<IntrospectedDatabase> {
        self.seen.borrow_mut().push(connection_string.to_string());

        Ok(IntrospectedDatabase {
            model: options.apply(blogging()),
            connection_string: self.connection_override.clone(),
        })
    }
}

fn scaffold(
    scaffolder: &ReverseEngineerScaffolder,
    connection: &str,
    code_options: &ModelCodeGenerationOptions,
) -> Result<scaffold::ScaffoldedModel> {
    scaffolder.scaffold_model(
        connection,
        &DatabaseModelFactoryOptions::default(),
        &ModelReverseEngineerOptions::default(),
        code_options,
    )
}

#[test]
fn invalid_context_name_fails_fast() {
    let database = InMemory::default();
    let scaffolder = ReverseEngineerScaffolder::new(database.clone());

    let err = scaffold(
        &scaffolder,
        "Server=.",
        &ModelCodeGenerationOptions::new().context_name("1Context"),
    )
    .unwrap_err();

    assert!(err.is_invalid_identifier());
    assert_eq!(
        err.to_string(),
        "The context class name '1Context' is not a valid C# identifier."
    );
    assert!(database.seen.borrow().is_empty());
}

#[test]
fn context_name_from_database_name() {
    let scaffolder = ReverseEngineerScaffolder::new(InMemory::default());
    let options = ModelCodeGenerationOptions::new();

    let scaffolded = scaffold(&scaffolder, "Server=.", &options).unwrap();

    let context = &scaffolded.context_file;
    assert_eq!(context.path.to_str(), Some("BloggingContext.cs"));
    let declaration = "public partial class BloggingContext : DbContext";
    assert!(context.code.contains(declaration));
    // The caller's options are left alone.
    assert_eq!(options.context_name, None);
}

#[test]
fn introspection_override_is_embedded() {
    let database = InMemory {
        connection_override: Some("Server=prod;Database=Blogging".to_string()),
        ..InMemory::default()
    };
    let scaffolder = ReverseEngineerScaffolder::new(database);

    let code = scaffold(&scaffolder, "Server=.", &ModelCodeGenerationOptions::new())
        .unwrap()
        .context_file
        .code;

    assert!(code.contains("optionsBuilder.UseSqlServer(\"Server=prod;Database=Blogging\");"));
    assert!(!code.contains("\"Server=.\""));
}

#[test]
fn caller_connection_without_override() {
    let scaffolder = ReverseEngineerScaffolder::new(InMemory::default());

    let code = scaffold(&scaffolder, "Server=.", &ModelCodeGenerationOptions::new())
        .unwrap()
        .context_file
        .code;

    assert!(code.contains("#warning"));
    assert!(code.contains("optionsBuilder.UseSqlServer(\"Server=.\");"));
}

#[test]
fn named_connections_are_resolved_but_embedded_by_name() {
    let database = InMemory::default();
    let scaffolder = ReverseEngineerScaffolder::new(database.clone())
        .connection_resolver(NamedConnections::new().connection("Blogging", "Server=secret"));

    let options = ModelCodeGenerationOptions::new();
    let code = scaffold(&scaffolder, "Name=Blogging", &options)
        .unwrap()
        .context_file
        .code;

    assert_eq!(*database.seen.borrow(), ["Server=secret"]);
    assert!(code.contains("optionsBuilder.UseSqlServer(\"Name=Blogging\");"));
    assert!(!code.contains("#warning"));
    assert!(!code.contains("secret"));
}

#[test]
fn unknown_language() {
    let scaffolder = ReverseEngineerScaffolder::new(InMemory::default());

    let err = scaffold(
        &scaffolder,
        "Server=.",
        &ModelCodeGenerationOptions::new().language("VB"),
    )
    .unwrap_err();

    assert!(err.is_unknown_language());
}

#[test]
fn json_schema_dump() {
    let dir = tempfile::tempdir().unwrap();
    let dump = dir.path().join("blogging.json");
    fs::write(&dump, serde_json::to_string_pretty(&blogging()).unwrap()).unwrap();

    let scaffolder = ReverseEngineerScaffolder::new(JsonDatabaseModelFactory);
    let scaffolded = scaffolder
        .scaffold_model(
            dump.to_str().unwrap(),
            &DatabaseModelFactoryOptions::new().schema("dbo"),
            &ModelReverseEngineerOptions::default(),
            &ModelCodeGenerationOptions::new().suppress_connection_string(true),
        )
        .unwrap();

    let paths: Vec<_> = scaffolded
        .files()
        .map(|file| file.path.to_string_lossy().into_owned())
        .collect();
    assert_eq!(paths, ["BloggingContext.cs", "Blog.cs"]);

    let out = dir.path().join("out");
    let saved = scaffolder.save(&scaffolded, &out, false).unwrap();
    assert_eq!(saved.files().count(), 2);
    assert!(out.join("Blog.cs").is_file());
}

#[test]
fn missing_schema_dump() {
    let dir = tempfile::tempdir().unwrap();
    let scaffolder = ReverseEngineerScaffolder::new(JsonDatabaseModelFactory);

    let missing = dir.path().join("missing.json");
    let options = ModelCodeGenerationOptions::new();
    let err = scaffold(&scaffolder, missing.to_str().unwrap(), &options).unwrap_err();

    assert!(err.to_string().starts_with("introspecting the database: "));
}
