mod connection;
pub use connection::{ConnectionStringResolver, NamedConnections};

mod introspect;
pub use introspect::{
    DatabaseModelFactory, DatabaseModelFactoryOptions, IntrospectedDatabase,
    JsonDatabaseModelFactory,
};

mod save;
pub use save::SavedModelFiles;

mod scaffolder;
pub use scaffolder::ReverseEngineerScaffolder;

pub use scaffold_codegen::{
    CSharpModelGenerator, ModelCodeGenerator, ModelCodeGeneratorSelector, ScaffoldedFile,
    ScaffoldedModel, TemplatedModelGenerator,
};
pub use scaffold_core::{
    DatabaseModel, Error, Model, ModelCodeGenerationOptions, ModelFactory,
    ModelReverseEngineerOptions, Result,
};
