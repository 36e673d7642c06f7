mod csharp;
pub use csharp::CSharpModelGenerator;

mod generator;
pub use generator::ModelCodeGenerator;

mod output;
pub use output::{ScaffoldedFile, ScaffoldedModel};

mod provider;
pub use provider::{ProviderConfiguration, SqlServerProviderConfiguration};

mod selector;
pub use selector::ModelCodeGeneratorSelector;

pub mod templated;
pub use templated::TemplatedModelGenerator;

pub use scaffold_core::{Error, Result};
