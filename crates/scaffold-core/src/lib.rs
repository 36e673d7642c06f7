pub mod db;
pub use db::DatabaseModel;

mod error;
pub use error::Error;

mod factory;
pub use factory::ModelFactory;

pub mod model;
pub use model::Model;

pub mod naming;

mod options;
pub use options::{ModelCodeGenerationOptions, ModelReverseEngineerOptions};

pub mod type_map;

/// A Result type alias that uses the scaffolder's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
