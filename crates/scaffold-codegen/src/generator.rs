use crate::ScaffoldedModel;
use scaffold_core::{Model, ModelCodeGenerationOptions, Result};

use std::path::Path;

/// Turns a populated model into source files for one output language.
///
/// Generators are pure: they produce in-memory files and never touch the
/// file system, except for a templated generator reading its templates.
pub trait ModelCodeGenerator {
    /// Output language tag, such as `C#`.
    fn language(&self) -> &str;

    /// Whether output is driven by user-supplied templates.
    fn is_templated(&self) -> bool {
        false
    }

    /// Whether templates for this generator exist under `project_dir`.
    fn has_templates(&self, _project_dir: &Path) -> bool {
        false
    }

    fn generate_model(
        &self,
        model: &Model,
        options: &ModelCodeGenerationOptions,
    ) -> Result<ScaffoldedModel>;
}
