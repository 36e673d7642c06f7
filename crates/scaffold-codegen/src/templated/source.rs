use super::TEMPLATE_DIR;
use scaffold_core::{Error, Result};

use std::path::Path;

/// Finds templates for a project directory.
///
/// Presence is evaluated per call; nothing is cached between generations.
pub trait TemplateSource {
    /// The text of template `name`, or `None` when the project has none.
    fn load(&self, project_dir: &Path, name: &str) -> Result<Option<String>>;

    fn has_template(&self, project_dir: &Path, name: &str) -> bool {
        matches!(self.load(project_dir, name), Ok(Some(_)))
    }
}

/// Reads templates from `{project_dir}/CodeTemplates/Scaffold/`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileTemplates;

impl TemplateSource for FileTemplates {
    fn load(&self, project_dir: &Path, name: &str) -> Result<Option<String>> {
        let path = project_dir.join(TEMPLATE_DIR).join(name);

        match std::fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(Error::io(path, err)),
        }
    }

    fn has_template(&self, project_dir: &Path, name: &str) -> bool {
        project_dir.join(TEMPLATE_DIR).join(name).is_file()
    }
}
