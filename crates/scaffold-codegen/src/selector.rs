use crate::ModelCodeGenerator;
use scaffold_core::{Error, ModelCodeGenerationOptions, Result};

use tracing::debug;

/// Registry of generators, selected by output language.
#[derive(Default)]
pub struct ModelCodeGeneratorSelector {
    generators: Vec<Box<dyn ModelCodeGenerator>>,
}

impl ModelCodeGeneratorSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a generator. Later registrations take precedence.
    pub fn register(mut self, generator: impl ModelCodeGenerator + 'static) -> Self {
        self.generators.push(Box::new(generator));
        self
    }

    /// Picks the generator for `options.language`.
    ///
    /// When a project directory is given, the last registered templated
    /// generator that finds templates there wins. Otherwise the last
    /// registered non-templated generator wins, falling back to the last
    /// match of any kind.
    pub fn select(&self, options: &ModelCodeGenerationOptions) -> Result<&dyn ModelCodeGenerator> {
        let matches: Vec<&dyn ModelCodeGenerator> = self
            .generators
            .iter()
            .map(|generator| &**generator)
            .filter(|generator| generator.language().eq_ignore_ascii_case(&options.language))
            .collect();

        let Some(&last) = matches.last() else {
            return Err(Error::unknown_language(&options.language));
        };

        if let Some(project_dir) = &options.project_dir {
            let templated = matches
                .iter()
                .rev()
                .find(|generator| generator.is_templated() && generator.has_templates(project_dir));

            if let Some(&generator) = templated {
                debug!(
                    language = %options.language,
                    dir = %project_dir.display(),
                    "selected templated generator"
                );
                return Ok(generator);
            }
        }

        let selected = matches
            .iter()
            .rev()
            .find(|generator| !generator.is_templated())
            .copied()
            .unwrap_or(last);

        debug!(
            language = %options.language,
            templated = selected.is_templated(),
            "selected generator"
        );
        Ok(selected)
    }
}
