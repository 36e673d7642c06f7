use scaffold_codegen::templated::{PlaceholderEngine, TemplateSource};
use scaffold_codegen::{
    CSharpModelGenerator, ModelCodeGenerator, ModelCodeGeneratorSelector, ScaffoldedFile,
    ScaffoldedModel, TemplatedModelGenerator,
};
use scaffold_core::{Model, ModelCodeGenerationOptions, Result};

use std::path::Path;

/// A fixed generator that tags its output with a name.
struct Named {
    language: &'static str,
    name: &'static str,
}

fn named(language: &'static str, name: &'static str) -> Named {
    Named { language, name }
}

impl ModelCodeGenerator for Named {
    fn language(&self) -> &str {
        self.language
    }

    fn generate_model(&self, _: &Model, _: &ModelCodeGenerationOptions) -> Result<ScaffoldedModel> {
        Ok(ScaffoldedModel::new(ScaffoldedFile::new("Context.cs", self.name)))
    }
}

/// Templates exist only under one project directory.
struct TemplatesIn(&'static str);

impl TemplateSource for TemplatesIn {
    fn load(&self, project_dir: &Path, _name: &str) -> Result<Option<String>> {
        Ok((project_dir == Path::new(self.0)).then(|| "// {{ context_name }}\n".to_string()))
    }
}

fn selected(selector: &ModelCodeGeneratorSelector, options: &ModelCodeGenerationOptions) -> String {
    selector
        .select(options)
        .unwrap()
        .generate_model(&Model::default(), options)
        .unwrap()
        .context_file
        .code
}

#[test]
fn last_registered_wins() {
    let selector = ModelCodeGeneratorSelector::new()
        .register(named("C#", "first"))
        .register(named("VB", "vb"))
        .register(named("C#", "second"));

    assert_eq!(
        selected(&selector, &ModelCodeGenerationOptions::new()),
        "second"
    );
    assert_eq!(
        selected(&selector, &ModelCodeGenerationOptions::new().language("vb")),
        "vb"
    );
}

#[test]
fn unknown_language() {
    let selector = ModelCodeGeneratorSelector::new().register(CSharpModelGenerator::default());

    let err = selector
        .select(&ModelCodeGenerationOptions::new().language("F#"))
        .err()
        .unwrap();

    assert!(err.is_unknown_language());
    assert_eq!(
        err.to_string(),
        "No model code generator is registered for language 'F#'."
    );
}

#[test]
fn templated_generator_needs_templates() {
    let selector = ModelCodeGeneratorSelector::new()
        .register(TemplatedModelGenerator::new(TemplatesIn("/project"), PlaceholderEngine))
        .register(named("C#", "fixed"));

    let options = ModelCodeGenerationOptions::new().context_name("BloggingContext");

    // No project directory
    assert_eq!(selected(&selector, &options), "fixed");

    let elsewhere = options.clone().project_dir("/other");
    assert_eq!(selected(&selector, &elsewhere), "fixed");
    assert!(!selector.select(&elsewhere).unwrap().is_templated());

    let project = options.clone().project_dir("/project");
    assert!(selector.select(&project).unwrap().is_templated());
    assert_eq!(selected(&selector, &project), "// BloggingContext\n");
}

#[test]
fn last_templated_generator_with_templates_wins() {
    let selector = ModelCodeGeneratorSelector::new()
        .register(TemplatedModelGenerator::new(TemplatesIn("/a"), PlaceholderEngine))
        .register(TemplatedModelGenerator::new(TemplatesIn("/b"), PlaceholderEngine))
        .register(CSharpModelGenerator::default());

    for dir in ["/a", "/b"] {
        let options = ModelCodeGenerationOptions::new().project_dir(dir);
        let generator = selector.select(&options).unwrap();
        assert!(generator.is_templated());
        assert!(generator.has_templates(Path::new(dir)));
    }
}

#[test]
fn templated_only_registry_falls_back_to_it() {
    let selector = ModelCodeGeneratorSelector::new()
        .register(TemplatedModelGenerator::new(TemplatesIn("/project"), PlaceholderEngine));

    let generator = selector.select(&ModelCodeGenerationOptions::new()).unwrap();
    assert!(generator.is_templated());
}
