use scaffold_core::{Error, Result};

use indexmap::IndexMap;

/// Values available to a template, by placeholder name.
pub type TemplateVars = IndexMap<&'static str, String>;

/// Renders template text with a set of variables.
pub trait TemplateEngine {
    fn render(&self, name: &str, template: &str, vars: &TemplateVars) -> Result<String>;
}

/// Replaces `{{ name }}` placeholders with variable values.
///
/// When a placeholder is preceded only by whitespace on its line, every
/// following line of the value is indented to match. Referencing an unknown
/// variable is an error.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderEngine;

impl TemplateEngine for PlaceholderEngine {
    fn render(&self, name: &str, template: &str, vars: &TemplateVars) -> Result<String> {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find("{{") {
            out.push_str(&rest[..open]);

            let after = &rest[open + 2..];
            let Some(close) = after.find("}}") else {
                return Err(Error::template(name, "unclosed placeholder"));
            };

            let key = after[..close].trim();
            let Some(value) = vars.get(key) else {
                let message = format!("unknown placeholder '{key}'");
                return Err(Error::template(name, message));
            };

            let line = &out[out.rfind('\n').map_or(0, |i| i + 1)..];
            if line.chars().all(char::is_whitespace) {
                let indent = line.to_string();
                for (i, value_line) in value.split('\n').enumerate() {
                    if i > 0 {
                        out.push('\n');
                        if !value_line.is_empty() {
                            out.push_str(&indent);
                        }
                    }
                    out.push_str(value_line);
                }
            } else {
                out.push_str(value);
            }

            rest = &after[close + 2..];
        }

        out.push_str(rest);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars() -> TemplateVars {
        TemplateVars::from([
            ("name", "BloggingContext".to_string()),
            ("body", "int A;\n\nint B;".to_string()),
        ])
    }

    #[test]
    fn substitutes_placeholders() {
        let out = PlaceholderEngine
            .render("t", "class {{name}} : {{ name }}", &vars())
            .unwrap();
        assert_eq!(out, "class BloggingContext : BloggingContext");
    }

    #[test]
    fn indents_multi_line_values() {
        let out = PlaceholderEngine
            .render("t", "{\n    {{ body }}\n}", &vars())
            .unwrap();
        assert_eq!(out, "{\n    int A;\n\n    int B;\n}");
    }

    #[test]
    fn unknown_and_unclosed_placeholders() {
        let err = PlaceholderEngine
            .render("DbContext.tmpl", "{{ missing }}", &vars())
            .unwrap_err();
        assert!(err.is_template());
        assert_eq!(
            err.to_string(),
            "template 'DbContext.tmpl': unknown placeholder 'missing'"
        );

        let err = PlaceholderEngine
            .render("DbContext.tmpl", "{{ name", &vars())
            .unwrap_err();
        assert!(err.is_template());
    }
}
