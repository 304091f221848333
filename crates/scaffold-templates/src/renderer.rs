//! Handlebars rendering of the package templates

use std::fmt;

use handlebars::{Handlebars, handlebars_helper};
use tracing::debug;

use crate::{Error, PackageMetadata, Result};

/// The templates rendered by `scaffold package`, in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateName {
    Gitignore,
    EditorConfig,
    WpCliConfig,
    Command,
    Composer,
}

impl TemplateName {
    pub const ALL: [TemplateName; 5] = [
        Self::Gitignore,
        Self::EditorConfig,
        Self::WpCliConfig,
        Self::Command,
        Self::Composer,
    ];

    /// Name the template is registered under.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gitignore => "gitignore",
            Self::EditorConfig => "editorconfig",
            Self::WpCliConfig => "wp-cli",
            Self::Command => "command",
            Self::Composer => "composer",
        }
    }

    /// File name the rendered output is written to, relative to the package.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Gitignore => ".gitignore",
            Self::EditorConfig => ".editorconfig",
            Self::WpCliConfig => "wp-cli.yml",
            Self::Command => "command.php",
            Self::Composer => "composer.json",
        }
    }

    fn source(&self) -> &'static str {
        match self {
            Self::Gitignore => include_str!("../templates/gitignore.hbs"),
            Self::EditorConfig => include_str!("../templates/editorconfig.hbs"),
            Self::WpCliConfig => include_str!("../templates/wp-cli.hbs"),
            Self::Command => include_str!("../templates/command.hbs"),
            Self::Composer => include_str!("../templates/composer.hbs"),
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Escape a value for use inside a JSON string literal, without the quotes.
fn escape_json_str(value: &str) -> String {
    let quoted = serde_json::Value::from(value).to_string();
    quoted
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or_default()
        .to_string()
}

handlebars_helper!(json_str: |value: str| escape_json_str(value));

/// Renders package templates against [`PackageMetadata`].
pub struct Renderer {
    hbs: Handlebars<'static>,
}

impl Renderer {
    /// Register every embedded template.
    ///
    /// Output is not HTML-escaped, and a template referring to a key missing
    /// from the context fails instead of rendering an empty string. Values
    /// placed inside JSON strings go through the `json_str` helper.
    pub fn new() -> Result<Self> {
        let mut hbs = Handlebars::new();
        hbs.register_escape_fn(handlebars::no_escape);
        hbs.set_strict_mode(true);
        hbs.register_helper("json_str", Box::new(json_str));

        for template in TemplateName::ALL {
            hbs.register_template_string(template.as_str(), template.source())
                .map_err(|e| Error::Parse {
                    name: template.as_str().to_string(),
                    message: e.to_string(),
                })?;
        }
        debug!(count = TemplateName::ALL.len(), "Registered package templates");

        Ok(Self { hbs })
    }

    pub fn render(&self, template: TemplateName, meta: &PackageMetadata) -> Result<String> {
        debug!(%template, "Rendering template");
        self.hbs
            .render(template.as_str(), meta)
            .map_err(|e| Error::Render {
                name: template.as_str().to_string(),
                message: e.to_string(),
            })
    }

    /// Render by registered name.
    pub fn render_named(&self, name: &str, meta: &PackageMetadata) -> Result<String> {
        let template = TemplateName::from_name(name).ok_or_else(|| Error::UnknownTemplate {
            name: name.to_string(),
        })?;
        self.render(template, meta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn meta() -> PackageMetadata {
        PackageMetadata::default().merge(
            Some("acme/hello-world".into()),
            Some("Greets <new> users & friends".into()),
            None,
        )
    }

    #[test]
    fn test_all_templates_render() {
        let renderer = Renderer::new().unwrap();
        for template in TemplateName::ALL {
            let output = renderer.render(template, &meta()).unwrap();
            assert!(!output.is_empty(), "{template} rendered empty");
        }
    }

    #[test]
    fn test_composer_is_valid_json_with_metadata() {
        let renderer = Renderer::new().unwrap();
        let output = renderer.render(TemplateName::Composer, &meta()).unwrap();

        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["name"], "acme/hello-world");
        assert_eq!(json["license"], "MIT");
        assert_eq!(json["type"], "wp-cli-package");
        assert_eq!(json["autoload"]["files"][0], "command.php");
    }

    #[test]
    fn test_output_is_not_html_escaped() {
        let renderer = Renderer::new().unwrap();
        let output = renderer.render(TemplateName::Composer, &meta()).unwrap();
        assert!(output.contains("Greets <new> users & friends"));
    }

    #[test]
    fn test_composer_stays_valid_json_with_quotes_and_backslashes() {
        let renderer = Renderer::new().unwrap();
        let meta = PackageMetadata::default().merge(
            Some("acme/hello-world".into()),
            Some(r#"Says "hi" from C:\tools"#.into()),
            Some("GPL-2.0\n".into()),
        );
        let output = renderer.render(TemplateName::Composer, &meta).unwrap();

        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["description"], r#"Says "hi" from C:\tools"#);
        assert_eq!(json["license"], "GPL-2.0\n");
        assert_eq!(json["homepage"], "https://github.com/acme/hello-world");
    }

    #[test]
    fn test_escape_json_str() {
        assert_eq!(escape_json_str("plain"), "plain");
        assert_eq!(escape_json_str("a\"b"), "a\\\"b");
        assert_eq!(escape_json_str("tab\there"), "tab\\there");
        assert_eq!(escape_json_str("<&>"), "<&>");
    }

    #[test]
    fn test_wp_cli_config_requires_command() {
        let renderer = Renderer::new().unwrap();
        let output = renderer
            .render(TemplateName::WpCliConfig, &PackageMetadata::default())
            .unwrap();
        assert_eq!(output, "require:\n  - command.php\n");
    }

    #[rstest]
    #[case("gitignore", ".gitignore")]
    #[case("editorconfig", ".editorconfig")]
    #[case("wp-cli", "wp-cli.yml")]
    #[case("command", "command.php")]
    #[case("composer", "composer.json")]
    fn test_names_and_files(#[case] name: &str, #[case] file: &str) {
        let template = TemplateName::from_name(name).unwrap();
        assert_eq!(template.file_name(), file);
        assert_eq!(template.to_string(), name);
    }

    #[test]
    fn test_render_unknown_name() {
        let renderer = Renderer::new().unwrap();
        let err = renderer.render_named("readme", &meta()).unwrap_err();
        assert!(matches!(err, Error::UnknownTemplate { .. }));
    }
}
