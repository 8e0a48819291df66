use serde_json::Value;
use tera::{Context, Tera};

use blog_core::ports::{TemplateError, TemplateRenderer};

const BASE: &str = include_str!("../../templates/base.html");
const BLOG: &str = include_str!("../../templates/blog.html");
const ARTICLE: &str = include_str!("../../templates/article.html");
const ERROR: &str = include_str!("../../templates/error.html");

/// Tera-backed template renderer.
///
/// `.html` templates are autoescaped; fields already holding HTML are marked
/// `safe` in the templates themselves.
pub struct TeraTemplateRenderer {
    tera: Tera,
}

impl TeraTemplateRenderer {
    /// Renderer over the templates compiled into the binary.
    pub fn embedded() -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("base.html", BASE),
            ("blog.html", BLOG),
            ("article.html", ARTICLE),
            ("error.html", ERROR),
        ])
        .map_err(|e| TemplateError::Load(e.to_string()))?;

        Ok(Self { tera })
    }

    /// Renderer over templates matching a glob, e.g. `templates/**/*.html`.
    pub fn from_glob(pattern: &str) -> Result<Self, TemplateError> {
        let tera = Tera::new(pattern).map_err(|e| TemplateError::Load(e.to_string()))?;
        tracing::info!(
            pattern,
            templates = tera.get_template_names().count(),
            "Templates loaded"
        );
        Ok(Self { tera })
    }
}

impl TemplateRenderer for TeraTemplateRenderer {
    fn render(&self, template: &str, context: &Value) -> Result<String, TemplateError> {
        if !self.tera.get_template_names().any(|name| name == template) {
            return Err(TemplateError::NotFound(template.to_string()));
        }

        let context =
            Context::from_serialize(context).map_err(|e| TemplateError::Render(e.to_string()))?;

        self.tera.render(template, &context).map_err(|e| {
            tracing::error!(template, error = ?e, "Template rendering failed");
            TemplateError::Render(e.to_string())
        })
    }
}
