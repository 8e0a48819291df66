use serde_json::Value;

/// Renders a named template against a view-model.
pub trait TemplateRenderer: Send + Sync {
    fn render(&self, template: &str, context: &Value) -> Result<String, TemplateError>;
}

/// Template operation errors.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("Template not found: {0}")]
    NotFound(String),

    #[error("Template loading failed: {0}")]
    Load(String),

    #[error("Rendering failed: {0}")]
    Render(String),
}
