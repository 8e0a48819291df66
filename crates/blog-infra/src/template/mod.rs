//! HTML templating backed by Tera.

mod engine;

pub use engine::TeraTemplateRenderer;
