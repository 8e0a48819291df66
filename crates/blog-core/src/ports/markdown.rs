/// Converts markdown text to HTML.
///
/// Implementations must accept any input, including the empty string.
pub trait MarkdownConverter: Send + Sync {
    fn convert(&self, markdown: &str) -> String;
}
