use comrak::{Options, markdown_to_html};

use blog_core::ports::MarkdownConverter;

/// CommonMark converter with autolinking of bare URLs.
///
/// Raw HTML in the source is not passed through. `Options` carries a
/// non-`Send` link callback, so only the extension flags are kept and the
/// options are built per call.
#[derive(Debug, Clone, Copy)]
pub struct ComrakMarkdownConverter {
    autolink: bool,
    strikethrough: bool,
    table: bool,
}

impl ComrakMarkdownConverter {
    pub fn new() -> Self {
        Self {
            autolink: true,
            strikethrough: true,
            table: true,
        }
    }

    fn options(&self) -> Options<'static> {
        let mut options = Options::default();
        options.extension.autolink = self.autolink;
        options.extension.strikethrough = self.strikethrough;
        options.extension.table = self.table;
        options
    }
}

impl Default for ComrakMarkdownConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownConverter for ComrakMarkdownConverter {
    fn convert(&self, markdown: &str) -> String {
        markdown_to_html(markdown, &self.options())
    }
}
