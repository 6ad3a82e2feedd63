//! HTML to Markdown conversion
//!
//! Wraps `htmd` with the fixed configuration used for archived pages.
//! Scripts, styles, and interactive elements are dropped before conversion.
//! Elements with no Markdown form are unwrapped to their converted children
//! and comments are dropped while the DOM is walked, so text is never
//! rescanned for tags after conversion.

use htmd::HtmlToMarkdown;
use scraper::Html;

/// Elements removed entirely, content included
pub const REMOVED_ELEMENTS: &[&str] = &[
    "script", "style", "iframe", "button", "input", "select", "textarea",
];

/// Options for `MarkdownConverter`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Tag names whose elements are dropped before conversion
    pub remove_nodes: Vec<String>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            remove_nodes: REMOVED_ELEMENTS.iter().map(|tag| tag.to_string()).collect(),
        }
    }
}

/// Converts page HTML into Markdown
pub struct MarkdownConverter {
    converter: HtmlToMarkdown,
}

impl MarkdownConverter {
    /// Creates a converter with the default archiving options
    pub fn new() -> Self {
        Self::with_options(ConvertOptions::default())
    }

    pub fn with_options(options: ConvertOptions) -> Self {
        let mut builder = HtmlToMarkdown::builder();
        if !options.remove_nodes.is_empty() {
            builder = builder.skip_tags(options.remove_nodes.iter().map(String::as_str).collect());
        }

        Self {
            converter: builder.build(),
        }
    }

    /// Converts `html` to Markdown
    ///
    /// Conversion never fails: if `htmd` rejects the document, the plain text
    /// content of the parsed document is returned instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use doc_scribe::output::MarkdownConverter;
    ///
    /// let converter = MarkdownConverter::new();
    /// let markdown = converter.convert("<h1>Title</h1><script>track()</script>");
    /// assert!(markdown.contains("Title"));
    /// assert!(!markdown.contains("<h1>"));
    /// assert!(!markdown.contains("track()"));
    /// ```
    pub fn convert(&self, html: &str) -> String {
        match self.converter.convert(html) {
            Ok(markdown) => markdown,
            Err(e) => {
                tracing::warn!("Markdown conversion failed, falling back to plain text: {}", e);
                plain_text(html)
            }
        }
    }
}

impl Default for MarkdownConverter {
    fn default() -> Self {
        Self::new()
    }
}

fn plain_text(html: &str) -> String {
    let document = Html::parse_document(html);
    document.root_element().text().collect::<String>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_and_paragraph() {
        let converter = MarkdownConverter::new();
        let markdown = converter.convert("<h1>Guide</h1><p>Hello <strong>world</strong></p>");

        assert!(markdown.contains("Guide"));
        assert!(!markdown.contains("<h1>"));
        assert!(markdown.contains("Hello **world**"));
    }

    #[test]
    fn test_removed_elements_dropped_with_content() {
        let converter = MarkdownConverter::new();
        let html = r#"<html><head><style>body { color: red }</style></head><body>
            <p>Keep me</p>
            <script>alert("x")</script>
            <iframe src="https://ads.example.com">frame text</iframe>
            <button>Click</button>
            <input value="typed">
            <select><option>Choice</option></select>
            <textarea>Draft</textarea>
            </body></html>"#;
        let markdown = converter.convert(html);

        assert!(markdown.contains("Keep me"));
        for removed in ["color: red", "alert", "frame text", "Click", "Choice", "Draft"] {
            assert!(!markdown.contains(removed), "{} should be removed", removed);
        }
    }

    #[test]
    fn test_links_converted() {
        let converter = MarkdownConverter::new();
        let markdown = converter.convert(r#"<p><a href="/docs">Docs</a></p>"#);
        assert!(markdown.contains("[Docs](/docs)"));
    }

    #[test]
    fn test_deterministic() {
        let converter = MarkdownConverter::new();
        let html = "<h2>Install</h2><ul><li>one</li><li>two</li></ul>";
        assert_eq!(converter.convert(html), converter.convert(html));
    }

    #[test]
    fn test_unknown_elements_unwrapped() {
        let converter = MarkdownConverter::new();
        let markdown = converter.convert(
            r#"<p>a <span class="x">b</span> <abbr title="c">c</abbr></p><!-- hidden -->"#,
        );

        assert!(markdown.contains("a b"));
        assert!(markdown.contains('c'));
        for raw in ["<span", "</span>", "<abbr", "hidden"] {
            assert!(!markdown.contains(raw), "{} should not survive", raw);
        }
    }

    #[test]
    fn test_code_block_keeps_escaped_markup() {
        let converter = MarkdownConverter::new();
        let markdown =
            converter.convert("<pre><code>let v: Vec&lt;String&gt; = Vec::new();</code></pre>");

        assert!(markdown.contains("let v: Vec<String> = Vec::new();"));
        assert!(markdown.starts_with("```"));
    }

    #[test]
    fn test_inline_code_keeps_escaped_markup() {
        let converter = MarkdownConverter::new();
        let markdown = converter
            .convert(r#"<p>Wrap it in a <code>&lt;div class="x"&gt;</code> element</p>"#);

        assert!(markdown.contains(r#"`<div class="x">`"#));
        assert!(markdown.contains("element"));
    }

    #[test]
    fn test_escaped_text_outside_code_kept() {
        let converter = MarkdownConverter::new();
        let markdown = converter.convert("<p>Returns Option&lt;T&gt; when 1 &lt; 2</p>");

        assert!(markdown.contains("Option<T>"));
        assert!(markdown.contains("1 < 2"));
    }

    #[test]
    fn test_options_without_removed_nodes() {
        let converter = MarkdownConverter::with_options(ConvertOptions {
            remove_nodes: vec![],
        });
        let markdown = converter.convert("<p>Text</p><button>Kept</button>");
        assert!(markdown.contains("Text"));
        assert!(markdown.contains("Kept"));
    }

    #[test]
    fn test_default_options() {
        let options = ConvertOptions::default();
        assert_eq!(options.remove_nodes.len(), 7);
        assert!(options.remove_nodes.contains(&"textarea".to_string()));
    }

    #[test]
    fn test_plain_text_fallback() {
        assert_eq!(plain_text("<p>a<b>b</b></p>"), "ab");
    }
}
