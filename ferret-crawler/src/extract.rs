use scraper::{Html, Selector};

/// Visible text and raw hyperlink targets pulled from one page.
#[derive(Debug, Clone)]
pub struct PageContent {
    pub text: String,
    /// Href values exactly as they appear in the markup, in document order.
    /// Resolution against the scope base happens in the traversal engine.
    pub links: Vec<String>,
}

/// Capability interface for turning raw markup into text and link targets.
///
/// Implementations are expected to degrade gracefully on malformed input
/// (empty text, empty links) rather than fail.
pub trait MarkupExtractor {
    fn extract(&self, markup: &str) -> PageContent;
}

/// Production extractor backed by the scraper HTML parser.
#[derive(Debug, Clone, Default)]
pub struct HtmlExtractor;

impl HtmlExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl MarkupExtractor for HtmlExtractor {
    fn extract(&self, markup: &str) -> PageContent {
        let document = Html::parse_document(markup);

        let text = document
            .root_element()
            .text()
            .map(str::trim)
            .filter(|chunk| !chunk.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        let link_selector = Selector::parse("a[href]").unwrap();
        let links = document
            .select(&link_selector)
            .filter_map(|element| element.value().attr("href"))
            .map(str::to_string)
            .collect();

        PageContent { text, links }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_text_and_links() {
        let html = r#"<html><body>
            <h1>Welcome!</h1>
            <a href="/about">About Us</a>
            <a href="https://www.external.com">External Link</a>
        </body></html>"#;

        let page = HtmlExtractor::new().extract(html);

        assert!(page.text.contains("Welcome!"));
        assert!(page.text.contains("About Us"));
        assert_eq!(page.links, vec!["/about", "https://www.external.com"]);
    }

    #[test]
    fn test_extract_keeps_document_order() {
        let html = r#"<a href="/b">b</a><a href="/a">a</a><a href="/c">c</a>"#;
        let page = HtmlExtractor::new().extract(html);
        assert_eq!(page.links, vec!["/b", "/a", "/c"]);
    }

    #[test]
    fn test_extract_malformed_markup_degrades() {
        let page = HtmlExtractor::new().extract("<a href='/x'><<<not html");
        assert_eq!(page.links, vec!["/x"]);
    }

    #[test]
    fn test_extract_empty_href_is_kept_raw() {
        // The engine decides what to skip; the extractor reports verbatim.
        let page = HtmlExtractor::new().extract(r#"<a href="">empty</a>"#);
        assert_eq!(page.links, vec![""]);
    }

    #[test]
    fn test_extract_no_links() {
        let page = HtmlExtractor::new().extract("<html><body><p>Plain page</p></body></html>");
        assert!(page.links.is_empty());
        assert_eq!(page.text, "Plain page");
    }
}
