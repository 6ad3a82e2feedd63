//! HTML parser for extracting links
//!
//! This module handles:
//! - Enumerating `<a>` elements in document order (`HtmlParser`)
//! - Filtering their hrefs down to in-scope absolute URLs (`extract_links`)

use crate::state::CrawlSession;
use crate::url::{classify_link, resolve, LinkScope};
use scraper::{Html, Selector};

/// An anchor element as seen by the link extractor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    /// Raw `href` attribute, if present
    pub href: Option<String>,
}

impl Anchor {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
        }
    }
}

/// Lists the anchors of an HTML document in document order
///
/// Implementations must tolerate malformed markup and never fail.
pub trait HtmlParser: Send + Sync {
    fn anchors(&self, html: &str) -> Vec<Anchor>;
}

/// `HtmlParser` backed by `scraper` (html5ever)
#[derive(Debug, Clone, Copy, Default)]
pub struct ScraperParser;

impl HtmlParser for ScraperParser {
    fn anchors(&self, html: &str) -> Vec<Anchor> {
        let document = Html::parse_document(html);

        let Ok(selector) = Selector::parse("a") else {
            return Vec::new();
        };

        document
            .select(&selector)
            .map(|element| Anchor {
                href: element.value().attr("href").map(str::to_string),
            })
            .collect()
    }
}

/// Extracts the in-scope links of a page
///
/// # Link Extraction Rules
///
/// **Skip:**
/// - Anchors without an `href`, or with an empty one
/// - `javascript:` hrefs
/// - Fragment-only hrefs (`#top`)
/// - Hrefs the resolver rejects
/// - Links on another domain
/// - Links outside the seed when child pages only is set
///
/// Output keeps document order. Duplicates are not removed here.
///
/// # Arguments
///
/// * `parser` - Anchor source for the page HTML
/// * `html` - The page body
/// * `current_url` - The URL the page was fetched from
/// * `session` - Crawl settings providing the base URL and scope
pub fn extract_links<P: HtmlParser + ?Sized>(
    parser: &P,
    html: &str,
    current_url: &str,
    session: &CrawlSession,
) -> Vec<String> {
    let anchors = parser.anchors(html);
    tracing::debug!("Found {} anchors on {}", anchors.len(), current_url);

    let mut links = Vec::new();

    for href in anchors.iter().filter_map(|anchor| anchor.href.as_deref()) {
        let href = href.trim();
        if href.is_empty() || href.starts_with("javascript:") || href.starts_with('#') {
            continue;
        }

        let absolute = match resolve(href, current_url, session.base_url()) {
            Ok(absolute) => absolute,
            Err(e) => {
                tracing::debug!("Skipping unresolvable link {:?}: {}", href, e);
                continue;
            }
        };

        match classify_link(
            &absolute,
            session.base_domain(),
            session.seed_url(),
            session.child_pages_only(),
            session.child_scope(),
        ) {
            LinkScope::InScope => {
                if session.child_pages_only() {
                    tracing::debug!("Adding child page: {}", absolute);
                }
                links.push(absolute);
            }
            LinkScope::External => {
                tracing::debug!("Skipping external link: {}", absolute);
            }
            LinkScope::NotChild => {
                tracing::debug!("Skipping non-child page: {}", absolute);
            }
        }
    }

    links
}
