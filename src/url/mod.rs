//! URL handling module for doc-scribe
//!
//! This module provides href resolution, domain extraction, and the
//! same-domain and child-page scope tests used by the link extractor.

mod domain;
mod resolve;
mod scope;

// Re-export main functions
pub use domain::{extract_domain, same_domain};
pub use resolve::{origin_of, resolve};
pub use scope::{is_child_page, ChildScope};

/// Where a resolved link stands relative to the crawl
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkScope {
    /// Same domain, and a child of the seed when that is required
    InScope,
    /// Another host
    External,
    /// Same domain but outside the seed while child pages only is set
    NotChild,
}

/// Classifies a resolved link against the crawl's domain and seed
///
/// A link is in scope when it is on `base_domain` and, if `child_pages_only`
/// is set, it is a child of `seed_url` under `child_scope`.
pub fn classify_link(
    url: &str,
    base_domain: &str,
    seed_url: &str,
    child_pages_only: bool,
    child_scope: ChildScope,
) -> LinkScope {
    if !same_domain(url, base_domain) {
        LinkScope::External
    } else if child_pages_only && !child_scope.contains(url, seed_url) {
        LinkScope::NotChild
    } else {
        LinkScope::InScope
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: &str = "http://x.com/docs/";

    #[test]
    fn test_external_link_never_in_scope() {
        for child_pages_only in [false, true] {
            assert_eq!(
                classify_link(
                    "http://other.com/docs/guide",
                    "x.com",
                    SEED,
                    child_pages_only,
                    ChildScope::Prefix
                ),
                LinkScope::External
            );
        }
    }

    #[test]
    fn test_same_domain_without_child_filter() {
        assert_eq!(
            classify_link("http://x.com/blog/post", "x.com", SEED, false, ChildScope::Prefix),
            LinkScope::InScope
        );
    }

    #[test]
    fn test_child_filter() {
        assert_eq!(
            classify_link("http://x.com/docs/guide", "x.com", SEED, true, ChildScope::Prefix),
            LinkScope::InScope
        );
        assert_eq!(
            classify_link("http://x.com/blog/post", "x.com", SEED, true, ChildScope::Prefix),
            LinkScope::NotChild
        );
    }
}
