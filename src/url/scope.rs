use serde::Deserialize;

/// How a discovered URL is compared against the seed URL in child-pages-only mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ChildScope {
    /// Literal string prefix: `http://x.com/doc` also admits `http://x.com/docs`
    #[default]
    Prefix,
    /// Prefix that must end on a path boundary (`/`, `?`, `#`, or end of URL)
    PathSegment,
}

impl ChildScope {
    /// Returns true if `url` is a child of `seed_url` under this scope
    pub fn contains(&self, url: &str, seed_url: &str) -> bool {
        match self {
            Self::Prefix => is_child_page(url, seed_url),
            Self::PathSegment => is_child_on_boundary(url, seed_url),
        }
    }
}

/// Checks if `url` is a child page of `seed_url`
///
/// This is a literal prefix test and is not path-segment aware.
///
/// # Examples
///
/// ```
/// use doc_scribe::url::is_child_page;
///
/// assert!(is_child_page("http://x.com/docs/guide", "http://x.com/docs/"));
/// assert!(!is_child_page("http://x.com/blog/post", "http://x.com/docs/"));
/// // Prefix match, not segment match
/// assert!(is_child_page("http://x.com/docs-old/a", "http://x.com/docs"));
/// ```
pub fn is_child_page(url: &str, seed_url: &str) -> bool {
    url.starts_with(seed_url)
}

fn is_child_on_boundary(url: &str, seed_url: &str) -> bool {
    let Some(rest) = url.strip_prefix(seed_url) else {
        return false;
    };

    seed_url.ends_with('/')
        || rest.is_empty()
        || rest.starts_with('/')
        || rest.starts_with('?')
        || rest.starts_with('#')
}
