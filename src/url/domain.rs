use url::Url;

/// Extracts the domain from a URL
///
/// This function retrieves the host portion of a URL and converts it to lowercase.
/// If the URL has no host, it returns None.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use doc_scribe::url::extract_domain;
///
/// let url = Url::parse("https://EXAMPLE.COM/path").unwrap();
/// assert_eq!(extract_domain(&url), Some("example.com".to_string()));
/// ```
pub fn extract_domain(url: &Url) -> Option<String> {
    url.host_str()
        .filter(|h| !h.is_empty())
        .map(|h| h.to_lowercase())
}

/// Checks whether `url` lives on `base_domain`
///
/// Hosts are compared lowercase on both sides; ports are ignored. A URL that
/// does not parse, or has no host, is never same-domain.
///
/// # Examples
///
/// ```
/// use doc_scribe::url::same_domain;
///
/// assert!(same_domain("http://Example.com/page", "example.com"));
/// assert!(!same_domain("http://other.com/page", "example.com"));
/// assert!(!same_domain("not a url", "example.com"));
/// ```
pub fn same_domain(url: &str, base_domain: &str) -> bool {
    Url::parse(url)
        .ok()
        .and_then(|parsed| extract_domain(&parsed))
        .map_or(false, |host| host == base_domain.to_lowercase())
}
