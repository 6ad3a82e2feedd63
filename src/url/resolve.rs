use crate::UrlError;

/// Resolves an `href` found on a page into an absolute URL
///
/// # Resolution Rules
///
/// Applied in order, first match wins:
///
/// 1. `scheme://...` (any scheme, case-insensitive) is returned unchanged
/// 2. `//host/path` (protocol-relative) gets an `http:` prefix
/// 3. `/path` (root-relative) is appended to `base_url`
/// 4. Anything else is relative to `dirname(current_url)`:
///    - the last path segment of `current_url` is dropped; a trailing `/`
///      does not count as a segment, so `http://x.com/docs/` has dirname
///      `http://x.com`
///    - each leading `../` pops one more directory (never above the origin
///      root)
///    - the rest of `href`, `./` included, is appended after a `/`
///
/// This is a pure string transformation: no percent-encoding or other
/// canonicalization is applied, so the result can be compared literally
/// against the seed URL.
///
/// # Arguments
///
/// * `href` - The raw attribute value
/// * `current_url` - Absolute URL of the page the link was found on
/// * `base_url` - `scheme://host[:port]` of the crawl
///
/// # Returns
///
/// * `Ok(String)` - The absolute URL
/// * `Err(UrlError)` - `current_url` or `base_url` was needed but is not an
///   absolute `scheme://host` URL
///
/// # Examples
///
/// ```
/// use doc_scribe::url::resolve;
///
/// assert_eq!(resolve("/a/b", "http://x.com/c/d", "http://x.com").unwrap(), "http://x.com/a/b");
/// assert_eq!(resolve("../e", "http://x.com/c/d/f", "http://x.com").unwrap(), "http://x.com/c/e");
/// assert_eq!(resolve("//cdn.com/x", "http://x.com/", "http://x.com").unwrap(), "http://cdn.com/x");
/// ```
pub fn resolve(href: &str, current_url: &str, base_url: &str) -> Result<String, UrlError> {
    // Rule 1: already absolute
    if has_scheme(href) {
        return Ok(href.to_string());
    }

    // Rule 2: protocol-relative
    if href.starts_with("//") {
        return Ok(format!("http:{}", href));
    }

    // Rule 3: root-relative
    if href.starts_with('/') {
        let (origin, _) = split_origin(base_url)?;
        return Ok(format!("{}{}", origin, href));
    }

    // Rule 4: relative to the current page's directory
    let (origin, rest) = split_origin(current_url)?;
    let path = rest
        .find(|c| c == '?' || c == '#')
        .map_or(rest, |end| &rest[..end]);

    // dirname: drop the last non-empty segment
    let mut directories: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    directories.pop();

    let mut remaining = href;
    while let Some(stripped) = remaining.strip_prefix("../") {
        directories.pop();
        remaining = stripped;
    }

    let mut resolved = String::with_capacity(current_url.len() + href.len());
    resolved.push_str(origin);
    resolved.push('/');
    for directory in directories {
        resolved.push_str(directory);
        resolved.push('/');
    }
    resolved.push_str(remaining);

    Ok(resolved)
}

/// Returns the literal `scheme://authority` prefix of an absolute URL
///
/// Nothing is normalized: the host keeps its case and an explicit port is
/// kept even when it is the scheme default, so links resolved against the
/// result compare literally with the seed URL it was taken from.
///
/// # Examples
///
/// ```
/// use doc_scribe::url::origin_of;
///
/// assert_eq!(origin_of("http://Example.com/docs/").unwrap(), "http://Example.com");
/// assert_eq!(origin_of("http://127.0.0.1:4000").unwrap(), "http://127.0.0.1:4000");
/// ```
pub fn origin_of(url: &str) -> Result<&str, UrlError> {
    split_origin(url).map(|(origin, _)| origin)
}

/// Returns true if `href` begins with a scheme token followed by `://`
fn has_scheme(href: &str) -> bool {
    href.split_once("://")
        .map_or(false, |(scheme, _)| is_scheme_token(scheme))
}

/// Scheme tokens: a letter followed by letters, digits, `+`, `-` or `.`
fn is_scheme_token(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    }
}

/// Splits an absolute URL into `scheme://authority` and everything after it
fn split_origin(url: &str) -> Result<(&str, &str), UrlError> {
    let scheme_end = url
        .find("://")
        .filter(|&end| is_scheme_token(&url[..end]))
        .ok_or_else(|| UrlError::Malformed(format!("'{}' is not an absolute URL", url)))?;

    let authority_start = scheme_end + 3;
    let after_scheme = &url[authority_start..];
    let authority_len = after_scheme
        .find(|c| matches!(c, '/' | '?' | '#'))
        .unwrap_or(after_scheme.len());

    if authority_len == 0 {
        return Err(UrlError::MissingDomain);
    }

    Ok(url.split_at(authority_start + authority_len))
}
