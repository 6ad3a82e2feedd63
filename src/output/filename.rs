//! Output filename derivation and collision handling

use crate::output::fs::FileSystem;
use std::path::Path;

/// Characters that are replaced with `_` in derived filenames
const INVALID_FILENAME_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Filename used when a URL has no path
const INDEX_NAME: &str = "index";

const MARKDOWN_EXTENSION: &str = ".md";

/// Derives the candidate `.md` filename for a URL, without checking for collisions
///
/// # Derivation Steps
///
/// 1. Strip the `scheme://host/` prefix
/// 2. Strip everything from the first `?` or `#`
/// 3. Replace `/ \ : * ? " < > |` with `_`
/// 4. An empty result becomes `index`
/// 5. Append `.md` unless the name already ends in `.md` (any case)
///
/// # Examples
///
/// ```
/// use doc_scribe::output::filename_for_url;
///
/// assert_eq!(filename_for_url("https://x.com/docs/guide?v=2#intro"), "docs_guide.md");
/// assert_eq!(filename_for_url("https://x.com/"), "index.md");
/// assert_eq!(filename_for_url("https://x.com/README.MD"), "README.MD");
/// ```
pub fn filename_for_url(url: &str) -> String {
    let path = strip_origin(url);
    let path = path
        .find(|c| c == '?' || c == '#')
        .map_or(path, |end| &path[..end]);

    let mut name: String = path
        .chars()
        .map(|c| if INVALID_FILENAME_CHARS.contains(&c) { '_' } else { c })
        .collect();

    if name.is_empty() {
        name.push_str(INDEX_NAME);
    }

    if !name.to_ascii_lowercase().ends_with(MARKDOWN_EXTENSION) {
        name.push_str(MARKDOWN_EXTENSION);
    }

    name
}

/// Picks a filename for `url` that does not exist in `output_dir`
///
/// On collision, `_1`, `_2`, … is inserted before the `.md` extension of the
/// candidate until an unused name is found.
///
/// # Arguments
///
/// * `url` - The page URL
/// * `output_dir` - Directory the file will be written to
/// * `fs` - Filesystem used to test for existing files
///
/// # Returns
///
/// A bare filename (no directory component) unique in `output_dir` at call time
pub fn allocate_filename<S: FileSystem + ?Sized>(url: &str, output_dir: &Path, fs: &S) -> String {
    let candidate = filename_for_url(url);
    if !fs.exists(&output_dir.join(&candidate)) {
        return candidate;
    }

    // The candidate always ends in an ASCII ".md" (any case)
    let base = &candidate[..candidate.len() - MARKDOWN_EXTENSION.len()];
    let mut counter: u32 = 1;
    loop {
        let unique = format!("{}_{}{}", base, counter, MARKDOWN_EXTENSION);
        if !fs.exists(&output_dir.join(&unique)) {
            return unique;
        }
        counter += 1;
    }
}

/// Removes a leading `scheme://authority` and the `/` that follows it
fn strip_origin(url: &str) -> &str {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url;
    };

    let valid_scheme = !scheme.is_empty()
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    if !valid_scheme {
        return url;
    }

    let authority_end = rest
        .find(|c| matches!(c, '/' | '?' | '#'))
        .unwrap_or(rest.len());
    let after = &rest[authority_end..];
    after.strip_prefix('/').unwrap_or(after)
}
