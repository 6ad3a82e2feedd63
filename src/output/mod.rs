//! Output module for archived pages
//!
//! This module handles:
//! - Converting page HTML into Markdown
//! - Deriving unique filenames for pages
//! - Writing pages into the output directory
//! - Summarizing a finished crawl

mod filename;
mod fs;
mod markdown;
pub mod stats;

pub use filename::{allocate_filename, filename_for_url};
pub use fs::{FileSystem, LocalFileSystem, OutputError, OutputResult};
pub use markdown::{ConvertOptions, MarkdownConverter, REMOVED_ELEMENTS};
pub use stats::{format_report, print_report, CrawlReport};

use crate::ScribeError;
use std::path::Path;

/// A page that has been converted and written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult {
    /// URL the page was fetched from
    pub source_url: String,

    /// Converted Markdown body
    pub markdown: String,

    /// Filename inside the output directory
    pub saved_filename: String,
}

/// Creates the output directory if it does not exist
///
/// Failure here is fatal to the crawl.
pub fn prepare_output_dir<S: FileSystem + ?Sized>(fs: &S, dir: &Path) -> Result<(), ScribeError> {
    fs.create_dir_all(dir).map_err(|source| ScribeError::OutputDir {
        path: dir.display().to_string(),
        source,
    })
}

/// Allocates a unique filename for `url` and writes `markdown` under `output_dir`
///
/// # Returns
///
/// * `Ok(PageResult)` - The page was written
/// * `Err(OutputError)` - The file could not be written
pub fn save_page<S: FileSystem + ?Sized>(
    fs: &S,
    output_dir: &Path,
    url: &str,
    markdown: String,
) -> OutputResult<PageResult> {
    let saved_filename = allocate_filename(url, output_dir, fs);
    let path = output_dir.join(&saved_filename);

    fs.write(&path, &markdown).map_err(|source| OutputError::Write {
        path: path.display().to_string(),
        source,
    })?;

    tracing::info!("Saved: {}", path.display());

    Ok(PageResult {
        source_url: url.to_string(),
        markdown,
        saved_filename,
    })
}
