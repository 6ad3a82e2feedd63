//! Configuration module for doc-scribe
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every key is optional; command-line flags override whatever the file sets.
//!
//! # Example
//!
//! ```no_run
//! use doc_scribe::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("scribe.toml")).unwrap();
//! println!("Crawler will save at most {} pages", config.crawler.max_pages);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, EnqueuePolicy, OutputConfig, UserAgentConfig};

// Re-export parser and validation functions
pub use parser::{load_config, parse_config};
pub use validation::{validate, validate_seed_url};
