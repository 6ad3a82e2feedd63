//! State module for a crawl session
//!
//! # Components
//!
//! - `CrawlSession`: Immutable per-invocation settings (seed, base URL, domain, limits)
//! - `CrawlState`: Lifecycle of the crawl loop (idle, running, completed, interrupted)

mod crawl_state;
mod session;

// Re-export main types
pub use crawl_state::CrawlState;
pub use session::CrawlSession;
