//! doc-scribe main entry point
//!
//! This is the command-line interface for the doc-scribe documentation archiver.

use anyhow::{Context, Result};
use clap::Parser;
use doc_scribe::config::{load_config, validate, validate_seed_url, Config, EnqueuePolicy};
use doc_scribe::crawler::{scrape, Coordinator, HttpFetcher};
use doc_scribe::output::print_report;
use doc_scribe::state::CrawlSession;
use doc_scribe::url::ChildScope;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// doc-scribe: A polite documentation archiver
///
/// doc-scribe crawls a single site starting from a seed URL, one request at
/// a time with a fixed delay, and saves every page it reaches as Markdown.
#[derive(Parser, Debug)]
#[command(name = "doc-scribe")]
#[command(version)]
#[command(about = "A polite documentation archiver", long_about = None)]
struct Cli {
    /// URL to start crawling from
    #[arg(value_name = "URL")]
    seed_url: String,

    /// Directory the Markdown files are written to
    #[arg(short, long, value_name = "DIR")]
    output: Option<String>,

    /// Maximum number of pages to save
    #[arg(short, long, value_name = "N")]
    max_pages: Option<u32>,

    /// Only follow links that start with the seed URL
    #[arg(short, long)]
    child_pages_only: bool,

    /// Path to TOML configuration file
    #[arg(long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Delay between requests in milliseconds
    #[arg(long, value_name = "MS")]
    delay_ms: Option<u64>,

    /// How child pages are matched against the seed URL
    #[arg(long, value_enum, value_name = "SCOPE")]
    child_scope: Option<ChildScope>,

    /// Do not queue a URL that is already waiting in the queue
    #[arg(long)]
    dedup_queue: bool,

    /// Validate settings and show what would be crawled without crawling
    #[arg(long, conflicts_with = "single")]
    dry_run: bool,

    /// Convert only the seed URL and print the Markdown to stdout
    #[arg(long, conflicts_with = "dry_run")]
    single: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    /// Applies command-line overrides on top of the file configuration
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(output) = &self.output {
            config.output.directory = output.clone();
        }
        if let Some(max_pages) = self.max_pages {
            config.crawler.max_pages = max_pages;
        }
        if self.child_pages_only {
            config.crawler.child_pages_only = true;
        }
        if let Some(delay_ms) = self.delay_ms {
            config.crawler.delay_ms = delay_ms;
        }
        if let Some(child_scope) = self.child_scope {
            config.crawler.child_scope = child_scope;
        }
        if self.dedup_queue {
            config.crawler.enqueue_policy = EnqueuePolicy::DedupOnEnqueue;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?
        }
        None => Config::default(),
    };
    cli.apply_overrides(&mut config);
    validate(&config).context("Invalid configuration")?;

    if cli.single {
        return handle_single(&config, &cli.seed_url).await;
    }

    let session = CrawlSession::from_config(&cli.seed_url, &config)
        .with_context(|| format!("Invalid seed URL: {}", cli.seed_url))?;

    if cli.dry_run {
        handle_dry_run(&config, &session);
        return Ok(());
    }

    handle_crawl(&config, session).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("doc_scribe=info,warn"),
            1 => EnvFilter::new("doc_scribe=debug,info"),
            2 => EnvFilter::new("doc_scribe=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: shows the resolved settings
fn handle_dry_run(config: &Config, session: &CrawlSession) {
    println!("=== doc-scribe Dry Run ===\n");

    println!("Seed:");
    println!("  URL: {}", session.seed_url());
    println!("  Base URL: {}", session.base_url());
    println!("  Domain: {}", session.base_domain());

    println!("\nCrawler:");
    println!("  Max pages: {}", session.max_pages());
    println!("  Child pages only: {}", session.child_pages_only());
    if session.child_pages_only() {
        println!("  Child scope: {:?}", session.child_scope());
    }
    println!("  Delay: {}ms", session.delay().as_millis());
    println!("  Enqueue policy: {:?}", session.enqueue_policy());

    println!("\nUser Agent:");
    println!("  Name: {}", config.user_agent.crawler_name);
    println!("  Version: {}", config.user_agent.crawler_version);
    println!("  Request timeout: {}s", config.user_agent.request_timeout_secs);

    println!("\nOutput:");
    println!("  Directory: {}", session.output_dir().display());

    println!("\n✓ Configuration is valid");
}

/// Handles the --single mode: prints one page as Markdown
async fn handle_single(config: &Config, seed_url: &str) -> Result<()> {
    let url = validate_seed_url(seed_url)
        .with_context(|| format!("Invalid seed URL: {}", seed_url))?;

    let fetcher =
        HttpFetcher::from_config(&config.user_agent).context("Failed to build HTTP client")?;

    tracing::info!("Scraping: {}", url);
    let markdown = scrape(&fetcher, seed_url).await?;
    println!("{}", markdown);

    Ok(())
}

/// Handles the main crawl operation
async fn handle_crawl(config: &Config, session: CrawlSession) -> Result<()> {
    tracing::info!("Base URL: {}", session.base_url());
    tracing::info!("Base domain: {}", session.base_domain());
    tracing::info!("Output directory: {}", session.output_dir().display());
    tracing::info!(
        "Max pages: {}, child pages only: {}, delay: {}ms",
        session.max_pages(),
        session.child_pages_only(),
        session.delay().as_millis()
    );

    let mut coordinator =
        Coordinator::new(session, &config.user_agent).context("Failed to build HTTP client")?;

    let cancel = coordinator.cancel_flag();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupt received, finishing current page");
            cancel.cancel();
        }
    });

    let report = coordinator.run().await.context("Crawl failed")?;
    print_report(&report);

    Ok(())
}
