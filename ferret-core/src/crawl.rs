use ferret_crawler::error::CrawlError;
use ferret_crawler::{Crawler, SiteIndex};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};
use url::Url;

/// Options for configuring a crawl operation
pub struct CrawlOptions {
    /// Seed address the traversal starts from.
    pub seed: String,
    /// Scope prefix discovered links must start with; defaults to the seed.
    pub scope: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    pub show_progress_bar: bool,
}

/// Callback for reporting each address as it is crawled
pub type CrawlProgressCallback = Arc<dyn Fn(String) + Send + Sync>;

/// What a completed crawl session produced.
#[derive(Debug)]
pub struct CrawlOutcome {
    pub index: SiteIndex,
    /// Addresses submitted for processing, including failed fetches.
    pub visited: usize,
    pub duration: Duration,
}

impl CrawlOutcome {
    /// Addresses that were visited but never made it into the index.
    pub fn fetch_failures(&self) -> usize {
        self.visited.saturating_sub(self.index.len())
    }
}

/// Extract the path component from a URL
pub fn extract_url_path(url: &str) -> String {
    Url::parse(url)
        .ok()
        .map(|u| {
            let path = u.path().to_string();
            if path.is_empty() { "/".to_string() } else { path }
        })
        .unwrap_or_else(|| url.to_string())
}

/// Execute a crawl with the given options
/// Returns the populated index along with session stats
pub async fn execute_crawl(
    options: CrawlOptions,
    progress_callback: Option<CrawlProgressCallback>,
) -> Result<CrawlOutcome, CrawlError> {
    let CrawlOptions {
        seed,
        scope,
        timeout_secs,
        show_progress_bar,
    } = options;

    // The seed must at least be a parseable URL; everything downstream is
    // fault-isolated.
    Url::parse(&seed).map_err(|e| CrawlError::InvalidUrl(format!("{}: {}", seed, e)))?;

    // Set up single progress bar for overall crawl progress (only if enabled)
    let progress_bar = if show_progress_bar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        pb.set_message("Starting crawl...");
        Some(Arc::new(pb))
    } else {
        None
    };

    // Counter for tracking processed addresses
    let processed_count = Arc::new(AtomicUsize::new(0));

    let internal_callback: ferret_crawler::crawler::ProgressCallback = {
        let pb_clone = progress_bar.clone();
        let count_clone = processed_count.clone();
        let external = progress_callback.clone();
        Arc::new(move |address: String| {
            let count = count_clone.fetch_add(1, Ordering::Relaxed) + 1;
            if let Some(ref pb) = pb_clone {
                pb.set_message(format!("Crawling... {} URLs processed", count));
                pb.tick();
            }
            if let Some(ref callback) = external {
                callback(address);
            }
        })
    };

    let start = Instant::now();
    let mut crawler = Crawler::with_timeout(timeout_secs).with_progress_callback(internal_callback);
    crawler.visit(&seed, scope.as_deref()).await;
    let duration = start.elapsed();

    // Finish progress bar (only if enabled)
    if let Some(ref pb) = progress_bar {
        let total = processed_count.load(Ordering::Relaxed);
        pb.finish_with_message(format!("Crawl complete! {} URLs processed", total));
    }

    let visited = crawler.visited_count();
    Ok(CrawlOutcome {
        index: crawler.into_index(),
        visited,
        duration,
    })
}
