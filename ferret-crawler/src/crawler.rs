use crate::extract::{HtmlExtractor, MarkupExtractor};
use crate::fetch::{FetchProvider, HttpFetcher};
use crate::index::SiteIndex;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};
use url::Url;

/// Callback invoked with each address as it is submitted for processing.
pub type ProgressCallback = Arc<dyn Fn(String) + Send + Sync>;

/// Scoped depth-first traversal engine.
///
/// Owns the visited set and the site index for one crawl session. Each
/// address goes through the same steps: skip if already visited, mark
/// visited before the fetch so a cyclic re-discovery cannot re-enter,
/// fetch, extract, index, then follow in-scope links in document order.
/// A fetch fault is logged and ends processing for that address only.
///
/// Addresses are exact strings: query-string or fragment variants of the
/// same resource are visited separately, so a fetch surface that mints
/// fresh query strings can grow the traversal without bound. Known
/// limitation, see README.
pub struct Crawler<F = HttpFetcher, E = HtmlExtractor> {
    fetcher: F,
    extractor: E,
    visited: HashSet<String>,
    index: SiteIndex,
    progress_callback: Option<ProgressCallback>,
}

impl Crawler<HttpFetcher, HtmlExtractor> {
    pub fn new() -> Self {
        Self::with_parts(HttpFetcher::new(), HtmlExtractor::new())
    }

    pub fn with_timeout(timeout_secs: u64) -> Self {
        Self::with_parts(HttpFetcher::with_timeout(timeout_secs), HtmlExtractor::new())
    }
}

impl Default for Crawler<HttpFetcher, HtmlExtractor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FetchProvider, E: MarkupExtractor> Crawler<F, E> {
    /// Build an engine around explicit fetch/extract providers.
    pub fn with_parts(fetcher: F, extractor: E) -> Self {
        Self {
            fetcher,
            extractor,
            visited: HashSet::new(),
            index: SiteIndex::new(),
            progress_callback: None,
        }
    }

    pub fn with_progress_callback(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    /// Visit `seed` and every reachable address that starts with the scope
    /// base, depth-first in link-discovery order. The scope base defaults
    /// to the seed itself and is fixed for the whole traversal.
    ///
    /// Never fails: per-address faults are logged and isolated, and an
    /// already-visited seed is a no-op.
    pub async fn visit(&mut self, seed: &str, scope: Option<&str>) {
        let scope = scope.unwrap_or(seed).to_string();
        info!("Starting crawl of {} (scope: {})", seed, scope);

        // Explicit worklist instead of call-stack recursion; links are
        // pushed in reverse so pop order matches document order.
        let mut pending: Vec<String> = vec![seed.to_string()];

        while let Some(address) = pending.pop() {
            if !self.visited.insert(address.clone()) {
                continue;
            }

            if let Some(ref callback) = self.progress_callback {
                callback(address.clone());
            }

            let body = match self.fetcher.fetch(&address).await {
                Ok(body) => body,
                Err(e) => {
                    warn!("Crawl error for {}: {}", address, e);
                    continue;
                }
            };

            let page = self.extractor.extract(&body);
            self.index.put(&address, page.text);

            let mut discovered = Vec::new();
            for href in &page.links {
                if href.is_empty() {
                    continue;
                }
                // Raw references resolve against the scope base, not the
                // current page.
                let Some(resolved) = resolve_link(&scope, href) else {
                    continue;
                };
                if !resolved.starts_with(scope.as_str()) {
                    debug!("Out of scope, skipping {}", resolved);
                    continue;
                }
                if !self.visited.contains(&resolved) {
                    discovered.push(resolved);
                }
            }

            for address in discovered.into_iter().rev() {
                pending.push(address);
            }
        }

        info!(
            "Crawl complete. Visited {} addresses, indexed {} pages",
            self.visited.len(),
            self.index.len()
        );
    }

    pub fn index(&self) -> &SiteIndex {
        &self.index
    }

    pub fn into_index(self) -> SiteIndex {
        self.index
    }

    pub fn visited(&self) -> &HashSet<String> {
        &self.visited
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}

/// Resolve a possibly-relative reference against a base address. Malformed
/// input degrades to `None` rather than raising; scheme-relative,
/// path-relative and fragment-only references all resolve. No
/// normalization beyond the resolution itself.
fn resolve_link(base: &str, href: &str) -> Option<String> {
    let base_url = Url::parse(base).ok()?;
    let resolved = base_url.join(href).ok()?;
    Some(resolved.to_string())
}
