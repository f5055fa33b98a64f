// Include handlers module directly from handlers.rs
#[path = "handlers.rs"]
pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use handlers::{parse_seed, render_search_report};

// Re-export crawl functionality from ferret-core
pub use ferret_core::crawl::{CrawlOptions, CrawlOutcome, execute_crawl, extract_url_path};
pub use ferret_core::report::ReportFormat;
pub use ferret_core::search::search;
