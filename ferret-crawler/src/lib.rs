pub mod crawler;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod index;

pub use crawler::Crawler;
pub use error::CrawlError;
pub use extract::{HtmlExtractor, MarkupExtractor, PageContent};
pub use fetch::{FetchProvider, HttpFetcher};
pub use index::SiteIndex;
