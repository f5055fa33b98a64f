// Report generation from crawl and search results

use crate::crawl::{CrawlOutcome, extract_url_path};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use url::Url;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            _ => None,
        }
    }
}

/// Render search results: a header plus one line per match, or a single
/// no-results notice.
pub fn generate_search_report(results: &[String]) -> String {
    if results.is_empty() {
        return "No results found.\n".to_string();
    }

    let mut report = String::new();
    report.push_str("Search results:\n");
    for address in results {
        report.push_str(&format!("- {}\n", address));
    }
    report
}

pub fn generate_json_search_report(
    keyword: &str,
    results: &[String],
) -> Result<String, serde_json::Error> {
    let json_report = serde_json::json!({
        "report": {
            "metadata": {
                "generator": "Ferret",
                "version": env!("CARGO_PKG_VERSION"),
                "generated_at": chrono::Utc::now().to_rfc3339(),
                "format": "json"
            },
            "query": {
                "keyword": keyword
            },
            "summary": {
                "total_matches": results.len()
            },
            "matches": results
        }
    });

    serde_json::to_string_pretty(&json_report)
}

/// Generate a crawl report from a completed session
pub fn generate_crawl_report(outcome: &CrawlOutcome) -> String {
    let mut report = String::new();
    report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");
    report.push_str("# Summary:\n");
    report.push_str(&format!("  Pages indexed: {}\n", outcome.index.len()));
    report.push_str(&format!("  Addresses visited: {}\n", outcome.visited));
    report.push_str(&format!("  Fetch failures: {}\n", outcome.fetch_failures()));
    report.push_str(&format!(
        "  Duration: {:.1}s\n",
        outcome.duration.as_secs_f64()
    ));

    report.push_str("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");

    // Group indexed addresses by host
    let mut by_host: HashMap<String, Vec<&str>> = HashMap::new();
    for (address, _) in outcome.index.entries() {
        let host = Url::parse(address)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .unwrap_or_else(|| "unknown".to_string());
        by_host.entry(host).or_default().push(address);
    }

    for (host, addresses) in by_host.iter() {
        report.push_str(&format!("## {}\n", host));
        report.push_str(&format!("  {} pages indexed\n\n", addresses.len()));

        for address in addresses {
            let path = extract_url_path(address);
            let text_len = outcome.index.get(address).map(str::len).unwrap_or(0);
            report.push_str(&format!("  {} ({} bytes of text)\n", path, text_len));
        }
        report.push('\n');
    }

    report
}

pub fn save_report(content: &str, path: &Path) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())
}
