// Tests for report generation

use ferret_core::SiteIndex;
use ferret_core::crawl::CrawlOutcome;
use ferret_core::report::{
    ReportFormat, generate_crawl_report, generate_json_search_report, generate_search_report,
    save_report,
};
use std::time::Duration;

#[test]
fn test_report_format_from_str() {
    assert!(matches!(ReportFormat::from_str("text"), Some(ReportFormat::Text)));
    assert!(matches!(ReportFormat::from_str("json"), Some(ReportFormat::Json)));
    assert!(matches!(ReportFormat::from_str("JSON"), Some(ReportFormat::Json)));
    assert!(ReportFormat::from_str("yaml").is_none());
}

#[test]
fn test_search_report_lists_results() {
    let results = vec!["url1".to_string(), "url2".to_string()];
    let report = generate_search_report(&results);

    assert!(report.contains("Search results:"));
    assert!(report.contains("- url1"));
    assert!(report.contains("- url2"));
}

#[test]
fn test_search_report_empty() {
    let report = generate_search_report(&[]);
    assert_eq!(report, "No results found.\n");
}

#[test]
fn test_search_report_one_line_per_result() {
    let results = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    let report = generate_search_report(&results);

    // header + 3 result lines
    assert_eq!(report.lines().count(), 4);
}

#[test]
fn test_json_search_report_structure() {
    let results = vec!["https://example.com/hit".to_string()];
    let report = generate_json_search_report("ferret", &results).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&report).unwrap();
    assert_eq!(parsed["report"]["query"]["keyword"], "ferret");
    assert_eq!(parsed["report"]["summary"]["total_matches"], 1);
    assert_eq!(parsed["report"]["matches"][0], "https://example.com/hit");
    assert_eq!(parsed["report"]["metadata"]["generator"], "Ferret");
}

#[test]
fn test_json_search_report_empty_matches() {
    let report = generate_json_search_report("nope", &[]).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&report).unwrap();

    assert_eq!(parsed["report"]["summary"]["total_matches"], 0);
    assert!(parsed["report"]["matches"].as_array().unwrap().is_empty());
}

fn outcome_of(entries: &[(&str, &str)], visited: usize) -> CrawlOutcome {
    let mut index = SiteIndex::new();
    for (address, text) in entries {
        index.put(address, text.to_string());
    }
    CrawlOutcome {
        index,
        visited,
        duration: Duration::from_secs(1),
    }
}

#[test]
fn test_crawl_report_summary_counts() {
    let outcome = outcome_of(
        &[
            ("https://example.com/", "home page"),
            ("https://example.com/about", "about page"),
        ],
        3,
    );
    let report = generate_crawl_report(&outcome);

    assert!(report.contains("Pages indexed: 2"));
    assert!(report.contains("Addresses visited: 3"));
    assert!(report.contains("Fetch failures: 1"));
}

#[test]
fn test_crawl_report_groups_by_host() {
    let outcome = outcome_of(&[("https://example.com/docs/intro", "intro")], 1);
    let report = generate_crawl_report(&outcome);

    assert!(report.contains("## example.com"));
    assert!(report.contains("/docs/intro"));
}

#[test]
fn test_save_report_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.txt");

    save_report("Search results:\n- url1\n", &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, "Search results:\n- url1\n");
}
