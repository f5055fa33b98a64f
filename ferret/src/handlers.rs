use clap::ArgMatches;
use colored::Colorize;
use std::path::PathBuf;
use url::Url;

// Re-export crawl and report types from ferret-core
pub use ferret_core::crawl::{CrawlOptions, CrawlOutcome, execute_crawl, extract_url_path};
pub use ferret_core::report::{
    ReportFormat, generate_crawl_report, generate_json_search_report, generate_search_report,
    save_report,
};
pub use ferret_core::search::search;

/// Parse a seed argument as a URL, trying to add http:// if needed
pub fn parse_seed(input: &str) -> Option<String> {
    // Try to parse as-is
    if Url::parse(input).is_ok() {
        return Some(input.to_string());
    }

    // Try adding http://
    let with_scheme = format!("http://{}", input);
    if Url::parse(&with_scheme).is_ok() {
        return Some(with_scheme);
    }

    None
}

/// Render search results in the requested format
pub fn render_search_report(
    format: &ReportFormat,
    keyword: &str,
    results: &[String],
) -> Result<String, serde_json::Error> {
    match format {
        ReportFormat::Text => Ok(generate_search_report(results)),
        ReportFormat::Json => generate_json_search_report(keyword, results),
    }
}

fn deliver_report(report: &str, output: Option<&PathBuf>) {
    match output {
        Some(path) => match save_report(report, path) {
            Ok(()) => println!("{} Report saved to {}", "✓".green().bold(), path.display()),
            Err(e) => {
                eprintln!("✗ Failed to save report to {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => print!("{}", report),
    }
}

fn crawl_options_from(sub_matches: &ArgMatches, seed: String) -> CrawlOptions {
    CrawlOptions {
        seed,
        scope: sub_matches.get_one::<String>("scope").cloned(),
        timeout_secs: *sub_matches.get_one::<u64>("timeout").unwrap_or(&10),
        show_progress_bar: true,
    }
}

async fn run_crawl(sub_matches: &ArgMatches) -> CrawlOutcome {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let url_arg = sub_matches.get_one::<String>("url").unwrap();
    let seed = match parse_seed(url_arg) {
        Some(seed) => seed,
        None => {
            eprintln!("✗ Invalid URL '{}'", url_arg);
            std::process::exit(1);
        }
    };

    let options = crawl_options_from(sub_matches, seed.clone());

    println!("\n🕷️  Crawling {}", seed);
    println!(
        "Scope: {}",
        options.scope.as_deref().unwrap_or(seed.as_str())
    );
    println!("Timeout: {}s\n", options.timeout_secs);

    match execute_crawl(options, None).await {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("✗ Crawl failed: {}", e);
            std::process::exit(1);
        }
    }
}

pub async fn handle_crawl(sub_matches: &ArgMatches) {
    let outcome = run_crawl(sub_matches).await;

    println!("\n{} Crawl complete!\n", "✓".green().bold());

    let report = generate_crawl_report(&outcome);
    deliver_report(&report, sub_matches.get_one::<PathBuf>("output"));
}

pub async fn handle_search(sub_matches: &ArgMatches) {
    let keyword = sub_matches.get_one::<String>("keyword").unwrap().clone();
    let format_arg = sub_matches.get_one::<String>("format").unwrap();
    let format = ReportFormat::from_str(format_arg).unwrap_or(ReportFormat::Text);

    let outcome = run_crawl(sub_matches).await;

    println!(
        "\n{} Indexed {} pages, searching for '{}'\n",
        "✓".green().bold(),
        outcome.index.len(),
        keyword.bright_white()
    );

    let results = search(&outcome.index, &keyword);

    let report = match render_search_report(&format, &keyword, &results) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("✗ Failed to render report: {}", e);
            std::process::exit(1);
        }
    };

    deliver_report(&report, sub_matches.get_one::<PathBuf>("output"));
}
