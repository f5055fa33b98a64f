pub mod crawl;
pub mod report;
pub mod search;

pub use ferret_crawler::SiteIndex;

use colored::Colorize;

const BANNER: &str = r#"
  __                    _
 / _| ___ _ __ _ __ ___| |_
| |_ / _ \ '__| '__/ _ \ __|
|  _|  __/ |  | | |  __/ |_
|_|  \___|_|  |_|  \___|\__|
"#;

pub fn print_banner() {
    println!("{}", BANNER.bright_magenta());
    println!(
        "{}",
        format!(
            "  ferret v{} - scoped site crawler with keyword search",
            env!("CARGO_PKG_VERSION")
        )
        .bright_white()
    );
    println!();
}
