// ABOUTME: CLI binary for tierscrape.
// ABOUTME: Fetches a pricing page (or reads an HTML file) and prints the extracted packages as JSON.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tierscrape::{Client, ExtractOptions, Package, SortKey};
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "tierscrape")]
#[command(about = "Scrape subscription pricing tiers and print them as JSON")]
struct Args {
    /// URL of the pricing page
    #[arg()]
    url: Option<String>,

    /// Parse a local HTML file instead of fetching a URL
    #[arg(long = "html")]
    html: Option<PathBuf>,

    /// Field to sort by: yearlyPrice (default) or monthlyPrice
    #[arg(long = "sort-key", default_value = "yearlyPrice")]
    sort_key: SortKey,

    /// Sort ascending instead of descending
    #[arg(long = "asc")]
    ascending: bool,

    /// Output file path (default: stdout)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Output compact JSON instead of pretty
    #[arg(long = "compact")]
    compact: bool,

    /// Log extraction details to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("tierscrape=debug")
    } else {
        EnvFilter::new("tierscrape=warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn format_output(packages: &[Package], compact: bool) -> serde_json::Result<String> {
    if compact {
        serde_json::to_string(packages)
    } else {
        serde_json::to_string_pretty(packages)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.verbose);

    if args.html.is_some() && args.url.is_some() {
        eprintln!("error: cannot use both --html and a URL");
        return ExitCode::from(1);
    }

    let extract_opts = ExtractOptions::default()
        .sort_key(args.sort_key)
        .ascending(args.ascending);
    let client = Client::builder().build();

    let result = match (&args.html, &args.url) {
        (Some(html_path), _) => match fs::read_to_string(html_path) {
            Ok(html) => client.scrape_html(&html, &extract_opts),
            Err(e) => {
                error!("error reading file {:?}: {}", html_path, e);
                return ExitCode::from(1);
            }
        },
        (None, Some(url)) => client.scrape(url, &extract_opts).await,
        (None, None) => {
            eprintln!("error: please provide a URL as an argument");
            return ExitCode::from(1);
        }
    };

    let packages = match result {
        Ok(packages) => packages,
        Err(e) => {
            error!("{}", e);
            return ExitCode::from(1);
        }
    };

    let output_str = match format_output(&packages, args.compact) {
        Ok(s) => s,
        Err(e) => {
            error!("error serializing packages: {}", e);
            return ExitCode::from(1);
        }
    };

    if let Some(output_path) = &args.output {
        if let Err(e) = fs::write(output_path, &output_str) {
            error!("error writing to {:?}: {}", output_path, e);
            return ExitCode::from(1);
        }
    } else {
        println!("{}", output_str);
    }

    ExitCode::SUCCESS
}
