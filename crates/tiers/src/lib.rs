// ABOUTME: Main library entry point for tierscrape, a subscription pricing tier scraper.
// ABOUTME: Re-exports the public API and provides the extract() facade over extraction and sorting.

//! tierscrape - extract subscription pricing tiers from an HTML page.
//!
//! Packages are pulled out of the page, their displayed prices are normalized
//! into comparable monthly and yearly figures, and the result is sorted by one
//! of those figures.
//!
//! # Example
//!
//! ```no_run
//! use tierscrape::{Client, ExtractOptions, ScrapeError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ScrapeError> {
//!     let client = Client::builder().build();
//!     let packages = client
//!         .scrape("https://example.com/pricing", &ExtractOptions::default())
//!         .await?;
//!     println!("{}", serde_json::to_string_pretty(&packages).unwrap());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod extract;
pub mod frequency;
pub mod models;
pub mod options;
pub mod price;
pub mod resource;
pub mod sort;

pub use crate::client::Client;
pub use crate::error::{ErrorCode, Result, ScrapeError};
pub use crate::extract::extract_packages;
pub use crate::frequency::classify_frequency;
pub use crate::models::{Frequency, Package};
pub use crate::options::{ClientBuilder, ExtractOptions, Options, SortKey};
pub use crate::price::parse_price;
pub use crate::sort::sort_packages;

/// Extracts all packages from `html` and sorts them according to `opts`.
///
/// With default options the result is ordered by yearly price, most
/// expensive first.
pub fn extract(html: &str, opts: &ExtractOptions) -> Result<Vec<Package>> {
    let mut packages = extract_packages(html)?;
    sort_packages(&mut packages, opts.sort_key, opts.sort_ascending);
    Ok(packages)
}
