// ABOUTME: The Client struct that fetches pricing pages and runs package extraction on them.
// ABOUTME: Provides async scrape() for URLs and scrape_html() for already-fetched markup.

use tracing::debug;

use crate::error::{Result, ScrapeError};
use crate::extract;
use crate::models::Package;
use crate::options::{ClientBuilder, ExtractOptions, Options};
use crate::resource::{fetch, FetchOptions};

/// Fetches pricing pages over HTTP and extracts their packages.
pub struct Client {
    opts: Options,
    http_client: reqwest::Client,
}

impl Client {
    /// Create a new ClientBuilder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a new Client with the given options.
    ///
    /// Falls back to a default `reqwest::Client` if the configured one cannot
    /// be built (for example when the TLS backend fails to initialise).
    pub fn new(opts: Options) -> Self {
        let http_client = opts.http_client.clone().unwrap_or_else(|| {
            reqwest::Client::builder()
                .user_agent(&opts.user_agent)
                .timeout(opts.timeout)
                .gzip(true)
                .brotli(true)
                .deflate(true)
                .build()
                .unwrap_or_default()
        });

        Self { opts, http_client }
    }

    /// Fetch the page at `url` and extract its packages.
    pub async fn scrape(&self, url: &str, extract_opts: &ExtractOptions) -> Result<Vec<Package>> {
        if url.is_empty() {
            return Err(ScrapeError::invalid_url(url, "Scrape", None));
        }

        let fetch_opts = FetchOptions {
            headers: self.opts.headers.clone(),
        };
        let fetched = fetch(&self.http_client, url, &fetch_opts).await?;
        debug!(url, final_url = %fetched.final_url, "scraping fetched page");

        self.scrape_html(&fetched.text(), extract_opts)
    }

    /// Extract packages from markup that has already been fetched.
    pub fn scrape_html(&self, html: &str, extract_opts: &ExtractOptions) -> Result<Vec<Package>> {
        extract(html, extract_opts)
    }
}
