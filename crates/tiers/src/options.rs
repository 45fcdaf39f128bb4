// ABOUTME: Configuration for extraction and fetching: SortKey, ExtractOptions, Options and ClientBuilder.
// ABOUTME: ClientBuilder provides a fluent API for constructing Client instances with custom settings.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::client::Client;
use crate::models::Package;

/// Numeric package field used for sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    YearlyPrice,
    MonthlyPrice,
}

impl SortKey {
    /// Reads the field this key names from a package.
    pub fn value(&self, package: &Package) -> Option<f64> {
        match self {
            SortKey::YearlyPrice => package.yearly_price,
            SortKey::MonthlyPrice => package.monthly_price,
        }
    }

    /// Missing and `NaN` values both count as zero.
    pub(crate) fn value_or_zero(&self, package: &Package) -> f64 {
        self.value(package).filter(|v| !v.is_nan()).unwrap_or(0.0)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortKey::YearlyPrice => "yearlyPrice",
            SortKey::MonthlyPrice => "monthlyPrice",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yearlyprice" | "yearly_price" | "yearly" => Ok(SortKey::YearlyPrice),
            "monthlyprice" | "monthly_price" | "monthly" => Ok(SortKey::MonthlyPrice),
            _ => Err(format!(
                "unknown sort key {:?} (expected yearlyPrice or monthlyPrice)",
                s
            )),
        }
    }
}

/// Options for a single extraction call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExtractOptions {
    pub sort_key: SortKey,
    pub sort_ascending: bool,
}

impl ExtractOptions {
    pub fn sort_key(mut self, key: SortKey) -> Self {
        self.sort_key = key;
        self
    }

    pub fn ascending(mut self, ascending: bool) -> Self {
        self.sort_ascending = ascending;
        self
    }
}

/// Configuration options for the tierscrape client.
#[derive(Debug, Clone)]
pub struct Options {
    pub timeout: Duration,
    pub user_agent: String,
    pub http_client: Option<reqwest::Client>,
    pub headers: HashMap<String, String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: "tierscrape/0.1".to_string(),
            http_client: None,
            headers: HashMap::new(),
        }
    }
}

/// Builder for constructing Client instances with custom configuration.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    opts: Options,
}

impl ClientBuilder {
    /// Create a new ClientBuilder with default options.
    pub fn new() -> Self {
        Self {
            opts: Options::default(),
        }
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.opts.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.opts.user_agent = user_agent.into();
        self
    }

    /// Use a custom HTTP client. Timeout and user agent are then ignored.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.opts.http_client = Some(client);
        self
    }

    /// Add a custom header to all requests.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.opts.headers.insert(key.into(), value.into());
        self
    }

    /// Build the Client with the configured options.
    pub fn build(self) -> Client {
        Client::new(self.opts)
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
