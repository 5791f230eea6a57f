//! Configuration constants and fetch options.

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::error::{Result, SenadoError};

/// Base URL of the Senate open-data service.
pub const SENADO_API_URL: &str = "http://legis.senado.leg.br/dadosabertos";

/// HTTP timeout in seconds (same as the reqwest default).
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Calendar format used by every date field of the service.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Environment variable overriding the data root directory.
pub const DATA_DIR_ENV: &str = "SENADO_DATA_DIR";

/// Environment variable overriding [`SENADO_API_URL`].
pub const API_URL_ENV: &str = "SENADO_API_URL";

/// Name of the data root directory when no override is given.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Parse a `YYYY-MM-DD` date.
///
/// # Examples
/// ```
/// use congresso_senado::config::parse_date;
///
/// assert!(parse_date("1950-03-21").is_ok());
/// assert!(parse_date("21/03/1950").is_err());
/// assert!(parse_date("1950-13-01").is_err()); // Invalid month
/// ```
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    let trimmed = text.trim();
    // chrono accepts single-digit months and days; the service never sends them
    if trimmed.len() != 10 {
        return Err(SenadoError::DateFormat(text.to_string()));
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| SenadoError::DateFormat(text.to_string()))
}

/// Options recognised by every record constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    /// Override of the kind-specific cache directory.
    pub base_local: Option<PathBuf>,
    /// Call `get_info` right away at construction.
    pub fetch: bool,
    /// Persist remotely fetched documents to the cache.
    pub write: bool,
    /// Drop the parsed document once the record is populated.
    pub discard_document: bool,
    /// Root URL of the open-data service.
    pub base_url: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            base_local: None,
            fetch: false,
            write: false,
            discard_document: true,
            base_url: SENADO_API_URL.to_string(),
        }
    }
}

impl FetchOptions {
    /// Defaults with the API URL taken from `SENADO_API_URL` when set.
    pub fn from_env() -> Self {
        let base_url = std::env::var(API_URL_ENV).unwrap_or_else(|_| SENADO_API_URL.to_string());
        Self {
            base_url,
            ..Self::default()
        }
    }

    pub fn with_base_local(mut self, base_local: impl Into<PathBuf>) -> Self {
        self.base_local = Some(base_local.into());
        self
    }

    pub fn with_fetch(mut self, fetch: bool) -> Self {
        self.fetch = fetch;
        self
    }

    pub fn with_write(mut self, write: bool) -> Self {
        self.write = write;
        self
    }

    pub fn with_discard_document(mut self, discard_document: bool) -> Self {
        self.discard_document = discard_document;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Options for a record reached through a cross-reference.
    ///
    /// Nested records keep the endpoint, write and discard settings but are
    /// never fetched on construction.
    #[must_use]
    pub fn nested(&self, base_local: PathBuf) -> Self {
        Self {
            base_local: Some(base_local),
            fetch: false,
            write: self.write,
            discard_document: self.discard_document,
            base_url: self.base_url.clone(),
        }
    }
}
