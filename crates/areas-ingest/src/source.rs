//! Where the state, district and sub-district tables come from.
//!
//! Each table is loaded exactly once per run. Remote sources issue one
//! blocking request per file with a fixed timeout and no retry; any failure
//! aborts the run.

use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, info};

use areas_model::{RawTable, SourceTables, Tier};

use crate::csv_table::{decode_utf8_ignoring_errors, parse_csv_table, read_csv_table};
use crate::error::{IngestError, Result};

/// Upstream directory of the local government directory tables.
pub const DEFAULT_BASE_URL: &str = "https://raw.githubusercontent.com/planemad/india-local-government-directory/master/administrative";

/// Environment variable for overriding the remote base URL.
pub const BASE_URL_ENV_VAR: &str = "SERVICE_AREAS_BASE_URL";

/// HTTP request timeout per table.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Get the remote base URL.
///
/// Checks the `SERVICE_AREAS_BASE_URL` environment variable first, then
/// falls back to [`DEFAULT_BASE_URL`].
pub fn default_base_url() -> String {
    std::env::var(BASE_URL_ENV_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
}

/// A provider of one raw table per tier.
pub trait RowSource {
    /// Human-readable location, for logs.
    fn describe(&self, tier: Tier) -> String;

    fn load_table(&self, tier: Tier) -> Result<RawTable>;
}

/// Fetches tables over HTTP from `<base_url>/<file>`.
pub struct RemoteSource {
    client: Client,
    base_url: String,
}

impl RemoteSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("service-areas/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(IngestError::Client)?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn url(&self, tier: Tier) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            tier.source_file()
        )
    }
}

impl RowSource for RemoteSource {
    fn describe(&self, tier: Tier) -> String {
        self.url(tier)
    }

    fn load_table(&self, tier: Tier) -> Result<RawTable> {
        let url = self.url(tier);
        debug!(%url, "fetching table");
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|source| IngestError::Fetch {
                url: url.clone(),
                source,
            })?;
        if !response.status().is_success() {
            return Err(IngestError::HttpStatus {
                url,
                status: response.status().as_u16(),
            });
        }
        let body = response.bytes().map_err(|source| IngestError::Fetch {
            url: url.clone(),
            source,
        })?;
        parse_csv_table(&decode_utf8_ignoring_errors(&body), &url)
    }
}

/// Reads tables from a directory holding the upstream file names.
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, tier: Tier) -> PathBuf {
        self.dir.join(tier.source_file())
    }
}

impl RowSource for DirectorySource {
    fn describe(&self, tier: Tier) -> String {
        self.path(tier).display().to_string()
    }

    fn load_table(&self, tier: Tier) -> Result<RawTable> {
        read_csv_table(&self.path(tier))
    }
}

/// Configured location of the row sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    Remote { base_url: String, timeout: Duration },
    Local { dir: PathBuf },
}

impl Default for SourceLocation {
    fn default() -> Self {
        SourceLocation::Remote {
            base_url: default_base_url(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl SourceLocation {
    pub fn open(&self) -> Result<Box<dyn RowSource>> {
        Ok(match self {
            SourceLocation::Remote { base_url, timeout } => {
                Box::new(RemoteSource::new(base_url.clone(), *timeout)?)
            }
            SourceLocation::Local { dir } => Box::new(DirectorySource::new(dir.clone())),
        })
    }
}

/// Load the three tables in hierarchy order.
pub fn load_source_tables(source: &dyn RowSource) -> Result<SourceTables> {
    let mut tables = SourceTables::default();
    for tier in Tier::ALL {
        let location = source.describe(tier);
        let table = source.load_table(tier)?;
        info!(%tier, rows = table.len(), source = %location, "loaded table");
        match tier {
            Tier::State => tables.states = table,
            Tier::District => tables.districts = table,
            Tier::Subdistrict => tables.subdistricts = table,
        }
    }
    Ok(tables)
}
