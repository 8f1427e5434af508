//! Row source loading for the service area dataset.
//!
//! This crate provides the collaborators around the hierarchy builder:
//!
//! - **Row Sources**: fetch `1-state.csv`, `2-district.csv` and
//!   `3-subdistrict.csv` over HTTP or read them from a local directory
//! - **CSV Decoding**: split the header row off and keep data rows verbatim
//! - **Reserved Slugs**: discover slugs already published by the consuming
//!   application
//!
//! # Example
//!
//! ```ignore
//! use areas_ingest::{SourceLocation, load_reserved_slugs, load_source_tables};
//!
//! let source = SourceLocation::default().open()?;
//! let tables = load_source_tables(source.as_ref())?;
//! let reserved = load_reserved_slugs(Some(Path::new("lib/data/districts.ts")));
//! ```

mod csv_table;
mod error;
mod reserved;
mod source;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv_table::{decode_utf8_ignoring_errors, parse_csv_table, read_csv_table};

// === Row Sources ===
pub use source::{
    BASE_URL_ENV_VAR, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, DirectorySource, RemoteSource, RowSource,
    SourceLocation, default_base_url, load_source_tables,
};

// === Reserved Slugs ===
pub use reserved::{
    load_reserved_slugs, reserved_from_json, reserved_from_lines, reserved_from_source,
};
