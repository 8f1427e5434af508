//! Error types for hierarchy building.

use areas_model::Tier;
use thiserror::Error;

/// Errors that abort a build.
///
/// Filtered records (unrecognized states, orphaned districts and
/// sub-districts) are not errors; they are dropped and counted in the
/// build report.
#[derive(Debug, Error)]
pub enum BuildError {
    /// A row ended before a column the schema requires.
    #[error(
        "{tier} row at line {line} has {len} fields, expected column {column} ({field})"
    )]
    ShortRow {
        tier: Tier,
        line: usize,
        column: usize,
        field: &'static str,
        len: usize,
    },
}

/// Result type for build operations.
pub type Result<T> = std::result::Result<T, BuildError>;
