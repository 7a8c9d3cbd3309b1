//! Error types for the connector API facade.

use connect_data::DataError;
use connect_storage::{ConfigError, ParseError};

/// Any error surfaced by the connector API crates.
#[derive(Debug, thiserror::Error)]
pub enum ConnectError {
    /// Schema, value or converter failure from `connect-data`.
    #[error(transparent)]
    Data(#[from] DataError),

    /// Invalid converter settings.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Header text that could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// [`group_partitions`](crate::group_partitions) was asked for zero groups.
    #[error("number of groups must be positive, got {num_groups}")]
    InvalidGroupCount { num_groups: usize },
}
