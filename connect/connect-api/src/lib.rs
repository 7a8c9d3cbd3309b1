//! Connector plugin API: typed record data, headers and converters.
//!
//! Re-exports the member crates under short module names and adds the
//! [`group_partitions`] helper used when splitting work between tasks.

mod error;
mod util;

pub use connect_data as data;
pub use connect_header as header;
pub use connect_storage as storage;
pub use error::ConnectError;
pub use util::group_partitions;
