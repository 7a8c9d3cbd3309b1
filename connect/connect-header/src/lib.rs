//! Schema-tagged annotations attached to connector records.
//!
//! A [`Header`] is an immutable key plus [`SchemaAndValue`](connect_data::SchemaAndValue);
//! [`Headers`] is the mutable, insertion-ordered collection carried by one record.
//! Duplicate keys are allowed; lookups by name return matches in insertion order.

mod header;
mod headers;

pub use header::Header;
pub use headers::{HeaderSnapshot, Headers};
