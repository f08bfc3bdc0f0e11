//! JSON ingest/emit and ISO-8601 timestamp adapters — out-of-scope
//! collaborators, specified only at their interface.

pub mod json;
pub mod timestamp;
