//! Storage layer for the hockey contract tracker
//!
//! This module provides a read-only abstraction over the contracts
//! database, organized into logical components:
//! - `models`: Record types handed to the presentation layer
//! - `derive`: Derived-value rules shared with the fixture data set
//! - `rows`: Null-tolerant decoding from raw rows into records
//! - `schema`: Table definitions used to bootstrap a local database
//! - `pool`: Explicitly managed connection pool
//! - `queries`: The live store client

pub mod derive;
pub mod models;
pub mod pool;
pub mod queries;
pub(crate) mod rows;
pub mod schema;


// Re-export the main types for easy access
pub use models::*;
pub use pool::{ConnectionPool, StoreConfig};
pub use queries::LiveStore;
