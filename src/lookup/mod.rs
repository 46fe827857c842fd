//! Patent Lookup Module
//!
//! Two-step SerpApi query: a Google Patents search picks the best match,
//! then a details request fetches its bibliographic data and claims.

pub mod client;
pub mod error;
pub mod types;

pub use client::PatentClient;
pub use error::LookupError;
pub use types::{PatentDetails, SearchHit, SearchResponse};
