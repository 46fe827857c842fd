//! Patent Claim Chart Service
//!
//! Looks up a patent through the SerpApi Google Patents engines, shows its
//! bibliographic data and claims, and exports an Evidence of Use claim chart
//! as a Word document.
//!
//! Module layout:
//! - `record`: `PatentRecord` and the "N/A" placeholder
//! - `chart`: claim text → claim chart rows
//! - `document`: claim chart rows → .docx bytes
//! - `lookup`, `config`, `web`, `api_server`: HTTP plumbing (feature `api`)

pub mod chart;
pub mod document;
pub mod record;

#[cfg(feature = "api")]
pub mod api_server;
#[cfg(feature = "api")]
pub mod config;
#[cfg(feature = "api")]
pub mod lookup;
#[cfg(feature = "api")]
pub mod web;

// Re-export commonly used types
pub use chart::{build_claim_chart, format_claim_block, ClaimRow, RowKind};
pub use document::{chart_filename, ClaimChartDocument, DocumentError, DOCX_MIME_TYPE};
pub use record::{PatentRecord, NOT_AVAILABLE};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
#[cfg(feature = "api")]
pub use config::AppConfig;
