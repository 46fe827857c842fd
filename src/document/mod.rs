//! Claim Chart Document Module
//!
//! Lays out the exported Word document.
//!
//! ## Pages
//! 1. Cover - company name, report title, confidentiality notice
//! 2. Patent Summary - key/value table of bibliographic fields
//! 3. About the Defendant - blank narrative for manual completion
//! 4. Accused Instrumentality - blank narrative for manual completion
//! 5. Claim Chart - "Claim Element" | "Evidence" table

pub mod assembler;

pub use assembler::{chart_filename, ClaimChartDocument, DocumentError, DOCX_MIME_TYPE};
