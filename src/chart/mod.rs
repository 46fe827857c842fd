//! Claim Chart Module
//!
//! Turns raw claim text into the rows of a two-column claim chart.
//!
//! ## Rules
//! 1. First non-empty line of a claim is the root row ("12 A device comprising:")
//! 2. Every later line is an element row ("12.1 a housing;")
//! 3. Element lines without closing punctuation get a semicolon

pub mod formatter;

pub use formatter::{
    build_claim_chart, format_claim_block, has_terminal_punctuation, is_dependent_claim,
    normalize_element_ending, parse_claim_root, ClaimRoot, ClaimRow, RowKind,
    UNNUMBERED_CLAIM,
};
