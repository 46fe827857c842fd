//! Claim text segmentation
//!
//! Splits one claim block into a root row plus numbered element rows.
//! Line breaks are the only structure the search service provides, so each
//! non-empty line becomes exactly one row.

use regex::Regex;
use std::sync::LazyLock;

/// Claim number used when the first line carries no leading digits
pub const UNNUMBERED_CLAIM: &str = "X";

static CLAIM_ROOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.?\s*(.*)").expect("claim root pattern is valid"));

static CONJUNCTION_ENDING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i);\s*(and|or)\s*$").expect("conjunction pattern is valid"));

static CLAIM_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bclaims?\s*\d+|\baccording to\b").expect("claim reference pattern is valid")
});

// ============================================================================
// Types
// ============================================================================

/// Which column-one shape a row takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// Claim preamble: "<n> <intro>"
    Root,
    /// Claim element: "<n>.<index> <text>", index starts at 1
    Element { index: usize },
}

/// One row of the claim chart. The evidence column is always left blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimRow {
    pub claim_number: String,
    pub kind: RowKind,
    pub text: String,
}

impl ClaimRow {
    /// Text for the "Claim Element" column
    pub fn label(&self) -> String {
        match self.kind {
            RowKind::Root => format!("{} {}", self.claim_number, self.text),
            RowKind::Element { index } => format!("{}.{} {}", self.claim_number, index, self.text),
        }
    }

    pub fn is_root(&self) -> bool {
        matches!(self.kind, RowKind::Root)
    }
}

/// Claim number and preamble pulled from a claim's first line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimRoot {
    pub number: String,
    pub intro: String,
}

// ============================================================================
// Line classification
// ============================================================================

/// Split a claim's first line into its number and intro text.
///
/// Only a run of digits at the very start counts as a number, optionally
/// followed by one period and whitespace. Anything else ("Claim 12 ...")
/// yields [`UNNUMBERED_CLAIM`] with the whole line as the intro.
pub fn parse_claim_root(line: &str) -> ClaimRoot {
    match CLAIM_ROOT.captures(line) {
        Some(caps) => ClaimRoot {
            number: caps[1].to_string(),
            intro: caps.get(2).map(|m| m.as_str().trim()).unwrap_or("").to_string(),
        },
        None => ClaimRoot {
            number: UNNUMBERED_CLAIM.to_string(),
            intro: line.to_string(),
        },
    }
}

/// True when the line already ends with ";", "." or "; and" / "; or"
pub fn has_terminal_punctuation(line: &str) -> bool {
    line.ends_with(';') || line.ends_with('.') || CONJUNCTION_ENDING.is_match(line)
}

/// Trim trailing whitespace and append ";" unless the line is already closed
pub fn normalize_element_ending(line: &str) -> String {
    let trimmed = line.trim_end();
    if has_terminal_punctuation(trimmed) {
        trimmed.to_string()
    } else {
        format!("{};", trimmed)
    }
}

/// True when a claim refers back to another claim ("according to claim 1")
pub fn is_dependent_claim(text: &str) -> bool {
    CLAIM_REFERENCE.is_match(text)
}

// ============================================================================
// Block formatting
// ============================================================================

/// Format one claim block into chart rows.
///
/// Returns an empty list when the block has no non-empty lines.
pub fn format_claim_block(block: &str) -> Vec<ClaimRow> {
    let lines: Vec<&str> = block
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let Some((first, elements)) = lines.split_first() else {
        tracing::debug!("Skipping claim block with no text");
        return Vec::new();
    };

    let root = parse_claim_root(first);
    let mut rows = Vec::with_capacity(lines.len());
    rows.push(ClaimRow {
        claim_number: root.number.clone(),
        kind: RowKind::Root,
        text: root.intro,
    });

    for (i, line) in elements.iter().enumerate() {
        rows.push(ClaimRow {
            claim_number: root.number.clone(),
            kind: RowKind::Element { index: i + 1 },
            text: normalize_element_ending(line),
        });
    }

    rows
}

/// Format every claim block, keeping block order then line order
pub fn build_claim_chart<S: AsRef<str>>(blocks: &[S]) -> Vec<ClaimRow> {
    let rows: Vec<ClaimRow> = blocks
        .iter()
        .flat_map(|block| format_claim_block(block.as_ref()))
        .collect();

    tracing::debug!("Built claim chart: {} blocks, {} rows", blocks.len(), rows.len());
    rows
}
