//! Patent bibliographic record
//!
//! One flat record per looked-up patent. Every text field falls back to
//! [`NOT_AVAILABLE`] when the search service leaves it out.

/// Placeholder shown for any field the search service did not return
pub const NOT_AVAILABLE: &str = "N/A";

/// Bibliographic data plus raw claim blocks for a single patent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatentRecord {
    pub publication_number: String,
    pub title: String,
    pub assignee: String,
    pub inventors: String,
    pub abstract_text: String,
    pub priority_date: String,
    pub filing_date: String,
    pub grant_date: String,
    pub patent_link: String,
    /// Raw claim text, one entry per claim, in claim order
    pub claims: Vec<String>,
}

impl Default for PatentRecord {
    fn default() -> Self {
        Self {
            publication_number: NOT_AVAILABLE.to_string(),
            title: NOT_AVAILABLE.to_string(),
            assignee: NOT_AVAILABLE.to_string(),
            inventors: NOT_AVAILABLE.to_string(),
            abstract_text: NOT_AVAILABLE.to_string(),
            priority_date: NOT_AVAILABLE.to_string(),
            filing_date: NOT_AVAILABLE.to_string(),
            grant_date: NOT_AVAILABLE.to_string(),
            patent_link: NOT_AVAILABLE.to_string(),
            claims: Vec::new(),
        }
    }
}

impl PatentRecord {
    /// Key/value pairs for the summary table, in display order.
    ///
    /// `claim_count` is passed in because the exported chart counts only the
    /// claims the user kept, not every claim on the record.
    pub fn summary_fields(&self, claim_count: usize) -> Vec<(&'static str, String)> {
        vec![
            ("Publication Number:", self.publication_number.clone()),
            ("Title:", self.title.clone()),
            ("Assignee:", self.assignee.clone()),
            ("Priority Date:", self.priority_date.clone()),
            ("Filing Date:", self.filing_date.clone()),
            ("Inventors:", self.inventors.clone()),
            ("Abstract:", self.abstract_text.clone()),
            ("Number of Claims:", claim_count.to_string()),
            ("Patent Link:", self.patent_link.clone()),
        ]
    }
}

/// Use `value` when present and non-null, otherwise the placeholder
pub fn or_not_available(value: Option<String>) -> String {
    value.unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Join a list with ", ", or return the placeholder for an empty list
pub fn join_or_not_available<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let parts: Vec<String> = items.into_iter().map(|s| s.as_ref().to_string()).collect();
    if parts.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        parts.join(", ")
    }
}
