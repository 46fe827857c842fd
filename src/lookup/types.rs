//! SerpApi response shapes
//!
//! Only the fields the claim chart uses are modelled; everything is optional
//! because the service omits fields freely.

use serde::Deserialize;

use crate::record::{join_or_not_available, or_not_available, PatentRecord};

/// `engine=google_patents` response
#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub organic_results: Vec<SearchHit>,
}

impl SearchResponse {
    /// First result, which the service ranks as the best match
    pub fn best_match(self) -> Option<SearchHit> {
        self.organic_results.into_iter().next()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchHit {
    pub patent_id: Option<String>,
    pub publication_number: Option<String>,
    pub patent_link: Option<String>,
    pub grant_date: Option<String>,
}

/// `engine=google_patents_details` response
#[derive(Debug, Default, Deserialize)]
pub struct PatentDetails {
    pub title: Option<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    #[serde(default)]
    pub assignees: Option<Vec<String>>,
    #[serde(default)]
    pub inventors: Option<Vec<Inventor>>,
    #[serde(default)]
    pub claims: Option<Vec<String>>,
    pub priority_date: Option<String>,
    pub filing_date: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Inventor {
    pub name: Option<String>,
}

/// Merge the search hit and its details into one record
pub fn to_record(hit: SearchHit, details: PatentDetails) -> PatentRecord {
    let inventors = details
        .inventors
        .unwrap_or_default()
        .into_iter()
        .map(|inv| inv.name.unwrap_or_default());

    PatentRecord {
        publication_number: or_not_available(hit.publication_number),
        title: or_not_available(details.title),
        assignee: join_or_not_available(details.assignees.unwrap_or_default()),
        inventors: join_or_not_available(inventors),
        abstract_text: or_not_available(details.abstract_text),
        priority_date: or_not_available(details.priority_date),
        filing_date: or_not_available(details.filing_date),
        grant_date: or_not_available(hit.grant_date),
        patent_link: or_not_available(hit.patent_link),
        claims: details.claims.unwrap_or_default(),
    }
}
