// Page handlers for HTML rendering with Askama

use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    Form,
};
use serde::Deserialize;

use crate::api_server::{AppError, AppState};
use crate::chart::is_dependent_claim;
use crate::record::PatentRecord;

const PAGE_TITLE: &str = "Patent Claim Chart";
pub const NO_MATCH_MESSAGE: &str = "❌ No patent found";
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a patent number";
pub const LOOKUP_FAILED_MESSAGE: &str = "Patent lookup failed, please try again later";

// ============================================================================
// Index Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/index.html")]
pub struct IndexTemplate {
    pub title: String,
    pub query: String,
    pub error: Option<String>,
    pub patent: Option<PatentView>,
}

/// Record as shown on the page, with each claim tagged for display
pub struct PatentView {
    pub record: PatentRecord,
    pub claims: Vec<ClaimView>,
}

pub struct ClaimView {
    pub text: String,
    pub dependent: bool,
}

impl From<PatentRecord> for PatentView {
    fn from(record: PatentRecord) -> Self {
        let claims = record
            .claims
            .iter()
            .map(|text| ClaimView {
                text: text.clone(),
                dependent: is_dependent_claim(text),
            })
            .collect();
        Self { record, claims }
    }
}

impl IndexTemplate {
    fn new(query: &str) -> Self {
        Self {
            title: PAGE_TITLE.to_string(),
            query: query.to_string(),
            error: None,
            patent: None,
        }
    }

    fn with_error(mut self, message: &str) -> Self {
        self.error = Some(message.to_string());
        self
    }

    fn with_patent(mut self, record: PatentRecord) -> Self {
        self.patent = Some(PatentView::from(record));
        self
    }
}

fn render(template: IndexTemplate) -> Result<Html<String>, AppError> {
    template
        .render()
        .map(Html)
        .map_err(|e| AppError::Internal(format!("Template error: {}", e)))
}

pub async fn index_page() -> Result<Html<String>, AppError> {
    render(IndexTemplate::new(""))
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub patent_number: String,
}

pub async fn search_page(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<(StatusCode, Html<String>), AppError> {
    let query = form.patent_number.trim();

    if query.is_empty() {
        let page = render(IndexTemplate::new(query).with_error(EMPTY_QUERY_MESSAGE))?;
        return Ok((StatusCode::OK, page));
    }

    tracing::info!("Looking up patent '{}'", query);
    let (status, template) = match state.lookup.lookup(query).await {
        Ok(Some(record)) => (StatusCode::OK, IndexTemplate::new(query).with_patent(record)),
        Ok(None) => (StatusCode::OK, IndexTemplate::new(query).with_error(NO_MATCH_MESSAGE)),
        Err(e) => {
            tracing::error!("Patent lookup for '{}' failed: {}", query, e);
            (
                StatusCode::BAD_GATEWAY,
                IndexTemplate::new(query).with_error(LOOKUP_FAILED_MESSAGE),
            )
        }
    };

    Ok((status, render(template)?))
}

// ============================================================================
// Download Form
// ============================================================================

/// Fields round-tripped from the results page to the export endpoint.
///
/// `record.claims` holds only the claim blocks the user kept selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadForm {
    pub record: PatentRecord,
}

impl DownloadForm {
    /// Decode an `application/x-www-form-urlencoded` body.
    ///
    /// Repeated `claims[]` keys are collected in order. Missing text fields
    /// become empty; a missing publication number becomes "Patent".
    pub fn from_urlencoded(body: &[u8]) -> Self {
        let mut record = PatentRecord {
            publication_number: "Patent".to_string(),
            title: String::new(),
            assignee: String::new(),
            inventors: String::new(),
            abstract_text: String::new(),
            priority_date: String::new(),
            filing_date: String::new(),
            grant_date: String::new(),
            patent_link: String::new(),
            claims: Vec::new(),
        };
        for (key, value) in url::form_urlencoded::parse(body) {
            let value = value.into_owned();
            match key.as_ref() {
                "claims[]" => record.claims.push(value),
                "publication_number" => record.publication_number = value,
                "title" => record.title = value,
                "assignee" => record.assignee = value,
                "inventors" => record.inventors = value,
                "abstract" => record.abstract_text = value,
                "priority_date" => record.priority_date = value,
                "filing_date" => record.filing_date = value,
                "grant_date" => record.grant_date = value,
                "patent_link" => record.patent_link = value,
                _ => {}
            }
        }

        Self { record }
    }
}
