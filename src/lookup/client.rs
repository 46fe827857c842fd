//! SerpApi HTTP client
//!
//! Wraps a `reqwest::Client` with the configured base URL, API key and
//! timeout. Retries are not attempted; a failed call fails the request.

use serde::de::DeserializeOwned;
use url::Url;

use crate::config::AppConfig;
use crate::lookup::error::LookupError;
use crate::lookup::types::{to_record, PatentDetails, SearchResponse};
use crate::record::PatentRecord;

const SEARCH_PATH: &str = "/search";
const DETAILS_PATH: &str = "/search.json";
const SEARCH_ENGINE: &str = "google_patents";
const DETAILS_ENGINE: &str = "google_patents_details";

#[derive(Debug, Clone)]
pub struct PatentClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl PatentClient {
    pub fn new(config: &AppConfig) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder()
            .timeout(config.lookup_timeout)
            .build()
            .map_err(LookupError::Client)?;

        Ok(Self {
            client,
            base_url: config.search_base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// Find the best match for `term` and fetch its details.
    ///
    /// `Ok(None)` means the search returned no usable result.
    pub async fn lookup(&self, term: &str) -> Result<Option<PatentRecord>, LookupError> {
        let search: SearchResponse = self
            .get_json(SEARCH_PATH, &[("engine", SEARCH_ENGINE), ("q", term)])
            .await?;

        let Some(hit) = search.best_match() else {
            tracing::info!("No patent found for '{}'", term);
            return Ok(None);
        };

        let Some(patent_id) = hit.patent_id.clone() else {
            tracing::warn!("Best match for '{}' has no patent_id", term);
            return Ok(None);
        };

        let details: PatentDetails = self
            .get_json(
                DETAILS_PATH,
                &[("engine", DETAILS_ENGINE), ("patent_id", patent_id.as_str())],
            )
            .await?;

        let record = to_record(hit, details);
        tracing::info!(
            "Found {} with {} claims",
            record.publication_number,
            record.claims.len()
        );
        Ok(Some(record))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, LookupError> {
        let endpoint = format!("{}{}", self.base_url, path);
        let url = Url::parse_with_params(
            &endpoint,
            params
                .iter()
                .copied()
                .chain(std::iter::once(("api_key", self.api_key.as_str()))),
        )
        .map_err(|source| LookupError::InvalidUrl {
            url: endpoint.clone(),
            source,
        })?;

        tracing::debug!("GET {} {:?}", endpoint, params);
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| LookupError::Http {
                endpoint: endpoint.clone(),
                source,
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(LookupError::Status {
                endpoint,
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }

        resp.json::<T>()
            .await
            .map_err(|source| LookupError::Deserialization { endpoint, source })
    }
}
