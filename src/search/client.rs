use crate::error::{Result, StarforkError};
use crate::search::types::{Candidate, SearchResponse};
use async_trait::async_trait;

#[async_trait]
pub trait CandidateSource: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<Candidate>>;
}

#[derive(Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    base_url: String,
}

impl SearchClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("starfork/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| StarforkError::Search(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl CandidateSource for SearchClient {
    async fn search(&self, query: &str) -> Result<Vec<Candidate>> {
        let url = format!("{}/search", self.base_url);
        tracing::debug!(%url, query, "searching index");

        let response = self
            .http
            .get(&url)
            .query(&[("q", query)])
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| StarforkError::Search(e.to_string()))?;

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| StarforkError::Search(format!("decoding response: {e}")))?;

        Ok(body.results)
    }
}
