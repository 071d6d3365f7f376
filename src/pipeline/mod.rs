pub mod fetch;
pub mod hierarchy;
pub mod hosted;
pub mod ranking;
pub mod scheduler;
pub mod types;

use crate::error::Result;
use crate::github::client::RepoSource;
use crate::search::client::CandidateSource;
use std::sync::Arc;
use types::Report;

pub async fn report<S, R>(search: &S, repos: Arc<R>, query: &str, ceiling: usize) -> Result<Report>
where
    S: CandidateSource + ?Sized,
    R: RepoSource + ?Sized + 'static,
{
    let candidates = search.search(query).await?;
    tracing::info!(query, candidates = candidates.len(), "search finished");

    let partition = scheduler::enrich(repos, candidates, ceiling).await?;

    tracing::debug!("hierarchise");
    let items = hierarchy::hierarchise(partition.enriched);
    let hosted = ranking::rank(items);
    let nested: usize = hosted.iter().map(|root| root.descendants().len()).sum();
    tracing::debug!(roots = hosted.len(), nested, "ranked");

    Ok(Report {
        query: query.to_string(),
        hosted,
        non_hosted: partition.non_hosted,
    })
}
