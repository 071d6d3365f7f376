use crate::github::client::RepoSource;
use crate::pipeline::types::{Dispatch, EnrichedItem};

pub async fn fetch_item<S: RepoSource + ?Sized>(source: &S, job: Dispatch) -> Option<EnrichedItem> {
    tracing::debug!(path = %job.candidate.path, "handling");

    let meta = match source.get_repo(&job.owner, &job.name).await {
        Ok(meta) => meta,
        Err(e) => {
            tracing::warn!(path = %job.candidate.path, "fetching repository: {e}");
            return None;
        }
    };

    let fork_names = match source.list_fork_names(&job.owner, &job.name).await {
        Ok(names) => names,
        Err(e) => {
            tracing::warn!(path = %job.candidate.path, "listing forks: {e}");
            return None;
        }
    };

    tracing::debug!(path = %job.candidate.path, forks = fork_names.len(), "completed");

    Some(EnrichedItem {
        full_name: format!("{}/{}", job.owner, job.name),
        candidate: job.candidate,
        meta: Some(meta),
        fork_names,
        is_fork: false,
        children: Vec::new(),
        dispatch_index: job.index,
    })
}
