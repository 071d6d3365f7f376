use crate::error::Result;
use crate::github::client::RepoSource;
use crate::pipeline::fetch::fetch_item;
use crate::pipeline::hosted::{is_hosted, parse_hosted_path};
use crate::pipeline::types::{Dispatch, EnrichedItem, Partition};
use crate::search::types::Candidate;
use std::sync::Arc;
use tokio::sync::{mpsc, Semaphore};
use tokio::task::JoinSet;

pub async fn enrich<S>(source: Arc<S>, candidates: Vec<Candidate>, ceiling: usize) -> Result<Partition>
where
    S: RepoSource + ?Sized + 'static,
{
    let mut non_hosted = Vec::new();
    let mut jobs = Vec::new();

    for (index, candidate) in candidates.into_iter().enumerate() {
        if !is_hosted(&candidate.path) {
            non_hosted.push(candidate);
            continue;
        }
        let (owner, name) = parse_hosted_path(&candidate.path)?;
        jobs.push(Dispatch {
            index,
            candidate,
            owner,
            name,
        });
    }

    let ceiling = ceiling.max(1);
    tracing::debug!(hosted = jobs.len(), non_hosted = non_hosted.len(), ceiling, "dispatching");

    let semaphore = Arc::new(Semaphore::new(ceiling));
    let (tx, mut rx) = mpsc::unbounded_channel::<EnrichedItem>();
    let mut join_set = JoinSet::new();

    for job in jobs {
        let source = Arc::clone(&source);
        let semaphore = Arc::clone(&semaphore);
        let tx = tx.clone();

        join_set.spawn(async move {
            // held until the task ends, whichever way it ends
            let _permit = match semaphore.acquire_owned().await {
                Ok(permit) => permit,
                Err(_) => {
                    tracing::warn!(path = %job.candidate.path, "semaphore closed unexpectedly");
                    return;
                }
            };

            if let Some(item) = fetch_item(source.as_ref(), job).await {
                let _ = tx.send(item);
            }
        });
    }
    drop(tx);

    while let Some(result) = join_set.join_next().await {
        if let Err(e) = result {
            tracing::warn!("fetch task failed: {e}");
        }
    }

    let mut enriched = Vec::new();
    while let Some(item) = rx.recv().await {
        enriched.push(item);
    }
    // completion order is arbitrary; restore search order
    enriched.sort_by_key(|item| item.dispatch_index);

    tracing::debug!(enriched = enriched.len(), "received finished");

    Ok(Partition {
        enriched,
        non_hosted,
    })
}
