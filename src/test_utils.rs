#![cfg(test)]

use crate::error::{Result, StarforkError};
use crate::github::client::RepoSource;
use crate::github::types::RepoMeta;
use crate::pipeline::hosted::parse_hosted_path;
use crate::pipeline::types::{Dispatch, EnrichedItem};
use crate::search::client::CandidateSource;
use crate::search::types::Candidate;
use async_trait::async_trait;
use chrono::TimeZone;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub fn make_meta(full_name: &str, stars: u32) -> RepoMeta {
    RepoMeta {
        full_name: full_name.to_string(),
        stars,
        forks: 0,
        created_at: Some(chrono::Utc.with_ymd_and_hms(2015, 3, 1, 10, 0, 0).unwrap()),
        updated_at: Some(chrono::Utc.with_ymd_and_hms(2016, 7, 4, 12, 30, 0).unwrap()),
    }
}

pub fn item(full_name: &str, stars: u32, forks: &[&str]) -> EnrichedItem {
    item_at(&format!("github.com/{full_name}"), full_name, stars, forks)
}

pub fn item_at(path: &str, full_name: &str, stars: u32, forks: &[&str]) -> EnrichedItem {
    EnrichedItem {
        candidate: Candidate::new(path, "", 0.0),
        full_name: full_name.to_string(),
        meta: Some(make_meta(full_name, stars)),
        fork_names: forks.iter().map(|f| f.to_string()).collect(),
        is_fork: false,
        children: Vec::new(),
        dispatch_index: 0,
    }
}

pub fn dispatch(index: usize, path: &str) -> Dispatch {
    let (owner, name) = parse_hosted_path(path).unwrap();
    Dispatch {
        index,
        candidate: Candidate::new(path, "", 0.0),
        owner,
        name,
    }
}

#[derive(Default)]
pub struct FakeRepos {
    repos: HashMap<String, (u32, Vec<String>)>,
    failing_forks: HashSet<String>,
    delays: HashMap<String, u64>,
    default_delay_ms: u64,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
    calls: AtomicUsize,
}

impl FakeRepos {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn repo(mut self, full_name: &str, stars: u32, forks: &[&str]) -> Self {
        let forks = forks.iter().map(|f| f.to_string()).collect();
        self.repos.insert(full_name.to_string(), (stars, forks));
        self
    }

    pub fn failing_forks(mut self, full_name: &str) -> Self {
        self.failing_forks.insert(full_name.to_string());
        self
    }

    pub fn delay_for(mut self, full_name: &str, ms: u64) -> Self {
        self.delays.insert(full_name.to_string(), ms);
        self
    }

    pub fn with_delay(mut self, ms: u64) -> Self {
        self.default_delay_ms = ms;
        self
    }

    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    // A fetch task holds one slot from `get_repo` until `list_fork_names`
    // returns, or until `get_repo` fails and the fetcher gives up.
    fn open_slot(&self) {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
    }

    fn close_slot(&self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }

    async fn call(&self, full_name: &str) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let ms = self.delays.get(full_name).copied().unwrap_or(self.default_delay_ms);
        if ms > 0 {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        } else {
            tokio::task::yield_now().await;
        }
    }
}

#[async_trait]
impl RepoSource for FakeRepos {
    async fn get_repo(&self, owner: &str, name: &str) -> Result<RepoMeta> {
        let full_name = format!("{owner}/{name}");
        self.open_slot();
        self.call(&full_name).await;
        match self.repos.get(&full_name) {
            Some((stars, _)) => Ok(make_meta(&full_name, *stars)),
            None => {
                self.close_slot();
                Err(StarforkError::GitHub(format!("404: Not Found {full_name}")))
            }
        }
    }

    async fn list_fork_names(&self, owner: &str, name: &str) -> Result<Vec<String>> {
        let full_name = format!("{owner}/{name}");
        self.call(&full_name).await;
        let result = if self.failing_forks.contains(&full_name) {
            Err(StarforkError::GitHub("connection reset".to_string()))
        } else {
            self.repos
                .get(&full_name)
                .map(|(_, forks)| forks.clone())
                .ok_or_else(|| StarforkError::GitHub(format!("404: Not Found {full_name}")))
        };
        self.close_slot();
        result
    }
}

pub struct FakeSearch {
    results: std::result::Result<Vec<Candidate>, String>,
    calls: AtomicUsize,
}

impl FakeSearch {
    pub fn with(results: Vec<Candidate>) -> Self {
        Self {
            results: Ok(results),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            results: Err(message.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CandidateSource for FakeSearch {
    async fn search(&self, _query: &str) -> Result<Vec<Candidate>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.results.clone().map_err(StarforkError::Search)
    }
}
