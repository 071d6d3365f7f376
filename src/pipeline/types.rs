use crate::github::types::RepoMeta;
use crate::search::types::Candidate;

#[derive(Clone, Debug)]
pub struct Dispatch {
    pub index: usize,
    pub candidate: Candidate,
    pub owner: String,
    pub name: String,
}

#[derive(Clone, Debug)]
pub struct EnrichedItem {
    pub candidate: Candidate,
    pub full_name: String,
    pub meta: Option<RepoMeta>,
    pub fork_names: Vec<String>,
    pub is_fork: bool,
    pub children: Vec<EnrichedItem>,
    pub(crate) dispatch_index: usize,
}

impl EnrichedItem {
    pub fn path(&self) -> &str {
        &self.candidate.path
    }

    pub fn stars(&self) -> u32 {
        self.meta.as_ref().map(|m| m.stars).unwrap_or_default()
    }

    pub fn descendants(&self) -> Vec<&EnrichedItem> {
        let mut out = Vec::new();
        for child in &self.children {
            out.push(child);
            out.extend(child.descendants());
        }
        out
    }
}

#[derive(Debug, Default)]
pub struct Partition {
    pub enriched: Vec<EnrichedItem>,
    pub non_hosted: Vec<Candidate>,
}

#[derive(Debug, Default)]
pub struct Report {
    pub query: String,
    pub hosted: Vec<EnrichedItem>,
    pub non_hosted: Vec<Candidate>,
}
