use chrono::{DateTime, Utc};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RepoMeta {
    pub full_name: String,
    pub stars: u32,
    pub forks: u32,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
