use crate::error::{Result, StarforkError};
use crate::github::types::RepoMeta;
use async_trait::async_trait;
use octocrab::Octocrab;

const MAX_FORKS: usize = 100;

#[async_trait]
pub trait RepoSource: Send + Sync {
    async fn get_repo(&self, owner: &str, name: &str) -> Result<RepoMeta>;
    async fn list_fork_names(&self, owner: &str, name: &str) -> Result<Vec<String>>;
}

#[derive(Clone)]
pub struct GitHubClient {
    octo: Octocrab,
}

impl GitHubClient {
    pub fn new(token: Option<&str>) -> Result<Self> {
        Self::build(token, None)
    }

    pub fn with_base_uri(token: Option<&str>, base_uri: &str) -> Result<Self> {
        Self::build(token, Some(base_uri))
    }

    fn build(token: Option<&str>, base_uri: Option<&str>) -> Result<Self> {
        let mut builder = Octocrab::builder();
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            builder = builder.personal_token(token.to_string());
        }
        if let Some(uri) = base_uri {
            builder = builder
                .base_uri(uri)
                .map_err(|e| StarforkError::GitHub(e.to_string()))?;
        }
        let octo = builder
            .build()
            .map_err(|e| StarforkError::GitHub(e.to_string()))?;

        Ok(Self { octo })
    }

    pub async fn rate_limit(&self) -> Option<u32> {
        self.octo
            .ratelimit()
            .get()
            .await
            .ok()
            .map(|r| r.rate.remaining as u32)
    }
}

#[async_trait]
impl RepoSource for GitHubClient {
    async fn get_repo(&self, owner: &str, name: &str) -> Result<RepoMeta> {
        let repo = self
            .octo
            .repos(owner, name)
            .get()
            .await
            .map_err(map_octo_err)?;

        Ok(RepoMeta {
            full_name: repo
                .full_name
                .unwrap_or_else(|| format!("{owner}/{name}")),
            stars: repo.stargazers_count.unwrap_or_default(),
            forks: repo.forks_count.unwrap_or_default(),
            created_at: repo.created_at,
            updated_at: repo.updated_at,
        })
    }

    async fn list_fork_names(&self, owner: &str, name: &str) -> Result<Vec<String>> {
        let mut names = Vec::new();
        let mut page = 1u32;

        loop {
            let result = self
                .octo
                .repos(owner, name)
                .list_forks()
                .per_page(100)
                .page(page)
                .send()
                .await
                .map_err(map_octo_err)?;

            if result.items.is_empty() {
                break;
            }

            for fork in &result.items {
                let full_name = fork.full_name.clone().unwrap_or_else(|| {
                    let login = fork
                        .owner
                        .as_ref()
                        .map(|o| o.login.clone())
                        .unwrap_or_default();
                    format!("{login}/{}", fork.name)
                });
                names.push(full_name);
                if names.len() >= MAX_FORKS {
                    break;
                }
            }

            if names.len() >= MAX_FORKS || result.next.is_none() {
                break;
            }
            page += 1;
        }

        Ok(names)
    }
}

fn map_octo_err(e: octocrab::Error) -> StarforkError {
    if let octocrab::Error::GitHub { source, .. } = &e {
        let status = source.status_code.as_u16();
        if (status == 403 || status == 429) && source.message.to_lowercase().contains("rate limit") {
            return StarforkError::RateLimited(source.message.clone());
        }
        return StarforkError::GitHub(format!("{status}: {}", source.message));
    }
    StarforkError::GitHub(e.to_string())
}
