use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::Result;
use crate::github::client::RepoSource;
use crate::pipeline::{self, types::Report};
use crate::render::html;
use crate::search::client::CandidateSource;

pub struct ServerState {
    search: Arc<dyn CandidateSource>,
    repos: Arc<dyn RepoSource>,
    concurrency: usize,
    cache: Mutex<HashMap<String, Arc<Report>>>,
}

impl ServerState {
    pub fn new(search: Arc<dyn CandidateSource>, repos: Arc<dyn RepoSource>, concurrency: usize) -> Self {
        Self {
            search,
            repos,
            concurrency,
            cache: Mutex::new(HashMap::new()),
        }
    }

    async fn lookup_or_run(&self, query: &str) -> Result<Arc<Report>> {
        if let Some(report) = self.cached(query) {
            tracing::debug!(query, "cache hit");
            return Ok(report);
        }

        let report = Arc::new(
            pipeline::report(self.search.as_ref(), Arc::clone(&self.repos), query, self.concurrency).await?,
        );
        if let Ok(mut cache) = self.cache.lock() {
            cache.insert(query.to_string(), Arc::clone(&report));
        }
        Ok(report)
    }

    fn cached(&self, query: &str) -> Option<Arc<Report>> {
        self.cache.lock().ok()?.get(query).cloned()
    }
}

#[derive(Debug, Default, Deserialize)]
struct SearchParams {
    #[serde(default)]
    query: String,
}

pub fn router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/", get(handle_index))
        .with_state(state)
}

pub async fn run_server(state: Arc<ServerState>, port: u16, open_browser: bool) -> Result<()> {
    let bind_addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    eprintln!("Listening on http://{bind_addr}");

    if open_browser {
        open_page(&local_url(port));
    }

    axum::serve(listener, router(state)).await?;
    Ok(())
}

fn local_url(port: u16) -> String {
    format!("http://localhost:{port}")
}

fn open_page(url: &str) {
    if let Err(e) = open::that_detached(url) {
        tracing::warn!(url, "opening browser: {e}");
    }
}

async fn handle_index(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<SearchParams>,
) -> Response {
    let query = params.query.trim();
    if query.is_empty() {
        return Html(html::page(None, "")).into_response();
    }
    tracing::info!(query, "query");

    match state.lookup_or_run(query).await {
        Ok(report) => Html(html::page(Some(report.as_ref()), query)).into_response(),
        Err(e) => {
            tracing::error!(query, "run failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(html::error_page(query, &e.to_string())),
            )
                .into_response()
        }
    }
}
