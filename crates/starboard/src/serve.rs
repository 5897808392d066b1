//! HTTP surface over a loaded snapshot.
//!
//! The snapshot is loaded once at startup and shared immutably; handlers
//! only read. `GET /` answers the fixed head slice of the ranked data and
//! `GET /repos/discover` answers a freshly drawn random sample of the same
//! size. A sampling failure answers 500 without touching the process.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::get;
use serde::Serialize;

use crate::sample;
use crate::snapshot::{RepoSummary, Snapshot};

/// Default number of entries in the head slice and in a random sample.
pub const DEFAULT_SLICE_SIZE: usize = 16;

/// Immutable view of the snapshot served to handlers.
pub struct ServeState {
    repos: Vec<RepoSummary>,
    slice_size: usize,
}

impl ServeState {
    /// Wrap a loaded snapshot for serving.
    pub fn new(snapshot: Snapshot, slice_size: usize) -> Self {
        Self {
            repos: snapshot.data,
            slice_size,
        }
    }

    /// First entries of the ranked data, at most `slice_size` of them.
    /// No randomness involved.
    pub fn head_slice(&self) -> &[RepoSummary] {
        let end = self.slice_size.min(self.repos.len());
        &self.repos[..end]
    }

    /// Number of repositories loaded.
    pub fn repo_count(&self) -> usize {
        self.repos.len()
    }
}

/// Response body shared by both routes.
#[derive(Serialize)]
struct RepoListBody {
    data: Vec<RepoSummary>,
}

/// Build the router over a loaded snapshot.
pub fn router(state: Arc<ServeState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/repos/discover", get(discover))
        .with_state(state)
}

async fn index(State(state): State<Arc<ServeState>>) -> Json<RepoListBody> {
    Json(RepoListBody {
        data: state.head_slice().to_vec(),
    })
}

async fn discover(
    State(state): State<Arc<ServeState>>,
) -> Result<Json<RepoListBody>, (StatusCode, String)> {
    match sample::sample(&state.repos, state.slice_size) {
        Ok(data) => Ok(Json(RepoListBody { data })),
        Err(e) => {
            tracing::error!(error = %e, "unable to draw a discovery sample");
            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}

/// Bind and serve until the process is stopped.
pub async fn serve(addr: SocketAddr, state: Arc<ServeState>) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, repo_count = state.repo_count(), "server started");
    axum::serve(listener, router(state)).await
}
