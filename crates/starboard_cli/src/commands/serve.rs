//! The `serve` subcommand: load the snapshot, serve discovery endpoints.

use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;

use starboard::serve::{ServeState, serve};
use starboard::snapshot::Snapshot;

use crate::ServeOptions;
use crate::config::Config;

pub(crate) async fn run(config: &Config, opts: &ServeOptions) -> Result<(), Box<dyn Error>> {
    let path = opts
        .snapshot
        .clone()
        .unwrap_or_else(|| config.serve.snapshot.clone());
    let slice_size = opts.slice_size.unwrap_or(config.serve.slice_size);

    let addr: SocketAddr = match opts.addr {
        Some(addr) => addr,
        None => config.serve.addr.parse()?,
    };

    // A snapshot that fails to load means nothing can be served; give up
    // before binding the socket.
    let snapshot = Snapshot::load(&path)?;
    tracing::info!(
        repo_count = snapshot.data.len(),
        path = %path.display(),
        "loaded snapshot"
    );

    let state = Arc::new(ServeState::new(snapshot, slice_size));
    serve(addr, state).await?;

    Ok(())
}
