//! The `harvest` subcommand: walk the search API, write the snapshot.

use std::error::Error;

use starboard::github::{SearchClient, SearchError};
use starboard::harvest::{HarvestParams, harvest};
use starboard::snapshot::Snapshot;

use crate::HarvestOptions;
use crate::config::Config;

pub(crate) async fn run(config: &Config, opts: &HarvestOptions) -> Result<(), Box<dyn Error>> {
    // A missing token is fatal before the first request goes out.
    let token = config.github_token().ok_or(SearchError::MissingToken)?;

    let language = opts
        .language
        .clone()
        .unwrap_or_else(|| config.harvest.language.clone());

    let params = HarvestParams {
        per_page: config.harvest.per_page,
        min_stars: opts.min_stars.unwrap_or(config.harvest.min_stars),
        max_stars: opts.max_stars.unwrap_or(config.harvest.max_stars),
        max_iterations: opts.max_iterations.unwrap_or(config.harvest.max_iterations),
    };

    let output = opts
        .output
        .clone()
        .unwrap_or_else(|| config.harvest.output.clone());

    let client = SearchClient::new(&token, &language)?;
    let report = harvest(&client, &params).await?;

    let snapshot = Snapshot::new(report.repos);
    snapshot.write(&output)?;

    tracing::info!(
        count = snapshot.data.len(),
        iterations = report.iterations,
        output = %output.display(),
        "snapshot written"
    );

    Ok(())
}
