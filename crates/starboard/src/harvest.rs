//! Star-windowed harvesting of the search result universe.
//!
//! A single search query can address at most [`RESULT_CAP`] results across
//! all of its pages, however many actually match. Star count is the sort
//! key, so after draining a window's pages the harvester lowers the ceiling
//! to the smallest star count it has seen and starts paging again, covering
//! the full requested range one sub-range at a time. Windows stay inclusive
//! on both ends, which means the boundary repository reappears in the next
//! window; duplicate ids are dropped as they are seen rather than excluded
//! up front.

use std::collections::HashSet;

use tracing::{info, warn};

use crate::github::{RepoSearch, SearchError, to_summary};
use crate::snapshot::RepoSummary;

/// Maximum number of results the search service exposes per query.
pub const RESULT_CAP: u32 = 1000;

/// Default page size for search requests.
pub const DEFAULT_PER_PAGE: u32 = 100;

/// Default safety ceiling on harvest iterations.
pub const DEFAULT_MAX_ITERATIONS: u32 = 200;

/// Query parameters for one fetch against the search service.
#[derive(Debug, Clone)]
pub struct SearchWindow {
    /// Fixed page size.
    pub per_page: u32,
    /// Current page, 1-based.
    pub page: u32,
    /// Fixed star-count floor.
    pub min_stars: u64,
    /// Star-count ceiling, narrowed as windows drain.
    pub max_stars: u64,
}

impl SearchWindow {
    /// Create a window positioned at its first page.
    pub fn new(per_page: u32, min_stars: u64, max_stars: u64) -> Self {
        Self {
            per_page,
            page: 1,
            min_stars,
            max_stars,
        }
    }

    /// Last page the service will address for a single query.
    pub fn last_page(&self) -> u32 {
        RESULT_CAP.div_ceil(self.per_page)
    }
}

/// Bounds for a harvest run.
#[derive(Debug, Clone)]
pub struct HarvestParams {
    /// Page size for every request.
    pub per_page: u32,
    /// Star-count floor of the requested range.
    pub min_stars: u64,
    /// Star-count ceiling the first window starts from.
    pub max_stars: u64,
    /// Safety ceiling on passes through the loop.
    pub max_iterations: u32,
}

impl Default for HarvestParams {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            min_stars: 200,
            max_stars: 1_000_000,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Outcome of a harvest run.
///
/// The two flags mirror the warnings logged during the run; either one set
/// means the result set may be incomplete. That is reported, not treated as
/// a failure.
#[derive(Debug, Default)]
pub struct HarvestReport {
    /// Deduplicated summaries in the order they were first seen.
    pub repos: Vec<RepoSummary>,
    /// Passes taken through the loop, including window resets.
    pub iterations: u32,
    /// The safety ceiling ended the run early.
    pub iteration_limit_reached: bool,
    /// A window narrowed down to (or past) the floor while its page cap was
    /// still being hit.
    pub window_collapsed: bool,
}

/// Walk the search service page by page, narrowing the star window, until
/// the result universe is exhausted or the iteration budget runs out.
///
/// Client errors are fatal to the run; the two harvest anomalies (budget
/// exhausted, window collapsed to the floor) are logged as warnings and
/// flagged on the report instead.
pub async fn harvest(
    client: &impl RepoSearch,
    params: &HarvestParams,
) -> Result<HarvestReport, SearchError> {
    let mut window = SearchWindow::new(params.per_page, params.min_stars, params.max_stars);
    let last_page = window.last_page();

    let mut seen: HashSet<u64> = HashSet::new();
    let mut report = HarvestReport::default();
    let mut iteration = 1u32;

    loop {
        info!(
            page = window.page,
            per_page = window.per_page,
            min_stars = window.min_stars,
            max_stars = window.max_stars,
            iteration,
            "fetching repositories"
        );

        let result = client.search(&window).await?;
        let count = result.items.len();

        for (i, item) in result.items.iter().enumerate() {
            if seen.contains(&item.id) {
                continue;
            }

            report.repos.push(to_summary(item));
            seen.insert(item.id);

            // The page is sorted by stars descending, so the final item of
            // the window's last addressable page carries the smallest count
            // seen so far; it becomes the ceiling of the next window.
            if window.page == last_page && i == count - 1 {
                window.max_stars = item.stargazers_count;
            }
        }

        // Every pass consumes budget, window resets included.
        iteration += 1;

        if count == 0 {
            break;
        }

        if iteration >= params.max_iterations {
            warn!(
                max_iterations = params.max_iterations,
                collected = report.repos.len(),
                "iteration budget exhausted, result set may be incomplete"
            );
            report.iteration_limit_reached = true;
            break;
        }

        if window.page == last_page {
            if window.max_stars <= window.min_stars {
                warn!(
                    min_stars = window.min_stars,
                    max_stars = window.max_stars,
                    "window narrowed to the floor, entries past the last page may be missed"
                );
                report.window_collapsed = true;
            }

            window.page = 1;
            continue;
        }

        window.page += 1;
    }

    report.iterations = iteration - 1;
    Ok(report)
}
