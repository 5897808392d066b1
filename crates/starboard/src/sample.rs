//! Uniform sampling without replacement.

use std::collections::HashSet;

use rand::Rng;
use thiserror::Error;

/// Errors raised by sampling requests.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SampleError {
    /// The request asked for more elements than the population holds.
    #[error("cannot sample {requested} items from a population of {available}")]
    NotEnoughItems { requested: usize, available: usize },
}

/// Draw `k` distinct elements uniformly at random, using a thread-local
/// generator. Every call owns its generator state, so concurrent callers
/// never share a mutable source.
pub fn sample<T: Clone>(items: &[T], k: usize) -> Result<Vec<T>, SampleError> {
    sample_with(items, k, &mut rand::thread_rng())
}

/// Draw `k` distinct elements of `items` uniformly at random.
///
/// Rejection sampling over uniform indices: draw an index in `[0, n)`,
/// keep it if unseen, repeat until `k` indices are collected. Expected
/// draws stay close to `k` as long as `k` is small relative to `n`; at
/// `k == n` this still terminates, it just rejects more often.
pub fn sample_with<T: Clone, R: Rng + ?Sized>(
    items: &[T],
    k: usize,
    rng: &mut R,
) -> Result<Vec<T>, SampleError> {
    if k > items.len() {
        return Err(SampleError::NotEnoughItems {
            requested: k,
            available: items.len(),
        });
    }

    let mut chosen: HashSet<usize> = HashSet::with_capacity(k);
    let mut picked: Vec<T> = Vec::with_capacity(k);

    while picked.len() < k {
        let idx = rng.gen_range(0..items.len());
        if chosen.insert(idx) {
            picked.push(items[idx].clone());
        }
    }

    Ok(picked)
}
