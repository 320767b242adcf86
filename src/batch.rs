//! Batch Queries
//!
//! Membership tests for many queries against one set. Large batches are
//! split into contiguous chunks, each handled by a scoped worker thread
//! borrowing the set read-only; results keep the order of the queries.

use crate::cell::CharSet;
use crate::config::Config;
use crate::error::{CellError, Result};
use crate::search::Lookup;

/// Locate every query; `result[i]` belongs to `queries[i]`
pub fn locate_all<T>(set: &CharSet, queries: &[T], config: &Config) -> Result<Vec<Lookup>>
where
    T: AsRef<[u8]> + Sync,
{
    let workers = config.workers.max(1);
    if workers == 1 || queries.len() < config.parallel_threshold {
        return Ok(queries.iter().map(|q| set.locate(q.as_ref())).collect());
    }

    let chunk_size = queries.len().div_ceil(workers).max(1);
    let mut results = vec![Lookup::NotFound; queries.len()];
    tracing::trace!(
        queries = queries.len(),
        workers,
        chunk_size,
        "splitting batch query"
    );

    crossbeam::thread::scope(|scope| {
        for (chunk, out) in queries.chunks(chunk_size).zip(results.chunks_mut(chunk_size)) {
            scope.spawn(move |_| {
                for (query, slot) in chunk.iter().zip(out.iter_mut()) {
                    *slot = set.locate(query.as_ref());
                }
            });
        }
    })
    .map_err(|e| CellError::Worker(format!("{:?}", e)))?;

    Ok(results)
}

/// Membership of every query; `result[i]` belongs to `queries[i]`
pub fn contains_all<T>(set: &CharSet, queries: &[T], config: &Config) -> Result<Vec<bool>>
where
    T: AsRef<[u8]> + Sync,
{
    Ok(locate_all(set, queries, config)?
        .into_iter()
        .map(|lookup| lookup.is_found())
        .collect())
}
