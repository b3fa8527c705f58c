//! Correspondence Operations - Pure DOP Functions
//!
//! All functions take data and return results.
//! No methods, no self, just transformations.

use super::correspondence_data::{
    CorrespondenceStats, CorrespondenceTable, CorrespondenceTables, SearchStrategy, VertexPair,
};
use super::nearest::{create_brute_force_search, create_grid_search, NearestVertexSearch};
use crate::error::{MorphError, MorphResult};
use rayon::prelude::*;
use std::collections::HashSet;

/// Pair every source vertex with its nearest target vertex by linear scan
///
/// Ties resolve to the first target vertex in order. Both sets must be non-empty.
pub fn build_correspondence(
    source: &[[f32; 3]],
    target: &[[f32; 3]],
) -> MorphResult<CorrespondenceTable> {
    let search = create_brute_force_search(target)?;
    build_correspondence_with(source, &search, false)
}

/// Pair every source vertex with its nearest vertex according to `search`
///
/// With `parallel` the source vertices are processed on the rayon pool;
/// the resulting table is identical either way.
pub fn build_correspondence_with<S>(
    source: &[[f32; 3]],
    search: &S,
    parallel: bool,
) -> MorphResult<CorrespondenceTable>
where
    S: NearestVertexSearch + ?Sized,
{
    if source.is_empty() {
        return Err(MorphError::EmptyVertexSet {
            role: "source".to_string(),
        });
    }

    let targets = search.targets();
    let pair_for = |&source_vertex: &[f32; 3]| {
        let (index, distance) = search.nearest(source_vertex);
        VertexPair {
            source: source_vertex,
            matched: targets[index],
            matched_index: index as u32,
            distance,
        }
    };

    let pairs: Vec<VertexPair> = if parallel {
        source.par_iter().map(pair_for).collect()
    } else {
        source.iter().map(pair_for).collect()
    };

    Ok(CorrespondenceTable { pairs })
}

/// Build one table with the given strategy
pub fn build_correspondence_using(
    source: &[[f32; 3]],
    target: &[[f32; 3]],
    strategy: SearchStrategy,
    grid_cell_size: Option<f32>,
    parallel: bool,
) -> MorphResult<CorrespondenceTable> {
    match strategy {
        SearchStrategy::BruteForce => {
            let search = create_brute_force_search(target)?;
            build_correspondence_with(source, &search, parallel)
        }
        SearchStrategy::Grid => {
            let search = create_grid_search(target, grid_cell_size)?;
            build_correspondence_with(source, &search, parallel)
        }
    }
}

/// Build the old -> new and new -> old tables
pub fn build_correspondence_tables(
    old_positions: &[[f32; 3]],
    new_positions: &[[f32; 3]],
    strategy: SearchStrategy,
    grid_cell_size: Option<f32>,
    parallel: bool,
) -> MorphResult<CorrespondenceTables> {
    let start = std::time::Instant::now();

    let old_to_new = build_correspondence_using(
        old_positions,
        new_positions,
        strategy,
        grid_cell_size,
        parallel,
    )?;
    let new_to_old = build_correspondence_using(
        new_positions,
        old_positions,
        strategy,
        grid_cell_size,
        parallel,
    )?;

    log::info!(
        "[build_correspondence_tables] {} x {} vertices ({:?}, parallel={}) in {:.2}ms",
        old_positions.len(),
        new_positions.len(),
        strategy,
        parallel,
        start.elapsed().as_secs_f64() * 1000.0
    );

    Ok(CorrespondenceTables {
        old_to_new,
        new_to_old,
    })
}

pub fn table_len(table: &CorrespondenceTable) -> usize {
    table.pairs.len()
}

/// Collapse diagnostics: how many distinct targets were hit and how far matches are
pub fn correspondence_stats(table: &CorrespondenceTable) -> CorrespondenceStats {
    let pair_count = table.pairs.len();
    let distinct_matches = table
        .pairs
        .iter()
        .map(|pair| pair.matched_index)
        .collect::<HashSet<_>>()
        .len();
    let max_distance = table
        .pairs
        .iter()
        .map(|pair| pair.distance)
        .fold(0.0f32, f32::max);
    let mean_distance = if pair_count == 0 {
        0.0
    } else {
        table.pairs.iter().map(|pair| pair.distance as f64).sum::<f64>() as f32
            / pair_count as f32
    };

    CorrespondenceStats {
        pair_count,
        distinct_matches,
        max_distance,
        mean_distance,
    }
}
