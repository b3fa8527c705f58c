//! Correspondence Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in correspondence_operations.rs

use serde::{Deserialize, Serialize};

/// A source vertex paired with its nearest vertex in the other mesh
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexPair {
    pub source: [f32; 3],
    pub matched: [f32; 3],
    /// Index of `matched` in the other mesh's vertex array
    pub matched_index: u32,
    /// Euclidean distance between `source` and `matched`
    pub distance: f32,
}

/// One pair per source vertex, index-aligned with the source mesh
#[derive(Debug, Clone, PartialEq)]
pub struct CorrespondenceTable {
    pub pairs: Vec<VertexPair>,
}

/// Both directions, built once per morph session
#[derive(Debug, Clone, PartialEq)]
pub struct CorrespondenceTables {
    /// Indexed by old mesh vertex, matched against the new mesh
    pub old_to_new: CorrespondenceTable,
    /// Indexed by new mesh vertex, matched against the old mesh
    pub new_to_old: CorrespondenceTable,
}

/// How nearest vertices are looked up while building tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    /// Scan every target vertex
    #[default]
    BruteForce,
    /// Uniform grid over the target vertices
    Grid,
}

/// Collapse diagnostics for one table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrespondenceStats {
    pub pair_count: usize,
    /// Number of distinct target vertices that received at least one match
    pub distinct_matches: usize,
    pub max_distance: f32,
    pub mean_distance: f32,
}

impl std::fmt::Display for CorrespondenceStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Correspondence: {} pairs -> {} distinct targets, distance max {:.4} mean {:.4}",
            self.pair_count, self.distinct_matches, self.max_distance, self.mean_distance
        )
    }
}
