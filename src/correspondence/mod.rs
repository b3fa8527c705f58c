//! Correspondence Module - DOP style
//!
//! Nearest-vertex mapping between two meshes of unrelated topology.
//! - correspondence_data.rs: Pure data structures with NO methods
//! - correspondence_operations.rs: Pure functions that build and inspect tables
//! - nearest.rs: the nearest vertex search seam (linear scan, uniform grid)

pub mod correspondence_data;
pub mod correspondence_operations;
pub mod nearest;

pub use correspondence_data::{
    CorrespondenceStats, CorrespondenceTable, CorrespondenceTables, SearchStrategy, VertexPair,
};
pub use nearest::{
    create_brute_force_search, create_grid_search, BruteForceSearch, NearestVertexSearch,
    UniformGridSearch,
};

pub use correspondence_operations::{
    build_correspondence, build_correspondence_tables, build_correspondence_using,
    build_correspondence_with, correspondence_stats, table_len,
};
