// Hearth Morph - Data-Oriented Programming (DOP) Architecture
//
// Blends between two meshes whose vertex counts and topology differ.
// - correspondence builds nearest-vertex tables once per session
// - morph steps the derived mesh and material from a control value
// - Pure functions over methods: *_data.rs holds data, *_operations.rs transforms it
//
// For new code, prefer:
// - morph::create_morph_engine + morph::step for single-threaded use
// - morph::shared for control from other threads

// Constants module
pub mod constants;

// Core modules
pub mod config;
pub mod error;
pub mod interpolation;

// Geometry and surface
pub mod material;
pub mod mesh;

// Morphing
pub mod correspondence;
pub mod driver;
pub mod morph;

pub use config::{load_config, parse_config, MorphConfig};
pub use error::{MorphError, MorphResult, OptionExt};

pub use correspondence::{
    build_correspondence, build_correspondence_tables, correspondence_stats, CorrespondenceStats,
    CorrespondenceTable, CorrespondenceTables, NearestVertexSearch, SearchStrategy, VertexPair,
};
pub use driver::{sample_ping_pong, PingPongDriverData};
pub use material::{MaterialData, MaterialProperty, TextureId};
pub use mesh::{create_mesh, GpuVertex, MeshData, AABB};
pub use morph::{
    create_morph_engine, create_shared_morph_engine, set_control_value, step, tick,
    MorphEngineData, MorphSide, MorphSourcesData, SharedMorphEngine,
};
