//! Morph Module - DOP style
//!
//! Blends between two meshes of unrelated topology.
//! - morph_data.rs: Pure data structures with NO methods
//! - morph_operations.rs: Pure functions for creation, control and stepping
//! - shared.rs: lock-wrapped handle for cross-thread control

pub mod morph_data;
pub mod morph_operations;
pub mod shared;

pub use morph_data::{MorphEngineData, MorphSide, MorphSourcesData};

pub use morph_operations::{
    control_value, create_morph_engine, derived_material, derived_mesh, dominant_side,
    interpolate_positions, is_deforming, morph_correspondence_stats, set_control_value,
    set_deforming, step, tick,
};

pub use shared::{
    create_shared_morph_engine, read_derived, set_shared_control_value, share_morph_engine,
    step_shared, tick_shared, SharedMorphEngine,
};
