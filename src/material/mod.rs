//! Material Module - DOP style
//!
//! - material_data.rs: Pure data structures with NO methods
//! - material_operations.rs: Pure functions that operate on data

pub mod material_data;
pub mod material_operations;

pub use material_data::{MaterialData, MaterialProperty, TextureId};

pub use material_operations::{
    create_material, lerp_material, lerp_property, property, set_property, set_texture,
    switch_textures, texture,
};
