//! Mesh Module - DOP style
//!
//! - mesh_data.rs: Pure data structures with NO methods
//! - mesh_operations.rs: Pure functions that operate on data
//! - bounds.rs: axis-aligned bounds
//! - vertex.rs: interleaved layout for the renderer

pub mod bounds;
pub mod mesh_data;
pub mod mesh_operations;
pub mod vertex;

pub use bounds::AABB;
pub use mesh_data::{MeshData, MeshStats};
pub use vertex::GpuVertex;

pub use mesh_operations::{
    build_gpu_vertices, compute_bounds, create_empty_mesh, create_mesh, gpu_vertex_bytes,
    memory_stats, recalculate_normals, set_uv_channel, triangle_count, uv_channel,
    validate_mesh, vertex_count,
};
