//! Mesh Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in mesh_operations.rs

use super::bounds::AABB;

/// Triangle mesh with per-vertex attributes stored as separate arrays
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    /// Diagnostic name, used in errors and logs
    pub name: String,

    pub positions: Vec<[f32; 3]>,

    /// Empty or one entry per vertex
    pub normals: Vec<[f32; 3]>,

    /// Flat triangle list, three indices per triangle
    pub indices: Vec<u32>,

    /// Each channel is empty or one entry per vertex
    pub uv_channels: Vec<Vec<[f32; 2]>>,

    pub bounds: AABB,
}

/// Memory statistics for mesh
#[derive(Debug, Clone)]
pub struct MeshStats {
    pub vertex_count: usize,
    pub triangle_count: usize,
    pub uv_channel_count: usize,
    pub positions_size: usize,
    pub normals_size: usize,
    pub index_size: usize,
    pub uv_size: usize,
    pub total_size: usize,
}

impl std::fmt::Display for MeshStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Mesh: {} vertices, {} triangles, {} uv channels, {} bytes total (pos: {}, norm: {}, idx: {}, uv: {})",
            self.vertex_count,
            self.triangle_count,
            self.uv_channel_count,
            self.total_size,
            self.positions_size,
            self.normals_size,
            self.index_size,
            self.uv_size
        )
    }
}
