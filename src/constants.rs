//! Shared constants

/// Control value at which topology, attributes and textures flip to the new mesh
pub const DOMINANCE_THRESHOLD: f32 = 0.5;

/// Maximum number of UV channels carried per mesh
pub const MAX_UV_CHANNELS: usize = 8;

/// Name of the primary surface texture slot
pub const MAIN_TEXTURE_SLOT: &str = "_MainTex";

/// Target number of vertices per cell when the grid cell size is derived automatically
pub const GRID_TARGET_POINTS_PER_CELL: f32 = 2.0;
