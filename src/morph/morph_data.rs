//! Morph Engine Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in morph_operations.rs

use crate::config::MorphConfig;
use crate::correspondence::CorrespondenceTables;
use crate::material::MaterialData;
use crate::mesh::MeshData;

/// The two meshes and materials being morphed between
#[derive(Debug, Clone)]
pub struct MorphSourcesData {
    /// Shown at control value 0
    pub old_mesh: MeshData,
    /// Shown at control value 1
    pub new_mesh: MeshData,
    pub old_material: MaterialData,
    pub new_material: MaterialData,
}

/// Which source currently owns topology, UVs, bounds and textures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MorphSide {
    Old,
    New,
}

/// Morph session state
///
/// The derived mesh and material are owned here and overwritten in place
/// by every step; they stay valid until the next step.
#[derive(Debug, Clone)]
pub struct MorphEngineData {
    pub config: MorphConfig,
    pub sources: MorphSourcesData,

    /// Built once at creation, never rebuilt
    pub tables: CorrespondenceTables,

    pub control_value: f32,

    /// When false, `tick` leaves the derived mesh and material frozen
    pub is_deforming: bool,

    pub derived_mesh: MeshData,
    pub derived_material: MaterialData,

    /// Side that was dominant at the last step, None before the first
    pub last_side: Option<MorphSide>,

    /// Number of completed steps
    pub frame: u64,

    /// Whether the stored control value is outside [0, 1]
    pub control_out_of_range: bool,
}
