//! Morph Engine Operations - Pure DOP Functions
//!
//! Functions take the engine data and transform it.
//! No methods, no self, just transformations.

use super::morph_data::{MorphEngineData, MorphSide, MorphSourcesData};
use crate::config::MorphConfig;
use crate::constants::DOMINANCE_THRESHOLD;
use crate::correspondence::{
    build_correspondence_tables, correspondence_stats, CorrespondenceStats, CorrespondenceTable,
    VertexPair,
};
use crate::error::{MorphError, MorphResult};
use crate::interpolation::lerp_position;
use crate::material::{lerp_material, switch_textures, MaterialData};
use crate::mesh::{create_empty_mesh, recalculate_normals, validate_mesh, MeshData};
use rayon::prelude::*;

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Validate the sources, build both correspondence tables and set up the derived buffers
pub fn create_morph_engine(
    sources: MorphSourcesData,
    config: MorphConfig,
) -> MorphResult<MorphEngineData> {
    log::debug!(
        "[create_morph_engine] Starting morph setup '{}' -> '{}'",
        sources.old_mesh.name,
        sources.new_mesh.name
    );

    config.validate()?;

    for mesh in [&sources.old_mesh, &sources.new_mesh] {
        if let Err(e) = validate_mesh(mesh) {
            log::error!("[create_morph_engine] Source mesh rejected: {}", e);
            return Err(e);
        }
    }

    let tables = build_correspondence_tables(
        &sources.old_mesh.positions,
        &sources.new_mesh.positions,
        config.search,
        config.grid_cell_size,
        config.parallel,
    )?;

    let control_value = config.initial_control_value;
    let seed_material = match dominant_side(control_value) {
        MorphSide::Old => &sources.old_material,
        MorphSide::New => &sources.new_material,
    };
    let label = format!("morph:{}->{}", sources.old_mesh.name, sources.new_mesh.name);
    let derived_material = MaterialData {
        name: label.clone(),
        ..seed_material.clone()
    };

    let mut engine = MorphEngineData {
        is_deforming: config.is_deforming,
        sources,
        tables,
        control_value,
        derived_mesh: create_empty_mesh(&label),
        derived_material,
        last_side: None,
        frame: 0,
        control_out_of_range: !(0.0..=1.0).contains(&control_value),
        config,
    };

    log::info!(
        "[create_morph_engine] Morph '{}' ready: {} old vertices, {} new vertices",
        label,
        engine.sources.old_mesh.positions.len(),
        engine.sources.new_mesh.positions.len()
    );

    if engine.config.step_on_create {
        step(&mut engine)?;
    }

    Ok(engine)
}

// ============================================================================
// CONTROL
// ============================================================================

/// Side whose topology is shown at control value `t`
pub fn dominant_side(t: f32) -> MorphSide {
    if t < DOMINANCE_THRESHOLD {
        MorphSide::Old
    } else {
        MorphSide::New
    }
}

/// Store a new control value
///
/// Values outside [0, 1] are kept as-is and extrapolate past the source
/// shapes; a warning is logged when the value first leaves the range.
/// Non-finite values are ignored.
pub fn set_control_value(engine: &mut MorphEngineData, value: f32) {
    if !value.is_finite() {
        log::warn!(
            "[set_control_value] Ignoring non-finite control value {}, keeping {}",
            value,
            engine.control_value
        );
        return;
    }

    let out_of_range = !(0.0..=1.0).contains(&value);
    if out_of_range && !engine.control_out_of_range {
        log::warn!(
            "[set_control_value] Control value {} is outside [0, 1], positions will extrapolate",
            value
        );
    }

    engine.control_out_of_range = out_of_range;
    engine.control_value = value;
}

pub fn control_value(engine: &MorphEngineData) -> f32 {
    engine.control_value
}

/// Enable or freeze per-tick recomputation
pub fn set_deforming(engine: &mut MorphEngineData, is_deforming: bool) {
    if engine.is_deforming != is_deforming {
        log::debug!("[set_deforming] is_deforming = {}", is_deforming);
    }
    engine.is_deforming = is_deforming;
}

pub fn is_deforming(engine: &MorphEngineData) -> bool {
    engine.is_deforming
}

// ============================================================================
// PER-FRAME UPDATE
// ============================================================================

/// Interpolate every pair of `table` at `t` into `out`
///
/// Pairs of the old -> new table blend source toward match; pairs of the
/// new -> old table blend match toward source. Either way the result is the
/// old mesh vertex at t = 0 and the new mesh vertex at t = 1.
pub fn interpolate_positions(
    table: &CorrespondenceTable,
    side: MorphSide,
    t: f32,
    parallel: bool,
    out: &mut Vec<[f32; 3]>,
) {
    let blend = |pair: &VertexPair| match side {
        MorphSide::Old => lerp_position(pair.source, pair.matched, t),
        MorphSide::New => lerp_position(pair.matched, pair.source, t),
    };

    out.clear();
    if parallel {
        out.par_extend(table.pairs.par_iter().map(blend));
    } else {
        out.extend(table.pairs.iter().map(blend));
    }
}

/// Recompute the derived mesh and material from the current control value
///
/// Positions blend continuously; topology, UVs, bounds and the switched
/// textures come wholesale from the dominant side, which flips at 0.5.
pub fn step(engine: &mut MorphEngineData) -> MorphResult<()> {
    let t = engine.control_value;
    let side = dominant_side(t);

    let (table, mesh, material) = match side {
        MorphSide::Old => (
            &engine.tables.old_to_new,
            &engine.sources.old_mesh,
            &engine.sources.old_material,
        ),
        MorphSide::New => (
            &engine.tables.new_to_old,
            &engine.sources.new_mesh,
            &engine.sources.new_material,
        ),
    };

    if table.pairs.len() != mesh.positions.len() {
        log::error!(
            "[step] Correspondence table for {:?} has {} pairs but mesh '{}' has {} vertices",
            side,
            table.pairs.len(),
            mesh.name,
            mesh.positions.len()
        );
        return Err(MorphError::Precondition(format!(
            "correspondence table for {:?} side has {} pairs, mesh '{}' has {} vertices",
            side,
            table.pairs.len(),
            mesh.name,
            mesh.positions.len()
        )));
    }

    let derived = &mut engine.derived_mesh;
    interpolate_positions(table, side, t, engine.config.parallel, &mut derived.positions);
    derived.indices.clone_from(&mesh.indices);
    derived.uv_channels.clone_from(&mesh.uv_channels);
    derived.bounds = mesh.bounds;
    recalculate_normals(&derived.positions, &derived.indices, &mut derived.normals);

    lerp_material(
        &mut engine.derived_material,
        &engine.sources.old_material,
        &engine.sources.new_material,
        t.clamp(0.0, 1.0),
        material,
    );
    switch_textures(
        &mut engine.derived_material,
        material,
        &engine.config.switched_texture_slots,
    );

    if engine.last_side != Some(side) {
        log::debug!(
            "[step] Dominant side is now {:?} at control value {} ({} vertices)",
            side,
            t,
            engine.derived_mesh.positions.len()
        );
        engine.last_side = Some(side);
    }
    engine.frame += 1;

    Ok(())
}

/// Per-frame hook: steps only while deforming, returns whether it stepped
pub fn tick(engine: &mut MorphEngineData) -> MorphResult<bool> {
    if !engine.is_deforming {
        return Ok(false);
    }
    step(engine)?;
    Ok(true)
}

// ============================================================================
// QUERIES
// ============================================================================

pub fn derived_mesh(engine: &MorphEngineData) -> &MeshData {
    &engine.derived_mesh
}

pub fn derived_material(engine: &MorphEngineData) -> &MaterialData {
    &engine.derived_material
}

/// Collapse diagnostics for the old -> new and new -> old tables
pub fn morph_correspondence_stats(
    engine: &MorphEngineData,
) -> (CorrespondenceStats, CorrespondenceStats) {
    (
        correspondence_stats(&engine.tables.old_to_new),
        correspondence_stats(&engine.tables.new_to_old),
    )
}
