//! Shared morph engine handle
//!
//! Control values may be written from any thread; the step runs under the
//! write lock so readers never observe a half-written derived mesh.

use super::morph_data::{MorphEngineData, MorphSourcesData};
use super::morph_operations::{create_morph_engine, set_control_value, step, tick};
use crate::config::MorphConfig;
use crate::error::MorphResult;
use crate::material::MaterialData;
use crate::mesh::MeshData;
use parking_lot::RwLock;
use std::sync::Arc;

pub type SharedMorphEngine = Arc<RwLock<MorphEngineData>>;

pub fn create_shared_morph_engine(
    sources: MorphSourcesData,
    config: MorphConfig,
) -> MorphResult<SharedMorphEngine> {
    Ok(share_morph_engine(create_morph_engine(sources, config)?))
}

pub fn share_morph_engine(engine: MorphEngineData) -> SharedMorphEngine {
    Arc::new(RwLock::new(engine))
}

pub fn set_shared_control_value(engine: &SharedMorphEngine, value: f32) {
    set_control_value(&mut engine.write(), value);
}

pub fn step_shared(engine: &SharedMorphEngine) -> MorphResult<()> {
    step(&mut engine.write())
}

pub fn tick_shared(engine: &SharedMorphEngine) -> MorphResult<bool> {
    tick(&mut engine.write())
}

/// Run `f` against the current derived mesh and material under the read lock
pub fn read_derived<R>(
    engine: &SharedMorphEngine,
    f: impl FnOnce(&MeshData, &MaterialData) -> R,
) -> R {
    let guard = engine.read();
    f(&guard.derived_mesh, &guard.derived_material)
}
