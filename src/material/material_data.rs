//! Material Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in material_operations.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Opaque texture handle owned by the host renderer
pub type TextureId = u32;

/// A blendable material parameter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MaterialProperty {
    Float(f32),
    Color([f32; 4]),
}

/// Surface material
///
/// Maps are ordered so that blending visits properties in a fixed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialData {
    pub name: String,

    /// Base color (RGBA, linear)
    #[serde(default = "default_color")]
    pub color: [f32; 4],

    #[serde(default)]
    pub properties: BTreeMap<String, MaterialProperty>,

    /// Texture slot name -> texture
    #[serde(default)]
    pub textures: BTreeMap<String, TextureId>,
}

fn default_color() -> [f32; 4] {
    [1.0, 1.0, 1.0, 1.0]
}
