//! Material Operations - Pure DOP Functions
//!
//! All functions take data and return results.
//! No methods, no self, just transformations.

use super::material_data::{MaterialData, MaterialProperty, TextureId};
use crate::interpolation::{lerp_color, lerp_scalar};
use std::collections::BTreeMap;

/// Create a material with a base color and no properties or textures
pub fn create_material(name: &str, color: [f32; 4]) -> MaterialData {
    MaterialData {
        name: name.to_string(),
        color,
        properties: BTreeMap::new(),
        textures: BTreeMap::new(),
    }
}

pub fn set_property(data: &mut MaterialData, name: &str, value: MaterialProperty) {
    data.properties.insert(name.to_string(), value);
}

pub fn property(data: &MaterialData, name: &str) -> Option<MaterialProperty> {
    data.properties.get(name).copied()
}

/// Assign a texture to a slot; None clears the slot
pub fn set_texture(data: &mut MaterialData, slot: &str, texture: Option<TextureId>) {
    match texture {
        Some(id) => {
            data.textures.insert(slot.to_string(), id);
        }
        None => {
            data.textures.remove(slot);
        }
    }
}

pub fn texture(data: &MaterialData, slot: &str) -> Option<TextureId> {
    data.textures.get(slot).copied()
}

/// Blend two properties of the same kind; None on a kind mismatch
pub fn lerp_property(
    a: MaterialProperty,
    b: MaterialProperty,
    t: f32,
) -> Option<MaterialProperty> {
    match (a, b) {
        (MaterialProperty::Float(a), MaterialProperty::Float(b)) => {
            Some(MaterialProperty::Float(lerp_scalar(a, b, t)))
        }
        (MaterialProperty::Color(a), MaterialProperty::Color(b)) => {
            Some(MaterialProperty::Color(lerp_color(a, b, t)))
        }
        _ => None,
    }
}

/// Overwrite `dst` color and properties with the blend of `a` and `b`
///
/// Properties that only one side has, or whose kinds differ, are taken from
/// `fallback` when it has them and from whichever side has them otherwise.
/// Textures are left untouched; see `switch_textures`.
pub fn lerp_material(
    dst: &mut MaterialData,
    a: &MaterialData,
    b: &MaterialData,
    t: f32,
    fallback: &MaterialData,
) {
    dst.color = lerp_color(a.color, b.color, t);

    dst.properties
        .retain(|name, _| a.properties.contains_key(name) || b.properties.contains_key(name));

    for name in a.properties.keys().chain(b.properties.keys()) {
        let blended = match (a.properties.get(name), b.properties.get(name)) {
            (Some(&pa), Some(&pb)) => lerp_property(pa, pb, t),
            _ => None,
        };
        let value = blended
            .or_else(|| fallback.properties.get(name).copied())
            .or_else(|| a.properties.get(name).copied())
            .or_else(|| b.properties.get(name).copied());

        if let Some(value) = value {
            match dst.properties.get_mut(name) {
                Some(existing) => *existing = value,
                None => {
                    dst.properties.insert(name.clone(), value);
                }
            }
        }
    }
}

/// Copy the listed texture slots from `source` into `dst`, clearing slots `source` lacks
pub fn switch_textures(dst: &mut MaterialData, source: &MaterialData, slots: &[String]) {
    for slot in slots {
        set_texture(dst, slot, texture(source, slot));
    }
}
