//! Linear interpolation helpers
//!
//! All helpers use the `a * (1 - t) + b * t` form: it returns `a` exactly at
//! t = 0 and `b` exactly at t = 1, and extrapolates for t outside [0, 1].

use cgmath::Vector3;

#[inline]
pub fn lerp_scalar(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

#[inline]
pub fn lerp_position(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    let blended = Vector3::from(a) * (1.0 - t) + Vector3::from(b) * t;
    blended.into()
}

#[inline]
pub fn lerp_color(a: [f32; 4], b: [f32; 4], t: f32) -> [f32; 4] {
    [
        lerp_scalar(a[0], b[0], t),
        lerp_scalar(a[1], b[1], t),
        lerp_scalar(a[2], b[2], t),
        lerp_scalar(a[3], b[3], t),
    ]
}
