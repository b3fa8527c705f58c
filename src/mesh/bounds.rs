/// Data-Oriented Axis-Aligned Bounding Box
///
/// Pure functions for mesh bounds - no methods, just data transformations.

use cgmath::{Point3, Vector3};

/// Axis-Aligned Bounding Box - pure data structure
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    pub min: Point3<f32>,
    pub max: Point3<f32>,
}

/// Create new AABB from min/max points
pub fn create_aabb(min: Point3<f32>, max: Point3<f32>) -> AABB {
    AABB { min, max }
}

/// Degenerate AABB at the origin, used for meshes without vertices
pub fn empty_aabb() -> AABB {
    AABB {
        min: Point3::new(0.0, 0.0, 0.0),
        max: Point3::new(0.0, 0.0, 0.0),
    }
}

/// Tightest AABB enclosing every point, None for an empty slice
pub fn aabb_from_points(points: &[[f32; 3]]) -> Option<AABB> {
    let first = points.first()?;
    let mut min = Point3::from(*first);
    let mut max = min;

    for p in &points[1..] {
        min = Point3::new(min.x.min(p[0]), min.y.min(p[1]), min.z.min(p[2]));
        max = Point3::new(max.x.max(p[0]), max.y.max(p[1]), max.z.max(p[2]));
    }

    Some(AABB { min, max })
}

/// Get center point of AABB
pub fn aabb_center(aabb: &AABB) -> Point3<f32> {
    Point3::new(
        (aabb.min.x + aabb.max.x) * 0.5,
        (aabb.min.y + aabb.max.y) * 0.5,
        (aabb.min.z + aabb.max.z) * 0.5,
    )
}

/// Get full extents of AABB
pub fn aabb_size(aabb: &AABB) -> Vector3<f32> {
    aabb.max - aabb.min
}

/// Get half extents of AABB
pub fn aabb_half_extents(aabb: &AABB) -> Vector3<f32> {
    aabb_size(aabb) * 0.5
}

/// Test if AABB contains a point
pub fn aabb_contains_point(aabb: &AABB, point: Point3<f32>) -> bool {
    point.x >= aabb.min.x && point.x <= aabb.max.x &&
    point.y >= aabb.min.y && point.y <= aabb.max.y &&
    point.z >= aabb.min.z && point.z <= aabb.max.z
}
