//! Mesh Operations - Pure DOP Functions
//!
//! All functions take data and return results.
//! No methods, no self, just transformations.

use super::bounds::{aabb_from_points, empty_aabb, AABB};
use super::mesh_data::{MeshData, MeshStats};
use super::vertex::GpuVertex;
use crate::constants::MAX_UV_CHANNELS;
use crate::error::{MorphError, MorphResult};
use cgmath::{InnerSpace, Vector3};

/// Create a mesh from positions and a triangle list, bounds computed from the positions
pub fn create_mesh(name: &str, positions: Vec<[f32; 3]>, indices: Vec<u32>) -> MeshData {
    let bounds = compute_bounds(&positions);
    MeshData {
        name: name.to_string(),
        positions,
        normals: Vec::new(),
        indices,
        uv_channels: Vec::new(),
        bounds,
    }
}

/// Create an empty mesh, used as the derived mesh before the first step
pub fn create_empty_mesh(name: &str) -> MeshData {
    MeshData {
        name: name.to_string(),
        positions: Vec::new(),
        normals: Vec::new(),
        indices: Vec::new(),
        uv_channels: Vec::new(),
        bounds: empty_aabb(),
    }
}

/// Bounds of a vertex set; the degenerate origin box when empty
pub fn compute_bounds(positions: &[[f32; 3]]) -> AABB {
    aabb_from_points(positions).unwrap_or_else(empty_aabb)
}

/// Set a UV channel, padding lower channels with empty ones
pub fn set_uv_channel(data: &mut MeshData, channel: usize, uvs: Vec<[f32; 2]>) {
    if data.uv_channels.len() <= channel {
        data.uv_channels.resize_with(channel + 1, Vec::new);
    }
    data.uv_channels[channel] = uvs;
}

/// Get a UV channel if present and non-empty
pub fn uv_channel(data: &MeshData, channel: usize) -> Option<&[[f32; 2]]> {
    data.uv_channels
        .get(channel)
        .filter(|uvs| !uvs.is_empty())
        .map(|uvs| uvs.as_slice())
}

pub fn vertex_count(data: &MeshData) -> usize {
    data.positions.len()
}

pub fn triangle_count(data: &MeshData) -> usize {
    data.indices.len() / 3
}

/// Check a source mesh is usable for morphing
pub fn validate_mesh(data: &MeshData) -> MorphResult<()> {
    let count = data.positions.len();
    if count == 0 {
        return Err(MorphError::EmptyMesh {
            mesh: data.name.clone(),
        });
    }

    if let Some((index, position)) = data
        .positions
        .iter()
        .enumerate()
        .find(|(_, p)| !p.iter().all(|c| c.is_finite()))
    {
        return Err(MorphError::NonFiniteVertex {
            mesh: data.name.clone(),
            index,
            position: *position,
        });
    }

    if data.indices.len() % 3 != 0 {
        return Err(MorphError::MalformedIndices {
            mesh: data.name.clone(),
            count: data.indices.len(),
        });
    }

    if let Some((position, &index)) = data
        .indices
        .iter()
        .enumerate()
        .find(|&(_, &i)| i as usize >= count)
    {
        return Err(MorphError::IndexOutOfRange {
            mesh: data.name.clone(),
            position,
            index,
            vertex_count: count,
        });
    }

    if data.uv_channels.len() > MAX_UV_CHANNELS {
        return Err(MorphError::TooManyUvChannels {
            mesh: data.name.clone(),
            count: data.uv_channels.len(),
            max: MAX_UV_CHANNELS,
        });
    }

    for (channel, uvs) in data.uv_channels.iter().enumerate() {
        if !uvs.is_empty() && uvs.len() != count {
            return Err(MorphError::UvChannelMismatch {
                mesh: data.name.clone(),
                channel,
                found: uvs.len(),
                expected: count,
            });
        }
    }

    if !data.normals.is_empty() && data.normals.len() != count {
        log::warn!(
            "[validate_mesh] Mesh '{}' has {} normals for {} vertices, normals will be ignored",
            data.name,
            data.normals.len(),
            count
        );
    }

    Ok(())
}

/// Recompute smooth vertex normals into `normals`, reusing its allocation
///
/// Face normals are accumulated unnormalized, so larger triangles weigh more.
/// Vertices touched only by degenerate triangles end up with a zero normal.
pub fn recalculate_normals(positions: &[[f32; 3]], indices: &[u32], normals: &mut Vec<[f32; 3]>) {
    normals.clear();
    normals.resize(positions.len(), [0.0; 3]);

    for tri in indices.chunks_exact(3) {
        let (i0, i1, i2) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let (p0, p1, p2) = match (positions.get(i0), positions.get(i1), positions.get(i2)) {
            (Some(p0), Some(p1), Some(p2)) => {
                (Vector3::from(*p0), Vector3::from(*p1), Vector3::from(*p2))
            }
            _ => {
                log::warn!("[recalculate_normals] Triangle {:?} out of bounds, skipped", tri);
                continue;
            }
        };

        let face = (p1 - p0).cross(p2 - p0);
        for &i in &[i0, i1, i2] {
            let n = &mut normals[i];
            n[0] += face.x;
            n[1] += face.y;
            n[2] += face.z;
        }
    }

    for n in normals.iter_mut() {
        let v = Vector3::from(*n);
        let length = v.magnitude();
        *n = if length > 0.0 && length.is_finite() {
            (v / length).into()
        } else {
            [0.0; 3]
        };
    }
}

/// Interleave positions, normals and one UV channel into `out`
///
/// Missing normals or UVs are written as zeros.
pub fn build_gpu_vertices(data: &MeshData, uv_channel_index: usize, out: &mut Vec<GpuVertex>) {
    let uvs = uv_channel(data, uv_channel_index);
    out.clear();
    out.extend(data.positions.iter().enumerate().map(|(i, &position)| GpuVertex {
        position,
        normal: data.normals.get(i).copied().unwrap_or([0.0; 3]),
        uv: uvs.and_then(|uvs| uvs.get(i)).copied().unwrap_or([0.0; 2]),
    }));
}

/// View interleaved vertices as raw bytes for upload
pub fn gpu_vertex_bytes(vertices: &[GpuVertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Get memory statistics
pub fn memory_stats(data: &MeshData) -> MeshStats {
    let positions_size = data.positions.len() * std::mem::size_of::<[f32; 3]>();
    let normals_size = data.normals.len() * std::mem::size_of::<[f32; 3]>();
    let index_size = data.indices.len() * std::mem::size_of::<u32>();
    let uv_size = data
        .uv_channels
        .iter()
        .map(|uvs| uvs.len() * std::mem::size_of::<[f32; 2]>())
        .sum::<usize>();

    MeshStats {
        vertex_count: vertex_count(data),
        triangle_count: triangle_count(data),
        uv_channel_count: data.uv_channels.iter().filter(|uvs| !uvs.is_empty()).count(),
        positions_size,
        normals_size,
        index_size,
        uv_size,
        total_size: positions_size + normals_size + index_size + uv_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_triangle() -> MeshData {
        create_mesh(
            "tri",
            vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            vec![0, 1, 2],
        )
    }

    #[test]
    fn test_validate_ok() {
        let mut mesh = unit_triangle();
        set_uv_channel(&mut mesh, 2, vec![[0.0, 0.0]; 3]);
        assert!(validate_mesh(&mesh).is_ok());
        assert_eq!(mesh.uv_channels.len(), 3);
        assert!(uv_channel(&mesh, 0).is_none());
        assert_eq!(uv_channel(&mesh, 2).map(|uvs| uvs.len()), Some(3));
    }

    #[test]
    fn test_validate_empty() {
        let mesh = create_mesh("empty", Vec::new(), Vec::new());
        assert!(matches!(
            validate_mesh(&mesh),
            Err(MorphError::EmptyMesh { .. })
        ));
    }

    #[test]
    fn test_validate_index_out_of_range() {
        let mut mesh = unit_triangle();
        mesh.indices = vec![0, 1, 3];
        match validate_mesh(&mesh) {
            Err(MorphError::IndexOutOfRange {
                position,
                index,
                vertex_count,
                ..
            }) => {
                assert_eq!((position, index, vertex_count), (2, 3, 3));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_validate_malformed_indices() {
        let mut mesh = unit_triangle();
        mesh.indices = vec![0, 1];
        assert!(matches!(
            validate_mesh(&mesh),
            Err(MorphError::MalformedIndices { count: 2, .. })
        ));
    }

    #[test]
    fn test_validate_uv_mismatch() {
        let mut mesh = unit_triangle();
        set_uv_channel(&mut mesh, 0, vec![[0.0, 0.0]; 2]);
        assert!(matches!(
            validate_mesh(&mesh),
            Err(MorphError::UvChannelMismatch { channel: 0, found: 2, expected: 3, .. })
        ));
    }

    #[test]
    fn test_validate_non_finite() {
        let mut mesh = unit_triangle();
        mesh.positions[1] = [f32::NAN, 0.0, 0.0];
        assert!(matches!(
            validate_mesh(&mesh),
            Err(MorphError::NonFiniteVertex { index: 1, .. })
        ));
    }

    #[test]
    fn test_recalculate_normals_ccw_triangle() {
        let mesh = unit_triangle();
        let mut normals = Vec::new();
        recalculate_normals(&mesh.positions, &mesh.indices, &mut normals);
        assert_eq!(normals, vec![[0.0, 0.0, 1.0]; 3]);
    }

    #[test]
    fn test_recalculate_normals_degenerate() {
        let positions = vec![[1.0, 1.0, 1.0]; 3];
        let mut normals = vec![[9.0; 3]; 7];
        recalculate_normals(&positions, &[0, 1, 2], &mut normals);
        assert_eq!(normals, vec![[0.0; 3]; 3]);
    }

    #[test]
    fn test_recalculate_normals_shared_edge() {
        // Two triangles folded 90 degrees along the x axis
        let positions = vec![
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, -1.0],
        ];
        let indices = vec![0, 1, 2, 0, 1, 3];
        let mut normals = Vec::new();
        recalculate_normals(&positions, &indices, &mut normals);

        let shared = Vector3::from(normals[0]);
        let expected = Vector3::new(0.0, 1.0, 1.0).normalize();
        assert!((shared - expected).magnitude() < 1e-6);
        assert_eq!(normals[2], [0.0, 0.0, 1.0]);
        assert_eq!(normals[3], [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_gpu_vertices() {
        let mut mesh = unit_triangle();
        set_uv_channel(&mut mesh, 0, vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]);
        recalculate_normals(&mesh.positions, &mesh.indices, &mut mesh.normals);

        let mut out = Vec::new();
        build_gpu_vertices(&mesh, 0, &mut out);
        assert_eq!(out.len(), 3);
        assert_eq!(out[1].position, [1.0, 0.0, 0.0]);
        assert_eq!(out[2].uv, [0.0, 1.0]);
        assert_eq!(out[0].normal, [0.0, 0.0, 1.0]);
        assert_eq!(gpu_vertex_bytes(&out).len(), 3 * 32);

        build_gpu_vertices(&mesh, 5, &mut out);
        assert_eq!(out[2].uv, [0.0, 0.0]);
    }

    #[test]
    fn test_memory_stats() {
        let mesh = unit_triangle();
        let stats = memory_stats(&mesh);
        assert_eq!(stats.vertex_count, 3);
        assert_eq!(stats.triangle_count, 1);
        assert_eq!(stats.total_size, 36 + 12);
    }
}
