//! Nearest vertex lookup
//!
//! Every implementation must return the same answer as a linear scan:
//! the minimum Euclidean distance, ties resolved to the lowest target index.

use crate::constants::GRID_TARGET_POINTS_PER_CELL;
use crate::error::{MorphError, MorphResult, OptionExt};
use crate::mesh::bounds::{aabb_from_points, aabb_size};
use cgmath::{InnerSpace, Vector3};

/// Upper bound on grid cells, relative to the number of target vertices
const MAX_CELLS_PER_POINT: usize = 8;
const MIN_CELL_BUDGET: usize = 4096;
const MAX_CELLS_PER_AXIS: i64 = 1 << 20;

/// Nearest-neighbour query over a fixed, non-empty target vertex set
pub trait NearestVertexSearch: Sync {
    /// Index of the nearest target vertex and its distance to `query`
    fn nearest(&self, query: [f32; 3]) -> (usize, f32);

    /// The target vertices being searched
    fn targets(&self) -> &[[f32; 3]];
}

#[inline]
fn distance(a: Vector3<f32>, b: [f32; 3]) -> f32 {
    (a - Vector3::from(b)).magnitude()
}

fn require_targets(targets: &[[f32; 3]]) -> MorphResult<()> {
    if targets.is_empty() {
        return Err(MorphError::EmptyVertexSet {
            role: "target".to_string(),
        });
    }
    Ok(())
}

// ============================================================================
// BRUTE FORCE
// ============================================================================

/// Linear scan over every target vertex
pub struct BruteForceSearch<'a> {
    targets: &'a [[f32; 3]],
}

pub fn create_brute_force_search(targets: &[[f32; 3]]) -> MorphResult<BruteForceSearch<'_>> {
    require_targets(targets)?;
    Ok(BruteForceSearch { targets })
}

impl NearestVertexSearch for BruteForceSearch<'_> {
    fn nearest(&self, query: [f32; 3]) -> (usize, f32) {
        let q = Vector3::from(query);

        let mut best_index = 0;
        let mut best_distance = distance(q, self.targets[0]);

        for (index, &target) in self.targets.iter().enumerate().skip(1) {
            let d = distance(q, target);
            if d < best_distance {
                best_distance = d;
                best_index = index;
            }
        }

        (best_index, best_distance)
    }

    fn targets(&self) -> &[[f32; 3]] {
        self.targets
    }
}

// ============================================================================
// UNIFORM GRID
// ============================================================================

/// Uniform grid over the target vertices
///
/// Cells are stored compressed: `cell_points[cell_start[c]..cell_start[c + 1]]`
/// lists the vertices of cell `c` in ascending index order.
pub struct UniformGridSearch<'a> {
    targets: &'a [[f32; 3]],
    origin: Vector3<f32>,
    cell_size: f32,
    dims: [i64; 3],
    cell_start: Vec<u32>,
    cell_points: Vec<u32>,
}

/// Build a grid; `cell_size` None picks one from the vertex density
pub fn create_grid_search(
    targets: &[[f32; 3]],
    cell_size: Option<f32>,
) -> MorphResult<UniformGridSearch<'_>> {
    require_targets(targets)?;

    if let Some(size) = cell_size {
        if !(size.is_finite() && size > 0.0) {
            return Err(MorphError::InvalidConfig {
                field: "grid_cell_size".to_string(),
                value: size.to_string(),
                reason: "must be a positive finite number".to_string(),
            });
        }
    }

    let bounds = aabb_from_points(targets).ok_or_morph(|| MorphError::EmptyVertexSet {
        role: "target".to_string(),
    })?;
    let extent = aabb_size(&bounds);
    let largest = extent.x.max(extent.y).max(extent.z);

    let mut cell_size = cell_size.unwrap_or_else(|| {
        let cells_per_axis = (targets.len() as f32 / GRID_TARGET_POINTS_PER_CELL)
            .cbrt()
            .max(1.0);
        if largest > 0.0 {
            largest / cells_per_axis
        } else {
            1.0
        }
    });

    let budget = (targets.len() * MAX_CELLS_PER_POINT).max(MIN_CELL_BUDGET);
    let mut dims = grid_dims(extent, cell_size);
    while cell_count(dims) > budget {
        cell_size *= 2.0;
        dims = grid_dims(extent, cell_size);
    }
    log::debug!(
        "[create_grid_search] {} targets, cell size {} ({}x{}x{} cells)",
        targets.len(),
        cell_size,
        dims[0],
        dims[1],
        dims[2]
    );

    let mut grid = UniformGridSearch {
        targets,
        origin: Vector3::new(bounds.min.x, bounds.min.y, bounds.min.z),
        cell_size,
        dims,
        cell_start: Vec::new(),
        cell_points: Vec::new(),
    };

    // Counting sort of vertex indices by cell
    let cells = cell_count(dims);
    let mut counts = vec![0u32; cells + 1];
    let cell_ids: Vec<usize> = targets
        .iter()
        .map(|&p| {
            let c = clamp_coord(&grid, cell_coord(&grid, p));
            linear_index(&grid, c)
        })
        .collect();
    for &id in &cell_ids {
        counts[id + 1] += 1;
    }
    for i in 0..cells {
        counts[i + 1] += counts[i];
    }
    let mut cursor = counts.clone();
    let mut cell_points = vec![0u32; targets.len()];
    for (index, &id) in cell_ids.iter().enumerate() {
        cell_points[cursor[id] as usize] = index as u32;
        cursor[id] += 1;
    }

    grid.cell_start = counts;
    grid.cell_points = cell_points;
    Ok(grid)
}

fn grid_dims(extent: Vector3<f32>, cell_size: f32) -> [i64; 3] {
    let axis = |e: f32| ((e / cell_size).floor() as i64).clamp(0, MAX_CELLS_PER_AXIS) + 1;
    [axis(extent.x), axis(extent.y), axis(extent.z)]
}

fn cell_count(dims: [i64; 3]) -> usize {
    (dims[0] as usize)
        .saturating_mul(dims[1] as usize)
        .saturating_mul(dims[2] as usize)
}

/// Keeps far-away query coordinates well inside i64 range
const MAX_CELL_COORD: i64 = 1 << 40;

/// Cell coordinate of a point, possibly outside the grid
fn cell_coord(grid: &UniformGridSearch<'_>, p: [f32; 3]) -> [i64; 3] {
    let local = (Vector3::from(p) - grid.origin) / grid.cell_size;
    let axis = |v: f32| (v.floor() as i64).clamp(-MAX_CELL_COORD, MAX_CELL_COORD);
    [axis(local.x), axis(local.y), axis(local.z)]
}

fn clamp_coord(grid: &UniformGridSearch<'_>, c: [i64; 3]) -> [i64; 3] {
    [
        c[0].clamp(0, grid.dims[0] - 1),
        c[1].clamp(0, grid.dims[1] - 1),
        c[2].clamp(0, grid.dims[2] - 1),
    ]
}

fn linear_index(grid: &UniformGridSearch<'_>, c: [i64; 3]) -> usize {
    ((c[2] * grid.dims[1] + c[1]) * grid.dims[0] + c[0]) as usize
}

/// Chebyshev distance from a coordinate to the range [0, dim - 1] on one axis
fn axis_gap(q: i64, dim: i64) -> i64 {
    if q < 0 {
        -q
    } else if q >= dim {
        q - (dim - 1)
    } else {
        0
    }
}

impl UniformGridSearch<'_> {
    fn visit_cell(&self, cell: [i64; 3], q: Vector3<f32>, best: &mut (usize, f32)) {
        let id = linear_index(self, cell);
        let start = self.cell_start[id] as usize;
        let end = self.cell_start[id + 1] as usize;

        for &index in &self.cell_points[start..end] {
            let index = index as usize;
            let d = distance(q, self.targets[index]);
            if d < best.1 || (d == best.1 && index < best.0) {
                *best = (index, d);
            }
        }
    }

    /// Visit every grid cell at exactly Chebyshev distance `ring` from `qc`
    fn visit_ring(&self, qc: [i64; 3], ring: i64, q: Vector3<f32>, best: &mut (usize, f32)) {
        let lo = |axis: usize| (qc[axis] - ring).max(0);
        let hi = |axis: usize| (qc[axis] + ring).min(self.dims[axis] - 1);

        for x in lo(0)..=hi(0) {
            for y in lo(1)..=hi(1) {
                let on_shell = (x - qc[0]).abs() == ring || (y - qc[1]).abs() == ring;
                if on_shell {
                    for z in lo(2)..=hi(2) {
                        self.visit_cell([x, y, z], q, best);
                    }
                } else {
                    let below = qc[2] - ring;
                    let above = qc[2] + ring;
                    if below >= 0 && below < self.dims[2] {
                        self.visit_cell([x, y, below], q, best);
                    }
                    if ring > 0 && above >= 0 && above < self.dims[2] {
                        self.visit_cell([x, y, above], q, best);
                    }
                }
            }
        }
    }
}

impl NearestVertexSearch for UniformGridSearch<'_> {
    fn nearest(&self, query: [f32; 3]) -> (usize, f32) {
        let q = Vector3::from(query);
        let qc = cell_coord(self, query);

        // Vertex 0 seeds the search so the result is always defined
        let mut best = (0, distance(q, self.targets[0]));

        let first_ring = (0..3).map(|a| axis_gap(qc[a], self.dims[a])).max().unwrap_or(0);
        let last_ring = (0..3)
            .map(|a| qc[a].abs().max((qc[a] - (self.dims[a] - 1)).abs()))
            .max()
            .unwrap_or(0);
        // Absorbs rounding in cell assignment
        let margin = self.cell_size * 1e-3;

        for ring in first_ring..=last_ring {
            // Points in ring r are at least (r - 1) cells away from the query
            let lower_bound = (ring - 1).max(0) as f32 * self.cell_size;
            if lower_bound > best.1 + margin {
                break;
            }
            self.visit_ring(qc, ring, q, &mut best);
        }

        best
    }

    fn targets(&self) -> &[[f32; 3]] {
        self.targets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lattice() -> Vec<[f32; 3]> {
        let mut points = Vec::new();
        for x in 0..5 {
            for y in 0..4 {
                for z in 0..3 {
                    points.push([x as f32 * 0.5, y as f32 * 0.5, z as f32 * 0.5]);
                }
            }
        }
        points
    }

    #[test]
    fn test_empty_targets_rejected() {
        assert!(matches!(
            create_brute_force_search(&[]),
            Err(MorphError::EmptyVertexSet { .. })
        ));
        assert!(matches!(
            create_grid_search(&[], None),
            Err(MorphError::EmptyVertexSet { .. })
        ));
    }

    #[test]
    fn test_invalid_cell_size_rejected() {
        let points = lattice();
        assert!(matches!(
            create_grid_search(&points, Some(0.0)),
            Err(MorphError::InvalidConfig { .. })
        ));
        assert!(matches!(
            create_grid_search(&points, Some(f32::NAN)),
            Err(MorphError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_brute_force_tie_prefers_first() {
        let targets = [[1.0, 0.0, 0.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
        let search = create_brute_force_search(&targets).expect("non-empty");
        let (index, d) = search.nearest([0.0, 0.0, 0.0]);
        assert_eq!(index, 0);
        assert_eq!(d, 1.0);
    }

    #[test]
    fn test_grid_tie_prefers_first() {
        let targets = [[1.0, 0.0, 0.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
        let search = create_grid_search(&targets, Some(0.3)).expect("non-empty");
        assert_eq!(search.nearest([0.0, 0.0, 0.0]).0, 0);
        // Exactly between vertices 1 and 2
        assert_eq!(search.nearest([-0.5, 0.5, 0.0]).0, 1);
    }

    #[test]
    fn test_grid_matches_brute_force_on_lattice() {
        let targets = lattice();
        let brute = create_brute_force_search(&targets).expect("non-empty");
        for cell_size in [None, Some(0.1), Some(0.5), Some(0.77), Some(10.0)] {
            let grid = create_grid_search(&targets, cell_size).expect("valid grid");
            for query in [
                [0.26, 0.74, 0.5],
                [0.25, 0.25, 0.25],
                [-3.0, 10.0, 0.4],
                [2.0, 1.5, 1.0],
                [100.0, -100.0, 50.0],
            ] {
                assert_eq!(
                    grid.nearest(query),
                    brute.nearest(query),
                    "cell size {:?}, query {:?}",
                    cell_size,
                    query
                );
            }
        }
    }

    #[test]
    fn test_grid_coincident_targets() {
        let targets = [[2.0, 2.0, 2.0]; 4];
        let grid = create_grid_search(&targets, None).expect("valid grid");
        assert_eq!(grid.nearest([0.0, 0.0, 0.0]).0, 0);
        assert_eq!(grid.targets().len(), 4);
    }
}
