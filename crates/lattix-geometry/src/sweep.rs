//! Solid sweep of a spherical brush along a voxel trajectory.
//!
//! A helix trajectory voxelises to a chain of isolated cells. To give it a
//! wire cross-section, a solid sphere of the minor radius is stamped at every
//! trajectory voxel and the union is re-voxelised. The brush is stamped at
//! discrete positions only: consecutive stamps must overlap for the wire to
//! come out gap-free, which holds when the trajectory spacing is small
//! compared with the brush diameter.

use crate::voxelise::{GridKind, VoxelSet};

/// Spare cells added beyond the brush's reach when sizing the sweep grid.
///
/// Heuristic: a sphere-pipeline brush of radius `r` reaches `2r + 1`, so the
/// grid is padded by `2r + SWEEP_MARGIN` and nine cells stay unused.
pub const SWEEP_MARGIN: usize = 10;

/// Result of a sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepOutcome {
    /// The unique voxels of the thickened body.
    pub body: VoxelSet,
    /// Brush points stamped before deduplication.
    pub swept_points: usize,
}

/// Stamp `brush` at every voxel of `trajectory` and voxelise the union.
///
/// The grid spans the trajectory's maxima plus the brush's largest coordinate
/// minus one, plus [`SWEEP_MARGIN`], on every axis.
pub fn sweep_sphere(trajectory: &VoxelSet, brush: &VoxelSet, kind: GridKind) -> SweepOutcome {
    let (Some(path_max), Some(brush_max)) = (trajectory.max_corner(), brush.max_corner()) else {
        return SweepOutcome {
            body: VoxelSet::default(),
            swept_points: 0,
        };
    };

    let reach = brush_max.into_iter().max().unwrap_or(0);
    let padding = reach.saturating_sub(1) + SWEEP_MARGIN;
    log::debug!("sweep padding {} for brush reach {}", padding, reach);

    let mut grid = kind.allocate(path_max.map(|m| m + padding));
    for &[x0, y0, z0] in trajectory {
        for &[bx, by, bz] in brush {
            grid.mark([x0 + bx, y0 + by, z0 + bz]);
        }
    }

    SweepOutcome {
        body: grid.occupied(),
        swept_points: trajectory.len() * brush.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::RecordedCounts;
    use crate::shapes::{generate_sphere, GenerationSettings, SphereParams};

    fn brush(radius: u32) -> VoxelSet {
        let settings = GenerationSettings::default();
        let params = SphereParams::new(i64::from(radius)).unwrap();
        generate_sphere(&params, &settings, &mut RecordedCounts::default())
    }

    #[test]
    fn test_single_stamp_is_translated_brush() {
        let brush = brush(1);
        let trajectory = VoxelSet::from_voxels([[4, 5, 6]]);
        let outcome = sweep_sphere(&trajectory, &brush, GridKind::Dense);

        assert_eq!(outcome.swept_points, brush.len());
        let expected =
            VoxelSet::from_voxels(brush.iter().map(|b| [b[0] + 4, b[1] + 5, b[2] + 6]));
        assert_eq!(outcome.body, expected);
    }

    #[test]
    fn test_overlapping_stamps_are_deduplicated() {
        let brush = brush(2);
        let trajectory = VoxelSet::from_voxels((1..=10).map(|x| [x, 1, 1]));
        let outcome = sweep_sphere(&trajectory, &brush, GridKind::Dense);

        assert_eq!(outcome.swept_points, 10 * brush.len());
        assert!(outcome.body.len() < outcome.swept_points);
        assert!(outcome.body.len() > brush.len());
        // A straight rod: contiguous along x at the brush centre line.
        let [_, cy, cz] = brush.max_corner().unwrap().map(|m| m / 2 + 1);
        for x in 2..=13 {
            assert!(outcome.body.contains(&[x, cy, cz]), "gap at x = {}", x);
        }
    }

    #[test]
    fn test_sparse_sweep_matches_dense() {
        let brush = brush(1);
        let trajectory = VoxelSet::from_voxels([[1, 1, 1], [3, 2, 1], [5, 4, 2], [6, 6, 4]]);
        let dense = sweep_sphere(&trajectory, &brush, GridKind::Dense);
        let sparse = sweep_sphere(&trajectory, &brush, GridKind::Sparse);
        assert_eq!(dense, sparse);
    }

    #[test]
    fn test_empty_trajectory() {
        let outcome = sweep_sphere(&VoxelSet::default(), &brush(1), GridKind::Dense);
        assert!(outcome.body.is_empty());
        assert_eq!(outcome.swept_points, 0);
    }

    #[test]
    fn test_padding_follows_brush_extent() {
        // A brush far wider than any small sphere still fits the grid.
        let brush = VoxelSet::from_voxels([[1, 1, 1], [40, 1, 1], [1, 25, 3]]);
        let trajectory = VoxelSet::from_voxels([[2, 2, 2], [3, 2, 2]]);
        let outcome = sweep_sphere(&trajectory, &brush, GridKind::Dense);

        assert_eq!(outcome.swept_points, 6);
        assert_eq!(outcome.body.len(), 6);
        assert!(outcome.body.contains(&[43, 3, 3]));
        assert!(outcome.body.contains(&[4, 27, 5]));
        assert_eq!(outcome, sweep_sphere(&trajectory, &brush, GridKind::Sparse));
    }
}
