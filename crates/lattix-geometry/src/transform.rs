//! Affine transformations and octant normalisation for point clouds.
//!
//! The occupancy grid is addressed by non-negative integers only, so every
//! voxelisation pipeline first shifts its cloud into the positive octant with
//! [`normalise_octant`]. Both that shift and the reflection that turns a
//! right-handed helix into a left-handed one are [`Transform`]s.

use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

/// A Cartesian axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    #[default]
    Z,
}

impl Axis {
    /// Component index of this axis in a coordinate triple.
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// An affine transformation: linear part + translation.
#[derive(Debug, Clone)]
pub struct Transform {
    /// 3x3 linear part.
    pub matrix: Matrix3<f64>,
    /// Translation vector.
    pub translation: Vector3<f64>,
}

impl Transform {
    /// Create a pure translation.
    pub fn translation(dx: f64, dy: f64, dz: f64) -> Self {
        Self {
            matrix: Matrix3::identity(),
            translation: Vector3::new(dx, dy, dz),
        }
    }

    /// Reflection through the coordinate plane normal to `axis`.
    pub fn mirror(axis: Axis) -> Self {
        let mut diagonal = Vector3::repeat(1.0);
        diagonal[axis.index()] = -1.0;
        Self {
            matrix: Matrix3::from_diagonal(&diagonal),
            translation: Vector3::zeros(),
        }
    }

    /// Apply this transformation to a 3D point.
    pub fn apply(&self, point: &[f64; 3]) -> [f64; 3] {
        let result = self.matrix * Vector3::from(*point) + self.translation;
        [result.x, result.y, result.z]
    }

    /// Apply this transformation to every point of a cloud.
    pub fn apply_all(&self, points: &[[f64; 3]]) -> Vec<[f64; 3]> {
        points.iter().map(|p| self.apply(p)).collect()
    }
}

/// Per-axis minimum of a cloud, or `None` when the cloud is empty.
pub fn min_corner(points: &[[f64; 3]]) -> Option<Vector3<f64>> {
    let (first, rest) = points.split_first()?;
    Some(rest.iter().fold(Vector3::from(*first), |acc, p| {
        acc.inf(&Vector3::from(*p))
    }))
}

/// Shift a cloud so that its minimum along every axis is exactly 1.
///
/// Each axis is treated independently: $x' = x - \min(x) + 1$. The one-unit
/// margin keeps the lowest layer of samples off the zero-index boundary of
/// the occupancy grid.
pub fn normalise_octant(points: &[[f64; 3]]) -> Vec<[f64; 3]> {
    let Some(min) = min_corner(points) else {
        return Vec::new();
    };
    let to_origin = Transform::translation(-min.x, -min.y, -min.z);
    let lift = Transform::translation(1.0, 1.0, 1.0);
    points.iter().map(|p| lift.apply(&to_origin.apply(p))).collect()
}
