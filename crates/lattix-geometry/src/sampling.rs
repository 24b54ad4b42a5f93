//! Parametric sampling of continuous shapes.
//!
//! Each sampler evaluates a shape's parametric equations on a dense grid of
//! parameter values and returns the raw, real-valued point cloud. Radial and
//! axial parameters advance in unit steps so that every integer level is
//! represented, while angles are heavily oversampled: once the cloud is
//! truncated onto the integer grid, every voxel the shape passes through
//! receives at least one sample.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::shapes::{CylinderParams, Handedness, HelixParams, SphereParams};
use crate::transform::{Axis, Transform};

/// Largest rounding error, in grid units, the helix apex lift may introduce.
const APEX_LIFT_TOLERANCE: f64 = 1e-6;

/// Angular sampling densities used by the samplers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resolution {
    /// Azimuth samples over $[0, 2\pi]$ for cylinders.
    pub cylinder_angles: usize,
    /// Samples of both the polar angle over $[0, \pi]$ and the azimuth over
    /// $[0, 2\pi]$ for spheres.
    pub sphere_angles: usize,
    /// Trajectory samples per helix turn.
    pub helix_samples_per_turn: usize,
}

impl Default for Resolution {
    fn default() -> Self {
        Self {
            cylinder_angles: 2000,
            sphere_angles: 1000,
            helix_samples_per_turn: 100,
        }
    }
}

/// `n` evenly spaced values over `[start, stop]`, both endpoints included.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| i as f64 * step + start).collect();
            values[n - 1] = stop;
            values
        }
    }
}

/// Sample a solid cylinder standing on the xy-plane with its axis along z.
pub fn sample_cylinder(params: &CylinderParams, resolution: &Resolution) -> Vec<[f64; 3]> {
    let radius = params.radius();
    let height = params.height();
    let radii = linspace(0.0, f64::from(radius), radius as usize + 1);
    let angles = linspace(0.0, 2.0 * PI, resolution.cylinder_angles);
    let heights = linspace(0.0, f64::from(height), height as usize + 1);

    let mut points = Vec::with_capacity(radii.len() * angles.len() * heights.len());
    for &r in &radii {
        for &theta in &angles {
            let (sin_t, cos_t) = theta.sin_cos();
            for &h in &heights {
                points.push([r * cos_t, r * sin_t, h]);
            }
        }
    }
    points
}

/// Sample a solid ball centred on the origin.
pub fn sample_sphere(params: &SphereParams, resolution: &Resolution) -> Vec<[f64; 3]> {
    let radius = params.radius();
    let radii = linspace(0.0, f64::from(radius), radius as usize + 1);
    let polar: Vec<(f64, f64)> = linspace(0.0, PI, resolution.sphere_angles)
        .into_iter()
        .map(f64::sin_cos)
        .collect();
    let azimuth: Vec<(f64, f64)> = linspace(0.0, 2.0 * PI, resolution.sphere_angles)
        .into_iter()
        .map(f64::sin_cos)
        .collect();

    let mut points = Vec::with_capacity(radii.len() * polar.len() * azimuth.len());
    for &r in &radii {
        for &(sin_t, cos_t) in &polar {
            for &(sin_p, cos_p) in &azimuth {
                points.push([r * sin_t * cos_p, r * sin_t * sin_p, r * cos_t]);
            }
        }
    }
    points
}

/// Sample the one-dimensional trajectory of a conical helix.
///
/// The radial distance grows linearly with height,
/// $\rho(\phi) = R_{min} + \tan\beta \cdot p\phi / 2\pi$, so a zero half-angle
/// gives a cylindrical helix of constant radius $R_{min}$. For a cone the
/// trajectory is lifted by $R_{min} / \tan\beta$ so that the apex sits at the
/// origin. Near-cylindrical cones whose lift would swamp the height, or
/// overflow, are left unlifted. A left-handed helix is the right-handed one
/// reflected through the xz-plane.
pub fn sample_helix(params: &HelixParams, resolution: &Resolution) -> Vec<[f64; 3]> {
    let tan_beta = params.half_angle_deg().to_radians().tan();
    let r_min = params.r_min();
    let rise_per_radian = params.pitch() / (2.0 * PI);
    let apex_offset = apex_lift(r_min, tan_beta);

    let count = (resolution.helix_samples_per_turn as f64 * params.turns()) as usize;
    let right: Vec<[f64; 3]> = linspace(0.0, 2.0 * PI * params.turns(), count)
        .into_iter()
        .map(|phi| {
            let z0 = rise_per_radian * phi;
            let rho = r_min + tan_beta * z0;
            let (sin_p, cos_p) = phi.sin_cos();
            [rho * cos_p, rho * sin_p, z0 + apex_offset]
        })
        .collect();

    match params.handedness() {
        Handedness::Right => right,
        Handedness::Left => Transform::mirror(Axis::Y).apply_all(&right),
    }
}

/// Height of a cone's apex below its `r_min` rim, or zero when that lift is
/// unrepresentable or too large to add without losing sub-voxel precision.
fn apex_lift(r_min: f64, tan_beta: f64) -> f64 {
    if tan_beta == 0.0 {
        return 0.0;
    }
    let lift = r_min / tan_beta;
    if lift.is_finite() && lift * f64::EPSILON <= APEX_LIFT_TOLERANCE {
        lift
    } else {
        0.0
    }
}
