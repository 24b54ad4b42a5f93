//! Conical and cylindrical helix targets.
//!
//! The helix is generated in two passes. The bare trajectory is sampled,
//! normalised, and voxelised into a chain of cells; a solid sphere of the
//! minor radius is then swept along that chain to give the wire its
//! thickness.

use serde::Serialize;

use super::{
    generate_sphere, require_grid_length, require_non_negative, GenerationSettings, ShapeError,
    SphereParams,
};
use crate::diagnostics::{Diagnostics, Stage};
use crate::sampling::sample_helix;
use crate::sweep::sweep_sphere;
use crate::transform::normalise_octant;
use crate::voxelise::{voxelise, VoxelSet};

/// Winding direction of a helix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Handedness {
    Right,
    Left,
}

impl Handedness {
    /// Resolve a signed value: positive is right-handed, negative left-handed.
    pub fn from_sign(value: f64) -> Result<Self, ShapeError> {
        if value > 0.0 {
            Ok(Handedness::Right)
        } else if value < 0.0 {
            Ok(Handedness::Left)
        } else {
            Err(ShapeError::InvalidParameter {
                name: "hand",
                value,
                reason: "must be positive (right-handed) or negative (left-handed)",
            })
        }
    }

    /// `R` or `L`, as used in file names and headers.
    pub fn letter(self) -> char {
        match self {
            Handedness::Right => 'R',
            Handedness::Left => 'L',
        }
    }
}

/// A helical wire wound on a cone (or, at zero half-angle, a cylinder).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HelixParams {
    half_angle_deg: f64,
    handedness: Handedness,
    turns: f64,
    pitch: f64,
    r_min: f64,
    r_minor: u32,
}

impl HelixParams {
    /// Validate helix parameters.
    ///
    /// # Arguments
    /// * `half_angle_deg` - Cone half-angle from the z-axis, in `[0, 90)` degrees.
    /// * `hand` - Any positive value for right-handed, negative for left-handed.
    /// * `turns` - Number of turns; may be fractional.
    /// * `pitch` - Rise per turn, in grid units.
    /// * `r_min` - Trajectory radius at the start of the helix.
    /// * `r_minor` - Wire thickness radius, in grid units.
    pub fn new(
        half_angle_deg: f64,
        hand: f64,
        turns: f64,
        pitch: f64,
        r_min: f64,
        r_minor: i64,
    ) -> Result<Self, ShapeError> {
        let half_angle_deg = require_non_negative("half_angle", half_angle_deg)?;
        if half_angle_deg >= 90.0 {
            return Err(ShapeError::InvalidParameter {
                name: "half_angle",
                value: half_angle_deg,
                reason: "must be below 90 degrees",
            });
        }
        Ok(Self {
            half_angle_deg,
            handedness: Handedness::from_sign(hand)?,
            turns: require_non_negative("turns", turns)?,
            pitch: require_non_negative("pitch", pitch)?,
            r_min: require_non_negative("r_min", r_min)?,
            r_minor: require_grid_length("r_minor", r_minor)?,
        })
    }

    pub fn half_angle_deg(&self) -> f64 {
        self.half_angle_deg
    }

    pub fn handedness(&self) -> Handedness {
        self.handedness
    }

    pub fn turns(&self) -> f64 {
        self.turns
    }

    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    pub fn r_min(&self) -> f64 {
        self.r_min
    }

    pub fn r_minor(&self) -> u32 {
        self.r_minor
    }
}

/// Voxelise the bare helix trajectory, without thickness.
pub fn helix_trajectory(
    params: &HelixParams,
    settings: &GenerationSettings,
    diagnostics: &mut dyn Diagnostics,
) -> VoxelSet {
    let path = sample_helix(params, &settings.resolution);
    diagnostics.record("helix trajectory", Stage::Sampled, path.len());

    let trajectory = voxelise(&normalise_octant(&path), settings.grid);
    diagnostics.record("helix trajectory", Stage::Unique, trajectory.len());
    trajectory
}

/// Generate the voxels of a solid helical wire.
pub fn generate_helix(
    params: &HelixParams,
    settings: &GenerationSettings,
    diagnostics: &mut dyn Diagnostics,
) -> VoxelSet {
    let trajectory = helix_trajectory(params, settings, diagnostics);
    let brush = generate_sphere(&SphereParams::from(params.r_minor), settings, diagnostics);

    let outcome = sweep_sphere(&trajectory, &brush, settings.grid);
    diagnostics.record("helix", Stage::Swept, outcome.swept_points);
    diagnostics.record("helix", Stage::Final, outcome.body.len());
    outcome.body
}
