//! Solid sphere targets.
//!
//! Besides being a target in its own right, the sphere is the brush the
//! helix pipeline sweeps along its trajectory.

use serde::Serialize;

use super::{require_grid_length, GenerationSettings, ShapeError};
use crate::diagnostics::{Diagnostics, Stage};
use crate::sampling::sample_sphere;
use crate::transform::normalise_octant;
use crate::voxelise::{voxelise, VoxelSet};

/// A solid ball, in grid units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SphereParams {
    radius: u32,
}

impl SphereParams {
    pub fn new(radius: i64) -> Result<Self, ShapeError> {
        Ok(Self {
            radius: require_grid_length("radius", radius)?,
        })
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }
}

impl From<u32> for SphereParams {
    fn from(radius: u32) -> Self {
        Self { radius }
    }
}

/// Generate the voxels of a solid ball in the positive octant.
pub fn generate_sphere(
    params: &SphereParams,
    settings: &GenerationSettings,
    diagnostics: &mut dyn Diagnostics,
) -> VoxelSet {
    let cloud = sample_sphere(params, &settings.resolution);
    diagnostics.record("sphere", Stage::Sampled, cloud.len());

    let voxels = voxelise(&normalise_octant(&cloud), settings.grid);
    diagnostics.record("sphere", Stage::Unique, voxels.len());
    voxels
}
