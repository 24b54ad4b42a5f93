//! Solid cylinder targets.

use serde::Serialize;

use super::{require_grid_length, GenerationSettings, ShapeError};
use crate::diagnostics::{Diagnostics, Stage};
use crate::sampling::sample_cylinder;
use crate::transform::normalise_octant;
use crate::voxelise::{voxelise, VoxelSet};

/// A solid cylinder with its axis along z, in grid units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CylinderParams {
    radius: u32,
    height: u32,
}

impl CylinderParams {
    pub fn new(radius: i64, height: i64) -> Result<Self, ShapeError> {
        Ok(Self {
            radius: require_grid_length("radius", radius)?,
            height: require_grid_length("height", height)?,
        })
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

/// Generate the voxels of a solid cylinder in the positive octant.
pub fn generate_cylinder(
    params: &CylinderParams,
    settings: &GenerationSettings,
    diagnostics: &mut dyn Diagnostics,
) -> VoxelSet {
    let cloud = sample_cylinder(params, &settings.resolution);
    diagnostics.record("cylinder", Stage::Sampled, cloud.len());

    let voxels = voxelise(&normalise_octant(&cloud), settings.grid);
    diagnostics.record("cylinder", Stage::Unique, voxels.len());
    voxels
}
