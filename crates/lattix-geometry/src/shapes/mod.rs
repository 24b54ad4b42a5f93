//! Target shapes and their generation pipelines.
//!
//! Each shape owns a validated, immutable parameter struct and a driver that
//! composes the pipeline: parametric sampling, octant normalisation,
//! voxelisation, and (for the helix) the sphere sweep. Drivers are pure: they
//! return the voxel set and leave file output and previews to the caller.

pub mod cylinder;
pub mod helix;
pub mod sphere;

pub use cylinder::{generate_cylinder, CylinderParams};
pub use helix::{generate_helix, helix_trajectory, Handedness, HelixParams};
pub use sphere::{generate_sphere, SphereParams};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::diagnostics::Diagnostics;
use crate::sampling::Resolution;
use crate::voxelise::{GridKind, VoxelSet};

/// Errors raised while validating shape parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    #[error("Invalid parameter '{name}' = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}

pub(crate) fn require_non_negative(name: &'static str, value: f64) -> Result<f64, ShapeError> {
    if !value.is_finite() {
        return Err(ShapeError::InvalidParameter {
            name,
            value,
            reason: "must be finite",
        });
    }
    if value < 0.0 {
        return Err(ShapeError::InvalidParameter {
            name,
            value,
            reason: "must be non-negative",
        });
    }
    Ok(value)
}

pub(crate) fn require_grid_length(name: &'static str, value: i64) -> Result<u32, ShapeError> {
    if value < 0 {
        return Err(ShapeError::InvalidParameter {
            name,
            value: value as f64,
            reason: "must be non-negative",
        });
    }
    u32::try_from(value).map_err(|_| ShapeError::InvalidParameter {
        name,
        value: value as f64,
        reason: "exceeds the addressable grid",
    })
}

/// Knobs shared by every generation pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationSettings {
    pub resolution: Resolution,
    pub grid: GridKind,
}

/// Any target shape, with its validated parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    Cylinder(CylinderParams),
    Sphere(SphereParams),
    Helix(HelixParams),
}

impl Shape {
    /// Human-readable shape name, as used in file headers.
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Cylinder(_) => "Cylinder",
            Shape::Sphere(_) => "Sphere",
            Shape::Helix(_) => "Helix",
        }
    }

    /// Output file name without extension; encodes every parameter.
    pub fn file_stem(&self) -> String {
        match self {
            Shape::Cylinder(c) => format!("cylinder_R{}_H{}", c.radius(), c.height()),
            Shape::Sphere(s) => format!("sphere_R{}", s.radius()),
            Shape::Helix(h) => format!(
                "helix{}_a{}_t{}_p{}_R{}_r{}",
                h.handedness().letter(),
                h.half_angle_deg(),
                h.turns(),
                h.pitch(),
                h.r_min(),
                h.r_minor()
            ),
        }
    }

    /// Run this shape's generation pipeline.
    pub fn generate(
        &self,
        settings: &GenerationSettings,
        diagnostics: &mut dyn Diagnostics,
    ) -> Target {
        let voxels = match self {
            Shape::Cylinder(c) => generate_cylinder(c, settings, diagnostics),
            Shape::Sphere(s) => generate_sphere(s, settings, diagnostics),
            Shape::Helix(h) => generate_helix(h, settings, diagnostics),
        };
        Target {
            shape: self.clone(),
            voxels,
        }
    }
}

/// A generated target: the voxels together with the shape that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    pub shape: Shape,
    pub voxels: VoxelSet,
}

impl Target {
    /// Number of dipoles (occupied voxels).
    pub fn len(&self) -> usize {
        self.voxels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voxels.is_empty()
    }
}
