//! # Lattix Geometry
//!
//! Voxelised particle targets for discrete dipole solvers. This crate
//! provides:
//!
//! - **Parametric sampling** ([`sampling`]) — Dense point clouds for solid
//!   cylinders, solid spheres, and conical or cylindrical helix trajectories.
//! - **Transformations** ([`transform`]) — Translation, mirroring, and the
//!   octant normalisation every pipeline starts from.
//! - **Voxelisation** ([`voxelise`]) — Truncation onto the integer grid and
//!   recovery of the unique occupied voxels.
//! - **Sphere sweep** ([`sweep`]) — Thickens a one-voxel helix trajectory
//!   into a solid wire.
//! - **Shapes** ([`shapes`]) — Validated parameters and the generation
//!   pipelines for each target shape.
//! - **Diagnostics** ([`diagnostics`]) — Point-count reporting for every
//!   pipeline stage.
//! - **Writers** ([`writers`]) and **parsers** ([`parsers`]) — `.xyz`
//!   visualisation files, `.tgt` solver targets, and JSON scatter previews.

pub mod diagnostics;
pub mod parsers;
pub mod sampling;
pub mod shapes;
pub mod sweep;
pub mod transform;
pub mod voxelise;
pub mod writers;
