//! Writers for generated targets.
//!
//! Supported outputs:
//! - [`.xyz`](xyz) — molecular visualisation files (Jmol and friends)
//! - [`.tgt`](tgt) — dipole lists for discrete dipole solvers
//! - [`preview`] — JSON scatter documents for external 3D plotting

pub mod preview;
pub mod tgt;
pub mod xyz;

use thiserror::Error;

use crate::shapes::Shape;

/// Element symbol written for every dipole in visualisation files.
pub const PLACEHOLDER_ELEMENT: &str = "Si";

/// Errors while writing a target.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("Failed to write output: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to serialise preview: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Provenance line recorded in every output file.
pub fn provenance(shape: &Shape) -> String {
    format!(
        "{} generated with lattix {}",
        shape.name(),
        env!("CARGO_PKG_VERSION")
    )
}
