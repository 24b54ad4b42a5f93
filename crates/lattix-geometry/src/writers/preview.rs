//! Scatter previews of generated targets.
//!
//! Rendering is left to external tools: a [`PreviewRenderer`] receives the
//! finished target and does whatever it likes with it. [`JsonScatter`] emits
//! a JSON document with one array per axis plus a colour channel taken from
//! a chosen axis, which any 3D plotting front end can draw directly.

use std::io::Write;

use serde::Serialize;

use super::WriteError;
use crate::shapes::{Shape, Target};
use crate::transform::Axis;

/// Consumes a finished target for display.
pub trait PreviewRenderer {
    /// Render `target`, colouring points by their coordinate along `colour_axis`.
    fn render(&mut self, target: &Target, colour_axis: Axis) -> Result<(), WriteError>;
}

/// Scatter data for a target.
#[derive(Debug, Serialize)]
pub struct ScatterDocument<'a> {
    pub shape: &'a Shape,
    pub count: usize,
    pub colour_axis: Axis,
    pub x: Vec<usize>,
    pub y: Vec<usize>,
    pub z: Vec<usize>,
    pub colour: Vec<usize>,
}

impl<'a> ScatterDocument<'a> {
    pub fn new(target: &'a Target, colour_axis: Axis) -> Self {
        let column =
            |axis: usize| -> Vec<usize> { target.voxels.iter().map(|v| v[axis]).collect() };
        Self {
            shape: &target.shape,
            count: target.len(),
            colour_axis,
            x: column(0),
            y: column(1),
            z: column(2),
            colour: column(colour_axis.index()),
        }
    }
}

/// Writes each rendered target as a JSON scatter document.
pub struct JsonScatter<W: Write> {
    out: W,
}

impl<W: Write> JsonScatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PreviewRenderer for JsonScatter<W> {
    fn render(&mut self, target: &Target, colour_axis: Axis) -> Result<(), WriteError> {
        let document = ScatterDocument::new(target, colour_axis);
        serde_json::to_writer(&mut self.out, &document)?;
        writeln!(self.out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::CylinderParams;
    use crate::voxelise::VoxelSet;

    #[test]
    fn test_json_scatter_columns() {
        let target = Target {
            shape: Shape::Cylinder(CylinderParams::new(1, 1).unwrap()),
            voxels: VoxelSet::from_voxels([[1, 2, 3], [4, 5, 6]]),
        };
        let mut renderer = JsonScatter::new(Vec::new());
        renderer.render(&target, Axis::Y).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&renderer.into_inner()).unwrap();
        assert_eq!(json["count"], 2);
        assert_eq!(json["colour_axis"], "y");
        assert_eq!(json["shape"]["type"], "cylinder");
        assert_eq!(json["x"], serde_json::json!([1, 4]));
        assert_eq!(json["z"], serde_json::json!([3, 6]));
        assert_eq!(json["colour"], serde_json::json!([2, 5]));
    }
}
