//! Writer for `.xyz` visualisation files.
//!
//! ```text
//! <num_dipoles>
//! <provenance comment>
//! Si <x> <y> <z>
//! ...
//! ```

use std::io::Write;

use super::{provenance, WriteError, PLACEHOLDER_ELEMENT};
use crate::shapes::Target;

/// Write a target as an XYZ file, one placeholder atom per dipole.
pub fn write_xyz<W: Write>(out: &mut W, target: &Target) -> Result<(), WriteError> {
    writeln!(out, "{}", target.len())?;
    writeln!(out, "{}", provenance(&target.shape))?;
    for [x, y, z] in &target.voxels {
        writeln!(out, "{} {} {} {}", PLACEHOLDER_ELEMENT, x, y, z)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{CylinderParams, Shape};
    use crate::voxelise::VoxelSet;

    #[test]
    fn test_write_small_target() {
        let target = Target {
            shape: Shape::Cylinder(CylinderParams::new(0, 1).unwrap()),
            voxels: VoxelSet::from_voxels([[1, 1, 2], [1, 1, 1]]),
        };
        let mut buffer = Vec::new();
        write_xyz(&mut buffer, &target).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let expected = format!(
            "2\nCylinder generated with lattix {}\nSi 1 1 1\nSi 1 1 2\n",
            env!("CARGO_PKG_VERSION")
        );
        assert_eq!(text, expected);
    }
}
