//! Writer for `.tgt` solver targets.
//!
//! A commented header records the provenance, the generating parameters,
//! and the dipole count; each following line is one dipole as
//! `x,y,z,0,0,0`. The trailing triple is reserved for per-dipole data the
//! generator does not compute.

use std::io::Write;

use super::{provenance, WriteError};
use crate::shapes::{Shape, Target};

/// Header lines (without the leading `# `) for a target.
pub fn header_lines(target: &Target) -> Vec<String> {
    let mut lines = vec![provenance(&target.shape)];
    let count = format!("Number of dipoles {}", target.len());
    match &target.shape {
        Shape::Cylinder(c) => {
            lines.push(format!("Radius {}", c.radius()));
            lines.push(format!("Height {}", c.height()));
            lines.push(count);
        }
        Shape::Sphere(s) => {
            lines.push(format!("Radius {}", s.radius()));
            lines.push(count);
        }
        Shape::Helix(h) => {
            lines.push(count);
            lines.push(format!("Half Angle {}", h.half_angle_deg()));
            lines.push(format!("Handedness {}", h.handedness().letter()));
            lines.push(format!("Turns {}", h.turns()));
            lines.push(format!("Pitch {}", h.pitch()));
            lines.push(format!("Rmin {}", h.r_min()));
            lines.push(format!("r_minor {}", h.r_minor()));
        }
    }
    lines
}

/// Write a target as a solver target file.
pub fn write_tgt<W: Write>(out: &mut W, target: &Target) -> Result<(), WriteError> {
    for line in header_lines(target) {
        writeln!(out, "# {}", line)?;
    }
    for [x, y, z] in &target.voxels {
        writeln!(out, "{},{},{},0,0,0", x, y, z)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{HelixParams, SphereParams};
    use crate::voxelise::VoxelSet;

    #[test]
    fn test_sphere_target_layout() {
        let target = Target {
            shape: Shape::Sphere(SphereParams::new(0).unwrap()),
            voxels: VoxelSet::from_voxels([[1, 1, 1]]),
        };
        let mut buffer = Vec::new();
        write_tgt(&mut buffer, &target).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("# Sphere generated with lattix"));
        assert_eq!(lines[1], "# Radius 0");
        assert_eq!(lines[2], "# Number of dipoles 1");
        assert_eq!(lines[3], "1,1,1,0,0,0");
    }

    #[test]
    fn test_helix_header_lists_every_parameter() {
        let target = Target {
            shape: Shape::Helix(HelixParams::new(12.5, -1.0, 3.0, 15.0, 8.0, 2).unwrap()),
            voxels: VoxelSet::from_voxels([[2, 3, 4], [5, 6, 7]]),
        };
        let header = header_lines(&target);
        assert_eq!(
            &header[1..],
            &[
                "Number of dipoles 2",
                "Half Angle 12.5",
                "Handedness L",
                "Turns 3",
                "Pitch 15",
                "Rmin 8",
                "r_minor 2",
            ]
        );
    }
}
