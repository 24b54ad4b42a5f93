//! Integration tests: generated targets written to and read back from disk.

use lattix_geometry::diagnostics::RecordedCounts;
use lattix_geometry::parsers::{parse_target_file, tgt::parse_tgt, xyz::parse_xyz};
use lattix_geometry::shapes::{CylinderParams, GenerationSettings, Shape, SphereParams, Target};
use lattix_geometry::writers::{tgt::write_tgt, xyz::write_xyz};

fn generate(shape: Shape) -> Target {
    shape.generate(&GenerationSettings::default(), &mut RecordedCounts::default())
}

#[test]
fn test_sphere_xyz_layout() {
    let target = generate(Shape::Sphere(SphereParams::new(4).unwrap()));
    let mut buffer = Vec::new();
    write_xyz(&mut buffer, &target).unwrap();
    let text = String::from_utf8(buffer).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    let count: usize = lines[0].parse().unwrap();
    assert_eq!(count, target.len());
    assert!(lines[1].starts_with("Sphere generated with lattix"));
    assert_eq!(lines.len(), count + 2);
    assert!(lines[2..].iter().all(|l| l.starts_with("Si ")));

    let parsed = parse_xyz(&text).unwrap();
    assert_eq!(parsed.voxels.as_slice(), target.voxels.as_slice());
}

#[test]
fn test_cylinder_tgt_on_disk() {
    let target = generate(Shape::Cylinder(CylinderParams::new(3, 5).unwrap()));
    let path = std::env::temp_dir().join(format!(
        "lattix-{}-{}.tgt",
        std::process::id(),
        target.shape.file_stem()
    ));

    let mut file = std::fs::File::create(&path).unwrap();
    write_tgt(&mut file, &target).unwrap();
    drop(file);

    let parsed = parse_target_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(parsed.header[1], "Radius 3");
    assert_eq!(parsed.header[2], "Height 5");
    assert_eq!(parsed.header[3], format!("Number of dipoles {}", target.len()));
    assert_eq!(parsed.voxels.as_slice(), target.voxels.as_slice());
}

#[test]
fn test_tgt_dipole_lines_have_reserved_zeros() {
    let target = generate(Shape::Cylinder(CylinderParams::new(1, 1).unwrap()));
    let mut buffer = Vec::new();
    write_tgt(&mut buffer, &target).unwrap();
    let text = String::from_utf8(buffer).unwrap();

    let dipoles: Vec<&str> = text.lines().filter(|l| !l.starts_with('#')).collect();
    assert_eq!(dipoles.len(), target.len());
    assert!(dipoles.iter().all(|l| l.ends_with(",0,0,0")));
    assert_eq!(parse_tgt(&text).unwrap().voxels.len(), target.len());
}
