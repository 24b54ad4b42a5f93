//! Job runner: ties together shape parameters, generation, and output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use lattix_geometry::diagnostics::LogDiagnostics;
use lattix_geometry::parsers::parse_target_file;
use lattix_geometry::shapes::{CylinderParams, HelixParams, Shape, SphereParams, Target};
use lattix_geometry::voxelise::VoxelSet;
use lattix_geometry::writers::preview::{JsonScatter, PreviewRenderer};
use lattix_geometry::writers::{tgt::write_tgt, xyz::write_xyz, WriteError};

use crate::config::{JobConfig, OutputConfig, ShapeConfig};

/// Validate every shape entry of a job.
pub fn build_shapes(job: &JobConfig) -> Result<Vec<Shape>> {
    if job.shape.is_empty() {
        anyhow::bail!("No shapes configured: add at least one [[shape]] table");
    }
    job.shape
        .iter()
        .enumerate()
        .map(|(i, shape)| build_shape(shape).with_context(|| format!("Shape #{}", i + 1)))
        .collect()
}

/// Generate every shape of a job and write the requested outputs.
pub fn run_job(job: &JobConfig, out_dir: &Path) -> Result<Vec<Target>> {
    let shapes = build_shapes(job)?;
    let settings = job.sampling.settings();
    let mut diagnostics = LogDiagnostics;

    let mut targets = Vec::with_capacity(shapes.len());
    for (i, shape) in shapes.into_iter().enumerate() {
        println!("  [{}/{}] {}", i + 1, job.shape.len(), shape.file_stem());
        let target = shape.generate(&settings, &mut diagnostics);
        println!("        {} dipoles", target.len());

        for path in write_outputs(&target, &job.output, out_dir)? {
            println!("        {} written", path.display());
        }
        targets.push(target);
    }
    Ok(targets)
}

/// Write the files enabled in `output` for one target.
pub fn write_outputs(
    target: &Target,
    output: &OutputConfig,
    out_dir: &Path,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Cannot create output directory {}", out_dir.display()))?;
    let stem = target.shape.file_stem();
    let mut written = Vec::new();

    if output.xyz {
        let path = out_dir.join(format!("{}.xyz", stem));
        write_file(&path, |out| write_xyz(out, target))?;
        written.push(path);
    }

    if output.tgt {
        let path = out_dir.join(format!("{}.tgt", stem));
        write_file(&path, |out| write_tgt(out, target))?;
        written.push(path);
    }

    if output.preview {
        // Previews are best effort: a failure is logged, not fatal.
        let path = out_dir.join(format!("{}.preview.json", stem));
        let rendered = write_file(&path, |out| {
            JsonScatter::new(out).render(target, output.preview_axis)
        });
        match rendered {
            Ok(()) => written.push(path),
            Err(e) => log::error!("Failed to render preview: {:#}", e),
        }
    }

    Ok(written)
}

fn write_file<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), WriteError>,
{
    let file = File::create(path).with_context(|| format!("Cannot create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    write(&mut out).with_context(|| format!("Writing {}", path.display()))?;
    out.flush().with_context(|| format!("Writing {}", path.display()))
}

/// Build a validated shape from its TOML entry.
fn build_shape(shape: &ShapeConfig) -> Result<Shape> {
    let params = &shape.params;
    match shape.shape_type.as_str() {
        "cylinder" => Ok(Shape::Cylinder(CylinderParams::new(
            extract_integer(params, "radius", "cylinder")?,
            extract_integer(params, "height", "cylinder")?,
        )?)),
        "sphere" => Ok(Shape::Sphere(SphereParams::new(extract_integer(
            params, "radius", "sphere",
        )?)?)),
        "helix" => Ok(Shape::Helix(HelixParams::new(
            extract_f64(params, "half_angle", "helix")?,
            extract_f64(params, "hand", "helix")?,
            extract_f64(params, "turns", "helix")?,
            extract_f64(params, "pitch", "helix")?,
            extract_f64(params, "r_min", "helix")?,
            extract_integer(params, "r_minor", "helix")?,
        )?)),
        other => anyhow::bail!(
            "Unsupported shape type '{}'. Valid types: cylinder, sphere, helix",
            other
        ),
    }
}

fn extract_integer(params: &toml::Table, key: &str, shape: &str) -> Result<i64> {
    params
        .get(key)
        .and_then(|v| v.as_integer())
        .with_context(|| format!("{} requires integer '{}'", shape, key))
}

fn extract_f64(params: &toml::Table, key: &str, shape: &str) -> Result<f64> {
    params
        .get(key)
        .and_then(|v| v.as_float().or_else(|| v.as_integer().map(|i| i as f64)))
        .with_context(|| format!("{} requires numeric '{}'", shape, key))
}

/// Summary of a target file read from disk.
#[derive(Debug)]
pub struct Inspection {
    pub header: Vec<String>,
    pub dipoles: usize,
    pub unique: usize,
    pub bounds: Option<([usize; 3], [usize; 3])>,
}

/// Read a target file and summarise its contents.
pub fn inspect_file(path: &Path) -> Result<Inspection> {
    let parsed = parse_target_file(path).with_context(|| format!("Reading {}", path.display()))?;
    let dipoles = parsed.voxels.len();
    let unique = VoxelSet::from_voxels(parsed.voxels);
    Ok(Inspection {
        header: parsed.header,
        dipoles,
        unique: unique.len(),
        bounds: unique.min_corner().zip(unique.max_corner()),
    })
}
