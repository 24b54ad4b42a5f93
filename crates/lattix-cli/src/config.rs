//! TOML configuration deserialisation for generation jobs.

use serde::Deserialize;

use lattix_geometry::sampling::Resolution;
use lattix_geometry::shapes::GenerationSettings;
use lattix_geometry::transform::Axis;
use lattix_geometry::voxelise::GridKind;

/// Top-level job configuration.
#[derive(Debug, Deserialize)]
pub struct JobConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub sampling: SamplingConfig,
    /// Shapes to generate, in order.
    #[serde(default)]
    pub shape: Vec<ShapeConfig>,
}

/// A single shape entry: its type plus free-form parameters.
#[derive(Debug, Deserialize)]
pub struct ShapeConfig {
    #[serde(rename = "type")]
    pub shape_type: String,
    #[serde(flatten)]
    pub params: toml::Table,
}

/// Which files to produce for every generated target.
#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Output directory (default: "./output").
    #[serde(default = "default_output_dir")]
    pub directory: String,
    /// Write a `.xyz` visualisation file (default: false).
    #[serde(default)]
    pub xyz: bool,
    /// Write a `.tgt` solver target (default: false).
    #[serde(default)]
    pub tgt: bool,
    /// Write a `.preview.json` scatter document (default: true).
    #[serde(default = "default_true")]
    pub preview: bool,
    /// Axis whose coordinate colours the preview (default: z).
    #[serde(default)]
    pub preview_axis: Axis,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_dir(),
            xyz: false,
            tgt: false,
            preview: true,
            preview_axis: Axis::Z,
        }
    }
}

/// Sampling densities and grid selection.
#[derive(Debug, Default, Deserialize)]
pub struct SamplingConfig {
    #[serde(flatten)]
    pub resolution: Resolution,
    #[serde(default)]
    pub grid: GridKind,
}

impl SamplingConfig {
    pub fn settings(&self) -> GenerationSettings {
        GenerationSettings {
            resolution: self.resolution,
            grid: self.grid,
        }
    }
}

fn default_output_dir() -> String {
    "./output".into()
}
fn default_true() -> bool {
    true
}

/// Load and parse a TOML job configuration file.
pub fn load_config(path: &std::path::Path) -> anyhow::Result<JobConfig> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse a TOML job configuration.
pub fn parse_config(content: &str) -> anyhow::Result<JobConfig> {
    let config: JobConfig = toml::from_str(content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let job = parse_config("[[shape]]\ntype = \"sphere\"\nradius = 4\n").unwrap();
        assert_eq!(job.output.directory, "./output");
        assert!(!job.output.xyz && !job.output.tgt && job.output.preview);
        assert_eq!(job.output.preview_axis, Axis::Z);
        assert_eq!(job.sampling.settings(), GenerationSettings::default());
        assert_eq!(job.shape.len(), 1);
        assert_eq!(job.shape[0].shape_type, "sphere");
        assert_eq!(job.shape[0].params.get("radius").and_then(|v| v.as_integer()), Some(4));
    }

    #[test]
    fn test_full_job() {
        let content = r#"
            [output]
            directory = "targets"
            xyz = true
            tgt = true
            preview = false
            preview_axis = "x"

            [sampling]
            sphere_angles = 200
            grid = "sparse"

            [[shape]]
            type = "cylinder"
            radius = 3
            height = 5

            [[shape]]
            type = "helix"
            half_angle = 30.0
            hand = -1
            turns = 2.5
            pitch = 20
            r_min = 50
            r_minor = 3
        "#;
        let job = parse_config(content).unwrap();
        assert_eq!(job.output.directory, "targets");
        assert!(job.output.xyz && job.output.tgt && !job.output.preview);
        assert_eq!(job.output.preview_axis, Axis::X);

        let settings = job.sampling.settings();
        assert_eq!(settings.grid, GridKind::Sparse);
        assert_eq!(settings.resolution.sphere_angles, 200);
        assert_eq!(settings.resolution.cylinder_angles, 2000);

        assert_eq!(job.shape.len(), 2);
        assert_eq!(job.shape[1].shape_type, "helix");
        assert!(!job.shape[1].params.contains_key("type"));
    }

    #[test]
    fn test_unknown_grid_rejected() {
        assert!(parse_config("[sampling]\ngrid = \"octree\"\n").is_err());
    }
}
