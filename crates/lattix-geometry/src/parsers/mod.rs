//! Parsers for reading generated targets back in.
//!
//! Supported formats:
//! - [`.xyz`](xyz) — visualisation files with integer coordinates
//! - [`.tgt`](tgt) — solver target dipole lists

pub mod tgt;
pub mod xyz;

use std::path::Path;

use thiserror::Error;

use crate::voxelise::Voxel;

/// Errors during target file parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Parse error at line {line}: {message}")]
    FormatError { line: usize, message: String },

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),
}

/// A target read from disk.
#[derive(Debug, Clone, Default)]
pub struct ParsedTarget {
    /// Comment or header lines, without comment markers.
    pub header: Vec<String>,
    /// Dipole positions in file order. May contain duplicates.
    pub voxels: Vec<Voxel>,
}

/// Read a target file, choosing the parser from the file extension.
pub fn parse_target_file(path: &Path) -> Result<ParsedTarget, ParseError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("xyz") => xyz::parse_xyz(&std::fs::read_to_string(path)?),
        Some("tgt") => tgt::parse_tgt(&std::fs::read_to_string(path)?),
        _ => Err(ParseError::UnsupportedFormat(path.display().to_string())),
    }
}

/// Parse one integer grid coordinate.
pub(crate) fn parse_coordinate(token: &str, axis: char, line: usize) -> Result<usize, ParseError> {
    token.trim().parse().map_err(|_| ParseError::FormatError {
        line,
        message: format!("Invalid {} coordinate: {}", axis, token.trim()),
    })
}
