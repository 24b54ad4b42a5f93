//! Parser for `.xyz` visualisation files.
//!
//! ```text
//! <num_dipoles>
//! <comment line>
//! <element> <x> <y> <z>
//! ...
//! ```
//!
//! Coordinates must be non-negative integer grid indices; the element
//! symbol is ignored.

use super::{parse_coordinate, ParseError, ParsedTarget};

/// Parse an XYZ file from a string.
pub fn parse_xyz(content: &str) -> Result<ParsedTarget, ParseError> {
    let lines: Vec<&str> = content.lines().collect();

    if lines.len() < 2 {
        return Err(ParseError::FormatError {
            line: 1,
            message: "XYZ file must have a count line and a comment line".into(),
        });
    }

    let num_dipoles: usize = lines[0].trim().parse().map_err(|_| ParseError::FormatError {
        line: 1,
        message: "First line must be the number of dipoles".into(),
    })?;

    let mut voxels = Vec::with_capacity(num_dipoles);
    for (idx, line) in lines[2..].iter().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(ParseError::FormatError {
                line: idx + 3,
                message: format!("Expected 'element x y z', got '{}'", line),
            });
        }

        voxels.push([
            parse_coordinate(parts[1], 'x', idx + 3)?,
            parse_coordinate(parts[2], 'y', idx + 3)?,
            parse_coordinate(parts[3], 'z', idx + 3)?,
        ]);
    }

    if voxels.len() != num_dipoles {
        return Err(ParseError::FormatError {
            line: 1,
            message: format!("Header says {} dipoles but found {}", num_dipoles, voxels.len()),
        });
    }

    Ok(ParsedTarget {
        header: vec![lines[1].trim().to_string()],
        voxels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_xyz() {
        let content = "3\nCylinder generated with lattix\nSi 1 1 1\nSi 2 1 1\nSi 1 2 3\n";
        let target = parse_xyz(content).unwrap();
        assert_eq!(target.voxels, vec![[1, 1, 1], [2, 1, 1], [1, 2, 3]]);
        assert_eq!(target.header, vec!["Cylinder generated with lattix"]);
    }

    #[test]
    fn test_parse_empty_target() {
        let target = parse_xyz("0\nNothing here\n").unwrap();
        assert!(target.voxels.is_empty());
    }

    /// Test error handling: dipole count mismatch.
    #[test]
    fn test_parse_xyz_count_mismatch() {
        let content = "5\nWrong count\nSi 1 1 1\nSi 2 1 1\n";
        let err = parse_xyz(content).unwrap_err().to_string();
        assert!(
            err.contains("5") && err.contains("2"),
            "Error should mention expected vs actual count: {}",
            err
        );
    }

    /// Test error handling: malformed coordinate line.
    #[test]
    fn test_parse_xyz_bad_coordinate() {
        let content = "1\nBad data\nSi 1 xyz 3\n";
        let err = parse_xyz(content).unwrap_err().to_string();
        assert!(err.contains("line 3") && err.contains("Invalid y"), "{}", err);
    }

    /// Test empty lines are skipped correctly.
    #[test]
    fn test_parse_xyz_empty_lines() {
        let content = "2\nWith blanks\nSi 1 1 1\n\nSi 2 2 2\n\n";
        assert_eq!(parse_xyz(content).unwrap().voxels.len(), 2);
    }
}
