//! Parser for `.tgt` solver targets.
//!
//! Lines starting with `#` form the header. A `# Number of dipoles N` line,
//! when present, is checked against the number of dipole lines. Each dipole
//! line is `x,y,z` followed by any number of extra comma-separated fields.

use super::{parse_coordinate, ParseError, ParsedTarget};

const COUNT_PREFIX: &str = "Number of dipoles";

/// Parse a solver target from a string.
pub fn parse_tgt(content: &str) -> Result<ParsedTarget, ParseError> {
    let mut target = ParsedTarget::default();
    let mut declared: Option<(usize, usize)> = None;

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(comment) = line.strip_prefix('#') {
            let comment = comment.trim();
            if let Some(count) = comment.strip_prefix(COUNT_PREFIX) {
                let count = count.trim().parse().map_err(|_| ParseError::FormatError {
                    line: line_no,
                    message: format!("Invalid dipole count: {}", count.trim()),
                })?;
                declared = Some((count, line_no));
            }
            target.header.push(comment.to_string());
            continue;
        }

        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < 3 {
            return Err(ParseError::FormatError {
                line: line_no,
                message: format!("Expected 'x,y,z,...', got '{}'", line),
            });
        }
        target.voxels.push([
            parse_coordinate(fields[0], 'x', line_no)?,
            parse_coordinate(fields[1], 'y', line_no)?,
            parse_coordinate(fields[2], 'z', line_no)?,
        ]);
    }

    if let Some((count, line)) = declared {
        if count != target.voxels.len() {
            return Err(ParseError::FormatError {
                line,
                message: format!(
                    "Header says {} dipoles but found {}",
                    count,
                    target.voxels.len()
                ),
            });
        }
    }

    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cylinder_target() {
        let content = "# Cylinder generated with lattix\n# Radius 0\n# Height 1\n\
                       # Number of dipoles 2\n1,1,1,0,0,0\n1,1,2,0,0,0\n";
        let target = parse_tgt(content).unwrap();
        assert_eq!(target.header.len(), 4);
        assert_eq!(target.header[1], "Radius 0");
        assert_eq!(target.voxels, vec![[1, 1, 1], [1, 1, 2]]);
    }

    #[test]
    fn test_count_mismatch_reports_header_line() {
        let content = "# Sphere\n# Number of dipoles 3\n1,1,1,0,0,0\n";
        let err = parse_tgt(content).unwrap_err().to_string();
        assert!(err.contains("line 2"), "{}", err);
        assert!(err.contains("3 dipoles but found 1"), "{}", err);
    }

    #[test]
    fn test_short_line_rejected() {
        let err = parse_tgt("1,2\n").unwrap_err();
        assert!(matches!(err, ParseError::FormatError { line: 1, .. }));
    }

    #[test]
    fn test_header_count_is_optional() {
        let target = parse_tgt("4,5,6\n7,8,9,0,0,0\n").unwrap();
        assert!(target.header.is_empty());
        assert_eq!(target.voxels.len(), 2);
    }
}
