//! Line sorting module
//!
//! Stable sort by text (byte order) or by numeric value. A numeric sort
//! parses every line before ordering anything, so a bad line fails the whole
//! run without partial output.

use std::cmp::Ordering;

use crate::error::ToolError;

/// Parse a line as a number; surrounding whitespace is ignored
pub fn parse_number(line: &str) -> Option<f64> {
    line.trim().parse::<f64>().ok()
}

/// Sort lines by the chosen key
///
/// Ties keep their input order in both directions.
pub fn sort_lines(mut lines: Vec<String>, numeric: bool, reverse: bool) -> Result<Vec<String>, ToolError> {
    if !numeric {
        lines.sort_by(|a, b| directed(a.as_bytes().cmp(b.as_bytes()), reverse));
        return Ok(lines);
    }

    let mut keyed = Vec::with_capacity(lines.len());

    for (i, line) in lines.into_iter().enumerate() {
        let Some(value) = parse_number(&line) else {
            return Err(ToolError::NotANumber {
                line_number: i + 1,
                line,
            });
        };
        keyed.push((value, line));
    }

    keyed.sort_by(|(a, _), (b, _)| directed(a.total_cmp(b), reverse));
    Ok(keyed.into_iter().map(|(_, line)| line).collect())
}

#[inline]
fn directed(ordering: Ordering, reverse: bool) -> Ordering {
    if reverse {
        ordering.reverse()
    } else {
        ordering
    }
}
