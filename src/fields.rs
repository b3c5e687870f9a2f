//! Field extraction module
//!
//! Splits each line on a literal delimiter and re-joins the requested fields,
//! in the requested order, with the same delimiter.

/// Field selection for `cut`
#[derive(Debug, Clone)]
pub struct FieldSelector {
    fields: Vec<usize>,
    delimiter: String,
}

impl FieldSelector {
    pub fn new(fields: Vec<usize>, delimiter: &str) -> Self {
        Self {
            fields,
            delimiter: delimiter.to_string(),
        }
    }

    /// Extract the selected fields from one line
    ///
    /// An index past the end of the line yields an empty field, so ragged
    /// input still produces one output line per input line.
    pub fn extract(&self, line: &str) -> String {
        let parts: Vec<&str> = line.split(self.delimiter.as_str()).collect();

        self.fields
            .iter()
            .map(|&i| parts.get(i).copied().unwrap_or(""))
            .collect::<Vec<_>>()
            .join(&self.delimiter)
    }

    /// Number of requested fields that `line` does not have
    pub fn missing(&self, line: &str) -> usize {
        let available = line.matches(self.delimiter.as_str()).count() + 1;
        self.fields.iter().filter(|&&i| i >= available).count()
    }

    pub fn apply(&self, lines: Vec<String>) -> Vec<String> {
        let ragged = lines.iter().filter(|line| self.missing(line) > 0).count();
        if ragged > 0 {
            log::debug!("{} line(s) lacked a requested field; substituted empty fields", ragged);
        }

        lines.iter().map(|line| self.extract(line)).collect()
    }
}

/// Select `fields` (zero-based) from every line split on `delimiter`
pub fn cut_lines(lines: Vec<String>, fields: &[usize], delimiter: &str) -> Vec<String> {
    FieldSelector::new(fields.to_vec(), delimiter).apply(lines)
}
