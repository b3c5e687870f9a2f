//! Line matching module
//!
//! Keeps or drops lines depending on whether they contain a literal
//! substring, optionally ignoring case and optionally inverted.

/// Substring matcher configuration
#[derive(Debug, Clone)]
pub struct Matcher {
    /// Pattern as compared (already folded when ignoring case)
    pattern: String,
    ignore_case: bool,
    invert: bool,
}

impl Matcher {
    pub fn new(pattern: &str, ignore_case: bool, invert: bool) -> Self {
        let pattern = if ignore_case {
            fold_case(pattern)
        } else {
            pattern.to_string()
        };

        Self {
            pattern,
            ignore_case,
            invert,
        }
    }

    /// Check whether the pattern occurs in the line, ignoring inversion
    #[inline]
    pub fn contains(&self, line: &str) -> bool {
        if self.ignore_case {
            fold_case(line).contains(&self.pattern)
        } else {
            line.contains(&self.pattern)
        }
    }

    /// Check whether a line should be kept
    #[inline]
    pub fn keep(&self, line: &str) -> bool {
        self.contains(line) != self.invert
    }

    /// Filter lines, preserving their order
    pub fn apply(&self, lines: Vec<String>) -> Vec<String> {
        lines.into_iter().filter(|line| self.keep(line)).collect()
    }
}

/// Fold case one character at a time
///
/// Unlike `str::to_lowercase` this has no context rules, so a character folds
/// the same way wherever it appears. Final sigma folds to sigma.
pub fn fold_case(s: &str) -> String {
    s.chars()
        .flat_map(char::to_lowercase)
        .map(|c| if c == 'ς' { 'σ' } else { c })
        .collect()
}

/// Keep the lines that contain `pattern` (or do not, with `invert`)
pub fn match_lines(lines: Vec<String>, pattern: &str, ignore_case: bool, invert: bool) -> Vec<String> {
    Matcher::new(pattern, ignore_case, invert).apply(lines)
}
