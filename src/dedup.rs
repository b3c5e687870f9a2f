//! Adjacent-duplicate collapsing
//!
//! Only consecutive equal lines form a run; the same line appearing again
//! later starts a new run. Input is expected to be sorted when global
//! uniqueness is wanted.

/// A maximal run of identical adjacent lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub count: usize,
    pub line: String,
}

impl Run {
    /// Render the run as one output line
    pub fn render(&self, show_count: bool) -> String {
        if show_count {
            format!("{} {}", self.count, self.line)
        } else {
            self.line.clone()
        }
    }
}

/// Statistics for a collapse
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DedupStats {
    /// Total lines seen
    pub total: usize,
    /// Runs emitted
    pub runs: usize,
}

impl DedupStats {
    pub fn from_runs(runs: &[Run]) -> Self {
        Self {
            total: runs.iter().map(|r| r.count).sum(),
            runs: runs.len(),
        }
    }

    /// Lines dropped because they repeated the previous line
    pub fn duplicates(&self) -> usize {
        self.total - self.runs
    }
}

/// Group adjacent equal lines into runs
pub fn collapse_runs(lines: Vec<String>) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();

    for line in lines {
        if let Some(last) = runs.last_mut() {
            if last.line == line {
                last.count += 1;
                continue;
            }
        }
        runs.push(Run { count: 1, line });
    }

    runs
}

/// Collapse adjacent duplicates, optionally prefixing each line with its count
pub fn dedup_lines(lines: Vec<String>, show_count: bool) -> Vec<String> {
    collapse_runs(lines)
        .iter()
        .map(|run| run.render(show_count))
        .collect()
}
