//! Command-line interface definition for line-tools
//!
//! One binary, four subcommands. Flag values that need validation beyond
//! clap's built-ins (field lists, delimiters) are checked here so that a bad
//! value is reported as a usage error before any input is read.

use clap::{Parser, Subcommand};

use crate::error::ToolError;

/// Unix-style text processing tools
///
/// Every subcommand reads lines from standard input and writes the
/// transformed lines to standard output.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "line-tools",
    version,
    about = "Unix-style text processing tools",
    long_about = r#"
Unix-style text processing tools. Each subcommand reads lines from standard
input and writes the result to standard output.

EXAMPLES:
    # Keep lines containing "apple", ignoring case
    cat fruit.txt | line-tools grep -i apple

    # Sort numerically, largest first
    cat numbers.txt | line-tools sort -n -r

    # Count runs of repeated lines
    sort words.txt | line-tools uniq -c

    # Print the third and first column of a CSV file
    cat table.csv | line-tools cut -f 2,0 -d ,
"#
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Verbose mode - debug logging on stderr
    #[arg(long, global = true, default_value_t = false, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Quiet mode - only errors on stderr
    #[arg(long, global = true, default_value_t = false)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Search for lines containing a pattern
    Grep {
        /// Substring to search for (an empty pattern matches every line; use `--` before a pattern starting with -)
        #[arg(value_name = "PATTERN")]
        pattern: String,

        /// Ignore case when matching
        #[arg(short, long, default_value_t = false)]
        ignore_case: bool,

        /// Keep lines that do NOT contain the pattern
        #[arg(short = 'v', long, default_value_t = false)]
        invert: bool,
    },

    /// Sort lines
    Sort {
        /// Sort in reverse order
        #[arg(short, long, default_value_t = false)]
        reverse: bool,

        /// Compare lines as numbers (every line must parse)
        #[arg(short, long, default_value_t = false)]
        numeric: bool,
    },

    /// Collapse runs of adjacent identical lines
    Uniq {
        /// Prefix each line with the length of its run
        #[arg(short, long, default_value_t = false)]
        count: bool,
    },

    /// Extract fields from each line
    Cut {
        /// Zero-based fields to print, comma-separated, in output order (e.g. 2,0)
        #[arg(short, long, value_name = "LIST", required = true, value_parser = parse_fields)]
        fields: FieldList,

        /// Field delimiter (default: tab)
        #[arg(short, long, value_name = "DELIM", default_value = "\t", hide_default_value = true, value_parser = parse_delimiter)]
        delimiter: String,
    },
}

impl Command {
    /// Subcommand name as typed on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Command::Grep { .. } => "grep",
            Command::Sort { .. } => "sort",
            Command::Uniq { .. } => "uniq",
            Command::Cut { .. } => "cut",
        }
    }
}

/// Ordered list of zero-based field indices; duplicates are kept
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldList(pub Vec<usize>);

impl FieldList {
    pub fn indices(&self) -> &[usize] {
        &self.0
    }
}

/// Parse a field list such as `"2,0"` or `"1, 1, 3"`
pub fn parse_fields(spec: &str) -> Result<FieldList, ToolError> {
    if spec.trim().is_empty() {
        return Err(ToolError::EmptyFieldList);
    }

    let mut fields = Vec::new();

    for part in spec.split(',') {
        let part = part.trim();
        let index: usize = part.parse().map_err(|_| ToolError::InvalidField {
            item: part.to_string(),
        })?;
        fields.push(index);
    }

    Ok(FieldList(fields))
}

/// Reject empty delimiters; anything else is split on literally
pub fn parse_delimiter(delimiter: &str) -> Result<String, ToolError> {
    if delimiter.is_empty() {
        return Err(ToolError::EmptyDelimiter);
    }
    Ok(delimiter.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_field() {
        assert_eq!(parse_fields("1").unwrap(), FieldList(vec![1]));
    }

    #[test]
    fn test_parse_fields_keeps_order_and_duplicates() {
        assert_eq!(parse_fields("2,0,2").unwrap(), FieldList(vec![2, 0, 2]));
        assert_eq!(parse_fields(" 3 , 1").unwrap(), FieldList(vec![3, 1]));
    }

    #[test]
    fn test_parse_fields_rejects_bad_items() {
        assert_eq!(
            parse_fields("1,x"),
            Err(ToolError::InvalidField { item: "x".to_string() })
        );
        assert_eq!(
            parse_fields("-1"),
            Err(ToolError::InvalidField { item: "-1".to_string() })
        );
        assert_eq!(
            parse_fields("1,,2"),
            Err(ToolError::InvalidField { item: String::new() })
        );
        assert_eq!(parse_fields(""), Err(ToolError::EmptyFieldList));
    }

    #[test]
    fn test_parse_delimiter() {
        assert_eq!(parse_delimiter(":").unwrap(), ":");
        assert_eq!(parse_delimiter("::").unwrap(), "::");
        assert_eq!(parse_delimiter(""), Err(ToolError::EmptyDelimiter));
    }

    #[test]
    fn test_parse_grep_args() {
        let args = Args::try_parse_from(["line-tools", "grep", "-i", "-v", "apple"]).unwrap();
        assert_eq!(
            args.command,
            Command::Grep {
                pattern: "apple".to_string(),
                ignore_case: true,
                invert: true,
            }
        );
        assert!(!args.verbose);
    }

    #[test]
    fn test_parse_cut_defaults_to_tab() {
        let args = Args::try_parse_from(["line-tools", "cut", "-f", "2,0"]).unwrap();
        assert_eq!(
            args.command,
            Command::Cut {
                fields: FieldList(vec![2, 0]),
                delimiter: "\t".to_string(),
            }
        );
    }

    #[test]
    fn test_cut_requires_fields() {
        assert!(Args::try_parse_from(["line-tools", "cut", "-d", ":"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::try_parse_from(["line-tools", "sort", "-n", "--verbose"]).unwrap();
        assert!(args.verbose);
        assert_eq!(args.command.name(), "sort");
    }

    #[test]
    fn test_missing_or_unknown_subcommand() {
        assert!(Args::try_parse_from(["line-tools"]).is_err());
        assert!(Args::try_parse_from(["line-tools", "wc"]).is_err());
        assert!(Args::try_parse_from(["line-tools", "grep"]).is_err());
    }
}
