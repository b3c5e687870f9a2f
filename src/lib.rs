//! # Line Tools
//!
//! Unix-style line processing tools behind a single binary.
//!
//! ## Tools
//!
//! - **grep**: keep lines containing a substring (`-i` ignore case, `-v` invert)
//! - **sort**: sort lines by text or by number (`-n`), optionally reversed (`-r`)
//! - **uniq**: collapse runs of adjacent identical lines, optionally counted (`-c`)
//! - **cut**: select zero-based fields split on a delimiter (`-f`, `-d`)
//!
//! ## Usage
//!
//! ```bash
//! printf 'apple\nbanana\napple\n' | line-tools grep apple
//! printf '3\n1\n2\n' | line-tools sort -n -r
//! printf 'a:b:c\n' | line-tools cut -f 1 -d :
//! ```
//!
//! ## Example
//!
//! ```rust
//! use line_tools::processor::{Processor, ProcessorConfig};
//!
//! let processor = Processor::new(ProcessorConfig::Uniq { count: true });
//! let lines = vec!["a".to_string(), "a".to_string(), "b".to_string()];
//!
//! assert_eq!(processor.transform(lines).unwrap(), vec!["2 a", "1 b"]);
//! ```

pub mod cli;
pub mod dedup;
pub mod error;
pub mod fields;
pub mod input;
pub mod matcher;
pub mod output;
pub mod processor;
pub mod report;
pub mod sorter;

pub use cli::Args;
pub use error::ToolError;
pub use processor::{Processor, ProcessorConfig};
