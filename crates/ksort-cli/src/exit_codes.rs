//! Exit codes for CLI failures
//!
//! Success exits with 0 and usage errors are reported by clap with its
//! own exit code (2).

/// No input - the path contained no files to sort
pub const NO_INPUT: i32 = 4;

/// IO error - path not accessible, file unreadable, output failed
pub const IO_ERROR: i32 = 5;
