//! Run configuration built from command-line arguments

use std::fmt;
use std::path::{Path, PathBuf};

/// Source identifier used for stdin
pub const STDIN_SOURCE: &str = "-";

/// Where manifests are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Read one document stream from stdin
    Stdin,
    /// A manifest file, or a directory walked recursively
    Path(PathBuf),
}

impl Input {
    /// Interpret a FILENAME argument; `-` selects stdin
    pub fn from_arg(arg: &Path) -> Self {
        if arg == Path::new(STDIN_SOURCE) {
            Self::Stdin
        } else {
            Self::Path(arg.to_path_buf())
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str(STDIN_SOURCE),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Everything a run needs, passed explicitly instead of read from globals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: Input,
    /// 0 = warnings only, 1 = info, 2+ = debug
    pub verbosity: u8,
}

impl Config {
    pub fn new(filename: &Path, verbose: u8, debug: bool) -> Self {
        let verbosity = if debug { verbose.max(2) } else { verbose };
        Self {
            input: Input::from_arg(filename),
            verbosity,
        }
    }
}
