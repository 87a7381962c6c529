//! Reading manifest text from stdin, a file, or a directory tree
//!
//! Sources are keyed by path in a `BTreeMap` so they always reach the
//! extractor in lexicographic order, whatever order the file system
//! returns them in.

use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::Path;

use walkdir::WalkDir;

use crate::config::{Input, STDIN_SOURCE};
use crate::error::{CliError, Result};

/// Raw text keyed by source identifier
pub type Sources = BTreeMap<String, String>;

/// Read every source selected by `input`
///
/// Fails with [`CliError::NoInput`] when nothing was found to read.
pub fn collect(input: &Input) -> Result<Sources> {
    let sources = match input {
        Input::Stdin => read_stdin()?,
        Input::Path(root) => walk(root)?,
    };

    if sources.is_empty() {
        return Err(CliError::NoInput {
            path: input.to_string(),
        });
    }

    Ok(sources)
}

fn read_stdin() -> Result<Sources> {
    tracing::info!("Reading manifests from stdin");

    let mut bytes = Vec::new();
    std::io::stdin()
        .lock()
        .read_to_end(&mut bytes)
        .map_err(|e| CliError::read(STDIN_SOURCE, e))?;

    let text = decode(STDIN_SOURCE, bytes);
    Ok(BTreeMap::from([(STDIN_SOURCE.to_string(), text)]))
}

/// Read `root` if it is a file, or every file below it if it is a directory
pub fn walk(root: &Path) -> Result<Sources> {
    tracing::info!("Walking the file tree rooted at {:?}", root.display().to_string());

    let mut sources = BTreeMap::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|err| {
            let path = err.path().unwrap_or(root).display().to_string();
            let message = err
                .io_error()
                .map(ToString::to_string)
                .unwrap_or_else(|| err.to_string());
            CliError::access(path, message)
        })?;

        let path = entry.path();
        tracing::debug!("Visiting {:?}", path.display().to_string());

        if entry.file_type().is_dir() || (entry.path_is_symlink() && path.is_dir()) {
            tracing::debug!("Skip {:?} because it's directory", path.display().to_string());
            continue;
        }

        let source = path.display().to_string();
        let bytes = fs::read(path).map_err(|e| CliError::read(source.clone(), e))?;
        let text = decode(&source, bytes);
        sources.insert(source, text);
    }

    Ok(sources)
}

/// Decode file contents, replacing invalid UTF-8 instead of failing
fn decode(source: &str, bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!("{} is not valid UTF-8; invalid bytes were replaced", source);
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn source_key(dir: &TempDir, rel: &str) -> String {
        dir.path().join(rel).display().to_string()
    }

    #[test]
    fn test_walk_directory_recursively() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("nested/deeper")).unwrap();
        fs::write(dir.path().join("b.yaml"), "kind: Service\n").unwrap();
        fs::write(dir.path().join("a.yaml"), "kind: Deployment\n").unwrap();
        fs::write(dir.path().join("nested/deeper/ns.yaml"), "kind: Namespace\n").unwrap();

        let sources = walk(dir.path()).unwrap();

        assert_eq!(sources.len(), 3);
        assert_eq!(sources[&source_key(&dir, "a.yaml")], "kind: Deployment\n");
        assert_eq!(
            sources[&source_key(&dir, "nested/deeper/ns.yaml")],
            "kind: Namespace\n"
        );
    }

    #[test]
    fn test_walk_order_is_lexicographic() {
        let dir = TempDir::new().unwrap();
        for name in ["zeta.yaml", "alpha.yaml", "mid.yaml"] {
            fs::write(dir.path().join(name), "kind: Pod\n").unwrap();
        }

        let keys: Vec<String> = walk(dir.path()).unwrap().into_keys().collect();

        assert_eq!(
            keys,
            [
                source_key(&dir, "alpha.yaml"),
                source_key(&dir, "mid.yaml"),
                source_key(&dir, "zeta.yaml"),
            ]
        );
    }

    #[test]
    fn test_walk_single_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("one.yaml");
        fs::write(&file, "kind: ConfigMap\n").unwrap();

        let sources = walk(&file).unwrap();

        assert_eq!(sources.len(), 1);
        assert_eq!(sources[&file.display().to_string()], "kind: ConfigMap\n");
    }

    #[test]
    fn test_missing_path_is_access_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");

        let err = walk(&missing).unwrap_err();

        match err {
            CliError::Access { path, .. } => assert_eq!(path, missing.display().to_string()),
            other => panic!("expected access error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_directory_is_no_input() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("empty-child")).unwrap();

        let err = collect(&Input::Path(dir.path().to_path_buf())).unwrap_err();

        assert_eq!(
            err,
            CliError::NoInput {
                path: dir.path().display().to_string()
            }
        );
    }

    #[test]
    fn test_invalid_utf8_is_decoded_lossily() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("bin.yaml");
        fs::write(&file, b"kind: Pod\n\xff\xfe\n").unwrap();

        let sources = walk(&file).unwrap();
        let text = &sources[&file.display().to_string()];

        assert!(text.starts_with("kind: Pod\n"));
        assert!(text.contains('\u{FFFD}'));
    }
}
