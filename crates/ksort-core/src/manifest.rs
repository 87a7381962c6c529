//! Splitting raw text into classified manifest documents
//!
//! Documents are separated by lines starting with `---`. Each document is
//! classified by the first top-level `kind:` line it contains; no YAML
//! parsing happens, so malformed documents are still ordered (as
//! [`Kind::Unknown`]) instead of failing the whole run.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::kind::Kind;

/// A line starting with three dashes; the rest of the line belongs to it
static SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^---.*$").expect("valid regex"));

/// First line-anchored `kind:` entry, terminated by a newline
static KIND_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^kind:(.*)\n").expect("valid regex"));

const LINE_BREAKS: &[char] = &['\n', '\r'];

/// One YAML document found in an input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestRecord {
    /// Input the document came from (file path, `-` for stdin)
    pub source: String,
    /// Document text with leading/trailing line breaks removed
    pub content: String,
    /// Kind found in the document
    pub kind: Kind,
}

impl ManifestRecord {
    /// Create a record from its parts
    pub fn new(source: impl Into<String>, content: impl Into<String>, kind: Kind) -> Self {
        Self {
            source: source.into(),
            content: content.into(),
            kind,
        }
    }

    /// Whether no kind could be found for this document
    pub fn is_unknown(&self) -> bool {
        self.kind.is_unknown()
    }
}

/// Split `text` into documents and classify each by kind
///
/// Empty and whitespace-only fragments are dropped. Records are returned
/// in the order the documents appear in `text`.
pub fn extract(source: &str, text: &str) -> Vec<ManifestRecord> {
    SEPARATOR
        .split(text)
        .filter_map(|fragment| {
            let content = fragment.trim_matches(LINE_BREAKS);
            if content.trim().is_empty() {
                return None;
            }

            Some(ManifestRecord::new(source, content, detect_kind(fragment)))
        })
        .collect()
}

/// Extract every `(source, text)` pair, keeping the iteration order
///
/// Callers that need reproducible output should iterate sources in a
/// stable order (e.g. a `BTreeMap` keyed by path).
pub fn extract_all<I, S, T>(sources: I) -> Vec<ManifestRecord>
where
    I: IntoIterator<Item = (S, T)>,
    S: AsRef<str>,
    T: AsRef<str>,
{
    sources
        .into_iter()
        .flat_map(|(source, text)| extract(source.as_ref(), text.as_ref()))
        .collect()
}

/// Kind declared by a single document fragment
fn detect_kind(fragment: &str) -> Kind {
    KIND_LINE
        .captures(fragment)
        .and_then(|caps| caps.get(1))
        .map_or(Kind::Unknown, |value| Kind::named(value.as_str().trim()))
}
