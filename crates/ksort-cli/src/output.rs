//! Rendering sorted manifests
//!
//! Output is a plain multi-document YAML stream meant to be piped into
//! `kubectl apply -f -`, so it is never styled.

use console::style;
use ksort_core::ManifestRecord;

/// Printed instead of the content of documents without a kind
pub const UNKNOWN_WARNING: &str = "# WARNING: It looks like that this file is not a manifest file";

/// Render records as a YAML stream, one `# Source:` comment per document
pub fn render(records: &[ManifestRecord]) -> String {
    let mut out = String::new();

    for record in records {
        out.push_str("---\n# Source: ");
        out.push_str(&record.source);
        out.push('\n');

        if record.is_unknown() {
            out.push_str(UNKNOWN_WARNING);
        } else {
            out.push_str(&record.content);
        }
        out.push('\n');
    }

    out
}

/// One-line summary for stderr
pub fn summary(records: &[ManifestRecord], source_count: usize) -> String {
    let unknown = records.iter().filter(|r| r.is_unknown()).count();
    let mut line = format!(
        "{} {} document(s) from {} source(s)",
        style("sorted").green().bold(),
        records.len(),
        source_count
    );
    if unknown > 0 {
        line.push_str(&format!(
            " ({})",
            style(format!("{} unknown", unknown)).yellow()
        ));
    }
    line
}
