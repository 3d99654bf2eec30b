//! Plain-text summary export.
//!
//! Write-only collaborator: serializes a session into a flat human-readable
//! report with derived seconds. Never reads anything back into the model.

use std::fmt::Write as _;
use std::path::Path;

use crate::error::ExportError;
use crate::session::Session;

/// Render the session as a flat report: one block per section with its
/// fractional range and derived seconds, then one line per segment with
/// seconds relative to the section's duration.
pub fn render_summary(session: &Session) -> String {
    let mut text = format!("TOTAL DURATION: {}s\n\n", session.total_duration_secs);

    for (index, section) in session.sections.iter().enumerate() {
        let start_secs = section.start * session.total_duration_secs;
        let end_secs = section.end * session.total_duration_secs;
        let duration_secs = end_secs - start_secs;

        let _ = writeln!(
            text,
            "{}. [{}] {}",
            index + 1,
            session.labels.parent,
            section.name
        );
        let _ = writeln!(
            text,
            "   Range: {}-{} ({:.2}s - {:.2}s)",
            section.start, section.end, start_secs, end_secs
        );
        let _ = writeln!(text, "   Duration: {:.2}s", duration_secs);

        for segment in &section.segments {
            let seg_start_secs = segment.start * duration_secs;
            let seg_end_secs = segment.end * duration_secs;
            let _ = writeln!(
                text,
                "     - [{}] {}: {}-{} ({:.2}s - {:.2}s)",
                session.labels.child,
                segment.name,
                segment.start,
                segment.end,
                seg_start_secs,
                seg_end_secs
            );
        }
        text.push('\n');
    }

    text
}

/// Write the summary to a file. The one environment-fallible operation in
/// this crate; a failure here never touches the session.
pub fn write_summary(session: &Session, path: &Path) -> Result<(), ExportError> {
    std::fs::write(path, render_summary(session)).map_err(|source| ExportError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })
}
