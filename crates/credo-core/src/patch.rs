use crate::block;
use crate::error::Result;
use crate::io;
use crate::marker;
use serde::Serialize;
use std::path::Path;

/// Terminal state of one patch invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum PatchOutcome {
    /// No block was present; one was appended at the end of the document.
    Installed,
    /// A block at the requested version and tag was already present.
    UpToDate,
    /// A block at a different version (or a different practice) was
    /// replaced in place.
    Updated {
        previous_version: String,
        previous_tag: String,
    },
}

/// Apply the patch to `doc`, returning the new document and the outcome.
///
/// Everything outside the managed block is preserved byte-for-byte. Version
/// comparison is string equality on the captured token, so a downgrade is
/// just another replacement.
pub fn apply(doc: &str, version: &str, tag: &str, body: &str) -> Result<(String, PatchOutcome)> {
    let rendered = marker::render_block(version, tag, body);
    match block::find_block(doc)? {
        None => {
            let sep = if doc.is_empty() || doc.ends_with('\n') {
                ""
            } else {
                "\n"
            };
            Ok((format!("{doc}{sep}{rendered}"), PatchOutcome::Installed))
        }
        Some(span) if span.version == version && span.tag == tag => {
            Ok((doc.to_string(), PatchOutcome::UpToDate))
        }
        Some(span) => {
            let mut updated = String::with_capacity(doc.len() + rendered.len());
            updated.push_str(&doc[..span.start]);
            updated.push_str(&rendered);
            updated.push_str(&doc[span.end..]);
            Ok((
                updated,
                PatchOutcome::Updated {
                    previous_version: span.version,
                    previous_tag: span.tag,
                },
            ))
        }
    }
}

/// Run the patcher against the document at `path`.
///
/// A missing file is treated as an empty document. The file is rewritten
/// atomically, and only when the content actually changed; on any scan
/// error the file is left untouched.
pub fn apply_to_file(path: &Path, version: &str, tag: &str, body: &str) -> Result<PatchOutcome> {
    let doc = io::read_document(path)?;
    let (updated, outcome) = apply(&doc, version, tag, body)?;
    if !matches!(outcome, PatchOutcome::UpToDate) {
        io::atomic_write(path, updated.as_bytes())?;
    }
    Ok(outcome)
}
