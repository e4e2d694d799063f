use crate::error::{CredoError, Result};
use crate::marker;

/// The byte range of a managed block within a document, begin-marker line
/// through end-marker line inclusive (the end-marker's trailing newline
/// included when present), plus the attributes parsed from the begin marker.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockSpan {
    pub start: usize,
    pub end: usize,
    pub version: String,
    pub tag: String,
}

/// Locate the managed block in `doc`.
///
/// Returns `Ok(None)` when no begin marker exists. A begin marker without a
/// matching end marker before EOF, a second begin marker anywhere, or a
/// begin-prefixed line that fails to parse are all surfaced as errors:
/// guessing block boundaries in a corrupted document risks data loss.
/// End-marker lines outside a block belong to the document and are ignored.
pub fn find_block(doc: &str) -> Result<Option<BlockSpan>> {
    let mut span: Option<BlockSpan> = None;
    let mut open: Option<(usize, String, String)> = None;
    let mut offset = 0usize;

    for line in doc.split_inclusive('\n') {
        let content = line.strip_suffix('\n').unwrap_or(line);
        if marker::is_begin_line(content) {
            if span.is_some() || open.is_some() {
                return Err(CredoError::MultipleBlocks);
            }
            let (version, tag) = marker::parse_begin(content)?;
            open = Some((offset, version, tag));
        } else if marker::is_end_line(content) {
            if let Some((start, version, tag)) = open.take() {
                span = Some(BlockSpan {
                    start,
                    end: offset + line.len(),
                    version,
                    tag,
                });
            }
        }
        offset += line.len();
    }

    if open.is_some() {
        return Err(CredoError::MissingEndMarker);
    }
    Ok(span)
}
