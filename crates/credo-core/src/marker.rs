use crate::error::{CredoError, Result};
use regex::Regex;
use std::sync::OnceLock;

/// Opens a managed block. The full line is `<!-- credo:begin v{version} ({tag}) -->`.
pub const BEGIN_PREFIX: &str = "<!-- credo:begin ";

/// Closes the most recently opened managed block. Carries no version so a
/// single literal always terminates the block.
pub const END_MARKER: &str = "<!-- credo:end -->";

static BEGIN_RE: OnceLock<Regex> = OnceLock::new();

fn begin_re() -> &'static Regex {
    BEGIN_RE.get_or_init(|| {
        Regex::new(r"^<!-- credo:begin v(\S+) \(([^()\s]+)\) -->\s*$").unwrap()
    })
}

/// Render the begin-marker line for `version` and `tag` (no trailing newline).
pub fn render_begin(version: &str, tag: &str) -> String {
    format!("{BEGIN_PREFIX}v{version} ({tag}) -->")
}

/// Render a complete managed block: begin line, newline-terminated body, end
/// line. Always ends with a trailing newline.
pub fn render_block(version: &str, tag: &str, body: &str) -> String {
    let sep = if body.is_empty() || body.ends_with('\n') {
        ""
    } else {
        "\n"
    };
    format!("{}\n{body}{sep}{END_MARKER}\n", render_begin(version, tag))
}

/// Parse a begin-marker line into `(version, tag)`.
///
/// Errors on a line that carries the begin prefix but does not match the
/// marker grammar: such a line marks a corrupted installation, not document
/// prose.
pub fn parse_begin(line: &str) -> Result<(String, String)> {
    let caps = begin_re()
        .captures(line)
        .ok_or_else(|| CredoError::InvalidMarker(line.to_string()))?;
    Ok((caps[1].to_string(), caps[2].to_string()))
}

/// Whether `line` opens a managed block (well-formed or not).
pub fn is_begin_line(line: &str) -> bool {
    line.starts_with(BEGIN_PREFIX)
}

/// Whether `line` closes a managed block. Trailing whitespace is tolerated.
pub fn is_end_line(line: &str) -> bool {
    line.trim_end() == END_MARKER
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_line_round_trips() {
        let line = render_begin("1.2.3", "go");
        assert_eq!(line, "<!-- credo:begin v1.2.3 (go) -->");
        let (version, tag) = parse_begin(&line).unwrap();
        assert_eq!(version, "1.2.3");
        assert_eq!(tag, "go");
    }

    #[test]
    fn parse_rejects_garbage_after_prefix() {
        for line in [
            "<!-- credo:begin -->",
            "<!-- credo:begin 1.0.0 (go) -->",
            "<!-- credo:begin v1.0.0 -->",
            "<!-- credo:begin v1.0.0 (go)",
        ] {
            assert!(parse_begin(line).is_err(), "expected invalid: {line}");
        }
    }

    #[test]
    fn rendered_block_is_newline_terminated() {
        let block = render_block("1.0.0", "go", "rule: X");
        assert_eq!(
            block,
            "<!-- credo:begin v1.0.0 (go) -->\nrule: X\n<!-- credo:end -->\n"
        );
        // A body that already ends with a newline gains no blank line.
        assert_eq!(render_block("1.0.0", "go", "rule: X\n"), block);
    }

    #[test]
    fn end_line_tolerates_trailing_whitespace() {
        assert!(is_end_line("<!-- credo:end -->"));
        assert!(is_end_line("<!-- credo:end -->  "));
        assert!(!is_end_line("  <!-- credo:end -->"));
        assert!(!is_end_line("<!-- credo:end --> trailing prose"));
    }
}
