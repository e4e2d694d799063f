use anyhow::Context;
use credo_core::{block, catalog, io, paths};
use std::path::Path;

use crate::output::print_json;

pub fn run(root: &Path, target: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let target = target
        .map(Path::to_path_buf)
        .unwrap_or_else(|| paths::claude_md_path(root));

    let doc = io::read_document(&target)
        .with_context(|| format!("failed to read {}", target.display()))?;
    let span = block::find_block(&doc)
        .with_context(|| format!("failed to scan {}", target.display()))?;

    let shipped_version = span
        .as_ref()
        .and_then(|s| catalog::all().iter().find(|p| p.tag == s.tag))
        .map(|p| p.version);

    if json {
        #[derive(serde::Serialize)]
        struct StatusOutput<'a> {
            target: String,
            installed: bool,
            #[serde(skip_serializing_if = "Option::is_none")]
            tag: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            version: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            available: Option<&'a str>,
        }

        return print_json(&StatusOutput {
            target: target.display().to_string(),
            installed: span.is_some(),
            tag: span.as_ref().map(|s| s.tag.as_str()),
            version: span.as_ref().map(|s| s.version.as_str()),
            available: shipped_version,
        });
    }

    match span {
        None => println!("no practice block in {}", target.display()),
        Some(span) => match shipped_version {
            Some(available) if available == span.version => println!(
                "{}: {} v{} (up to date)",
                target.display(),
                span.tag,
                span.version
            ),
            Some(available) => println!(
                "{}: {} v{} (v{available} available: run 'credo install {}')",
                target.display(),
                span.tag,
                span.version,
                span.tag
            ),
            None => println!(
                "{}: {} v{} (not a shipped practice)",
                target.display(),
                span.tag,
                span.version
            ),
        },
    }

    Ok(())
}
