use anyhow::Context;
use credo_core::{
    catalog,
    patch::{self, PatchOutcome},
    paths,
};
use std::path::Path;

use crate::output::print_json;

pub fn run(root: &Path, tag: Option<&str>, target: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let Some(tag) = tag else {
        eprintln!("Available practices:");
        for p in catalog::all() {
            eprintln!("  {:<6} {}", p.tag, p.title);
        }
        anyhow::bail!("no practice specified: run 'credo install <tag>'");
    };

    let practice = catalog::find(tag)?;
    let target = target
        .map(Path::to_path_buf)
        .unwrap_or_else(|| paths::claude_md_path(root));

    let outcome = patch::apply_to_file(&target, practice.version, practice.tag, practice.body)
        .with_context(|| {
            format!(
                "failed to install '{}' into {}",
                practice.tag,
                target.display()
            )
        })?;

    if json {
        #[derive(serde::Serialize)]
        struct InstallOutput<'a> {
            target: String,
            tag: &'a str,
            version: &'a str,
            #[serde(flatten)]
            outcome: &'a PatchOutcome,
        }

        return print_json(&InstallOutput {
            target: target.display().to_string(),
            tag: practice.tag,
            version: practice.version,
            outcome: &outcome,
        });
    }

    match outcome {
        PatchOutcome::Installed => println!(
            "  installed: {} ({} v{})",
            target.display(),
            practice.tag,
            practice.version
        ),
        PatchOutcome::UpToDate => println!(
            "  already up to date: {} ({} v{})",
            target.display(),
            practice.tag,
            practice.version
        ),
        PatchOutcome::Updated {
            previous_version,
            previous_tag,
        } => {
            if previous_tag == practice.tag {
                println!(
                    "  updated: {} ({} v{previous_version} → v{})",
                    target.display(),
                    practice.tag,
                    practice.version
                );
            } else {
                println!(
                    "  updated: {} ({previous_tag} v{previous_version} → {} v{})",
                    target.display(),
                    practice.tag,
                    practice.version
                );
            }
        }
    }

    Ok(())
}
