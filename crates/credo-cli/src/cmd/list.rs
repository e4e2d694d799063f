use credo_core::catalog;

use crate::output::{print_json, print_table};

pub fn run(json: bool) -> anyhow::Result<()> {
    if json {
        #[derive(serde::Serialize)]
        struct PracticeOutput<'a> {
            tag: &'a str,
            version: &'a str,
            title: &'a str,
        }

        let practices: Vec<PracticeOutput> = catalog::all()
            .iter()
            .map(|p| PracticeOutput {
                tag: p.tag,
                version: p.version,
                title: p.title,
            })
            .collect();
        return print_json(&practices);
    }

    let rows: Vec<Vec<String>> = catalog::all()
        .iter()
        .map(|p| {
            vec![
                p.tag.to_string(),
                format!("v{}", p.version),
                p.title.to_string(),
            ]
        })
        .collect();
    print_table(&["TAG", "VERSION", "TITLE"], &rows);

    Ok(())
}
