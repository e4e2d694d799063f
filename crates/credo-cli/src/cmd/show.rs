use credo_core::catalog;

pub fn run(tag: &str) -> anyhow::Result<()> {
    let practice = catalog::find(tag)?;
    print!("{}", practice.body);
    Ok(())
}
