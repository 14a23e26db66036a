//! Validate a storyboard.

use std::path::PathBuf;

pub fn run(path: Option<PathBuf>, asset_root: Option<PathBuf>, strict: bool) -> anyhow::Result<()> {
    let board = super::load_storyboard(path)?;
    println!("Validating storyboard: {}", board.name);

    let report = board.validate();
    for issue in &report.issues {
        println!("  - {issue}");
    }

    let mut missing = vec![];
    if let Some(root) = asset_root {
        println!("  Checking assets under: {}", root.display());
        missing = board.validate_assets(&root);
        for message in &missing {
            println!("  - {message}");
        }
    }

    let errors = report.errors().count();
    let warnings = report.warnings().count() + missing.len();
    if errors == 0 && warnings == 0 {
        println!("\nStoryboard is valid.");
        return Ok(());
    }

    println!("\n{errors} error(s), {warnings} warning(s).");
    if errors > 0 || strict {
        anyhow::bail!("Storyboard failed validation");
    }
    Ok(())
}
