use std::path::{Path, PathBuf};

use anyhow::Result;

use btgen_core::config::ScaffoldConfig;
use btgen_core::example;

use crate::output;

/// Remove the generated project directories for all currently eligible
/// examples. Directories that were never generated are skipped.
pub fn run(
    config_path: &Path,
    examples_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
) -> Result<()> {
    output::print_header("btgen clean");

    let config = ScaffoldConfig::load_or_default(config_path)?.with_overrides(
        examples_dir,
        None,
        output_dir,
    );

    let examples = example::discover(&config.examples_dir)?;
    let mut removed = 0;
    for example in &examples {
        let project_dir = config.output_dir.join(&example.name);
        if project_dir.is_dir() {
            std::fs::remove_dir_all(&project_dir)?;
            println!("- {}", example.name);
            removed += 1;
        }
    }

    output::print_success(&format!("{removed} project(s) removed"));
    Ok(())
}
