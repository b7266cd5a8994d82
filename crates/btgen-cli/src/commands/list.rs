use std::path::{Path, PathBuf};

use anyhow::Result;

use btgen_core::config::ScaffoldConfig;
use btgen_core::example;

use crate::output;

/// Discovery-only dry run: show what `create` would generate.
pub fn run(config_path: &Path, examples_dir: Option<PathBuf>) -> Result<()> {
    output::print_header("btgen list");

    let config =
        ScaffoldConfig::load_or_default(config_path)?.with_overrides(examples_dir, None, None);

    let examples = example::discover(&config.examples_dir)?;
    for example in &examples {
        let mut attrs = Vec::new();
        if example.has_gatt_db() {
            attrs.push("gatt db");
        }
        if example.is_audio() {
            attrs.push("sco audio");
        }
        let value = if attrs.is_empty() {
            "-".to_string()
        } else {
            attrs.join(", ")
        };
        output::print_key_value(&example.name, &value);
    }

    output::print_success(&format!("{} eligible example(s)", examples.len()));
    Ok(())
}
