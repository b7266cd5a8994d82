use std::path::{Path, PathBuf};

use anyhow::Result;

use btgen_core::config::ScaffoldConfig;
use btgen_core::gatt;
use btgen_core::scaffold::Scaffolder;

use crate::output;

/// Generate one project directory per eligible example.
///
/// Loads the scaffold configuration, validates the template tree before
/// touching any output, then processes the examples sequentially, printing
/// one status line each. A pre-existing project directory is replaced
/// wholesale; any filesystem failure aborts the run.
pub fn run(
    config_path: &Path,
    examples_dir: Option<PathBuf>,
    template_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
) -> Result<()> {
    output::print_header("btgen create");

    let config = ScaffoldConfig::load_or_default(config_path)?.with_overrides(
        examples_dir,
        template_dir,
        output_dir,
    );

    output::print_step(1, 3, "Validating template directory");
    config.validate()?;

    output::print_step(2, 3, "Discovering examples");
    let scaffolder = Scaffolder::new(config);
    let examples = scaffolder.discover()?;

    if examples.iter().any(|e| e.has_gatt_db()) && gatt::python_missing() {
        output::print_warning(
            "no python interpreter on PATH — GATT database compilation will fail",
        );
    }

    output::print_step(3, 3, "Creating example projects");
    let mut gatt_count = 0;
    for example in &examples {
        let report = scaffolder.scaffold_example(example)?;
        if report.gatt_db {
            gatt_count += 1;
            println!("- {} including compiled GATT DB", report.name);
        } else {
            println!("- {}", report.name);
        }
    }

    output::print_success(&format!(
        "{} project(s) created, {gatt_count} with a compiled GATT DB",
        examples.len()
    ));
    println!();
    println!("  Next steps:");
    println!("    cd <example>");
    println!("    ./set_port.sh");
    println!("    make flash");
    println!();

    Ok(())
}
