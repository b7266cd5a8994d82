//! GATT database update-script generation and invocation.
//!
//! Examples that ship a `.gatt` service definition get an `update_gatt_db.sh`
//! in their project root. The script calls out to the stack's `compile_gatt.py`
//! tool to regenerate the `main/<example>.h` database header; it is run once
//! right after scaffolding so the project builds without a manual step.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::Result;
use crate::templates::embedded;
use crate::templates::renderer::TemplateRenderer;

/// Filename of the generated update script.
pub const UPDATE_SCRIPT_NAME: &str = "update_gatt_db.sh";

/// Render and write `update_gatt_db.sh` into the project root, mode 0755.
pub fn write_update_script(
    project_dir: &Path,
    example_name: &str,
    renderer: &TemplateRenderer,
) -> Result<PathBuf> {
    let data = serde_json::json!({ "example": example_name });
    let script = renderer.render(embedded::GATT_UPDATE_SCRIPT, &data)?;

    let path = project_dir.join(UPDATE_SCRIPT_NAME);
    std::fs::write(&path, script)?;
    crate::fsops::make_executable(&path)?;
    Ok(path)
}

/// Run the update script once, discarding its stdout.
///
/// A failing GATT compiler does not abort the batch: the exit status (or
/// spawn failure) is surfaced as a warning and scaffolding continues. The
/// compiler's own stderr is inherited, so its diagnostics still reach the
/// terminal.
pub fn run_update_script(script_path: &Path) -> Result<()> {
    match Command::new(script_path)
        .stdout(Stdio::null())
        .status()
    {
        Ok(status) if status.success() => {}
        Ok(status) => {
            tracing::warn!("{} exited with {status}", script_path.display());
        }
        Err(e) => {
            tracing::warn!("failed to run {}: {e}", script_path.display());
        }
    }
    Ok(())
}

/// Whether no Python interpreter is on PATH.
///
/// The GATT compiler is a Python tool; without an interpreter every generated
/// `update_gatt_db.sh` will fail. Callers report this as a warning up front.
pub fn python_missing() -> bool {
    which::which("python").is_err() && which::which("python3").is_err()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_update_script_contents_and_mode() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = TemplateRenderer::new();
        let path = write_update_script(dir.path(), "le_counter", &renderer).unwrap();

        assert_eq!(path, dir.path().join(UPDATE_SCRIPT_NAME));
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("#!/bin/sh"));
        assert!(contents.contains("le_counter.gatt"));

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(&path).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o755);
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_run_update_script_tolerates_failure() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("fail.sh");
        std::fs::write(&script, "#!/bin/sh\nexit 1\n").unwrap();
        crate::fsops::make_executable(&script).unwrap();

        // Nonzero exit is a warning, not an error.
        run_update_script(&script).unwrap();
    }

    #[test]
    fn test_run_update_script_tolerates_missing_script() {
        run_update_script(Path::new("/nonexistent/update_gatt_db.sh")).unwrap();
    }
}
