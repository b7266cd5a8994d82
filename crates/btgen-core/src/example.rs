//! Discovery of eligible example programs.
//!
//! An example is a standalone `*.c` demo in the shared examples directory,
//! optionally accompanied by a same-named `*.gatt` service definition. A few
//! sources in that directory are shared utility code rather than standalone
//! examples and never get a project of their own.

use std::path::{Path, PathBuf};

use crate::error::{Result, ScaffoldError};

/// Extension of example source files.
pub const SOURCE_EXTENSION: &str = "c";

/// Extension of GATT service-definition companions.
pub const GATT_EXTENSION: &str = "gatt";

/// Base names in the examples directory that are not standalone examples.
pub const NON_EXAMPLE_SOURCES: &[&str] = &["panu_demo", "sco_demo_util"];

/// Examples that need the shared SCO audio utility code alongside their own source.
pub const AUDIO_EXAMPLES: &[&str] = &["hfp_ag_demo", "hfp_hf_demo", "hsp_ag_demo", "hsp_hf_demo"];

/// The shared SCO audio files copied into every audio example's `main/`.
pub const AUDIO_COMPANION_FILES: &[&str] = &["sco_demo_util.c", "sco_demo_util.h"];

/// One discovered example program.
#[derive(Debug, Clone)]
pub struct Example {
    /// Base name, i.e. the source filename with its extension stripped.
    pub name: String,
    /// Path to the example's `.c` source.
    pub source_path: PathBuf,
    /// Path to the companion `.gatt` definition, if one exists.
    pub gatt_path: Option<PathBuf>,
}

impl Example {
    /// Whether this example carries a GATT service definition.
    pub fn has_gatt_db(&self) -> bool {
        self.gatt_path.is_some()
    }

    /// Whether this example needs the shared SCO audio utility files.
    pub fn is_audio(&self) -> bool {
        AUDIO_EXAMPLES.contains(&self.name.as_str())
    }
}

/// Enumerate all eligible examples under `examples_dir`, sorted by name.
///
/// A file is eligible iff it has the `.c` extension and its base name is not
/// in [`NON_EXAMPLE_SOURCES`]. The `.gatt` companion is probed here, once,
/// and carried on the returned [`Example`].
pub fn discover(examples_dir: &Path) -> Result<Vec<Example>> {
    let entries =
        std::fs::read_dir(examples_dir).map_err(|e| ScaffoldError::ExamplesDirNotFound {
            path: examples_dir.to_path_buf(),
            source: e,
        })?;

    let mut examples = Vec::new();
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some(SOURCE_EXTENSION) {
            continue;
        }
        let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        if NON_EXAMPLE_SOURCES.contains(&name) {
            continue;
        }

        let gatt_path = examples_dir.join(format!("{name}.{GATT_EXTENSION}"));
        examples.push(Example {
            name: name.to_string(),
            source_path: path.clone(),
            gatt_path: gatt_path.is_file().then_some(gatt_path),
        });
    }

    examples.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(examples)
}
