//! Compile-time embedded templates for generated project files.
//!
//! Each constant loads a template file from the repository's `templates/`
//! directory via [`include_str!`]; the paths are relative to this source file.

/// Top-level Makefile written into every generated project.
///
/// Variables: `{{example}}`, `{{tool}}`, `{{date}}`.
pub const MAKEFILE: &str = include_str!("../../../../templates/project/Makefile.tmpl");

/// Shell script that recompiles the example's GATT database header.
///
/// Written (and run once) only for examples with a `.gatt` companion.
/// Variables: `{{example}}`.
pub const GATT_UPDATE_SCRIPT: &str =
    include_str!("../../../../templates/project/update_gatt_db.sh.tmpl");
