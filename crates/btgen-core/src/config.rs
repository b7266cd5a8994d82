//! Scaffold configuration: where examples come from, where the template
//! lives, and where generated projects go.
//!
//! All three paths are resolved once at startup — from `btgen.config.json`
//! if present, with CLI overrides applied on top — rather than recomputed
//! from the tool's own location while it runs.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScaffoldError};

/// Names the template directory must provide before a run starts.
const TEMPLATE_FILES: &[&str] = &["sdkconfig", "set_port.sh", "main/component.mk"];

/// Resolved filesystem layout for a scaffolding run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaffoldConfig {
    /// Directory holding the example `*.c` sources and their `*.gatt` companions.
    pub examples_dir: PathBuf,
    /// Read-only template tree copied into every generated project.
    pub template_dir: PathBuf,
    /// Directory under which one project directory per example is created.
    pub output_dir: PathBuf,
}

impl Default for ScaffoldConfig {
    /// The stock port layout: the tool sits in `port/esp32/` next to its
    /// `template/` directory, with the shared examples two levels up.
    fn default() -> Self {
        Self {
            examples_dir: PathBuf::from("../../example"),
            template_dir: PathBuf::from("template"),
            output_dir: PathBuf::from("."),
        }
    }
}

impl ScaffoldConfig {
    /// Load a config from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ScaffoldError::ConfigNotFound {
                path: path.to_path_buf(),
                source: e,
            })?;
        let config = serde_json::from_str(&contents).map_err(|e| ScaffoldError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(config)
    }

    /// Load a config file if it exists, otherwise fall back to the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Write the config as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| ScaffoldError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Apply CLI flag overrides on top of the loaded values.
    pub fn with_overrides(
        mut self,
        examples_dir: Option<PathBuf>,
        template_dir: Option<PathBuf>,
        output_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(dir) = examples_dir {
            self.examples_dir = dir;
        }
        if let Some(dir) = template_dir {
            self.template_dir = dir;
        }
        if let Some(dir) = output_dir {
            self.output_dir = dir;
        }
        self
    }

    /// Check the template tree up front so a broken layout fails before any
    /// project directory has been touched.
    pub fn validate(&self) -> Result<()> {
        if !self.template_dir.is_dir() {
            return Err(ScaffoldError::TemplateDirNotFound(self.template_dir.clone()));
        }
        for name in TEMPLATE_FILES {
            let path = self.template_dir.join(name);
            if !path.is_file() {
                return Err(ScaffoldError::TemplateFileMissing(path));
            }
        }
        let components = self.template_dir.join("components");
        if !components.is_dir() {
            return Err(ScaffoldError::TemplateFileMissing(components));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populate_template(dir: &Path) {
        std::fs::create_dir_all(dir.join("components")).unwrap();
        std::fs::create_dir_all(dir.join("main")).unwrap();
        std::fs::write(dir.join("sdkconfig"), "CONFIG_FOO=y\n").unwrap();
        std::fs::write(dir.join("set_port.sh"), "#!/bin/sh\n").unwrap();
        std::fs::write(dir.join("main/component.mk"), "# main\n").unwrap();
    }

    #[test]
    fn test_config_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("btgen.config.json");
        let config = ScaffoldConfig {
            examples_dir: PathBuf::from("../example"),
            template_dir: PathBuf::from("template"),
            output_dir: PathBuf::from("out"),
        };
        config.save(&path).unwrap();
        let loaded = ScaffoldConfig::load(&path).unwrap();
        assert_eq!(loaded.examples_dir, config.examples_dir);
        assert_eq!(loaded.template_dir, config.template_dir);
        assert_eq!(loaded.output_dir, config.output_dir);
    }

    #[test]
    fn test_load_missing_is_error() {
        let result = ScaffoldConfig::load(Path::new("/nonexistent/btgen.config.json"));
        assert!(matches!(result, Err(ScaffoldError::ConfigNotFound { .. })));
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let config =
            ScaffoldConfig::load_or_default(&dir.path().join("btgen.config.json")).unwrap();
        assert_eq!(config.template_dir, PathBuf::from("template"));
        assert_eq!(config.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_load_invalid_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("btgen.config.json");
        std::fs::write(&path, "{not json").unwrap();
        let result = ScaffoldConfig::load(&path);
        assert!(matches!(result, Err(ScaffoldError::ConfigParse { .. })));
    }

    #[test]
    fn test_overrides_replace_only_given_paths() {
        let config = ScaffoldConfig::default()
            .with_overrides(Some(PathBuf::from("/src/example")), None, None);
        assert_eq!(config.examples_dir, PathBuf::from("/src/example"));
        assert_eq!(config.template_dir, PathBuf::from("template"));
    }

    #[test]
    fn test_validate_complete_template() {
        let dir = tempfile::tempdir().unwrap();
        populate_template(dir.path());
        let config = ScaffoldConfig {
            examples_dir: dir.path().to_path_buf(),
            template_dir: dir.path().to_path_buf(),
            output_dir: dir.path().to_path_buf(),
        };
        config.validate().unwrap();
    }

    #[test]
    fn test_validate_missing_template_dir() {
        let config = ScaffoldConfig {
            examples_dir: PathBuf::from("."),
            template_dir: PathBuf::from("/nonexistent/template"),
            output_dir: PathBuf::from("."),
        };
        assert!(matches!(
            config.validate(),
            Err(ScaffoldError::TemplateDirNotFound(_))
        ));
    }

    #[test]
    fn test_validate_missing_template_file() {
        let dir = tempfile::tempdir().unwrap();
        populate_template(dir.path());
        std::fs::remove_file(dir.path().join("sdkconfig")).unwrap();
        let config = ScaffoldConfig {
            examples_dir: dir.path().to_path_buf(),
            template_dir: dir.path().to_path_buf(),
            output_dir: dir.path().to_path_buf(),
        };
        assert!(matches!(
            config.validate(),
            Err(ScaffoldError::TemplateFileMissing(_))
        ));
    }
}
