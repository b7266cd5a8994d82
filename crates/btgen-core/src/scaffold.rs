//! Per-example project generation.
//!
//! For every eligible example this produces an independently buildable
//! project directory:
//!
//! ```text
//! <output>/<example>/
//! ├── Makefile              # rendered from the embedded template
//! ├── sdkconfig             # copied from the template dir
//! ├── set_port.sh           # copied, mode 0755
//! ├── update_gatt_db.sh     # only for examples with a .gatt companion
//! ├── components/...        # recursive copy of the template's components
//! └── main/
//!     ├── <example>.c
//!     ├── component.mk
//!     └── sco_demo_util.{c,h}   # only for the audio examples
//! ```
//!
//! Generation is replace-not-merge: a pre-existing project directory of the
//! same name is destroyed and rebuilt from scratch, so re-running the tool
//! converges on the same tree.

use std::path::PathBuf;

use crate::config::ScaffoldConfig;
use crate::error::{Result, ScaffoldError};
use crate::example::{self, Example, AUDIO_COMPANION_FILES};
use crate::fsops;
use crate::gatt;
use crate::templates::embedded;
use crate::templates::renderer::TemplateRenderer;

/// Template files copied verbatim into the project root.
const ROOT_TEMPLATE_FILES: &[&str] = &["sdkconfig", "set_port.sh"];

/// Outcome of scaffolding a single example.
#[derive(Debug, Clone)]
pub struct ScaffoldReport {
    /// Base name of the example.
    pub name: String,
    /// Whether a GATT update script was generated and run.
    pub gatt_db: bool,
}

/// Drives the per-example generation procedure.
pub struct Scaffolder {
    config: ScaffoldConfig,
    renderer: TemplateRenderer,
    /// Identity of the generating tool, embedded in each Makefile header.
    tool: String,
}

impl Scaffolder {
    pub fn new(config: ScaffoldConfig) -> Self {
        let tool = std::env::current_exe()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|_| "btgen".to_string());
        Self {
            config,
            renderer: TemplateRenderer::new(),
            tool,
        }
    }

    pub fn config(&self) -> &ScaffoldConfig {
        &self.config
    }

    /// Enumerate the eligible examples for this configuration.
    pub fn discover(&self) -> Result<Vec<Example>> {
        example::discover(&self.config.examples_dir)
    }

    /// The project directory an example is (or would be) generated into.
    pub fn project_dir(&self, example: &Example) -> PathBuf {
        self.config.output_dir.join(&example.name)
    }

    /// Generate one project directory, replacing any previous one.
    pub fn scaffold_example(&self, example: &Example) -> Result<ScaffoldReport> {
        tracing::debug!("scaffolding {}", example.name);

        let project_dir = self.project_dir(example);
        if project_dir.exists() {
            std::fs::remove_dir_all(&project_dir)?;
        }
        std::fs::create_dir_all(&project_dir)?;

        for item in ROOT_TEMPLATE_FILES {
            std::fs::copy(self.config.template_dir.join(item), project_dir.join(item))?;
        }
        fsops::make_executable(&project_dir.join("set_port.sh"))?;

        let data = serde_json::json!({
            "example": example.name,
            "tool": self.tool,
            "date": chrono::Local::now().format("%c").to_string(),
        });
        let makefile = self.renderer.render(embedded::MAKEFILE, &data)?;
        std::fs::write(project_dir.join("Makefile"), makefile)?;

        fsops::copy_dir_recursive(
            &self.config.template_dir.join("components"),
            &project_dir.join("components"),
        )?;

        let main_dir = project_dir.join("main");
        std::fs::create_dir_all(&main_dir)?;

        std::fs::copy(
            &example.source_path,
            main_dir.join(format!("{}.{}", example.name, example::SOURCE_EXTENSION)),
        )?;

        if example.is_audio() {
            for name in AUDIO_COMPANION_FILES {
                let src = self.config.examples_dir.join(name);
                if !src.is_file() {
                    return Err(ScaffoldError::CompanionFileMissing(src));
                }
                std::fs::copy(&src, main_dir.join(name))?;
            }
        }

        std::fs::copy(
            self.config.template_dir.join("main/component.mk"),
            main_dir.join("component.mk"),
        )?;

        if example.has_gatt_db() {
            let script = gatt::write_update_script(&project_dir, &example.name, &self.renderer)?;
            gatt::run_update_script(&script)?;
        }

        Ok(ScaffoldReport {
            name: example.name.clone(),
            gatt_db: example.has_gatt_db(),
        })
    }
}
