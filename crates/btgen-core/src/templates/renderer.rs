//! Handlebars-based renderer for the generated build files.
//!
//! Wraps the [`handlebars::Handlebars`] engine with **strict mode** enabled.
//! Strict mode ensures that any `{{variable}}` referenced in a template must
//! be present in the data context — otherwise rendering returns an error.
//! The templates here produce Makefiles and shell scripts; a silently missing
//! variable would emit a project that fails at build time with errors far
//! from the actual cause.

use handlebars::Handlebars;
use serde_json::Value;

use crate::error::{Result, ScaffoldError};

/// Template renderer used for the generated Makefile and GATT update script.
pub struct TemplateRenderer {
    hbs: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Create a new renderer with strict mode enabled.
    ///
    /// Strict mode means `{{missing_var}}` in a template will return an error
    /// instead of an empty string, so a malformed template is caught while
    /// scaffolding rather than when the generated project is first built.
    pub fn new() -> Self {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        Self { hbs }
    }

    /// Render a template string with the given data context.
    pub fn render(&self, template: &str, data: &Value) -> Result<String> {
        self.hbs
            .render_template(template, data)
            .map_err(|e| ScaffoldError::TemplateRender(e.to_string()))
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::embedded;

    #[test]
    fn test_render_substitutes_all_placeholders() {
        let renderer = TemplateRenderer::new();
        let data = serde_json::json!({
            "example": "le_counter",
            "tool": "/usr/local/bin/btgen",
            "date": "Thu Aug  6 10:00:00 2026",
        });
        let out = renderer.render(embedded::MAKEFILE, &data).unwrap();
        assert!(out.contains("PROJECT_NAME := le_counter"));
        assert!(out.contains("Generated by /usr/local/bin/btgen"));
        assert!(out.contains("On Thu Aug  6 10:00:00 2026"));
        assert!(!out.contains("{{"));
    }

    #[test]
    fn test_render_gatt_script() {
        let renderer = TemplateRenderer::new();
        let data = serde_json::json!({ "example": "le_counter" });
        let out = renderer.render(embedded::GATT_UPDATE_SCRIPT, &data).unwrap();
        assert!(out.starts_with("#!/bin/sh"));
        assert!(out.contains("le_counter.gatt"));
        assert!(out.contains("main/le_counter.h"));
    }

    #[test]
    fn test_strict_mode_rejects_missing_variable() {
        let renderer = TemplateRenderer::new();
        let data = serde_json::json!({ "example": "le_counter" });
        let result = renderer.render("{{example}} at {{missing}}", &data);
        assert!(matches!(result, Err(ScaffoldError::TemplateRender(_))));
    }

    #[test]
    fn test_extra_context_keys_are_ignored() {
        let renderer = TemplateRenderer::new();
        let data = serde_json::json!({
            "example": "spp_counter",
            "tool": "btgen",
            "date": "now",
        });
        let out = renderer.render(embedded::GATT_UPDATE_SCRIPT, &data).unwrap();
        assert!(out.contains("spp_counter"));
    }
}
