//! Template system for generated project files.
//!
//! Templates are embedded into the binary at compile-time via [`include_str!`] in the
//! [`embedded`] module, then rendered at runtime with [Handlebars](https://handlebarsjs.com/)
//! via the [`renderer::TemplateRenderer`].
//!
//! ## Template variables
//!
//! Templates use Handlebars syntax. The variables in use:
//! - `{{example}}` — base name of the example (e.g., `le_counter`)
//! - `{{tool}}` — absolute path of the generating executable
//! - `{{date}}` — human-readable generation timestamp
//!
//! ## Adding a new template
//!
//! 1. Create the `.tmpl` file under `templates/project/`
//! 2. Add a `pub const` with `include_str!` in [`embedded`]
//! 3. Run `cargo build` to verify the path resolves
//!
//! **Warning**: Template files in `templates/` and constants in [`embedded`] must stay in sync.
//! The `include_str!` paths are relative to this file and checked at compile-time.

pub mod embedded;
pub mod renderer;
