//! Core library for the btgen scaffolding tool.
//!
//! Generates one buildable ESP32 (IDF make-based) project directory per
//! embedded Bluetooth example: template tree copied in, a Makefile rendered
//! from an embedded template, and an `update_gatt_db.sh` helper generated and
//! run for examples that carry a GATT service definition.
//!
//! The crate is split along the tool's lifecycle:
//! - [`config`] — the explicit source/template/output path configuration
//! - [`example`] — discovery of eligible example sources
//! - [`scaffold`] — the per-example project generation procedure
//! - [`gatt`] — GATT update-script generation and invocation
//! - [`templates`] — compile-time embedded templates and the renderer

pub mod config;
pub mod error;
pub mod example;
mod fsops;
pub mod gatt;
pub mod scaffold;
pub mod templates;
