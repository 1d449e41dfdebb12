//! modelpack — inventory and export locally cached Ollama models.
//!
//! An Ollama model store keeps each model version as a manifest file plus a
//! set of content-addressed blobs. `modelpack backup` bundles the manifest
//! and every blob it references into a single tar archive whose entry paths
//! mirror the store layout, so the archive can be unpacked directly onto a
//! compatible store root. `modelpack list` reports which models and
//! versions the store currently holds.

pub mod commands;
pub mod config;
pub mod error;
pub mod store;

pub use error::{PackError, Result};
