//! Local model store layout and archive assembly.
//!
//! An Ollama model store is a directory containing
//! `manifests/registry.ollama.ai/library/<name>/<version>` manifest files
//! and `blobs/<algorithm>-<hex>` blob files. This module owns the mapping
//! between manifest digests and blob file names, manifest resolution, and
//! the tar assembly that bundles a model for transfer.

mod archive;
mod digest;
mod manifest;
mod reference;

pub use archive::write_archive;
pub use digest::blob_file_name;
pub use manifest::{BlobDescriptor, ModelManifest};
pub use reference::ModelReference;

/// Directory under the store root that holds blob files.
pub const BLOBS_DIR: &str = "blobs";

/// Fixed prefix under the store root where model manifests live. This is
/// structural to the store layout, not configuration.
pub const MANIFEST_LIBRARY_PATH: &str = "manifests/registry.ollama.ai/library";
