//! Model manifest schema and resolution.
//!
//! A manifest file lives at
//! `<store root>/manifests/registry.ollama.ai/library/<name>/<version>`
//! and describes one model version: a configuration blob plus an ordered
//! list of layer blobs, each named by digest.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{PackError, Result};
use crate::store::{ModelReference, MANIFEST_LIBRARY_PATH};

/// One blob referenced by a manifest.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlobDescriptor {
    /// Media type declared for the blob
    #[serde(default)]
    pub media_type: String,
    /// Content digest (e.g., "sha256:abc123...")
    pub digest: String,
    /// Declared size in bytes
    #[serde(default)]
    pub size: u64,
}

/// Parsed model manifest describing one version of one model.
///
/// Deserialization is permissive: unknown fields are ignored so manifests
/// written by newer store versions keep parsing. The layer order is
/// semantically significant and is preserved through archive assembly.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelManifest {
    /// Manifest schema version, informational only
    #[serde(default)]
    pub schema_version: i64,
    /// Manifest media type, informational only
    #[serde(default)]
    pub media_type: String,
    /// Configuration blob
    pub config: BlobDescriptor,
    /// Layer blobs, in order
    #[serde(default)]
    pub layers: Vec<BlobDescriptor>,
}

impl ModelManifest {
    /// Store-relative path of a model's manifest file.
    pub fn relative_path(model: &ModelReference) -> PathBuf {
        Path::new(MANIFEST_LIBRARY_PATH)
            .join(&model.name)
            .join(&model.version)
    }

    /// Resolve a model reference to its parsed manifest.
    ///
    /// Performs a single read of the manifest file; no caching, no
    /// retries. A missing or unreadable file is
    /// [`PackError::ManifestNotFound`]; content that does not parse into
    /// the manifest shape is [`PackError::MalformedManifest`], and no
    /// partial manifest is ever returned.
    pub fn resolve(store_root: &Path, model: &ModelReference) -> Result<Self> {
        let path = store_root.join(Self::relative_path(model));

        let data = std::fs::read(&path).map_err(|_| PackError::ManifestNotFound {
            path: path.clone(),
        })?;

        serde_json::from_slice(&data)
            .map_err(|source| PackError::MalformedManifest { path, source })
    }
}
