use std::path::PathBuf;

use thiserror::Error;

/// Modelpack error types
#[derive(Error, Debug)]
pub enum PackError {
    /// Malformed model reference
    #[error("Invalid model reference '{0}': expected name:version")]
    BadReference(String),

    /// Manifest file absent or unreadable
    #[error("Model manifest not found: {}", .path.display())]
    ManifestNotFound { path: PathBuf },

    /// Manifest content did not parse
    #[error("Malformed model manifest {}: {source}", .path.display())]
    MalformedManifest {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A blob referenced by the manifest is absent on disk
    #[error("Blob missing from store: {}", .path.display())]
    BlobMissing { path: PathBuf },

    /// Output destination failure
    #[error("Output error for {path}: {source}")]
    Sink {
        path: String,
        source: std::io::Error,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for modelpack operations
pub type Result<T> = std::result::Result<T, PackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_reference_display() {
        let error = PackError::BadReference("badref".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid model reference 'badref': expected name:version"
        );
    }

    #[test]
    fn test_manifest_not_found_display() {
        let error = PackError::ManifestNotFound {
            path: PathBuf::from("/store/manifests/registry.ollama.ai/library/llama3/8b"),
        };
        assert_eq!(
            error.to_string(),
            "Model manifest not found: /store/manifests/registry.ollama.ai/library/llama3/8b"
        );
    }

    #[test]
    fn test_blob_missing_display() {
        let error = PackError::BlobMissing {
            path: PathBuf::from("/store/blobs/sha256-aaaa"),
        };
        assert_eq!(
            error.to_string(),
            "Blob missing from store: /store/blobs/sha256-aaaa"
        );
    }

    #[test]
    fn test_malformed_manifest_display_names_path() {
        let source = serde_json::from_str::<serde_json::Value>("{ bad json").unwrap_err();
        let error = PackError::MalformedManifest {
            path: PathBuf::from("/store/manifests/registry.ollama.ai/library/foo/1"),
            source,
        };
        assert!(error
            .to_string()
            .starts_with("Malformed model manifest /store/manifests/registry.ollama.ai/library/foo/1:"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: PackError = io_error.into();
        assert!(matches!(error, PackError::Io(_)));
        assert!(error.to_string().contains("file not found"));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_ok() -> Result<i32> {
            Ok(42)
        }

        assert_eq!(returns_ok().unwrap(), 42);
    }
}
