//! Model store root resolution.

use std::path::PathBuf;

/// Environment variable overriding the model store root.
pub const STORE_ROOT_ENV: &str = "OLLAMA_MODELS";

/// Return the root directory of the local model store.
///
/// Honors `OLLAMA_MODELS` when set and non-empty, otherwise defaults to
/// `~/.ollama/models` (with a relative fallback when the home directory
/// cannot be determined).
pub fn store_root() -> PathBuf {
    if let Ok(path) = std::env::var(STORE_ROOT_ENV) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }

    dirs::home_dir()
        .map(|h| h.join(".ollama"))
        .unwrap_or_else(|| PathBuf::from(".ollama"))
        .join("models")
}
