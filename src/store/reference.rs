//! Model reference parsing.
//!
//! Parses model references like `llama3:8b` into structured components.

use crate::error::{PackError, Result};

/// Parsed `name:version` model reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelReference {
    /// Model name (e.g., "llama3")
    pub name: String,
    /// Model version or tag (e.g., "8b", "latest")
    pub version: String,
}

impl ModelReference {
    /// Parse a model reference string.
    ///
    /// Exactly one `:` separating two non-empty components is required;
    /// anything else is a [`PackError::BadReference`].
    pub fn parse(reference: &str) -> Result<Self> {
        let reference = reference.trim();

        match reference.split_once(':') {
            Some((name, version))
                if !name.is_empty() && !version.is_empty() && !version.contains(':') =>
            {
                Ok(Self {
                    name: name.to_string(),
                    version: version.to_string(),
                })
            }
            _ => Err(PackError::BadReference(reference.to_string())),
        }
    }
}

impl std::fmt::Display for ModelReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.name, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_name_and_version() {
        let r = ModelReference::parse("llama3:8b").unwrap();
        assert_eq!(r.name, "llama3");
        assert_eq!(r.version, "8b");
    }

    #[test]
    fn test_parse_latest_tag() {
        let r = ModelReference::parse("codestral:latest").unwrap();
        assert_eq!(r.name, "codestral");
        assert_eq!(r.version, "latest");
    }

    #[test]
    fn test_parse_whitespace_trimmed() {
        let r = ModelReference::parse("  llama3:8b  ").unwrap();
        assert_eq!(r.name, "llama3");
        assert_eq!(r.version, "8b");
    }

    #[test]
    fn test_parse_missing_separator() {
        assert!(matches!(
            ModelReference::parse("badref"),
            Err(PackError::BadReference(_))
        ));
    }

    #[test]
    fn test_parse_extra_separator() {
        assert!(matches!(
            ModelReference::parse("a:b:c"),
            Err(PackError::BadReference(_))
        ));
    }

    #[test]
    fn test_parse_empty_name() {
        assert!(ModelReference::parse(":8b").is_err());
    }

    #[test]
    fn test_parse_empty_version() {
        assert!(ModelReference::parse("llama3:").is_err());
    }

    #[test]
    fn test_parse_empty_reference() {
        assert!(ModelReference::parse("").is_err());
    }

    #[test]
    fn test_display() {
        let r = ModelReference::parse("llama3:8b").unwrap();
        assert_eq!(format!("{}", r), "llama3:8b");
    }
}
