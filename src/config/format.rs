//! # Translation Format
//!
//! Serialization formats supported for generated translation files.
//!
//! Licensed under the MIT License.

use std::fmt;

use serde::{Deserialize, Serialize};

/// File format for translation files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationFormat {
    #[default]
    Json,
    Yaml,
    Po,
}

impl TranslationFormat {
    /// All supported formats, in the order they are documented.
    pub const ALL: [Self; 3] = [Self::Json, Self::Yaml, Self::Po];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Po => "po",
        }
    }
}

impl fmt::Display for TranslationFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_json() {
        assert_eq!(TranslationFormat::default(), TranslationFormat::Json);
    }

    #[test]
    fn test_parse_lowercase_names() {
        let format: TranslationFormat = serde_yml::from_str("po").unwrap();
        assert_eq!(format, TranslationFormat::Po);
        assert!(serde_yml::from_str::<TranslationFormat>("xliff").is_err());
    }
}
