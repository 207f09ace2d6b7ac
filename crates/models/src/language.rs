use crate::SignError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SignLanguage {
    /// Indian Sign Language
    Isl,
    /// American Sign Language
    Asl,
}

impl SignLanguage {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignLanguage::Isl => "isl",
            SignLanguage::Asl => "asl",
        }
    }

    /// Label used in placeholder renderings, e.g. `ISL Signs: ...`.
    pub fn label(&self) -> &'static str {
        match self {
            SignLanguage::Isl => "ISL",
            SignLanguage::Asl => "ASL",
        }
    }
}

impl fmt::Display for SignLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SignLanguage {
    type Err = SignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "isl" => Ok(SignLanguage::Isl),
            "asl" => Ok(SignLanguage::Asl),
            _ => Err(SignError::UnsupportedLanguage {
                language: s.to_string(),
            }),
        }
    }
}
