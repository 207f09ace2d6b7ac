use crate::SignLanguage;
use serde::{Deserialize, Serialize};

/// Body of `POST /translate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub language: Option<String>,
}

/// Result of a translation. Failures are reported in-band with
/// `success: false`; the gloss field is named after the language.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TranslationOutcome {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isl_gloss: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asl_gloss: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TranslationOutcome {
    pub fn success(
        language: SignLanguage,
        video_path: String,
        gloss: String,
        processing_time: f64,
    ) -> Self {
        let (isl_gloss, asl_gloss) = match language {
            SignLanguage::Isl => (Some(gloss), None),
            SignLanguage::Asl => (None, Some(gloss)),
        };
        Self {
            success: true,
            video_path: Some(video_path),
            isl_gloss,
            asl_gloss,
            processing_time: Some(processing_time),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            video_path: None,
            isl_gloss: None,
            asl_gloss: None,
            processing_time: None,
            error: Some(error.into()),
        }
    }

    pub fn gloss(&self) -> Option<&str> {
        self.isl_gloss.as_deref().or(self.asl_gloss.as_deref())
    }
}
