pub mod config;
pub mod error;
pub mod language;
pub mod translation;

pub use config::*;
pub use error::*;
pub use language::*;
pub use translation::*;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json;

    #[test]
    fn test_language_from_str() {
        assert_eq!("isl".parse::<SignLanguage>().unwrap(), SignLanguage::Isl);
        assert_eq!("ASL".parse::<SignLanguage>().unwrap(), SignLanguage::Asl);
        assert_eq!(" Isl ".parse::<SignLanguage>().unwrap(), SignLanguage::Isl);
        assert!("bsl".parse::<SignLanguage>().is_err());
    }

    #[test]
    fn test_unsupported_language_message() {
        let err = "xyz".parse::<SignLanguage>().unwrap_err();
        assert_eq!(err.to_string(), "Unsupported language. Use 'isl' or 'asl'");
        assert_eq!(err.http_status(), 500);
    }

    #[test]
    fn test_isl_outcome_json_shape() {
        let outcome = TranslationOutcome::success(
            SignLanguage::Isl,
            "isl_1.mp4".to_string(),
            "I STORE GO".to_string(),
            0.25,
        );
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["isl_gloss"], "I STORE GO");
        assert!(json.get("asl_gloss").is_none());
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_asl_outcome_uses_asl_gloss() {
        let outcome = TranslationOutcome::success(
            SignLanguage::Asl,
            "asl_1.mp4".to_string(),
            "HELLO".to_string(),
            0.1,
        );
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["asl_gloss"], "HELLO");
        assert!(json.get("isl_gloss").is_none());
        assert_eq!(outcome.gloss(), Some("HELLO"));
    }

    #[test]
    fn test_failure_outcome_only_has_error() {
        let json = serde_json::to_value(TranslationOutcome::failure("disk full")).unwrap();
        assert_eq!(json, serde_json::json!({"success": false, "error": "disk full"}));
    }

    #[test]
    fn test_error_body_statuses() {
        assert_eq!(SignError::NoText.http_status(), 400);
        assert_eq!(SignError::EmptyText.to_error_body().error, "Empty text provided");
        let not_found = SignError::VideoNotFound { filename: "x.mp4".into() };
        assert_eq!(not_found.http_status(), 404);
    }

    #[test]
    fn test_translate_request_language_optional() {
        let req: TranslateRequest = serde_json::from_str(r#"{"text": "hi"}"#).unwrap();
        assert_eq!(req.text, "hi");
        assert!(req.language.is_none());
    }
}
