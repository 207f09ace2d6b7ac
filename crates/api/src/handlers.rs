use crate::assets::{default_asset, INDEX_TEMPLATE};
use crate::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Json, Response},
};
use signbridge_metrics::TracingService;
use signbridge_models::{ErrorBody, SignError, TranslationOutcome};
use std::path::{Path as FsPath, PathBuf};
use std::time::Instant;
use tracing::{error, info, instrument, warn};

type ApiError = (StatusCode, Json<ErrorBody>);

fn error_response(e: &SignError) -> ApiError {
    (
        StatusCode::from_u16(e.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        Json(e.to_error_body()),
    )
}

/// Accept a single file name: no separators, no parent references.
fn is_safe_file_name(name: &str) -> bool {
    !name.is_empty()
        && !name.contains(['/', '\\'])
        && !name.contains("..")
        && name != "."
}

/// Resolve `rel` below `root`, refusing anything that could escape it.
fn resolve_below(root: &str, rel: &str) -> Option<PathBuf> {
    let mut path = PathBuf::from(root);
    for segment in rel.split('/') {
        if !is_safe_file_name(segment) {
            return None;
        }
        path.push(segment);
    }
    Some(path)
}

fn content_type_for(path: &FsPath) -> HeaderMap {
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_str(mime.as_ref())
            .unwrap_or(HeaderValue::from_static("application/octet-stream")),
    );
    headers
}

#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Response {
    let template = FsPath::new(&state.config.storage.templates_dir).join("index.html");

    match tokio::fs::read(&template).await {
        Ok(bytes) => Html(bytes).into_response(),
        Err(_) => match default_asset(INDEX_TEMPLATE) {
            Some(bytes) => Html(bytes.into_owned()).into_response(),
            None => (StatusCode::NOT_FOUND, "Template not found").into_response(),
        },
    }
}

/// Pull `text` and `language` out of the raw body. Anything that is not a
/// JSON object with a string `text` counts as no text.
fn parse_translate_body(body: &[u8], default_language: &str) -> Result<(String, String), SignError> {
    let data: serde_json::Value = serde_json::from_slice(body).map_err(|_| SignError::NoText)?;
    let text = data
        .get("text")
        .and_then(|t| t.as_str())
        .ok_or(SignError::NoText)?
        .trim()
        .to_string();

    let language = match data.get("language") {
        None | Some(serde_json::Value::Null) => default_language.to_lowercase(),
        Some(serde_json::Value::String(language)) => language.to_lowercase(),
        Some(other) => other.to_string(),
    };

    if text.is_empty() {
        return Err(SignError::EmptyText);
    }
    Ok((text, language))
}

#[instrument(skip(state, body))]
pub async fn translate_text(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TranslationOutcome>, ApiError> {
    let (text, language) =
        match parse_translate_body(&body, &state.config.translation.default_language) {
            Ok(parsed) => parsed,
            Err(e) => {
                state.metrics.record_rejected();
                TracingService::log_request_rejected(&e.to_string());
                return Err(error_response(&e));
            }
        };

    info!("Translating {} chars to {}", text.len(), language);

    let start = Instant::now();
    let translator = state.translator.clone();
    let text_len = text.len();
    let result = tokio::task::spawn_blocking(move || translator.translate(&text, &language))
        .await
        .map_err(|e| {
            error!("Translation task failed: {}", e);
            error_response(&SignError::Internal {
                reason: e.to_string(),
            })
        })?;
    let duration_ms = start.elapsed().as_secs_f64() * 1000.0;

    match result {
        Ok(translation) => {
            let outcome = translation.outcome;
            let cache_hit = state.translator.cache().map(|_| translation.cache_hit);
            state
                .metrics
                .record_translation(outcome.success, cache_hit, duration_ms);
            if outcome.success {
                TracingService::log_translation_completed(
                    translation.language,
                    text_len,
                    outcome.video_path.as_deref(),
                    duration_ms,
                    translation.cache_hit,
                );
            } else {
                TracingService::log_translation_failed(
                    translation.language,
                    text_len,
                    outcome.error.as_deref().unwrap_or("unknown"),
                );
            }
            Ok(Json(outcome))
        }
        Err(e) => {
            state.metrics.record_rejected();
            TracingService::log_request_rejected(&e.to_string());
            Err(error_response(&e))
        }
    }
}

/// Plain-text error, for routes that serve files rather than JSON.
fn plain_error_response(e: &SignError) -> Response {
    (
        StatusCode::from_u16(e.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        e.to_string(),
    )
        .into_response()
}

#[instrument(skip(state))]
pub async fn serve_video(State(state): State<AppState>, Path(filename): Path<String>) -> Response {
    if !is_safe_file_name(&filename) {
        warn!("Rejected video path: {}", filename);
        return plain_error_response(&SignError::VideoNotFound { filename });
    }

    let path = FsPath::new(&state.config.storage.videos_dir).join(&filename);
    match tokio::fs::read(&path).await {
        Ok(bytes) => (StatusCode::OK, content_type_for(&path), bytes).into_response(),
        Err(_) => plain_error_response(&SignError::VideoNotFound { filename }),
    }
}

#[instrument(skip(state))]
pub async fn serve_static(State(state): State<AppState>, Path(path): Path<String>) -> Response {
    let not_found = || (StatusCode::NOT_FOUND, "Not found").into_response();

    let Some(file) = resolve_below(&state.config.storage.static_dir, &path) else {
        warn!("Rejected static path: {}", path);
        return not_found();
    };

    match tokio::fs::read(&file).await {
        Ok(bytes) => (StatusCode::OK, content_type_for(&file), bytes).into_response(),
        Err(_) => match default_asset(&format!("static/{path}")) {
            Some(bytes) => {
                (StatusCode::OK, content_type_for(&file), bytes.into_owned()).into_response()
            }
            None => not_found(),
        },
    }
}

#[instrument(skip(_state))]
pub async fn health_check(State(_state): State<AppState>) -> Result<&'static str, StatusCode> {
    Ok("OK")
}

#[instrument(skip(state))]
pub async fn metrics(State(state): State<AppState>) -> Result<String, StatusCode> {
    match state.metrics.get_prometheus_metrics().await {
        Ok(metrics) => Ok(metrics),
        Err(e) => {
            error!("Failed to get metrics: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_file_names() {
        assert!(is_safe_file_name("isl_1_abcd.mp4"));
        assert!(!is_safe_file_name(""));
        assert!(!is_safe_file_name(".."));
        assert!(!is_safe_file_name("a/b.txt"));
        assert!(!is_safe_file_name("..\\secret"));
    }

    #[tokio::test]
    async fn video_not_found_is_plain_404() {
        let res = plain_error_response(&SignError::VideoNotFound {
            filename: "x.mp4".to_string(),
        });
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"Video not found");
    }

    #[test]
    fn resolve_rejects_traversal() {
        assert_eq!(
            resolve_below("static", "css/style.css"),
            Some(PathBuf::from("static/css/style.css"))
        );
        assert!(resolve_below("static", "../Cargo.toml").is_none());
        assert!(resolve_below("static", "css//style.css").is_none());
    }

    #[test]
    fn parse_body_rules() {
        assert!(matches!(parse_translate_body(b"", "isl"), Err(SignError::NoText)));
        assert!(matches!(parse_translate_body(b"[1]", "isl"), Err(SignError::NoText)));
        assert!(matches!(parse_translate_body(br#"{"text": 5}"#, "isl"), Err(SignError::NoText)));
        assert!(matches!(
            parse_translate_body(br#"{"text": "   "}"#, "isl"),
            Err(SignError::EmptyText)
        ));

        let (text, language) = parse_translate_body(br#"{"text": " Hi there "}"#, "ISL").unwrap();
        assert_eq!(text, "Hi there");
        assert_eq!(language, "isl");

        let (_, language) =
            parse_translate_body(br#"{"text": "hi", "language": "ASL"}"#, "isl").unwrap();
        assert_eq!(language, "asl");
    }
}
