//! Axum route handlers for the cover letter API.

use axum::{body::Bytes, extract::State, Json};
use serde_json::Value;
use tracing::error;

use crate::cover_letter::generator::generate_cover_letter;
use crate::cover_letter::models::{GenerateResponse, GenerationRequest};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/generate
///
/// Body: `GenerationRequest` as JSON. Returns `{ "coverLetter": "..." }`.
///
/// The body is decoded by hand rather than through the `Json` extractor so an
/// unreadable body gets the same `{ "error": ... }` shape as a provider failure.
pub async fn handle_generate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<GenerateResponse>, AppError> {
    let request = decode_request(&body)?;

    let cover_letter = generate_cover_letter(state.llm.as_ref(), &request).await?;

    Ok(Json(GenerateResponse { cover_letter }))
}

/// Unparseable JSON and `null` are generation failures. Any other non-object
/// value (array, string, number, bool) carries no fields and decodes as an
/// empty request, so it fails validation instead.
fn decode_request(body: &[u8]) -> Result<GenerationRequest, AppError> {
    let unreadable = |e: serde_json::Error| {
        error!("Error generating cover letter: unreadable request body: {e}");
        AppError::Generation
    };

    match serde_json::from_slice::<Value>(body).map_err(unreadable)? {
        Value::Null => {
            error!("Error generating cover letter: request body is null");
            Err(AppError::Generation)
        }
        object @ Value::Object(_) => serde_json::from_value(object).map_err(unreadable),
        _ => Ok(GenerationRequest::default()),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::cover_letter::prompts::DEFAULT_SKILLS;
    use crate::llm_client::fake::FakeCompletion;
    use crate::routes::build_router;
    use crate::state::AppState;

    fn app(llm: &Arc<FakeCompletion>) -> Router {
        build_router(AppState { llm: llm.clone() })
    }

    async fn post_generate(app: Router, body: impl Into<Body>) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/generate")
                    .header("content-type", "application/json")
                    .body(body.into())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_frontend_developer_scenario() {
        let llm = Arc::new(FakeCompletion::replying("Dear Hiring Manager, I am thrilled..."));
        let body = json!({
            "jobTitle": "Frontend Developer",
            "jobDescription": "Looking for a React developer..."
        });

        let (status, response) = post_generate(app(&llm), body.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        let letter = response["coverLetter"].as_str().unwrap();
        assert!(!letter.is_empty());

        let calls = llm.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].prompt.contains("Frontend Developer"));
        assert!(calls[0].prompt.contains(DEFAULT_SKILLS));
    }

    #[tokio::test]
    async fn test_missing_required_field_is_400_without_provider_call() {
        let llm = Arc::new(FakeCompletion::replying("unused"));

        for body in [
            json!({ "jobTitle": "Frontend Developer" }),
            json!({ "jobDescription": "Looking for a React developer..." }),
            json!({ "jobTitle": "", "jobDescription": "" }),
            json!({}),
        ] {
            let (status, response) = post_generate(app(&llm), body.to_string()).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
            assert_eq!(
                response,
                json!({ "error": "Job title and description are required" })
            );
        }

        assert!(llm.calls().is_empty());
    }

    #[tokio::test]
    async fn test_provider_failure_is_generic_500() {
        let llm = Arc::new(FakeCompletion::failing());
        let body = json!({ "jobTitle": "Dev", "jobDescription": "Build things" });

        let (status, response) = post_generate(app(&llm), body.to_string()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response, json!({ "error": "Failed to generate cover letter" }));
        assert!(!response.to_string().contains("simulated network error"));
    }

    #[tokio::test]
    async fn test_empty_completion_is_200_with_empty_letter() {
        let llm = Arc::new(FakeCompletion::empty());
        let body = json!({ "jobTitle": "Dev", "jobDescription": "Build things" });

        let (status, response) = post_generate(app(&llm), body.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(response, json!({ "coverLetter": "" }));
    }

    #[tokio::test]
    async fn test_unreadable_body_is_generic_500() {
        let llm = Arc::new(FakeCompletion::replying("unused"));

        for body in ["not json", "null", "{\"jobTitle\": "] {
            let (status, response) = post_generate(app(&llm), body).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{body}");
            assert_eq!(response, json!({ "error": "Failed to generate cover letter" }));
        }

        assert!(llm.calls().is_empty());
    }

    #[tokio::test]
    async fn test_non_object_json_body_is_validation_error() {
        let llm = Arc::new(FakeCompletion::replying("unused"));

        for body in ["[1, 2]", "\"text\"", "5", "true"] {
            let (status, response) = post_generate(app(&llm), body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
            assert_eq!(
                response,
                json!({ "error": "Job title and description are required" })
            );
        }

        assert!(llm.calls().is_empty());
    }
}
