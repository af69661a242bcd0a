//! Cover Letter Generation — the gateway between a validated request and one provider call.
//!
//! Flow: validate → build_prompt → llm.complete (exactly once) → first completion text.
//!
//! Validation failures never reach the provider. Provider failures are logged
//! in full and reported to the caller as `AppError::Generation` only.

use tracing::{error, info, warn};
use uuid::Uuid;

use crate::cover_letter::models::GenerationRequest;
use crate::cover_letter::prompts::{build_prompt, COVER_LETTER_SYSTEM};
use crate::errors::AppError;
use crate::llm_client::{CompletionRequest, TextCompletion};

pub const COVER_LETTER_TEMPERATURE: f32 = 0.7;

/// Generates a cover letter for `request`.
///
/// Returns the provider's first completion text, or an empty string when the
/// provider answered with no content. An empty answer is not an error.
pub async fn generate_cover_letter(
    llm: &dyn TextCompletion,
    request: &GenerationRequest,
) -> Result<String, AppError> {
    let validated = request.validate()?;

    let generation_id = Uuid::new_v4();
    info!(
        "Generating cover letter {} for '{}'",
        generation_id, validated.job_title
    );

    let prompt = build_prompt(&validated);

    let completion = llm
        .complete(CompletionRequest {
            system: COVER_LETTER_SYSTEM,
            prompt: &prompt,
            temperature: COVER_LETTER_TEMPERATURE,
        })
        .await
        .map_err(|e| {
            error!("Error generating cover letter {}: {}", generation_id, e);
            AppError::Generation
        })?;

    let cover_letter = completion.text.unwrap_or_default();
    if cover_letter.is_empty() {
        warn!(
            "Provider returned no content for cover letter {}",
            generation_id
        );
    } else {
        info!(
            "Generated cover letter {} ({} chars)",
            generation_id,
            cover_letter.len()
        );
    }

    Ok(cover_letter)
}
