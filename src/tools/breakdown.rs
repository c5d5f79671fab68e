use crate::config::Config;
use crate::http::{HttpClient, HttpReply};
use crate::models::error::AppError;
use crate::models::gemini::{ErrorEnvelope, GenerateContentRequest, GenerateContentResponse};
use crate::models::BreakdownRequest;
use crate::prompts::build_prompt;
use lambda_runtime::tracing::{debug, info, warn};

/// Asks the model to break a topic or method into its components.
///
/// Picks the system instruction from the request's `type`, sends a single
/// `generateContent` call and returns the first candidate's text. There is
/// no retry.
///
/// # Errors
///
/// - `MissingCredential` if no API key is configured (nothing is sent).
/// - `Transport` if the call fails or the reply is not JSON.
/// - `UpstreamStatus` if the API answers with a non-2xx status.
/// - `EmptyGeneration` if the API answers 2xx without any text.
pub async fn generate_breakdown(
    request: &BreakdownRequest,
    config: &Config,
    client: &dyn HttpClient,
) -> Result<String, AppError> {
    let api_key = config
        .api_key
        .as_deref()
        .ok_or(AppError::MissingCredential)?;

    let kind = request.breakdown_kind();
    let prompt = build_prompt(kind, &request.query_text());
    debug!(?kind, user_prompt = %prompt.user_prompt, "Built prompt");

    let payload = serde_json::to_value(GenerateContentRequest::new(
        prompt.system_instruction,
        &prompt.user_prompt,
    ))
    .map_err(|e| AppError::Transport(format!("Failed to serialize request: {e}")))?;

    info!(model = %config.model, ?kind, "Calling generation API");

    let reply = client
        .post_json(&config.generate_content_url(api_key), &payload)
        .await?;

    info!(status = reply.status, "Received generation API response");

    extract_text(reply)
}

/// Pulls `candidates[0].content.parts[0].text` out of an upstream reply.
///
/// # Errors
///
/// `UpstreamStatus` for non-2xx replies, `EmptyGeneration` when a 2xx reply
/// has no usable text.
pub fn extract_text(reply: HttpReply) -> Result<String, AppError> {
    if !reply.is_success() {
        let message = serde_json::from_value::<ErrorEnvelope>(reply.body)
            .ok()
            .and_then(|envelope| envelope.error)
            .and_then(|detail| detail.message);
        warn!(status = reply.status, "Generation API returned an error status");
        return Err(AppError::UpstreamStatus {
            status: reply.status,
            message,
        });
    }

    let response: GenerateContentResponse = serde_json::from_value(reply.body).map_err(|e| {
        AppError::EmptyGeneration(format!("Unexpected response from the generation API: {e}"))
    })?;

    let Some(candidate) = response.candidates.into_iter().next() else {
        let reason = response
            .prompt_feedback
            .and_then(|feedback| feedback.block_reason)
            .map_or_else(String::new, |reason| format!(" (blocked: {reason})"));
        return Err(AppError::EmptyGeneration(format!(
            "The generation API returned no candidates{reason}"
        )));
    };

    candidate
        .content
        .and_then(|content| content.parts.into_iter().next())
        .and_then(|part| part.text)
        .ok_or_else(|| {
            let reason = candidate
                .finish_reason
                .map_or_else(String::new, |reason| format!(" (finish reason: {reason})"));
            AppError::EmptyGeneration(format!(
                "The generation API returned a candidate without text{reason}"
            ))
        })
}
