use lambda_runtime::tracing::{debug, error, info, warn};
use lambda_runtime::{Error, LambdaEvent};

use crate::config::Config;
use crate::http::HttpClient;
use crate::models::error::AppError;
use crate::models::{BreakdownRequest, BreakdownResponse, ErrorResponse, ProxyEvent, ProxyResponse};
use crate::tools::generate_breakdown;
use crate::utils::{cors_headers, decode_body};

pub const METHOD_NOT_ALLOWED_BODY: &str = "Method Not Allowed";

/// Handles one proxy request end to end.
///
/// `OPTIONS` is answered immediately, any method other than `POST` gets a
/// 405, and a `POST` runs the breakdown pipeline. Failures never escape:
/// each one becomes a 500 with an `{"error": ...}` body.
pub async fn handle(event: &ProxyEvent, config: &Config, client: &dyn HttpClient) -> ProxyResponse {
    let method = event.method().unwrap_or_default();
    debug!(method = %method, "Dispatching request");

    match method.as_str() {
        "OPTIONS" => preflight(),
        "POST" => match process_post(event, config, client).await {
            Ok(text) => {
                info!(result_len = text.len(), "Breakdown generated");
                json_response(200, &BreakdownResponse { result: text })
            }
            Err(e) => {
                error!(kind = e.kind(), error = %e, "Breakdown request failed");
                error_response(&e)
            }
        },
        _ => {
            warn!(method = %method, "Rejected unsupported method");
            method_not_allowed()
        }
    }
}

async fn process_post(
    event: &ProxyEvent,
    config: &Config,
    client: &dyn HttpClient,
) -> Result<String, AppError> {
    let body = decode_body(event.body.as_deref(), event.is_base64_encoded)?;
    let request = BreakdownRequest::from_json(&body)?;
    generate_breakdown(&request, config, client).await
}

fn preflight() -> ProxyResponse {
    ProxyResponse {
        status_code: 200,
        headers: cors_headers(),
        body: String::new(),
    }
}

fn method_not_allowed() -> ProxyResponse {
    let mut headers = cors_headers();
    headers.insert("Content-Type".to_string(), "text/plain".to_string());
    ProxyResponse {
        status_code: 405,
        headers,
        body: METHOD_NOT_ALLOWED_BODY.to_string(),
    }
}

fn error_response(error: &AppError) -> ProxyResponse {
    json_response(
        500,
        &ErrorResponse {
            error: error.client_message(),
        },
    )
}

fn json_response<T: serde::Serialize>(status_code: u16, body: &T) -> ProxyResponse {
    let mut headers = cors_headers();
    headers.insert("Content-Type".to_string(), "application/json".to_string());
    // Both body types are plain string structs.
    let body = serde_json::to_string(body).unwrap_or_else(|_| "{}".to_string());
    ProxyResponse {
        status_code,
        headers,
        body,
    }
}

/// Lambda event handler.
///
/// # Errors
///
/// Never fails for a handled request; the `Result` is what the Lambda
/// runtime expects from a service function.
pub async fn function_handler(
    event: LambdaEvent<ProxyEvent>,
    config: &Config,
    client: &dyn HttpClient,
) -> Result<ProxyResponse, Error> {
    let (payload, context) = event.into_parts();
    info!(request_id = %context.request_id, "Handling breakdown invocation");
    Ok(handle(&payload, config, client).await)
}
