//! AWS Lambda handler for ADU proformas
//!
//! Accepts a JSON `ProformaInput` (missing fields take dashboard defaults),
//! optionally with a `schedule` override, and returns the full proforma.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use adu_proforma::{compute_proforma, FeeSchedule, ProformaInput, ProformaResult};
use aws_lambda_events::event::lambda_function_urls::LambdaFunctionUrlRequest;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Request body
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProformaRequest {
    #[serde(flatten)]
    pub input: ProformaInput,

    /// Fee schedule override; omitted keys keep San Diego values
    #[serde(default)]
    pub schedule: Option<FeeSchedule>,

    /// Clamp size to the schedule range first, as the dashboard sliders do
    #[serde(default)]
    pub clamp: bool,
}

/// Response body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProformaResponse {
    pub schedule_name: String,
    pub input: ProformaInput,
    pub result: ProformaResult,
    pub payback_display: String,
    pub break_even_year: Option<u32>,
    pub execution_time_us: u64,
}

fn cors_headers() -> Value {
    json!({
        "Content-Type": "application/json",
        "Access-Control-Allow-Origin": "*",
        "Access-Control-Allow-Methods": "POST, OPTIONS",
        "Access-Control-Allow-Headers": "Content-Type",
    })
}

fn http_response(status: u16, body: String) -> Value {
    json!({
        "statusCode": status,
        "headers": cors_headers(),
        "body": body,
        "isBase64Encoded": false,
    })
}

fn error_response(status: u16, message: &str) -> Value {
    http_response(status, json!({ "error": message }).to_string())
}

/// Evaluate one request body
fn evaluate(body: &str) -> Result<ProformaResponse, (u16, String)> {
    let start = std::time::Instant::now();

    let request: ProformaRequest = if body.trim().is_empty() {
        ProformaRequest::default()
    } else {
        serde_json::from_str(body).map_err(|e| (400, format!("Invalid JSON: {}", e)))?
    };

    let schedule = request.schedule.unwrap_or_default();

    let input = if request.clamp {
        request.input.clamped_to(&schedule)
    } else {
        request.input
    };

    let result = compute_proforma(&input, &schedule).map_err(|e| (400, e.to_string()))?;

    Ok(ProformaResponse {
        schedule_name: schedule.name.clone(),
        payback_display: result.payback.to_string(),
        break_even_year: result.break_even_year(),
        input,
        result,
        execution_time_us: start.elapsed().as_micros() as u64,
    })
}

/// Lambda handler function
async fn handler(event: LambdaEvent<LambdaFunctionUrlRequest>) -> Result<Value, Error> {
    let request = event.payload;

    // Handle CORS preflight
    if request.request_context.http.method.as_deref() == Some("OPTIONS") {
        return Ok(http_response(200, String::new()));
    }

    if request.is_base64_encoded {
        return Ok(error_response(400, "Base64-encoded bodies are not supported"));
    }

    let body = request.body.unwrap_or_default();
    match evaluate(&body) {
        Ok(response) => Ok(http_response(200, serde_json::to_string(&response)?)),
        Err((status, message)) => {
            log::warn!("Rejected request: {}", message);
            Ok(error_response(status, &message))
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
