//! Fetch-based client for the dashboard backend.
//!
//! Requests go through the browser `fetch` API with an `AbortController`
//! wired to a timeout, since a multi-year analysis can hold the connection
//! open for minutes when the upstream data service is slow. The analysis
//! response is kept twice: decoded for rendering, and as the raw JSON value
//! so exports can resend exactly what the backend produced.

use js_sys::Reflect;
use mpa_core::analysis::AnalysisReport;
use mpa_core::export::ExportKind;
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, Request, RequestInit, RequestMode, Response, Window};

const ANALYZE_ENDPOINT: &str = "/api/analyze_mpa";

/// Requests are aborted after this long without a response.
pub const REQUEST_TIMEOUT_MS: i32 = 120_000;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request timed out after {} seconds", REQUEST_TIMEOUT_MS / 1000)]
    Timeout,
    #[error("Server error (HTTP {status})")]
    Http { status: u16 },
    #[error("Network error: {0}")]
    Network(String),
    #[error("Unexpected response from server: {0}")]
    Decode(String),
}

/// Body of an analysis request.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeRequest {
    pub mpa_name: String,
    pub wdpa_code: String,
    /// YYYY-MM-DD
    pub start_date: String,
    /// YYYY-MM-DD
    pub end_date: String,
}

/// A completed analysis response, decoded and verbatim.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    /// Raw payload exactly as the backend sent it; exports resend this.
    pub raw: serde_json::Value,
    pub report: AnalysisReport,
}

pub fn export_endpoint(kind: ExportKind) -> &'static str {
    match kind {
        ExportKind::Csv => "/api/export_csv",
        ExportKind::Pdf => "/api/export_pdf",
    }
}

fn browser_window() -> Result<Window, ApiError> {
    web_sys::window().ok_or_else(|| ApiError::Network("no window object".to_string()))
}

fn js_error_text(err: &JsValue) -> String {
    err.as_string()
        .or_else(|| {
            Reflect::get(err, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{err:?}"))
}

fn js_network_error(err: JsValue) -> ApiError {
    ApiError::Network(js_error_text(&err))
}

/// Aborted fetches surface as a DOMException named "AbortError".
fn is_abort_error(err: &JsValue) -> bool {
    Reflect::get(err, &JsValue::from_str("name"))
        .ok()
        .and_then(|name| name.as_string())
        .map(|name| name == "AbortError")
        .unwrap_or(false)
}

fn fetch_failure(err: JsValue) -> ApiError {
    if is_abort_error(&err) {
        ApiError::Timeout
    } else {
        ApiError::Network(js_error_text(&err))
    }
}

/// POST a JSON body and hand back the response, whatever its status line.
async fn post_json(url: &str, body: &str) -> Result<Response, ApiError> {
    let window = browser_window()?;
    let controller = AbortController::new().map_err(js_network_error)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(body));
    opts.set_signal(Some(&controller.signal()));

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_network_error)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_network_error)?;

    let abort = controller.clone();
    let on_timeout = Closure::once_into_js(move || abort.abort());
    let timer = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            on_timeout.unchecked_ref(),
            REQUEST_TIMEOUT_MS,
        )
        .map_err(js_network_error)?;

    let fetched = JsFuture::from(window.fetch_with_request(&request)).await;
    window.clear_timeout_with_handle(timer);

    fetched
        .map_err(fetch_failure)?
        .dyn_into()
        .map_err(js_network_error)
}

async fn response_text(resp: &Response) -> Result<String, ApiError> {
    let promise = resp.text().map_err(js_network_error)?;
    let value = JsFuture::from(promise).await.map_err(js_network_error)?;
    value
        .as_string()
        .ok_or_else(|| ApiError::Decode("response body was not text".to_string()))
}

/// The backend reports parameter and upstream failures as a 4xx/5xx status
/// whose JSON body still carries its message (`{"error": "..."}`). Decode
/// that body so the server's own message reaches the user as a non-success
/// report; anything without a usable message is a bare HTTP failure.
fn decode_failure_body(text: &str, status: u16) -> Result<AnalysisOutcome, ApiError> {
    let Ok(raw) = serde_json::from_str::<serde_json::Value>(text) else {
        return Err(ApiError::Http { status });
    };
    let Ok(report) = serde_json::from_value::<AnalysisReport>(raw.clone()) else {
        return Err(ApiError::Http { status });
    };
    let message = report.error.as_deref().unwrap_or("");
    if report.is_success() || message.is_empty() {
        return Err(ApiError::Http { status });
    }
    Ok(AnalysisOutcome { raw, report })
}

/// Run a fishing-activity analysis for one site and date range.
///
/// The body is decoded whatever the status line says: a failed exchange
/// that names its error comes back as a non-success report for the caller
/// to surface, and only one with no usable body becomes [`ApiError::Http`].
/// A 2xx payload that is not an analysis document becomes
/// [`ApiError::Decode`].
pub async fn analyze_mpa(request: &AnalyzeRequest) -> Result<AnalysisOutcome, ApiError> {
    let body = serde_json::to_string(request).map_err(|e| ApiError::Decode(e.to_string()))?;
    log::info!(
        "analysis request: {} ({} to {})",
        request.mpa_name,
        request.start_date,
        request.end_date
    );

    let resp = post_json(ANALYZE_ENDPOINT, &body).await?;
    let ok = resp.ok();
    let status = resp.status();
    let text = response_text(&resp).await?;
    if !ok {
        return decode_failure_body(&text, status);
    }
    let raw: serde_json::Value =
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))?;
    let report: AnalysisReport =
        serde_json::from_value(raw.clone()).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(AnalysisOutcome { raw, report })
}

/// Ask the backend to render the cached analysis payload as a downloadable
/// file and return its bytes.
pub async fn export_report(
    kind: ExportKind,
    payload: &serde_json::Value,
) -> Result<Vec<u8>, ApiError> {
    let body = serde_json::to_string(payload).map_err(|e| ApiError::Decode(e.to_string()))?;
    let resp = post_json(export_endpoint(kind), &body).await?;
    if !resp.ok() {
        return Err(ApiError::Http {
            status: resp.status(),
        });
    }
    let promise = resp.array_buffer().map_err(js_network_error)?;
    let buffer = JsFuture::from(promise).await.map_err(js_network_error)?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ApiError::Timeout.to_string(),
            "Request timed out after 120 seconds"
        );
        assert_eq!(
            ApiError::Http { status: 502 }.to_string(),
            "Server error (HTTP 502)"
        );
        assert_eq!(
            ApiError::Network("connection refused".to_string()).to_string(),
            "Network error: connection refused"
        );
    }

    #[test]
    fn test_analyze_request_shape() {
        let request = AnalyzeRequest {
            mpa_name: "Dogger Bank".to_string(),
            wdpa_code: "555534295".to_string(),
            start_date: "2024-01-01".to_string(),
            end_date: "2024-03-31".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["mpa_name"], "Dogger Bank");
        assert_eq!(value["wdpa_code"], "555534295");
        assert_eq!(value["start_date"], "2024-01-01");
        assert_eq!(value["end_date"], "2024-03-31");
    }

    #[test]
    fn test_export_endpoints() {
        assert_eq!(export_endpoint(ExportKind::Csv), "/api/export_csv");
        assert_eq!(export_endpoint(ExportKind::Pdf), "/api/export_pdf");
    }

    #[test]
    fn test_failed_status_keeps_server_message() {
        let outcome =
            decode_failure_body(r#"{"error": "Missing required parameters"}"#, 400).unwrap();
        assert!(!outcome.report.is_success());
        assert_eq!(
            outcome.report.error.as_deref(),
            Some("Missing required parameters")
        );

        let outcome = decode_failure_body(r#"{"error": "division by zero"}"#, 500).unwrap();
        assert_eq!(outcome.report.error.as_deref(), Some("division by zero"));
        assert_eq!(outcome.raw["error"], "division by zero");
    }

    #[test]
    fn test_failed_status_without_message_is_http_error() {
        for body in ["{}", r#"{"error": ""}"#, "<html>Bad Gateway</html>", "[1]"] {
            let err = decode_failure_body(body, 502).unwrap_err();
            assert_eq!(err.to_string(), "Server error (HTTP 502)", "body: {body}");
        }
    }

    #[test]
    fn test_failed_status_never_yields_success() {
        // a success payload behind an error status stays an HTTP failure
        let err = decode_failure_body(r#"{"status": "success", "error": "x"}"#, 500).unwrap_err();
        assert_eq!(err.to_string(), "Server error (HTTP 500)");
    }
}
