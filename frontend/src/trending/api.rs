use crate::config::{ANALYZE_PATH, APP_CONFIG};
use crate::error::TrendError;
use crate::models::{AnalysisRequest, AnalysisResult, ErrorResponse};
use crate::trending::state::Query;
use gloo_net::http::Request;
use web_sys::AbortSignal;

pub fn analyze_url() -> String {
    APP_CONFIG.api_url(ANALYZE_PATH)
}

/// Posts `query` to the analysis endpoint. Non-2xx statuses become
/// [`TrendError::Http`], carrying the backend's `detail` when it sent one.
pub async fn analyze_trend(
    query: &Query,
    signal: Option<&AbortSignal>,
) -> Result<AnalysisResult, TrendError> {
    let request_body = AnalysisRequest {
        prompt: query.as_str().to_string(),
    };

    let response = Request::post(&analyze_url())
        .abort_signal(signal)
        .json(&request_body)
        .map_err(|e| TrendError::Request(e.to_string()))?
        .send()
        .await?;

    if !response.ok() {
        let status = response.status();
        let message = match response.text().await {
            Ok(error_text) => serde_json::from_str::<ErrorResponse>(&error_text)
                .ok()
                .and_then(|error_response| error_response.message()),
            Err(_) => None,
        };
        return Err(TrendError::Http { status, message });
    }

    response
        .json::<AnalysisResult>()
        .await
        .map_err(|e| TrendError::Parse(e.to_string()))
}
