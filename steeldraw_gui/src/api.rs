//! HTTP orchestration against the generation service.
//!
//! Each call builds a short-lived client, follows the endpoint map in
//! `steeldraw_core::api`, and folds every failure into `RequestError` so the
//! update loop only ever sees a notification-ready outcome. Generate
//! responses are binary; non-2xx bodies are decoded as text and parsed as
//! JSON to recover the service's `detail` message before display.

use std::time::Duration;

use steeldraw_core::api::{self, BatchRequest, ParsedDimensions};
use steeldraw_core::config;
use steeldraw_core::delivery::DeliveredFile;
use steeldraw_core::errors::RequestError;
use steeldraw_core::shapes::{DxfPayload, ShapeFamily};
use steeldraw_core::workflow::Mode;

use crate::download::PickedFile;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

fn client() -> Result<reqwest::Client, RequestError> {
    reqwest::Client::builder()
        .user_agent(concat!("SteelDraw/", env!("CARGO_PKG_VERSION")))
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| RequestError::transport(format!("Failed to create HTTP client: {e}")))
}

/// POST one validated dimension set and return the named drawing bytes.
pub async fn generate_single(
    family: ShapeFamily,
    payload: DxfPayload,
) -> Result<DeliveredFile, RequestError> {
    let url = config::endpoint_url(api::generate_endpoint(family, Mode::Single));
    let bytes = post_binary(client()?.post(&url).json(&payload)).await?;
    Ok(DeliveredFile::single(&payload, bytes))
}

/// POST a validated batch wrapped in `items` and return the archive bytes.
pub async fn generate_batch(
    family: ShapeFamily,
    items: Vec<DxfPayload>,
) -> Result<DeliveredFile, RequestError> {
    let url = config::endpoint_url(api::generate_endpoint(family, Mode::Batch));
    let body = BatchRequest { items };
    let bytes = post_binary(client()?.post(&url).json(&body)).await?;
    Ok(DeliveredFile::batch(family, bytes))
}

/// Upload a drawing as a multipart attachment and decode the extracted
/// dimensions. Shared by both families; the response discriminates.
pub async fn parse_dxf(picked: PickedFile) -> Result<ParsedDimensions, RequestError> {
    let url = config::endpoint_url(api::PARSE_ENDPOINT);
    let part = reqwest::multipart::Part::bytes(picked.bytes).file_name(picked.name);
    let form = reqwest::multipart::Form::new().part("file", part);
    let body = post_binary(client()?.post(&url).multipart(form)).await?;
    serde_json::from_slice(&body)
        .map_err(|e| RequestError::decode(format!("Unexpected parse response: {e}")))
}

/// Send the request and return the body bytes. On non-2xx, recover the
/// structured `detail` when the body carries one, otherwise fall back to a
/// generic status message.
async fn post_binary(request: reqwest::RequestBuilder) -> Result<Vec<u8>, RequestError> {
    let response = request
        .send()
        .await
        .map_err(|e| RequestError::transport(format!("Network error: {e}")))?;
    let status = response.status();
    let body = response
        .bytes()
        .await
        .map_err(|e| RequestError::transport(format!("Failed to read response: {e}")))?;

    if !status.is_success() {
        let detail =
            api::error_detail(&body).unwrap_or_else(|| format!("service returned {status}"));
        return Err(RequestError::Service { detail });
    }
    Ok(body.to_vec())
}
