use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;
use crate::studio::endpoint::{normalize_endpoint, EndpointStore};

/// Body of `POST {endpoint}/generate`. Everything except the prompt is a
/// fixed parameter from `config`.
#[derive(Serialize, Debug, PartialEq)]
pub struct GenerateRequest {
    pub prompt: String,
    pub num_inference_steps: u32,
    pub num_frames: u32,
    pub use_interpolation: bool,
}

impl GenerateRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            num_inference_steps: config::NUM_INFERENCE_STEPS,
            num_frames: config::NUM_FRAMES,
            use_interpolation: config::USE_INTERPOLATION,
        }
    }
}

/// Raw response shape. All fields are optional so any JSON body deserializes
/// and the success checks happen in one place, in `parse_response`.
#[derive(Deserialize, Debug)]
pub struct GenerateResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub image_base64: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
}

#[derive(Debug, Error, PartialEq)]
pub enum GenerateError {
    #[error("Please enter a prompt first")]
    EmptyPrompt,
    #[error("Please save your tunnel URL first")]
    MissingEndpoint,
    #[error("Server responded with status: {0}")]
    BadStatus(u16),
    #[error("Invalid response from server")]
    InvalidResponse,
    #[error("{0}")]
    Network(String),
}

/// A request that is ready to send: resolved URL plus JSON body.
#[derive(Debug, PartialEq)]
pub struct PreparedRequest {
    pub url: String,
    pub body: GenerateRequest,
}

/// Builds the outbound request. The endpoint is re-read from the store here,
/// at request time, rather than from any cached copy, so an out-of-band
/// change to storage is always picked up.
pub fn prepare_request(
    store: &impl EndpointStore,
    prompt: &str,
) -> Result<PreparedRequest, GenerateError> {
    if prompt.trim().is_empty() {
        return Err(GenerateError::EmptyPrompt);
    }
    let endpoint = store
        .load()
        .filter(|url| !url.trim().is_empty())
        .ok_or(GenerateError::MissingEndpoint)?;
    let url = format!(
        "{}{}",
        normalize_endpoint(endpoint.trim()),
        config::GENERATE_PATH
    );
    Ok(PreparedRequest {
        url,
        body: GenerateRequest::new(prompt),
    })
}

/// One generated artifact, kept exactly as the server sent it.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationResult {
    pub format: String,
    pub image_base64: String,
}

impl GenerationResult {
    /// Source for the preview `<img>`.
    pub fn data_uri(&self) -> String {
        format!("data:image/{};base64,{}", self.format, self.image_base64)
    }

    /// File name used by the download button.
    pub fn download_file_name(&self) -> &'static str {
        if self.format == "gif" {
            "visionflux-video.gif"
        } else {
            "visionflux-image.png"
        }
    }

    /// Toast text shown after a successful generation.
    pub fn success_message(&self) -> String {
        format!("{} generated successfully", self.format.to_uppercase())
    }
}

/// Maps an HTTP status and body to a result. A missing or empty `format` tag
/// defaults to "png"; the server contract does not say whether omitting it is
/// intentional, so the default is kept as-is.
pub fn parse_response(status: u16, body: &str) -> Result<GenerationResult, GenerateError> {
    if !(200..300).contains(&status) {
        return Err(GenerateError::BadStatus(status));
    }
    let response: GenerateResponse =
        serde_json::from_str(body).map_err(|_| GenerateError::InvalidResponse)?;
    if response.status.as_deref() != Some("success") {
        return Err(GenerateError::InvalidResponse);
    }
    let image_base64 = response
        .image_base64
        .filter(|payload| !payload.is_empty())
        .ok_or(GenerateError::InvalidResponse)?;
    let format = response
        .format
        .filter(|format| !format.is_empty())
        .unwrap_or_else(|| "png".to_string());
    Ok(GenerationResult {
        format,
        image_base64,
    })
}

/// Sends one generation request and interprets the response. No retries and
/// no timeout; the caller disables re-submission while this is in flight.
pub async fn send_generate(prepared: &PreparedRequest) -> Result<GenerationResult, GenerateError> {
    let response = Request::post(&prepared.url)
        .json(&prepared.body)
        .map_err(|err| GenerateError::Network(err.to_string()))?
        .send()
        .await
        .map_err(|err| GenerateError::Network(err.to_string()))?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|err| GenerateError::Network(err.to_string()))?;
    parse_response(status, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::studio::testing::FakeStore;

    #[test]
    fn missing_endpoint_aborts_before_any_request() {
        let store = FakeStore::default();
        let result = prepare_request(&store, "a cat surfing");
        assert_eq!(result.unwrap_err(), GenerateError::MissingEndpoint);
    }

    #[test]
    fn empty_prompt_aborts() {
        let store = FakeStore::with("https://abcd.ngrok-free.app");
        let result = prepare_request(&store, "   ");
        assert_eq!(result.unwrap_err(), GenerateError::EmptyPrompt);
    }

    #[test]
    fn request_url_appends_generate_path() {
        let store = FakeStore::with("https://abcd.ngrok-free.app");
        let prepared = prepare_request(&store, "a cat surfing").unwrap();
        assert_eq!(prepared.url, "https://abcd.ngrok-free.app/generate");
    }

    #[test]
    fn stale_trailing_slash_in_storage_is_stripped_at_request_time() {
        // Values written out-of-band never went through save_endpoint.
        let store = FakeStore::with("https://abcd.ngrok-free.app/");
        let prepared = prepare_request(&store, "a cat surfing").unwrap();
        assert_eq!(prepared.url, "https://abcd.ngrok-free.app/generate");
    }

    #[test]
    fn request_body_carries_fixed_parameters() {
        let store = FakeStore::with("https://abcd.ngrok-free.app");
        let prepared = prepare_request(&store, "a cat surfing").unwrap();
        let body = serde_json::to_value(&prepared.body).unwrap();
        assert_eq!(body["prompt"], "a cat surfing");
        assert_eq!(body["num_inference_steps"], 12);
        assert_eq!(body["num_frames"], 8);
        assert_eq!(body["use_interpolation"], true);
    }

    #[test]
    fn non_success_status_reports_the_code() {
        let err = parse_response(500, "server exploded").unwrap_err();
        assert_eq!(err, GenerateError::BadStatus(500));
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn gif_response_yields_gif_data_uri_and_message() {
        let body = r#"{"status":"success","image_base64":"QQ==","format":"gif"}"#;
        let result = parse_response(200, body).unwrap();
        assert_eq!(result.data_uri(), "data:image/gif;base64,QQ==");
        assert!(result.success_message().contains("GIF"));
    }

    #[test]
    fn omitted_format_defaults_to_png() {
        let body = r#"{"status":"success","image_base64":"QQ=="}"#;
        let result = parse_response(200, body).unwrap();
        assert_eq!(result.data_uri(), "data:image/png;base64,QQ==");
    }

    #[test]
    fn missing_success_marker_is_invalid() {
        let body = r#"{"image_base64":"QQ=="}"#;
        assert_eq!(
            parse_response(200, body).unwrap_err(),
            GenerateError::InvalidResponse
        );
    }

    #[test]
    fn missing_or_empty_payload_is_invalid() {
        let body = r#"{"status":"success"}"#;
        assert_eq!(
            parse_response(200, body).unwrap_err(),
            GenerateError::InvalidResponse
        );
        let body = r#"{"status":"success","image_base64":""}"#;
        assert_eq!(
            parse_response(200, body).unwrap_err(),
            GenerateError::InvalidResponse
        );
    }

    #[test]
    fn non_json_body_is_invalid() {
        assert_eq!(
            parse_response(200, "<html>tunnel offline</html>").unwrap_err(),
            GenerateError::InvalidResponse
        );
    }

    #[test]
    fn download_names_depend_on_format() {
        let gif = GenerationResult {
            format: "gif".to_string(),
            image_base64: "QQ==".to_string(),
        };
        let png = GenerationResult {
            format: "png".to_string(),
            image_base64: "QQ==".to_string(),
        };
        assert_eq!(gif.download_file_name(), "visionflux-video.gif");
        assert_eq!(png.download_file_name(), "visionflux-image.png");
    }
}
