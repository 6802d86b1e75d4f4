//! Wire types for the shortening service
//!
//! The service wraps every answer in a `success` envelope. Raw envelopes are
//! decoded first and then converted into strict result types, so a body that
//! parses as JSON but misses required fields is still a decode error.

use serde::{Deserialize, Serialize};

use crate::errors::{ClientError, Result};

/// Body of `POST /api/shorten`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortenRequest {
    pub original_url: String,
    /// Empty means "let the service pick a code"
    pub custom_code: String,
}

impl ShortenRequest {
    /// Build a request from raw field values, trimming both
    pub fn new(original_url: &str, custom_code: &str) -> Self {
        Self {
            original_url: original_url.trim().to_string(),
            custom_code: custom_code.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortenResult {
    Success {
        short_url: String,
        short_code: String,
    },
    /// Service-reported failure, `error` is shown verbatim
    Failure { error: String },
}

/// Relative path that the service redirects from
pub fn visit_path(short_code: &str) -> String {
    format!("/{}", short_code)
}

#[derive(Debug, Deserialize)]
struct RawShortenResponse {
    success: bool,
    #[serde(default)]
    short_url: Option<String>,
    #[serde(default)]
    short_code: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl TryFrom<RawShortenResponse> for ShortenResult {
    type Error = ClientError;

    fn try_from(raw: RawShortenResponse) -> Result<Self> {
        if raw.success {
            match (raw.short_url, raw.short_code) {
                (Some(short_url), Some(short_code)) => Ok(ShortenResult::Success {
                    short_url,
                    short_code,
                }),
                _ => Err(ClientError::decode(
                    "success response without short_url/short_code",
                )),
            }
        } else {
            raw.error
                .map(|error| ShortenResult::Failure { error })
                .ok_or_else(|| ClientError::decode("failure response without error message"))
        }
    }
}

/// Decode the body of a `POST /api/shorten` answer
pub fn decode_shorten_response(body: &str) -> Result<ShortenResult> {
    let raw: RawShortenResponse = serde_json::from_str(body)?;
    raw.try_into()
}

/// Click statistics for one short code (`GET /api/stats/{code}`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkStats {
    pub short_code: String,
    pub original_url: String,
    pub clicks: u64,
    pub created_at: Option<String>,
    pub last_clicked: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawStatsResponse {
    success: bool,
    #[serde(default)]
    short_code: Option<String>,
    #[serde(default)]
    original_url: Option<String>,
    #[serde(default)]
    clicks: Option<u64>,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    last_clicked: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Decode a stats answer; `success: false` becomes `ClientError::Service`
pub fn decode_stats_response(body: &str) -> Result<LinkStats> {
    let raw: RawStatsResponse = serde_json::from_str(body)?;
    if !raw.success {
        return Err(service_failure(raw.error));
    }

    match (raw.short_code, raw.original_url) {
        (Some(short_code), Some(original_url)) => Ok(LinkStats {
            short_code,
            original_url,
            clicks: raw.clicks.unwrap_or(0),
            created_at: raw.created_at,
            last_clicked: raw.last_clicked,
        }),
        _ => Err(ClientError::decode(
            "stats response without short_code/original_url",
        )),
    }
}

#[derive(Debug, Deserialize)]
struct RawDeleteResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Decode a delete answer into the service's confirmation message
pub fn decode_delete_response(body: &str) -> Result<String> {
    let raw: RawDeleteResponse = serde_json::from_str(body)?;
    if raw.success {
        Ok(raw
            .message
            .unwrap_or_else(|| "URL deleted successfully".to_string()))
    } else {
        Err(service_failure(raw.error))
    }
}

fn service_failure(error: Option<String>) -> ClientError {
    match error {
        Some(error) => ClientError::service(error),
        None => ClientError::decode("failure response without error message"),
    }
}
