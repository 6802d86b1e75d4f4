//! HTTP implementation of [`ShortenService`]
//!
//! ureq is blocking, so every call runs on tokio's blocking pool and the UI
//! task only awaits the join handle.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, trace, warn};
use ureq::Agent;
use ureq::http::Response;
use url::Url;

use super::dto::{
    LinkStats, ShortenRequest, ShortenResult, decode_delete_response, decode_shorten_response,
    decode_stats_response,
};
use super::ShortenService;
use crate::config::ServiceConfig;
use crate::config::validators::validate_base_url;
use crate::errors::{ClientError, Result};

const SHORTEN_PATH: &str = "api/shorten";
const STATS_PATH: &str = "api/stats/";
const DELETE_PATH: &str = "api/delete/";

pub struct HttpShortenService {
    agent: Agent,
    base_url: Url,
}

impl HttpShortenService {
    /// Create a client for the service at `base_url`
    ///
    /// Error statuses are not turned into transport errors: the service
    /// answers rejections with 4xx plus a JSON body that must be read.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let mut base_url = validate_base_url(base_url)?;

        // Url::join replaces the last segment unless the base ends with '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Ok(Self { agent, base_url })
    }

    pub fn from_config(config: &ServiceConfig) -> Result<Self> {
        Self::new(&config.base_url, config.timeout())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL of `path`, with an optional percent-encoded trailing segment
    pub fn endpoint(&self, path: &str, segment: Option<&str>) -> Result<Url> {
        let mut url = self.base_url.join(path)?;
        if let Some(segment) = segment {
            url.path_segments_mut()
                .map_err(|_| ClientError::config("service URL cannot be a base"))?
                .pop_if_empty()
                .push(segment);
        }
        Ok(url)
    }

    fn post_json_sync(agent: Agent, url: Url, request: ShortenRequest) -> Result<String> {
        let resp = agent.post(url.as_str()).send_json(&request)?;
        read_body(url, resp)
    }

    fn get_sync(agent: Agent, url: Url) -> Result<String> {
        let resp = agent.get(url.as_str()).call()?;
        read_body(url, resp)
    }

    fn delete_sync(agent: Agent, url: Url) -> Result<String> {
        let resp = agent.delete(url.as_str()).call()?;
        read_body(url, resp)
    }
}

fn read_body(url: Url, resp: Response<ureq::Body>) -> Result<String> {
    let status = resp.status();
    let text = resp.into_body().read_to_string()?;
    trace!(
        "Service answered {} for \"{}\" ({} bytes)",
        status.as_u16(),
        url,
        text.len()
    );
    Ok(text)
}

/// Run a blocking HTTP exchange off the async runtime
async fn run_blocking<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await?
}

fn log_failure<T>(what: &str, result: &Result<T>) {
    if let Err(e) = result
        && e.is_network()
    {
        warn!("{} failed [{}] {}: {}", what, e.code(), e.error_type(), e.message());
    }
}

#[async_trait]
impl ShortenService for HttpShortenService {
    async fn shorten(&self, request: ShortenRequest) -> Result<ShortenResult> {
        let url = self.endpoint(SHORTEN_PATH, None)?;
        let agent = self.agent.clone();
        debug!(
            "Submitting \"{}\" (custom code: {:?}) to {}",
            request.original_url, request.custom_code, url
        );

        let result = run_blocking(move || Self::post_json_sync(agent, url, request))
            .await
            .and_then(|body| decode_shorten_response(&body));
        log_failure("Shorten request", &result);
        result
    }

    async fn stats(&self, short_code: &str) -> Result<LinkStats> {
        let url = self.endpoint(STATS_PATH, Some(short_code))?;
        let agent = self.agent.clone();

        let result = run_blocking(move || Self::get_sync(agent, url))
            .await
            .and_then(|body| decode_stats_response(&body));
        log_failure("Stats request", &result);
        result
    }

    async fn delete(&self, short_code: &str) -> Result<String> {
        let url = self.endpoint(DELETE_PATH, Some(short_code))?;
        let agent = self.agent.clone();

        let result = run_blocking(move || Self::delete_sync(agent, url))
            .await
            .and_then(|body| decode_delete_response(&body));
        log_failure("Delete request", &result);
        result
    }
}
