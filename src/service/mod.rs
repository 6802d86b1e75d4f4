//! Shortening service client
//!
//! The service itself (code generation, storage, redirects) lives elsewhere;
//! this module only speaks its HTTP contract.
//!
//! ```text
//! Form / CLI ──→ ShortenService ──→ POST   /api/shorten
//!                                 ├→ GET    /api/stats/{code}
//!                                 └→ DELETE /api/delete/{code}
//! ```

pub mod dto;
mod http;

pub use dto::{LinkStats, ShortenRequest, ShortenResult, visit_path};
pub use http::HttpShortenService;

use async_trait::async_trait;

use crate::errors::Result;

/// Operations offered by the shortening service
///
/// `shorten` reports service-side rejections as `ShortenResult::Failure`
/// because the form shows them as regular feedback. `stats` and `delete`
/// map them to `ClientError::Service`.
#[async_trait]
pub trait ShortenService: Send + Sync {
    async fn shorten(&self, request: ShortenRequest) -> Result<ShortenResult>;

    async fn stats(&self, short_code: &str) -> Result<LinkStats>;

    /// Returns the service's confirmation message
    async fn delete(&self, short_code: &str) -> Result<String>;
}
