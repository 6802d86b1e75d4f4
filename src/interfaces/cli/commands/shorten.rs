//! Shorten command

use colored::Colorize;

use crate::errors::{ClientError, Result};
use crate::service::{ShortenRequest, ShortenResult, ShortenService, visit_path};

pub async fn shorten_url(
    service: &dyn ShortenService,
    url: &str,
    code: Option<&str>,
) -> Result<ShortenResult> {
    let request = ShortenRequest::new(url, code.unwrap_or_default());
    let result = service.shorten(request).await?;

    match &result {
        ShortenResult::Success {
            short_url,
            short_code,
        } => {
            println!("{} URL shortened successfully", "[SUCCESS]".bold().green());
            println!("  {} {}", "Short URL:".bold(), short_url.cyan());
            println!("  {} {}", "Visit:".bold(), visit_path(short_code).blue());
            Ok(result)
        }
        ShortenResult::Failure { error } => Err(ClientError::service(error.clone())),
    }
}
