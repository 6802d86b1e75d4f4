//! Delete command

use colored::Colorize;

use crate::errors::Result;
use crate::service::ShortenService;

pub async fn delete_link(service: &dyn ShortenService, short_code: &str) -> Result<()> {
    let message = service.delete(short_code).await?;
    println!(
        "{} Deleted short link {}: {}",
        "[SUCCESS]".bold().green(),
        short_code.cyan(),
        message
    );
    Ok(())
}
