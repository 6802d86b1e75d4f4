//! Stats command

use chrono::{DateTime, NaiveDateTime};
use colored::Colorize;

use crate::errors::Result;
use crate::service::{LinkStats, ShortenService};

pub async fn show_stats(service: &dyn ShortenService, short_code: &str) -> Result<LinkStats> {
    let stats = service.stats(short_code).await?;

    println!(
        "{} Statistics for {}",
        "[SUCCESS]".bold().green(),
        stats.short_code.cyan()
    );
    println!("  {} {}", "Target:".bold(), stats.original_url.blue());
    println!("  {} {}", "Clicks:".bold(), stats.clicks.to_string().yellow());
    println!(
        "  {} {}",
        "Created:".bold(),
        stats
            .created_at
            .as_deref()
            .map_or_else(|| "unknown".to_string(), format_timestamp)
            .dimmed()
    );
    println!(
        "  {} {}",
        "Last clicked:".bold(),
        stats
            .last_clicked
            .as_deref()
            .map_or_else(|| "never".to_string(), format_timestamp)
            .dimmed()
    );

    Ok(stats)
}

/// 服务返回 ISO 8601 时间（可能不带时区），无法解析时原样显示
fn format_timestamp(raw: &str) -> String {
    const DISPLAY: &str = "%Y-%m-%d %H:%M:%S";

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(DISPLAY).to_string();
    }
    match NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(dt) => dt.format(DISPLAY).to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        assert_eq!(
            format_timestamp("2024-05-01T08:30:15.123456"),
            "2024-05-01 08:30:15"
        );
        assert_eq!(
            format_timestamp("2024-05-01T08:30:15+02:00"),
            "2024-05-01 08:30:15"
        );
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }
}
