//! 配置值验证模块
//!
//! 在配置加载完成后检查明显错误，尽早失败而不是在第一次请求时报错。

use url::Url;

use super::StaticConfig;
use crate::errors::{ClientError, Result};

const LOG_FORMATS: [&str; 2] = ["text", "json"];

impl StaticConfig {
    /// 验证整份配置
    pub fn validate(&self) -> Result<()> {
        validate_base_url(&self.service.base_url)?;

        if self.service.timeout_secs == 0 {
            return Err(ClientError::config("service.timeout_secs must be > 0"));
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(ClientError::config("ui.tick_rate_ms must be > 0"));
        }

        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ClientError::config(format!(
                "Invalid logging.format: '{}'. Valid: {}",
                self.logging.format,
                LOG_FORMATS.join(", ")
            )));
        }

        Ok(())
    }
}

/// 服务地址必须是 http(s) 绝对 URL
pub fn validate_base_url(base_url: &str) -> Result<Url> {
    let url = Url::parse(base_url)
        .map_err(|e| ClientError::config(format!("Invalid service URL '{}': {}", base_url, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ClientError::config(format!(
            "Unsupported scheme '{}' in service URL (expected http or https)",
            other
        ))),
    }
}
