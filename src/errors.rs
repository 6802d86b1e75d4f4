use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The shortening service answered `success: false`
    Service(String),
    /// Connection, timeout or body read failures
    Transport(String),
    /// The service answered, but not in the documented shape
    Decode(String),
    /// The background request task panicked or was cancelled
    TaskFailed(String),
    Config(String),
    Clipboard(String),
    FileOperation(String),
}

impl ClientError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            ClientError::Service(_) => "C001",
            ClientError::Transport(_) => "C002",
            ClientError::Decode(_) => "C003",
            ClientError::TaskFailed(_) => "C004",
            ClientError::Config(_) => "C005",
            ClientError::Clipboard(_) => "C006",
            ClientError::FileOperation(_) => "C007",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            ClientError::Service(_) => "Service Error",
            ClientError::Transport(_) => "Transport Error",
            ClientError::Decode(_) => "Response Decode Error",
            ClientError::TaskFailed(_) => "Request Task Failed",
            ClientError::Config(_) => "Configuration Error",
            ClientError::Clipboard(_) => "Clipboard Error",
            ClientError::FileOperation(_) => "File Operation Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            ClientError::Service(msg) => msg,
            ClientError::Transport(msg) => msg,
            ClientError::Decode(msg) => msg,
            ClientError::TaskFailed(msg) => msg,
            ClientError::Config(msg) => msg,
            ClientError::Clipboard(msg) => msg,
            ClientError::FileOperation(msg) => msg,
        }
    }

    /// Transport, decode and task failures all mean "no usable answer from the service".
    ///
    /// They are kept apart for logging but share one user-facing message.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            ClientError::Transport(_) | ClientError::Decode(_) | ClientError::TaskFailed(_)
        )
    }

    /// 格式化为彩色输出（用于 CLI 模式）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ClientError {}

// 便捷的构造函数
impl ClientError {
    pub fn service<T: Into<String>>(msg: T) -> Self {
        ClientError::Service(msg.into())
    }

    pub fn transport<T: Into<String>>(msg: T) -> Self {
        ClientError::Transport(msg.into())
    }

    pub fn decode<T: Into<String>>(msg: T) -> Self {
        ClientError::Decode(msg.into())
    }

    pub fn task_failed<T: Into<String>>(msg: T) -> Self {
        ClientError::TaskFailed(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        ClientError::Config(msg.into())
    }

    pub fn clipboard<T: Into<String>>(msg: T) -> Self {
        ClientError::Clipboard(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        ClientError::FileOperation(msg.into())
    }
}

impl From<ureq::Error> for ClientError {
    fn from(err: ureq::Error) -> Self {
        ClientError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::FileOperation(err.to_string())
    }
}

impl From<tokio::task::JoinError> for ClientError {
    fn from(err: tokio::task::JoinError) -> Self {
        ClientError::TaskFailed(err.to_string())
    }
}

impl From<config::ConfigError> for ClientError {
    fn from(err: config::ConfigError) -> Self {
        ClientError::Config(err.to_string())
    }
}

impl From<url::ParseError> for ClientError {
    fn from(err: url::ParseError) -> Self {
        ClientError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
