use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    Creation(String),
    TokenRequired(String),
    Lookup(String),
    Validation(String),
    Network(String),
    Storage(String),
    Serialization(String),
    Config(String),
}

/// Message used when the token store has nothing for a code and the caller supplied no token
pub const TOKEN_REQUIRED_MESSAGE: &str = "Analytics token required.";

impl ClientError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            ClientError::Creation(_) => "E001",
            ClientError::TokenRequired(_) => "E002",
            ClientError::Lookup(_) => "E003",
            ClientError::Validation(_) => "E004",
            ClientError::Network(_) => "E005",
            ClientError::Storage(_) => "E006",
            ClientError::Serialization(_) => "E007",
            ClientError::Config(_) => "E008",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            ClientError::Creation(_) => "Shorten Failed",
            ClientError::TokenRequired(_) => "Token Required",
            ClientError::Lookup(_) => "Lookup Failed",
            ClientError::Validation(_) => "Validation Error",
            ClientError::Network(_) => "Network Error",
            ClientError::Storage(_) => "Token Store Error",
            ClientError::Serialization(_) => "Serialization Error",
            ClientError::Config(_) => "Configuration Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            ClientError::Creation(msg)
            | ClientError::TokenRequired(msg)
            | ClientError::Lookup(msg)
            | ClientError::Validation(msg)
            | ClientError::Network(msg)
            | ClientError::Storage(msg)
            | ClientError::Serialization(msg)
            | ClientError::Config(msg) => msg,
        }
    }

    /// 格式化为彩色输出（用于终端）
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
    pub fn creation<T: Into<String>>(msg: T) -> Self {
        ClientError::Creation(msg.into())
    }

    pub fn token_required() -> Self {
        ClientError::TokenRequired(TOKEN_REQUIRED_MESSAGE.to_string())
    }

    pub fn lookup<T: Into<String>>(msg: T) -> Self {
        ClientError::Lookup(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        ClientError::Validation(msg.into())
    }

    pub fn network<T: Into<String>>(msg: T) -> Self {
        ClientError::Network(msg.into())
    }

    pub fn storage<T: Into<String>>(msg: T) -> Self {
        ClientError::Storage(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        ClientError::Serialization(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        ClientError::Config(msg.into())
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Serialization(err.to_string())
    }
}

impl From<ureq::Error> for ClientError {
    fn from(err: ureq::Error) -> Self {
        ClientError::Network(err.to_string())
    }
}

impl From<config::ConfigError> for ClientError {
    fn from(err: config::ConfigError) -> Self {
        ClientError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
