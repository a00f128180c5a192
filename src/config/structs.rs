use serde::{Deserialize, Serialize};
use strum::Display;

use crate::errors::{ClientError, Result};

/// Backend address used when neither the config file nor the environment sets one.
///
/// Baked in at build time from `SNAPLINK_API_BASE`.
pub const DEFAULT_API_BASE: &str = match option_env!("SNAPLINK_API_BASE") {
    Some(base) => base,
    None => "http://localhost:5050",
};

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_PATH: &str = "snaplink.toml";

/// Token store backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    File,
    Memory,
}

/// 静态配置（从 TOML 加载，启动时使用）
///
/// - client: backend address, request timeout, optional URL pre-check
/// - storage: where analytics tokens are remembered
/// - logging: tracing output
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StaticConfig {
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StaticConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > TOML 文件 > 默认值
    /// ENV 前缀：SNAPLINK，分隔符：__
    /// 示例：SNAPLINK__CLIENT__BASE_URL=http://127.0.0.1:5000
    pub fn load(path: &str) -> Result<Self> {
        use config::{Config, Environment, File, FileFormat};

        let settings = Config::builder()
            .add_source(File::new(path, FileFormat::Toml).required(false))
            .add_source(
                Environment::with_prefix("SNAPLINK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut config: StaticConfig = settings.try_deserialize()?;
        config.client.base_url = config.client.base_url.trim_end_matches('/').to_string();
        if config.client.base_url.is_empty() {
            return Err(ClientError::config("client.base_url must not be empty"));
        }
        Ok(config)
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ClientError::serialization(e.to_string()))?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Backend connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Reject non-http(s) input locally instead of leaving it to the backend
    #[serde(default)]
    pub validate_urls: bool,
}

/// 令牌存储配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StoreBackend,
    #[serde(default = "default_token_file")]
    pub file_path: String,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default)]
    pub enable_rotation: bool,
}

// ============================================================
// Default value functions
// ============================================================

fn default_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_token_file() -> String {
    "snaplink_tokens.json".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_max_backups() -> u32 {
    5
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            validate_urls: false,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            file_path: default_token_file(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
            max_backups: default_max_backups(),
            enable_rotation: false,
        }
    }
}
