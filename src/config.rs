//! 应用配置模块
//!
//! 配置在进程启动时加载一次，之后只读，通过应用状态传入各处理器。

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// 指定配置文件路径的环境变量
pub const CONFIG_PATH_ENV: &str = "CATALOG_CONFIG";

/// 配置错误类型
#[derive(Debug)]
pub enum ConfigError {
    FileRead(String),
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::FileRead(msg) => write!(f, "配置文件读取失败: {}", msg),
            ConfigError::Parse(msg) => write!(f, "配置文件解析失败: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// 应用配置结构
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP 服务配置
    pub http: HttpConfig,
    /// 存储配置
    pub store: StoreConfig,
    /// 日志配置
    pub logging: LoggingConfig,
}

/// HTTP 服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// 绑定地址
    pub bind_address: String,
    /// HTTP 服务端口
    pub port: u16,
    /// 请求超时时间（秒）
    pub timeout_seconds: u64,
}

/// 存储配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// 产品集合名称
    pub collection: String,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 默认日志级别 (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 3001,
            timeout_seconds: 30,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            collection: "products".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// 从配置文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileRead(e.to_string()))?;

        let config: AppConfig =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        Ok(config)
    }

    /// 加载配置：`CATALOG_CONFIG` 指定的文件优先，否则使用默认值
    pub fn load() -> Result<Self, ConfigError> {
        match env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::load_from_file(path),
            Err(_) => Ok(Self::default()),
        }
    }

    /// HTTP 监听地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.http.bind_address, self.http.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = AppConfig::default();
        assert_eq!(config.addr(), "127.0.0.1:3001");
        assert_eq!(config.store.collection, "products");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config: AppConfig = toml::from_str("[http]\nport = 8080\n").unwrap();
        assert_eq!(config.http.port, 8080);
        assert_eq!(config.http.bind_address, "127.0.0.1");
        assert_eq!(config.store.collection, "products");
    }
}
