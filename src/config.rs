//! 配置模块
//!
//! 从 JSON 文件加载服务配置。加载发生在日志系统初始化之前
//! （日志级别本身来自配置），因此加载过程只记录结果，
//! 由调用方在初始化日志后通过 [`LoadedConfig::log_outcome`] 输出

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::services::pvgis::API_BASE_URL;

/// 默认的配置文件查找路径，按顺序尝试
pub const CONFIG_PATHS: [&str; 2] = ["config.json", "config/config.json"];

/// 监听配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// 工作线程数（0 表示使用 CPU 核心数）
    #[serde(default)]
    pub workers: usize,
}

/// PVGIS 上游配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PvgisConfig {
    /// 版本化的接口根地址，seriescalc 拼接在其后
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// 整个请求的超时时间（秒）
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// 建立连接的超时时间（秒）
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// 日志级别: trace, debug, info, warn, error（RUST_LOG 优先）
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// 应用配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub pvgis: PvgisConfig,
    #[serde(default)]
    pub log: LogConfig,
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }
fn default_base_url() -> String { API_BASE_URL.to_string() }
fn default_timeout() -> u64 { 30 }
fn default_connect_timeout() -> u64 { 10 }
fn default_log_level() -> String { "info".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: 0,
        }
    }
}

impl Default for PvgisConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// 配置来源
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    File(PathBuf),
    Default,
}

/// 配置加载结果
///
/// 除最终配置外，还保留了来源和每个加载失败的文件及原因
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: AppConfig,
    pub source: ConfigSource,
    pub failures: Vec<(PathBuf, String)>,
}

impl LoadedConfig {
    /// 输出加载过程：每个失败的文件一条 warn，最终来源一条 info
    pub fn log_outcome(&self) {
        for (path, reason) in &self.failures {
            log::warn!("加载配置文件 {} 失败，已忽略: {}", path.display(), reason);
        }

        match &self.source {
            ConfigSource::File(path) => log::info!("从 {} 加载配置成功", path.display()),
            ConfigSource::Default => log::info!("未找到可用的配置文件，使用默认配置"),
        }
    }
}

impl AppConfig {
    /// 从 JSON 文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// 在默认路径中查找并加载配置
    pub fn load() -> LoadedConfig {
        Self::load_from(&CONFIG_PATHS[..])
    }

    /// 依次尝试给定路径，使用第一个能成功解析的文件，全部不可用时使用默认值
    pub fn load_from<P: AsRef<Path>>(paths: &[P]) -> LoadedConfig {
        let mut failures = Vec::new();

        for candidate in paths {
            let path: &Path = candidate.as_ref();
            if !path.exists() {
                continue;
            }

            match Self::from_file(path) {
                Ok(config) => {
                    return LoadedConfig {
                        config,
                        source: ConfigSource::File(path.to_path_buf()),
                        failures,
                    };
                }
                Err(e) => failures.push((path.to_path_buf(), e.to_string())),
            }
        }

        LoadedConfig {
            config: Self::default(),
            source: ConfigSource::Default,
            failures,
        }
    }

    /// 获取服务器绑定地址
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
