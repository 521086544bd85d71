//! API 配置加载
//!
//! 从环境变量读取远端任务服务的连接配置：
//! ```text
//! TRIAGE_API_BASE_URL=http://127.0.0.1:8000/api/tasks
//! TRIAGE_API_TIMEOUT_SECS=30
//! ```
//! 两者都有默认值，未设置时可以直接使用。

use crate::error::{ConfigError, Result};
use dotenv::dotenv;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use std::time::Duration;

/// 默认的服务基础路径，与本地开发环境一致
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api/tasks";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// 远端任务服务的连接配置
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ApiConfig {
    /// 服务基础路径，不以 `/` 结尾
    pub base_url: String,
    pub timeout_secs: u64,
}

static API_CONFIG: OnceLock<ApiConfig> = OnceLock::new();

impl ApiConfig {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let base_url = std::env::var("TRIAGE_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let timeout_secs = match std::env::var("TRIAGE_API_TIMEOUT_SECS") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                field: "TRIAGE_API_TIMEOUT_SECS".to_string(),
                message: format!("not a number: {}", raw),
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url,
            timeout_secs,
        })
    }

    pub fn global() -> &'static ApiConfig {
        API_CONFIG.get_or_init(|| ApiConfig::from_env().expect("Failed to load API config. "))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
