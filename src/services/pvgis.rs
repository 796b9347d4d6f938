//! PVGIS 光伏数据服务
//!
//! 对接欧盟 JRC 的 PVGIS 接口 https://re.jrc.ec.europa.eu/api/v5_2
//! 只负责转发查询参数并原样返回 seriescalc 的 JSON 响应，
//! 不做重试、缓存、限流或结果转换

use std::time::Duration;

use anyhow::Result;
use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::config::AppConfig;
use crate::models::QueryParameters;

/// PVGIS 接口根地址（v5.2）
pub const API_BASE_URL: &str = "https://re.jrc.ec.europa.eu/api/v5_2";
/// 逐时发电量时间序列接口
pub const SERIESCALC_PATH: &str = "/seriescalc";

/// PVGIS 客户端
///
/// 持有一个 reqwest 连接池和接口根地址，可随意 clone 后在并发请求间共享
#[derive(Debug, Clone)]
pub struct PvgisClient {
    /// HTTP 客户端
    client: Client,
    /// 接口根地址，不含结尾的 `/`
    base_url: String,
}

impl Default for PvgisClient {
    fn default() -> Self {
        Self::new()
    }
}

impl PvgisClient {
    /// 使用默认 reqwest 客户端和官方接口地址
    pub fn new() -> Self {
        Self::with_client(Client::new(), API_BASE_URL)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// 按配置构造客户端（超时时间与接口地址）
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let base_url = Url::parse(&config.pvgis.base_url)?;

        let client = Client::builder()
            .gzip(true)
            .timeout(Duration::from_secs(config.pvgis.timeout_secs))
            .connect_timeout(Duration::from_secs(config.pvgis.connect_timeout_secs))
            .build()?;

        Ok(Self::with_client(client, base_url.as_str()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// seriescalc 的完整地址，与参数内容无关
    pub fn seriescalc_url(&self) -> String {
        format!("{}{}", self.base_url, SERIESCALC_PATH)
    }

    /// 获取光伏发电时间序列数据
    ///
    /// 发起一次 GET 请求，参数作为查询字符串原样转发，成功时返回解析后的 JSON。
    /// 连接失败、非 2xx 状态码、超时或响应不是合法 JSON 时，
    /// 记录一条错误日志后把底层的 `reqwest::Error` 原样返回
    pub async fn get_performance_data(&self, params: &QueryParameters) -> Result<Value> {
        match self.fetch_seriescalc(params).await {
            Ok(data) => Ok(data),
            Err(e) => {
                log::error!("从 PVGIS API 获取数据失败: {}", e);
                Err(e.into())
            }
        }
    }

    async fn fetch_seriescalc(&self, params: &QueryParameters) -> reqwest::Result<Value> {
        let url = self.seriescalc_url();
        log::debug!("请求 PVGIS seriescalc: {} ({} 个参数)", url, params.len());

        self.client
            .get(&url)
            .query(params)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await
    }
}

/// 使用默认客户端请求 seriescalc
pub async fn get_pv_performance_data(params: &QueryParameters) -> Result<Value> {
    PvgisClient::new().get_performance_data(params).await
}
