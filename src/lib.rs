//! PVGIS seriescalc 客户端与转发服务
//!
//! ```no_run
//! use pvgis_backend::{get_pv_performance_data, QueryParameters};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let params = QueryParameters::new()
//!     .with("lat", 45.0)
//!     .with("lon", 8.0)
//!     .with("peakpower", 1)
//!     .with("loss", 14)
//!     .with("outputformat", "json");
//! let data = get_pv_performance_data(&params).await?;
//! println!("{}", data["outputs"]);
//! # Ok(())
//! # }
//! ```

pub mod config;     // 配置加载
pub mod handlers;   // HTTP 请求处理器
pub mod models;     // 数据模型定义
pub mod services;   // 业务逻辑服务

#[cfg(test)]
mod test_support;

pub use models::{ParamValue, QueryParameters};
pub use services::pvgis::{get_pv_performance_data, PvgisClient, API_BASE_URL, SERIESCALC_PATH};
