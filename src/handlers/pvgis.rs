//! PVGIS 接口处理器
//!
//! ## API 列表
//! - GET /pvgis/seriescalc?lat=..&lon=..&... - 转发到 PVGIS seriescalc，原样返回其 JSON

use actix_web::{web, HttpRequest, HttpResponse, Result};
use serde_json::Value;

use crate::models::{ApiResponse, QueryParameters};
use crate::services::pvgis::PvgisClient;

/// 获取光伏发电时间序列
///
/// GET /api/v1/pvgis/seriescalc
///
/// 查询字符串按原顺序转发，不做任何校验，参数错误由 PVGIS 返回
pub async fn get_seriescalc(
    req: HttpRequest,
    client: web::Data<PvgisClient>,
) -> Result<HttpResponse> {
    let params = QueryParameters::from_query_string(req.query_string());

    match client.get_performance_data(&params).await {
        Ok(data) => Ok(HttpResponse::Ok().json(ApiResponse::success(data))),
        Err(e) => {
            let response = ApiResponse::<Value>::error(e.to_string());
            Ok(HttpResponse::InternalServerError().json(response))
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/pvgis")
            .route("/seriescalc", web::get().to(get_seriescalc))
    );
}
