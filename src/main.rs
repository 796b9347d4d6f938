//! PVGIS 后端服务
//!
//! 转发光伏发电量查询到 PVGIS seriescalc 接口并原样返回结果
//! 数据来源：欧盟联合研究中心 (JRC) PVGIS v5.2

use actix_web::{web, App, HttpServer, middleware::Logger};
use env_logger::Env;

use pvgis_backend::config::AppConfig;
use pvgis_backend::handlers;
use pvgis_backend::PvgisClient;

/// 应用程序入口
///
/// 加载配置后启动 HTTP 服务器，默认监听 0.0.0.0:8080
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let loaded = AppConfig::load();

    // 初始化日志系统，RUST_LOG 优先于配置文件中的级别
    env_logger::init_from_env(Env::default().default_filter_or(loaded.config.log.level.as_str()));
    loaded.log_outcome();
    let config = loaded.config;

    let client = PvgisClient::from_config(&config)?;
    log::info!("PVGIS 接口地址: {}", client.seriescalc_url());

    let bind_addr = config.bind_addr();
    log::info!("启动 PVGIS 后端服务，监听 {}", bind_addr);

    // 创建并启动 HTTP 服务器
    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())  // 添加请求日志中间件
            .app_data(web::Data::new(client.clone()))
            .configure(handlers::config)  // 配置路由
    });

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(bind_addr)?.run().await?;
    Ok(())
}
