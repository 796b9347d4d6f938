//! 业务逻辑服务模块
//! 
//! 封装数据获取逻辑

pub mod pvgis;    // PVGIS 光伏数据服务
