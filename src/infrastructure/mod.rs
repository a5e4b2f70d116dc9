//! 基础设施层：日志、数据库连接和文档存储

#[cfg(feature = "database")]
pub mod database;
pub mod logger;
pub mod store;
