//! 产品信息：模型、服务和 HTTP 处理器

pub mod handler;
pub mod model;
pub mod service;

pub use model::ProductInfo;
pub use service::ProductInfoService;
