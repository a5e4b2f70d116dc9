//! 核心层：统一错误处理和中间件

pub mod error;
pub mod middleware;
