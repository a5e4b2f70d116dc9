//! 应用层

pub mod product_info;
