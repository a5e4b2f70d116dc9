//! 文档存储适配层
//!
//! 服务层只依赖 [`ProductInfoStore`]，具体后端在进程启动时选择：
//! - [`InMemoryStore`]：进程内存储，用于测试和本地开发
//! - [`PostgresStore`]：基于 PostgreSQL JSONB 的文档存储（`database` 特性）

use futures::stream::BoxStream;
use std::future::Future;

use crate::app::product_info::model::ProductInfo;

pub mod memory;
#[cfg(feature = "database")]
pub mod postgres;

pub use memory::InMemoryStore;
#[cfg(feature = "database")]
pub use postgres::PostgresStore;

/// 存储层错误
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[cfg(feature = "database")]
    #[error("数据库错误: {0}")]
    Database(#[from] sqlx::Error),
    #[error("存储不可用: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// 产品信息文档存储
///
/// 所有实现都必须满足：
/// - `save` 在 `id` 为空时生成新标识，否则按该标识覆盖写入
/// - `delete_by_id` 对不存在的标识是空操作
/// - `find_all` 返回有限、只能消费一次的惰性流，不保证顺序
pub trait ProductInfoStore: Send + Sync + 'static {
    /// 保存文档并返回带有标识的持久化结果
    fn save(&self, record: ProductInfo) -> impl Future<Output = StoreResult<ProductInfo>> + Send;

    fn find_by_id(&self, id: &str)
        -> impl Future<Output = StoreResult<Option<ProductInfo>>> + Send;

    fn find_all(&self) -> BoxStream<'_, StoreResult<ProductInfo>>;

    fn delete_by_id(&self, id: &str) -> impl Future<Output = StoreResult<()>> + Send;

    /// 清空集合，仅供测试夹具使用
    fn delete_all(&self) -> impl Future<Output = StoreResult<()>> + Send;
}

/// 为尚未分配标识的文档生成新标识
pub(crate) fn assign_id(mut record: ProductInfo) -> (String, ProductInfo) {
    let id = match record.assigned_id() {
        Some(id) => id.to_string(),
        None => uuid::Uuid::new_v4().to_string(),
    };
    record.id = Some(id.clone());
    (id, record)
}
