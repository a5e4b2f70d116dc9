//! 产品信息业务服务

use futures::stream::{BoxStream, StreamExt, TryStreamExt};
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::model::ProductInfo;
use crate::core::error::CoreError;
use crate::infrastructure::store::ProductInfoStore;

/// 产品信息服务
///
/// 不持有任何进程内状态，每次调用都直接访问存储。
pub struct ProductInfoService<S> {
    store: Arc<S>,
}

impl<S> Clone for ProductInfoService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: ProductInfoStore> ProductInfoService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// 保存新的产品信息，`id` 为空时由存储生成
    pub async fn create(&self, input: ProductInfo) -> Result<ProductInfo, CoreError> {
        let saved = self.store.save(input).await?;
        info!("创建产品信息: {:?}", saved.id);
        Ok(saved)
    }

    /// 惰性列出全部产品信息，顺序由存储决定
    pub fn list(&self) -> BoxStream<'_, Result<ProductInfo, CoreError>> {
        debug!("列出全部产品信息");
        self.store.find_all().map_err(CoreError::from).boxed()
    }

    pub async fn get_by_id(&self, id: &str) -> Result<ProductInfo, CoreError> {
        debug!("查询产品信息: {}", id);
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// 按整体替换的方式更新已存在的产品信息
    ///
    /// 记录不存在时返回 `NotFound`，不会隐式创建。补丁中的 `id` 被忽略。
    pub async fn update(&self, id: &str, patch: ProductInfo) -> Result<ProductInfo, CoreError> {
        let mut existing = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        existing.merge_from(patch);
        let saved = self.store.save(existing).await?;
        info!("更新产品信息: {}", id);
        Ok(saved)
    }

    /// 删除产品信息，不存在时不报错
    pub async fn delete_by_id(&self, id: &str) -> Result<(), CoreError> {
        self.store.delete_by_id(id).await?;
        info!("删除产品信息: {}", id);
        Ok(())
    }
}

fn not_found(id: &str) -> CoreError {
    warn!("产品信息不存在: {}", id);
    CoreError::NotFound(format!("产品信息 {} 不存在", id))
}
