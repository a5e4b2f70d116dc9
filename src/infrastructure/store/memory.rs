//! 进程内文档存储

use futures::stream::{self, BoxStream, StreamExt};
use parking_lot::RwLock;
use std::collections::HashMap;

use super::{assign_id, ProductInfoStore, StoreResult};
use crate::app::product_info::model::ProductInfo;

/// 以 `HashMap` 保存文档的存储实现
///
/// 文档按值保存，读取时返回克隆。
#[derive(Debug, Default)]
pub struct InMemoryStore {
    documents: RwLock<HashMap<String, ProductInfo>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.documents.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.read().is_empty()
    }
}

impl ProductInfoStore for InMemoryStore {
    async fn save(&self, record: ProductInfo) -> StoreResult<ProductInfo> {
        let (id, record) = assign_id(record);
        self.documents.write().insert(id, record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<ProductInfo>> {
        Ok(self.documents.read().get(id).cloned())
    }

    fn find_all(&self) -> BoxStream<'_, StoreResult<ProductInfo>> {
        // 先取快照，避免在流存活期间持有读锁
        let snapshot: Vec<ProductInfo> = self.documents.read().values().cloned().collect();
        stream::iter(snapshot.into_iter().map(Ok)).boxed()
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<()> {
        self.documents.write().remove(id);
        Ok(())
    }

    async fn delete_all(&self) -> StoreResult<()> {
        self.documents.write().clear();
        Ok(())
    }
}
