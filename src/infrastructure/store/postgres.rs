//! PostgreSQL 文档存储
//!
//! 每个产品信息作为一个 JSONB 文档保存在 `product_infos` 表中，
//! 价格以十进制字符串写入文档，读回时不会丢失精度。

use futures::stream::{BoxStream, StreamExt};
use sqlx::{postgres::PgPool, types::Json};
use tracing::debug;

use super::{assign_id, ProductInfoStore, StoreError, StoreResult};
use crate::app::product_info::model::ProductInfo;

pub(crate) const CREATE_TABLE_SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS product_infos (
        id TEXT PRIMARY KEY,
        document JSONB NOT NULL
    )
"#;

#[derive(Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ProductInfoStore for PostgresStore {
    async fn save(&self, record: ProductInfo) -> StoreResult<ProductInfo> {
        let (id, record) = assign_id(record);

        let (Json(saved),): (Json<ProductInfo>,) = sqlx::query_as(
            r#"
            INSERT INTO product_infos (id, document) VALUES ($1, $2)
            ON CONFLICT (id) DO UPDATE SET document = EXCLUDED.document
            RETURNING document
            "#,
        )
        .bind(&id)
        .bind(Json(&record))
        .fetch_one(&self.pool)
        .await?;

        debug!("保存产品信息文档: {}", id);
        Ok(saved)
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<ProductInfo>> {
        let row: Option<(Json<ProductInfo>,)> =
            sqlx::query_as("SELECT document FROM product_infos WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(|(Json(document),)| document))
    }

    fn find_all(&self) -> BoxStream<'_, StoreResult<ProductInfo>> {
        sqlx::query_as::<_, (Json<ProductInfo>,)>("SELECT document FROM product_infos")
            .fetch(&self.pool)
            .map(|row| row.map(|(Json(document),)| document).map_err(StoreError::from))
            .boxed()
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM product_infos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        debug!("删除产品信息文档: {} (影响 {} 行)", id, result.rows_affected());
        Ok(())
    }

    async fn delete_all(&self) -> StoreResult<()> {
        sqlx::query("DELETE FROM product_infos")
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
