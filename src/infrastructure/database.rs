//! 数据库基础设施

use sqlx::{
    postgres::{PgPool, PgPoolOptions},
    Error,
};
use tracing::info;

use crate::config::StoreConfig;
use crate::infrastructure::store::postgres::CREATE_TABLE_SQL;

pub struct DatabaseManager {
    pool: PgPool,
}

impl DatabaseManager {
    /// 建立连接池并确保文档表存在
    pub async fn connect(config: &StoreConfig) -> Result<Self, Error> {
        info!(
            "连接数据库: {}",
            mask_password(&config.database_url)
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(config.acquire_timeout())
            .connect(&config.database_url)
            .await?;

        let manager = Self { pool };
        manager.ensure_schema().await?;
        Ok(manager)
    }

    async fn ensure_schema(&self) -> Result<(), Error> {
        sqlx::query(CREATE_TABLE_SQL).execute(&self.pool).await?;
        info!("product_infos 表已就绪");
        Ok(())
    }

    pub fn get_pool(&self) -> &PgPool {
        &self.pool
    }
}

/// 隐藏连接串中的密码
fn mask_password(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(scheme_end), Some(at)) if at > scheme_end => {
            let credentials = &url[scheme_end + 3..at];
            match credentials.find(':') {
                Some(colon) => format!(
                    "{}{}:***{}",
                    &url[..scheme_end + 3],
                    &credentials[..colon],
                    &url[at..]
                ),
                None => url.to_string(),
            }
        }
        _ => url.to_string(),
    }
}
