use product_info_service::{
    build_app,
    config::{load_config, StoreBackend},
    infrastructure::{logger::Logger, store::InMemoryStore},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config()?;
    Logger::init(&config.logging.level);

    info!("启动产品信息服务，存储后端: {:?}", config.store.backend);

    let app = match config.store.backend {
        StoreBackend::Memory => build_app(Arc::new(InMemoryStore::new())),
        #[cfg(feature = "database")]
        StoreBackend::Postgres => {
            use product_info_service::infrastructure::{
                database::DatabaseManager, store::PostgresStore,
            };

            let database = DatabaseManager::connect(&config.store).await?;
            build_app(Arc::new(PostgresStore::new(database.get_pool().clone())))
        }
        #[cfg(not(feature = "database"))]
        StoreBackend::Postgres => anyhow::bail!("postgres 后端需要启用 database 特性"),
    };

    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!("🚀 服务运行在 http://{}/v1/product-infos", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("服务已停止");
    Ok(())
}

/// 等待 Ctrl+C 或 SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("监听 Ctrl+C 失败: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("监听 SIGTERM 失败: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("收到停止信号，正在关闭...");
}
