//! 产品信息处理器

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use futures::TryStreamExt;

use super::{model::ProductInfo, service::ProductInfoService};
use crate::core::error::CoreError;
use crate::infrastructure::store::ProductInfoStore;

/// 产品信息资源的基础路径
pub const BASE_PATH: &str = "/v1/product-infos";

pub struct AppState<S> {
    pub product_info_service: ProductInfoService<S>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            product_info_service: self.product_info_service.clone(),
        }
    }
}

/// 产品信息路由
pub fn routes<S: ProductInfoStore>(service: ProductInfoService<S>) -> Router {
    Router::new()
        .route(
            BASE_PATH,
            get(list_product_infos::<S>).post(create_product_info::<S>),
        )
        .route(
            &format!("{}/:id", BASE_PATH),
            get(get_product_info::<S>)
                .put(update_product_info::<S>)
                .delete(delete_product_info::<S>),
        )
        .with_state(AppState {
            product_info_service: service,
        })
}

pub async fn list_product_infos<S: ProductInfoStore>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<ProductInfo>>, CoreError> {
    let product_infos: Vec<ProductInfo> = state.product_info_service.list().try_collect().await?;
    Ok(Json(product_infos))
}

pub async fn get_product_info<S: ProductInfoStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Json<ProductInfo>, CoreError> {
    let product_info = state.product_info_service.get_by_id(&id).await?;
    Ok(Json(product_info))
}

pub async fn create_product_info<S: ProductInfoStore>(
    State(state): State<AppState<S>>,
    payload: Result<Json<ProductInfo>, JsonRejection>,
) -> Result<(StatusCode, Json<ProductInfo>), CoreError> {
    let Json(input) = payload?;
    let product_info = state.product_info_service.create(input).await?;
    Ok((StatusCode::CREATED, Json(product_info)))
}

pub async fn update_product_info<S: ProductInfoStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    payload: Result<Json<ProductInfo>, JsonRejection>,
) -> Result<Json<ProductInfo>, CoreError> {
    let Json(patch) = payload?;
    let product_info = state.product_info_service.update(&id, patch).await?;
    Ok(Json(product_info))
}

pub async fn delete_product_info<S: ProductInfoStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<StatusCode, CoreError> {
    state.product_info_service.delete_by_id(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
