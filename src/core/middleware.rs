//! 核心中间件模块

use axum::{
    extract::Request,
    http::{header, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{info, warn};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

fn user_agent(req: &Request) -> Option<String> {
    req.headers()
        .get(header::USER_AGENT)
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string())
}

/// 请求日志中间件
///
/// 沿用客户端传入的 `x-request-id`，没有则生成一个，并回写到响应头。
pub async fn request_logging_middleware(mut req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();
    let user_agent = user_agent(&req);

    let request_id = match req.headers().get(REQUEST_ID_HEADER) {
        Some(value) => value.clone(),
        None => {
            let generated = HeaderValue::from_str(&Uuid::new_v4().to_string())
                .unwrap_or_else(|_| HeaderValue::from_static("unknown"));
            req.headers_mut()
                .insert(REQUEST_ID_HEADER, generated.clone());
            generated
        }
    };

    let mut response = next.run(req).await;
    let status = response.status();
    let elapsed_ms = start.elapsed().as_millis();
    let id = request_id.to_str().unwrap_or("-");

    if status.is_server_error() {
        warn!(
            request_id = id,
            "{} {} - {} - {}ms - User-Agent: {:?}",
            method, uri, status, elapsed_ms, user_agent
        );
    } else {
        info!(
            request_id = id,
            "{} {} - {} - {}ms - User-Agent: {:?}",
            method, uri, status, elapsed_ms, user_agent
        );
    }

    response.headers_mut().insert(REQUEST_ID_HEADER, request_id);
    response
}
