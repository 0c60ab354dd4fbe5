/*!
 * 请求频率限制中间件
 *
 * ```rust,ignore
 * web::resource("/login")
 *     .wrap(RateLimit::login())  // 5 次/分钟/IP
 *     .route(web::post().to(login))
 * ```
 *
 * 已登录请求按账号 ID 计数，其余按客户端 IP 计数；超限返回 429 并附带 `Retry-After`。
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage, HttpRequest, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    http::header::CONTENT_TYPE,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use moka::future::Cache;
use once_cell::sync::Lazy;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tracing::warn;

use crate::models::users::entities::User;
use crate::models::{ApiResponse, ErrorCode};

/// 固定窗口计数
#[derive(Debug, Clone, Copy)]
struct Window {
    started_at: Instant,
    count: u32,
}

// 空闲一小时的窗口自动淘汰
static RATE_LIMIT_WINDOWS: Lazy<Cache<String, Window>> = Lazy::new(|| {
    Cache::builder()
        .time_to_idle(Duration::from_secs(3600))
        .max_capacity(100_000)
        .build()
});

#[derive(Clone)]
pub struct RateLimit {
    max_requests: u32,
    window_secs: u64,
    key_prefix: &'static str,
}

impl RateLimit {
    pub fn new(key_prefix: &'static str, max_requests: u32, window_secs: u64) -> Self {
        Self {
            max_requests,
            window_secs: window_secs.max(1),
            key_prefix,
        }
    }

    /// 登录：5 次/分钟/IP
    pub fn login() -> Self {
        Self::new("login", 5, 60)
    }

    /// 刷新令牌：10 次/分钟/IP
    pub fn refresh_token() -> Self {
        Self::new("refresh", 10, 60)
    }

    /// 访客评论：10 次/分钟/IP，细粒度规则由评论服务判断
    pub fn comment_post() -> Self {
        Self::new("comment", 10, 60)
    }

    /// 后台上传：20 次/分钟/账号
    pub fn upload() -> Self {
        Self::new("upload", 20, 60)
    }
}

/// 推进窗口：过期则重新开始计数
fn advance_window(existing: Option<Window>, now: Instant, window: Duration) -> Window {
    match existing {
        Some(w) if now.saturating_duration_since(w.started_at) < window => Window {
            started_at: w.started_at,
            count: w.count.saturating_add(1),
        },
        _ => Window {
            started_at: now,
            count: 1,
        },
    }
}

/// 距窗口结束的秒数，至少 1
fn retry_after_secs(window: &Window, now: Instant, length: Duration) -> u64 {
    let elapsed = now.saturating_duration_since(window.started_at);
    let remaining = length.saturating_sub(elapsed);
    remaining.as_secs_f64().ceil().max(1.0) as u64
}

/// 客户端 IP：优先连接信息，其次 X-Forwarded-For 首项与 X-Real-IP
pub fn client_ip(req: &HttpRequest) -> String {
    use std::net::IpAddr;
    let is_ip = |value: &str| value.parse::<IpAddr>().is_ok();

    let connection_ip = req
        .connection_info()
        .realip_remote_addr()
        .map(|s| s.to_string());

    if let Some(ref ip) = connection_ip
        && is_ip(ip)
    {
        return ip.clone();
    }

    if let Some(forwarded) = req.headers().get("X-Forwarded-For")
        && let Ok(value) = forwarded.to_str()
        && let Some(ip) = value.split(',').next().map(str::trim)
        && is_ip(ip)
    {
        return ip.to_string();
    }

    if let Some(real_ip) = req.headers().get("X-Real-IP")
        && let Ok(ip) = real_ip.to_str()
        && is_ip(ip.trim())
    {
        return ip.trim().to_string();
    }

    connection_ip.unwrap_or_else(|| "unknown".to_string())
}

fn create_rate_limit_response(retry_after: u64) -> HttpResponse {
    HttpResponse::build(StatusCode::TOO_MANY_REQUESTS)
        .insert_header((CONTENT_TYPE, "application/json; charset=utf-8"))
        .insert_header(("Retry-After", retry_after.to_string()))
        .json(ApiResponse::error_detail(
            ErrorCode::RateLimitExceeded,
            "Too many requests",
            format!("Please retry after {retry_after} seconds"),
        ))
}

impl<S, B> Transform<S, ServiceRequest> for RateLimit
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RateLimitMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitMiddleware {
            service: Rc::new(service),
            config: self.clone(),
        }))
    }
}

pub struct RateLimitMiddleware<S> {
    service: Rc<S>,
    config: RateLimit,
}

impl<S, B> Service<ServiceRequest> for RateLimitMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let config = self.config.clone();

        Box::pin(async move {
            let user_id = req.extensions().get::<User>().map(|user| user.id);
            let identifier = match user_id {
                Some(id) => format!("user:{id}"),
                None => format!("ip:{}", client_ip(req.request())),
            };
            let cache_key = format!("{}:{}", config.key_prefix, identifier);
            let length = Duration::from_secs(config.window_secs);

            let window = RATE_LIMIT_WINDOWS
                .entry(cache_key.clone())
                .and_upsert_with(|existing| {
                    let now = Instant::now();
                    ready(advance_window(existing.map(|e| e.into_value()), now, length))
                })
                .await
                .into_value();

            if window.count > config.max_requests {
                let retry_after = retry_after_secs(&window, Instant::now(), length);
                warn!(
                    "Rate limit exceeded for {} ({}/{})",
                    cache_key, window.count, config.max_requests
                );
                return Ok(req.into_response(
                    create_rate_limit_response(retry_after).map_into_right_body(),
                ));
            }

            let res = srv.call(req).await?.map_into_left_body();
            Ok(res)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let login = RateLimit::login();
        assert_eq!(login.max_requests, 5);
        assert_eq!(login.window_secs, 60);
        assert_eq!(login.key_prefix, "login");
    }

    #[test]
    fn test_window_counts_then_resets() {
        let length = Duration::from_secs(60);
        let start = Instant::now();

        let w = advance_window(None, start, length);
        assert_eq!(w.count, 1);
        let w = advance_window(Some(w), start + Duration::from_secs(30), length);
        assert_eq!(w.count, 2);
        assert_eq!(w.started_at, start);

        // 窗口结束后重新计数
        let w = advance_window(Some(w), start + Duration::from_secs(60), length);
        assert_eq!(w.count, 1);
        assert_eq!(w.started_at, start + Duration::from_secs(60));
    }

    #[test]
    fn test_retry_after_rounds_up() {
        let length = Duration::from_secs(60);
        let start = Instant::now();
        let w = Window {
            started_at: start,
            count: 6,
        };
        assert_eq!(retry_after_secs(&w, start + Duration::from_millis(500), length), 60);
        assert_eq!(retry_after_secs(&w, start + Duration::from_secs(59), length), 1);
        assert_eq!(retry_after_secs(&w, start + Duration::from_secs(90), length), 1);
    }
}
