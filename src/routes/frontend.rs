//! 前端静态资源路由
//!
//! 使用 rust-embed 嵌入 `frontend/dist/` 构建产物：
//! - `frontend-custom/` 目录中的同名文件优先（便于替换学校自己的页面与图片）
//! - 未匹配的路径回落到 index.html，由前端路由接管
//! - HTML 中的 `%SITE_NAME%` 替换为配置的站点名称

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use rust_embed::Embed;
use std::path::Path;

use crate::config::AppConfig;

#[derive(Embed)]
#[folder = "frontend/dist/"]
struct SiteAssets;

const CUSTOM_DIR: &str = "./frontend-custom";

fn extension(path: &str) -> &str {
    Path::new(path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
}

fn mime_type(path: &str) -> &'static str {
    match extension(path) {
        "html" => "text/html; charset=utf-8",
        "js" | "mjs" => "application/javascript; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "json" | "map" => "application/json; charset=utf-8",
        "webmanifest" => "application/manifest+json",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "webp" => "image/webp",
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "ttf" => "font/ttf",
        "txt" => "text/plain; charset=utf-8",
        "xml" => "application/xml",
        _ => "application/octet-stream",
    }
}

/// 构建产物带 hash，可长期缓存；HTML 与清单每次重新验证
fn cache_control(path: &str) -> &'static str {
    match extension(path) {
        "js" | "mjs" | "css" | "woff" | "woff2" | "ttf" | "png" | "jpg" | "jpeg" | "gif"
        | "svg" | "webp" => "public, max-age=31536000, immutable",
        _ => "no-cache",
    }
}

fn render_html(content: &[u8], site_name: &str) -> Vec<u8> {
    String::from_utf8_lossy(content)
        .replace("%SITE_NAME%", site_name)
        .into_bytes()
}

/// 拒绝带 `..` 的路径，避免读出自定义目录以外的文件
fn read_custom(path: &str) -> Option<Vec<u8>> {
    if path.split('/').any(|segment| segment == "..") {
        return None;
    }
    std::fs::read(Path::new(CUSTOM_DIR).join(path)).ok()
}

fn read_asset(path: &str) -> Option<Vec<u8>> {
    read_custom(path).or_else(|| SiteAssets::get(path).map(|f| f.data.into_owned()))
}

/// 返回 (文件内容, 实际使用的路径)
fn resolve(path: &str) -> Option<(Vec<u8>, String)> {
    if !path.is_empty()
        && let Some(data) = read_asset(path)
    {
        return Some((data, path.to_string()));
    }
    read_asset("index.html").map(|data| (data, "index.html".to_string()))
}

pub async fn serve_frontend(req: HttpRequest) -> ActixResult<HttpResponse> {
    let path = req.match_info().query("tail").trim_start_matches('/');
    let site_name = &AppConfig::get().app.site_name;

    let Some((mut data, file_path)) = resolve(path) else {
        return Ok(HttpResponse::NotFound()
            .content_type("text/html; charset=utf-8")
            .body(format!(
                "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>{site_name}</title></head>\
                 <body><h1>{site_name}</h1><p>The website frontend has not been built.</p></body></html>"
            )));
    };

    let mime = mime_type(&file_path);
    if mime.starts_with("text/html") {
        data = render_html(&data, site_name);
    }

    Ok(HttpResponse::Ok()
        .content_type(mime)
        .insert_header(("Cache-Control", cache_control(&file_path)))
        .body(data))
}

/// 所有未被 API 路由匹配的 GET 请求交给前端处理
pub fn configure_frontend_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/{tail:.*}", web::get().to(serve_frontend));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_type() {
        assert_eq!(mime_type("index.html"), "text/html; charset=utf-8");
        assert_eq!(
            mime_type("assets/app.js"),
            "application/javascript; charset=utf-8"
        );
        assert_eq!(mime_type("logo.webp"), "image/webp");
        assert_eq!(mime_type("unknown.xyz"), "application/octet-stream");
    }

    #[test]
    fn test_cache_control() {
        assert_eq!(cache_control("assets/app.css"), "public, max-age=31536000, immutable");
        assert_eq!(cache_control("index.html"), "no-cache");
        assert_eq!(cache_control("manifest.webmanifest"), "no-cache");
    }

    #[test]
    fn test_render_html_replaces_site_name() {
        let html = render_html(b"<title>%SITE_NAME%</title>", "Riverside High");
        assert_eq!(html, b"<title>Riverside High</title>".to_vec());
    }

    #[test]
    fn test_custom_dir_rejects_parent_segments() {
        assert!(read_custom("../Cargo.toml").is_none());
    }
}
