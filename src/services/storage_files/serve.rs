use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::header};
use std::path::{Component, Path, PathBuf};

use crate::config::AppConfig;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::content_type_for;

/// 把请求路径解析到上传目录内；出现 `..`、绝对路径或空路径时返回 None
pub fn resolve_storage_path(root: &Path, requested: &str) -> Option<PathBuf> {
    let requested = requested.trim_start_matches('/');
    if requested.is_empty() || requested.contains('\\') || requested.contains('\0') {
        return None;
    }

    let mut resolved = root.to_path_buf();
    for component in Path::new(requested).components() {
        match component {
            Component::Normal(part) => resolved.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }

    (resolved != root).then_some(resolved)
}

fn not_found() -> HttpResponse {
    ApiResponse::not_found(ErrorCode::FileNotFound, "File")
}

pub async fn handle_serve(path: &str, _request: &HttpRequest) -> ActixResult<HttpResponse> {
    let root = Path::new(&AppConfig::get().upload.dir);

    let Some(full_path) = resolve_storage_path(root, path) else {
        return Ok(not_found());
    };

    match tokio::fs::metadata(&full_path).await {
        Ok(meta) if meta.is_file() => {}
        _ => return Ok(not_found()),
    }

    let data = match tokio::fs::read(&full_path).await {
        Ok(data) => data,
        Err(e) => {
            tracing::error!("Failed to read stored file {}: {}", full_path.display(), e);
            return Ok(not_found());
        }
    };

    let content_type = full_path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(|ext| content_type_for(&format!(".{ext}")))
        .unwrap_or("application/octet-stream");

    Ok(HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, content_type))
        .insert_header((header::CACHE_CONTROL, "public, max-age=86400"))
        .insert_header(("X-Content-Type-Options", "nosniff"))
        .body(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_inside_root() {
        let root = Path::new("storage/app/public");
        assert_eq!(
            resolve_storage_path(root, "gallery/1-abc.png").unwrap(),
            root.join("gallery").join("1-abc.png")
        );
        assert_eq!(
            resolve_storage_path(root, "/./staff/a.jpg").unwrap(),
            root.join("staff").join("a.jpg")
        );
    }

    #[test]
    fn test_resolve_rejects_traversal() {
        let root = Path::new("storage/app/public");
        assert!(resolve_storage_path(root, "../config.toml").is_none());
        assert!(resolve_storage_path(root, "gallery/../../secret").is_none());
        assert!(resolve_storage_path(root, "gallery\\..\\x").is_none());
        assert!(resolve_storage_path(root, "").is_none());
        assert!(resolve_storage_path(root, "/").is_none());
        assert!(resolve_storage_path(root, ".").is_none());
    }
}
