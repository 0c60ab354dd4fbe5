//! 上传文件落盘
//!
//! 文件保存为 `{upload.dir}/{folder}/{timestamp}-{uuid}.{ext}`，返回相对 `upload.dir` 的路径。
//! 扩展名必须在 `upload.allowed_types` 中，且文件头魔术字节与扩展名一致。

use actix_multipart::{Field, Multipart};
use actix_web::HttpResponse;
use futures_util::{StreamExt, TryStreamExt};
use std::path::Path;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::errors::SchoolSiteError;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_slug;
use crate::utils::{content_type_for, validate_magic_bytes};

pub const DEFAULT_FOLDER: &str = "uploads";

// 表单文本字段上限
const MAX_TEXT_FIELD_BYTES: usize = 16 * 1024;

#[derive(Debug, Clone)]
pub struct StoredUpload {
    /// 相对 upload.dir 的路径
    pub path: String,
    pub size: u64,
    pub content_type: String,
}

fn rejected(code: ErrorCode, detail: impl Into<String>) -> HttpResponse {
    HttpResponse::UnprocessableEntity().json(ApiResponse::error_detail(
        code,
        "File upload rejected",
        detail,
    ))
}

fn malformed_payload(err: impl std::fmt::Display) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_detail(
        ErrorCode::BadRequest,
        "Malformed multipart payload",
        err.to_string(),
    ))
}

/// 取下一个表单字段，流读取失败时返回 400
pub async fn next_field(payload: &mut Multipart) -> Result<Option<Field>, HttpResponse> {
    payload.try_next().await.map_err(malformed_payload)
}

fn upload_failed(err: SchoolSiteError) -> HttpResponse {
    ApiResponse::from_error(&err, "File upload failed")
}

/// 目标子目录，每一级都必须是合法的 slug
pub fn sanitize_folder(folder: Option<&str>) -> Result<String, &'static str> {
    let folder = folder.map(str::trim).filter(|f| !f.is_empty());
    let Some(folder) = folder else {
        return Ok(DEFAULT_FOLDER.to_string());
    };

    let segments: Vec<&str> = folder.trim_matches('/').split('/').collect();
    for segment in &segments {
        validate_slug(segment).map_err(|_| "Folder must consist of [a-z0-9_-] path segments")?;
    }
    Ok(segments.join("/"))
}

/// 小写且带点号的扩展名
pub fn file_extension(file_name: &str) -> Option<String> {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .map(|ext| format!(".{}", ext.to_ascii_lowercase()))
}

/// 生成存储文件名
pub fn stored_file_name(folder: &str, extension: &str) -> String {
    format!(
        "{folder}/{}-{}.{}",
        chrono::Utc::now().timestamp(),
        Uuid::new_v4(),
        extension.trim_start_matches('.')
    )
}

/// 读取 multipart 中的文本字段
pub async fn read_text_field(field: &mut Field) -> Result<String, HttpResponse> {
    let mut buf = Vec::new();
    while let Some(chunk) = field.next().await {
        let data = chunk.map_err(malformed_payload)?;
        buf.extend_from_slice(&data);
        if buf.len() > MAX_TEXT_FIELD_BYTES {
            return Err(ApiResponse::validation("Form field is too long"));
        }
    }
    String::from_utf8(buf).map_err(|_| ApiResponse::validation("Form field must be UTF-8 text"))
}

/// 校验并保存 `file` 字段
pub async fn store_file_field(field: &mut Field, folder: &str) -> Result<StoredUpload, HttpResponse> {
    let config = AppConfig::get();

    let original_name = field
        .content_disposition()
        .and_then(|cd| cd.get_filename())
        .map(|s| s.to_string())
        .unwrap_or_default();

    let Some(extension) = file_extension(&original_name) else {
        return Err(rejected(
            ErrorCode::FileTypeNotAllowed,
            "File name has no extension",
        ));
    };

    if !config
        .upload
        .allowed_types
        .iter()
        .any(|t| t.eq_ignore_ascii_case(&extension))
    {
        return Err(rejected(
            ErrorCode::FileTypeNotAllowed,
            format!("File type {extension} is not allowed"),
        ));
    }

    let max_size = config.upload.max_size;
    let mut data = Vec::new();
    while let Some(chunk) = field.next().await {
        let chunk = chunk.map_err(|e| {
            HttpResponse::BadRequest().json(ApiResponse::error_detail(
                ErrorCode::FileUploadFailed,
                "Malformed multipart payload",
                e.to_string(),
            ))
        })?;
        if data.len() + chunk.len() > max_size {
            return Err(rejected(
                ErrorCode::FileSizeExceeded,
                format!("File size exceeds the limit of {max_size} bytes"),
            ));
        }
        data.extend_from_slice(&chunk);
    }

    if !validate_magic_bytes(&data, &extension) {
        return Err(rejected(
            ErrorCode::FileTypeNotAllowed,
            "File content does not match its extension",
        ));
    }

    let relative_path = stored_file_name(folder, &extension);
    let full_path = Path::new(&config.upload.dir).join(&relative_path);

    if let Some(parent) = full_path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| upload_failed(SchoolSiteError::file_operation(e.to_string())))?;
    }
    tokio::fs::write(&full_path, &data)
        .await
        .map_err(|e| upload_failed(SchoolSiteError::file_operation(e.to_string())))?;

    tracing::info!("Stored upload {} ({} bytes)", relative_path, data.len());

    Ok(StoredUpload {
        path: relative_path,
        size: data.len() as u64,
        content_type: content_type_for(&extension)
            .unwrap_or("application/octet-stream")
            .to_string(),
    })
}

/// 删除已保存的文件，失败只记录日志
pub async fn discard_upload(relative_path: &str) {
    let full_path = Path::new(&AppConfig::get().upload.dir).join(relative_path);
    if let Err(e) = tokio::fs::remove_file(&full_path).await {
        tracing::warn!("Failed to remove upload {}: {}", relative_path, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_folder() {
        assert_eq!(sanitize_folder(None).unwrap(), DEFAULT_FOLDER);
        assert_eq!(sanitize_folder(Some("  ")).unwrap(), DEFAULT_FOLDER);
        assert_eq!(sanitize_folder(Some("staff")).unwrap(), "staff");
        assert_eq!(sanitize_folder(Some("/news/2025/")).unwrap(), "news/2025");
        assert!(sanitize_folder(Some("../etc")).is_err());
        assert!(sanitize_folder(Some("a//b")).is_err());
        assert!(sanitize_folder(Some("Photos")).is_err());
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("Photo.JPG").as_deref(), Some(".jpg"));
        assert_eq!(file_extension("report.final.pdf").as_deref(), Some(".pdf"));
        assert_eq!(file_extension("README"), None);
        assert_eq!(file_extension(""), None);
    }

    #[test]
    fn test_stored_file_name_layout() {
        let name = stored_file_name("gallery", ".png");
        assert!(name.starts_with("gallery/"));
        assert!(name.ends_with(".png"));
        let stem = name
            .trim_start_matches("gallery/")
            .trim_end_matches(".png");
        let (timestamp, uuid) = stem.split_once('-').unwrap();
        assert!(timestamp.parse::<i64>().is_ok());
        assert!(Uuid::parse_str(uuid).is_ok());
    }
}
