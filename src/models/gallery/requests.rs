use serde::Deserialize;
use ts_rs::TS;

use super::entities::CommentStatusFilter;
use crate::models::common::deserialize::{deserialize_nullable, deserialize_optional_i64};
use crate::models::common::{PaginationQuery, TrashedFilter};

// 公开相册列表查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/gallery.ts")]
pub struct GalleryQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub category: Option<String>,
}

// 后台相册列表查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/gallery.ts")]
pub struct AdminGalleryQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub category: Option<String>,
    pub search: Option<String>,
    pub trashed: Option<TrashedFilter>,
}

// 存储层列表查询
#[derive(Debug, Clone, Default)]
pub struct GalleryListQuery {
    pub page: u64,
    pub size: u64,
    pub category: Option<String>,
    pub search: Option<String>,
    pub only_active: bool,
    pub trashed: Option<TrashedFilter>,
}

// 新图片（由上传表单组装）
#[derive(Debug, Clone)]
pub struct CreateGalleryImage {
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub image_path: String,
    pub sort_order: i32,
    pub uploaded_by: Option<i64>,
}

#[derive(Debug, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/gallery.ts")]
pub struct UpdateGalleryImageRequest {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    #[ts(optional)]
    pub description: Option<Option<String>>,
    pub category: Option<String>,
    pub is_active: Option<bool>,
    pub sort_order: Option<i32>,
}

// 访客发表评论请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/gallery.ts")]
pub struct CreateCommentRequest {
    pub guest_name: String,
    pub guest_id: String,
    pub browser_fingerprint: Option<String>,
    pub content: String,
}

// 待写入的评论
#[derive(Debug, Clone)]
pub struct NewComment {
    pub gallery_image_id: i64,
    pub guest_name: String,
    pub guest_id: String,
    pub browser_fingerprint: Option<String>,
    pub ip_address: Option<String>,
    pub content: String,
    pub is_approved: bool,
}

// 后台评论列表查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/gallery.ts")]
pub struct AdminCommentQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub status: Option<CommentStatusFilter>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub image_id: Option<i64>,
}

// 存储层评论查询
#[derive(Debug, Clone)]
pub struct CommentListQuery {
    pub page: u64,
    pub size: u64,
    pub image_id: Option<i64>,
    pub status: CommentStatusFilter,
    // 公开列表按时间正序，后台按时间倒序
    pub oldest_first: bool,
}
