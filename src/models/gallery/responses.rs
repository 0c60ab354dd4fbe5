use serde::Serialize;
use ts_rs::TS;

use super::entities::{GalleryImage, PublicComment};

// 图片详情（附带已审核评论数）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/gallery.ts")]
pub struct GalleryImageDetail {
    #[serde(flatten)]
    #[ts(flatten)]
    pub image: GalleryImage,
    pub approved_comment_count: i64,
}

// 发表评论的响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/gallery.ts")]
pub struct CommentCreatedResponse {
    pub comment: PublicComment,
    // 未自动审核时为 true
    pub pending_approval: bool,
}

// 评论被限流时的附加数据
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/gallery.ts")]
pub struct CommentRateLimitedResponse {
    pub retry_after: Option<i64>,
}
