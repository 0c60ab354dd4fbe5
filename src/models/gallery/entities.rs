use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/gallery.ts")]
pub struct GalleryImage {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub image_path: String,
    pub is_active: bool,
    pub sort_order: i32,
    pub uploaded_by: Option<i64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub deleted_at: Option<chrono::DateTime<chrono::Utc>>,
}

// 评论（后台视图，包含访客标识）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/gallery.ts")]
pub struct GalleryComment {
    pub id: i64,
    pub gallery_image_id: i64,
    pub guest_name: String,
    pub guest_id: String,
    pub browser_fingerprint: Option<String>,
    pub ip_address: Option<String>,
    pub content: String,
    pub is_approved: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 评论（公开视图）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/gallery.ts")]
pub struct PublicComment {
    pub id: i64,
    pub guest_name: String,
    pub content: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<GalleryComment> for PublicComment {
    fn from(c: GalleryComment) -> Self {
        Self {
            id: c.id,
            guest_name: c.guest_name,
            content: c.content,
            created_at: c.created_at,
        }
    }
}

crate::string_enum! {
    /// 后台评论审核状态筛选
    #[ts(export, export_to = "../frontend/src/types/generated/gallery.ts")]
    pub enum CommentStatusFilter {
        Pending => "pending",
        Approved => "approved",
        All => "all",
    }
}

/// 访客已发表评论的统计，用于发表前的限流判断
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GuestCommentStats {
    /// 该访客最近一条评论的时间（任意图片）
    pub last_comment_at: Option<chrono::DateTime<chrono::Utc>>,
    /// 该访客在当前图片下的评论数
    pub on_image: u64,
    /// 该访客自当日 UTC 零点以来的评论数
    pub today: u64,
}
