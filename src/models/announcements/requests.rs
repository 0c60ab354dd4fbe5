use serde::Deserialize;
use ts_rs::TS;

use super::entities::AnnouncementType;
use crate::models::common::deserialize::deserialize_nullable;
use crate::models::common::{PaginationQuery, TrashedFilter};

// 公开公告列表查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/announcement.ts")]
pub struct AnnouncementQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    #[serde(rename = "type")]
    pub announcement_type: Option<AnnouncementType>,
    pub search: Option<String>,
}

// 最新公告查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/announcement.ts")]
pub struct LatestAnnouncementsQuery {
    pub limit: Option<u64>,
}

// 后台公告列表查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/announcement.ts")]
pub struct AdminAnnouncementQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    #[serde(rename = "type")]
    pub announcement_type: Option<AnnouncementType>,
    pub search: Option<String>,
    pub trashed: Option<TrashedFilter>,
}

// 存储层列表查询
#[derive(Debug, Clone, Default)]
pub struct AnnouncementListQuery {
    pub page: u64,
    pub size: u64,
    pub announcement_type: Option<AnnouncementType>,
    pub search: Option<String>,
    // true 时只返回对公众可见的公告
    pub only_active: bool,
    pub trashed: Option<TrashedFilter>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/announcement.ts")]
pub struct CreateAnnouncementRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub announcement_type: AnnouncementType,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_pinned: bool,
    pub published_at: Option<chrono::DateTime<chrono::Utc>>,
    pub expires_at: Option<chrono::DateTime<chrono::Utc>>,
    pub image_path: Option<String>,
    // 由服务层填充
    #[serde(skip)]
    #[ts(skip)]
    pub author_id: Option<i64>,
}

#[derive(Debug, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/announcement.ts")]
pub struct UpdateAnnouncementRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub announcement_type: Option<AnnouncementType>,
    pub is_active: Option<bool>,
    pub is_pinned: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    #[ts(optional)]
    pub published_at: Option<Option<chrono::DateTime<chrono::Utc>>>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    #[ts(optional)]
    pub expires_at: Option<Option<chrono::DateTime<chrono::Utc>>>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    #[ts(optional)]
    pub image_path: Option<Option<String>>,
}

fn default_true() -> bool {
    true
}
