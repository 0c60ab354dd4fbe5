use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 页面区块内容，(page, section_key) 唯一
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/page.ts")]
pub struct PageContent {
    pub id: i64,
    pub page: String,
    pub section_key: String,
    pub title: Option<String>,
    pub content: Option<String>,
    #[ts(type = "Record<string, unknown> | null")]
    pub metadata: Option<serde_json::Value>,
    pub is_active: bool,
    pub sort_order: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
