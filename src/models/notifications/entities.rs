use serde::{Deserialize, Serialize};
use ts_rs::TS;

crate::string_enum! {
    /// 后台通知类型
    #[ts(export, export_to = "../frontend/src/types/generated/notification.ts")]
    pub enum NotificationType {
        Comment => "comment",
        System => "system",
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/notification.ts")]
pub struct Notification {
    pub id: i64,
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
    pub link: Option<String>,
    #[ts(type = "Record<string, unknown>")]
    pub data: serde_json::Value,
    pub is_read: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 待写入的通知
#[derive(Debug, Clone)]
pub struct NewNotification {
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
    pub link: Option<String>,
    pub data: serde_json::Value,
}
