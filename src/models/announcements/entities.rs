use serde::{Deserialize, Serialize};
use ts_rs::TS;

crate::string_enum! {
    /// 公告类型
    #[ts(export, export_to = "../frontend/src/types/generated/announcement.ts")]
    pub enum AnnouncementType {
        General => "general",
        Academic => "academic",
        Event => "event",
        Urgent => "urgent",
    }
}

impl Default for AnnouncementType {
    fn default() -> Self {
        Self::General
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/announcement.ts")]
pub struct Announcement {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub announcement_type: AnnouncementType,
    pub is_active: bool,
    pub is_pinned: bool,
    // 为空表示立即发布
    pub published_at: Option<chrono::DateTime<chrono::Utc>>,
    // 为空表示永不过期
    pub expires_at: Option<chrono::DateTime<chrono::Utc>>,
    pub author_id: Option<i64>,
    pub image_path: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub deleted_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Announcement {
    /// 与存储层 `active` 作用域一致的内存判断
    pub fn is_visible_at(&self, now: chrono::DateTime<chrono::Utc>) -> bool {
        self.is_active
            && self.deleted_at.is_none()
            && self.published_at.is_none_or(|p| p <= now)
            && self.expires_at.is_none_or(|e| e > now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn sample() -> Announcement {
        let now = Utc::now();
        Announcement {
            id: 1,
            title: "Enrollment opens".into(),
            content: "Details".into(),
            announcement_type: AnnouncementType::Academic,
            is_active: true,
            is_pinned: false,
            published_at: None,
            expires_at: None,
            author_id: None,
            image_path: None,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    #[test]
    fn test_visibility_window() {
        let now = Utc::now();
        let mut a = sample();
        assert!(a.is_visible_at(now));

        a.published_at = Some(now + Duration::hours(1));
        assert!(!a.is_visible_at(now));

        a.published_at = Some(now - Duration::hours(1));
        a.expires_at = Some(now);
        assert!(!a.is_visible_at(now));

        a.expires_at = Some(now + Duration::seconds(1));
        assert!(a.is_visible_at(now));
    }

    #[test]
    fn test_inactive_or_deleted_hidden() {
        let now = Utc::now();
        let mut a = sample();
        a.is_active = false;
        assert!(!a.is_visible_at(now));

        let mut a = sample();
        a.deleted_at = Some(now);
        assert!(!a.is_visible_at(now));
    }
}
