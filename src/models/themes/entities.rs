use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/theme.ts")]
pub struct SiteTheme {
    pub id: i64,
    pub name: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
    pub font_family: Option<String>,
    pub logo_path: Option<String>,
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl SiteTheme {
    pub const DEFAULT_NAME: &'static str = "default";

    /// 未激活任何主题时对外返回的内置主题（id 为 0，不落库）
    pub fn builtin_default() -> Self {
        let epoch = chrono::DateTime::<chrono::Utc>::UNIX_EPOCH;
        Self {
            id: 0,
            name: Self::DEFAULT_NAME.to_string(),
            primary_color: "#1E3A8A".to_string(),
            secondary_color: "#F59E0B".to_string(),
            accent_color: "#10B981".to_string(),
            font_family: None,
            logo_path: None,
            is_active: true,
            created_at: epoch,
            updated_at: epoch,
        }
    }
}
