use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/principal.ts")]
pub struct PrincipalProfile {
    pub id: i64,
    pub full_name: String,
    pub title: String,
    // 校长寄语
    pub message: Option<String>,
    pub bio: Option<String>,
    pub photo_path: Option<String>,
    pub email: Option<String>,
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/principal.ts")]
pub struct PrincipalAward {
    pub id: i64,
    pub principal_profile_id: i64,
    pub title: String,
    pub awarding_body: Option<String>,
    pub year: i32,
    pub description: Option<String>,
    pub sort_order: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
