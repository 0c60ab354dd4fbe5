use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 联系方式（全站唯一一条）
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/contact.ts")]
pub struct ContactInfo {
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub office_hours: Option<String>,
    pub facebook_url: Option<String>,
    pub map_embed_url: Option<String>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}
