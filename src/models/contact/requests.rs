use serde::Deserialize;
use ts_rs::TS;

// 整体覆盖写入
#[derive(Debug, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/contact.ts")]
pub struct UpdateContactRequest {
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub office_hours: Option<String>,
    pub facebook_url: Option<String>,
    pub map_embed_url: Option<String>,
}
