use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::deserialize::deserialize_nullable;

// 更新（或首次创建）校长信息
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/principal.ts")]
pub struct UpsertPrincipalRequest {
    pub full_name: String,
    pub title: String,
    pub message: Option<String>,
    pub bio: Option<String>,
    pub photo_path: Option<String>,
    pub email: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/principal.ts")]
pub struct CreateAwardRequest {
    pub title: String,
    pub awarding_body: Option<String>,
    pub year: i32,
    pub description: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
}

#[derive(Debug, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/principal.ts")]
pub struct UpdateAwardRequest {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    #[ts(optional)]
    pub awarding_body: Option<Option<String>>,
    pub year: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    #[ts(optional)]
    pub description: Option<Option<String>>,
    pub sort_order: Option<i32>,
}

fn default_true() -> bool {
    true
}
