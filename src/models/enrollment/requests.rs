use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::deserialize::deserialize_nullable;

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct CreateCategoryRequest {
    pub name: String,
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub sort_order: i32,
}

#[derive(Debug, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    #[ts(optional)]
    pub description: Option<Option<String>>,
    pub is_active: Option<bool>,
    pub sort_order: Option<i32>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct CreateRequirementRequest {
    pub category_id: i64,
    pub title: String,
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub is_required: bool,
    #[serde(default)]
    pub sort_order: i32,
}

#[derive(Debug, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct UpdateRequirementRequest {
    pub category_id: Option<i64>,
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    #[ts(optional)]
    pub description: Option<Option<String>>,
    pub is_required: Option<bool>,
    pub sort_order: Option<i32>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct CreateProcessRequest {
    pub step_number: i32,
    pub title: String,
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct UpdateProcessRequest {
    pub step_number: Option<i32>,
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    #[ts(optional)]
    pub description: Option<Option<String>>,
    pub is_active: Option<bool>,
}

fn default_true() -> bool {
    true
}
