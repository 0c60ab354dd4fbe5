use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/program.ts")]
pub struct SpecialProgram {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub category: Option<String>,
    pub schedule: Option<String>,
    pub coordinator: Option<String>,
    pub image_path: Option<String>,
    pub features: Vec<String>,
    pub is_active: bool,
    pub sort_order: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
