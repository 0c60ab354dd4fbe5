use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/upload.ts")]
pub struct UploadQuery {
    pub folder: Option<String>,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/upload.ts")]
pub struct UploadResponse {
    // 相对 upload.dir 的路径
    pub path: String,
    pub url: String,
    pub size: u64,
    pub content_type: String,
}
