use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::deserialize::deserialize_optional_i64;

crate::string_enum! {
    /// 搜索结果来源
    #[ts(export, export_to = "../frontend/src/types/generated/search.ts")]
    pub enum SearchResultType {
        Announcement => "announcement",
        Event => "event",
        Staff => "staff",
        Program => "program",
        Gallery => "gallery",
    }
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/search.ts")]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    #[ts(optional)]
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/search.ts")]
pub struct SearchResult {
    pub result_type: SearchResultType,
    pub id: i64,
    pub title: String,
    pub excerpt: String,
    pub url: String,
    pub score: u32,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/search.ts")]
pub struct SearchResponse {
    pub query: String,
    pub total: usize,
    pub results: Vec<SearchResult>,
}

/// 存储层返回的候选记录，`fields` 为参与评分的字段值
#[derive(Debug, Clone)]
pub struct SearchCandidate {
    pub result_type: SearchResultType,
    pub id: i64,
    pub title: String,
    pub body: Option<String>,
    pub fields: Vec<Option<String>>,
}
