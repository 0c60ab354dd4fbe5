use serde::Serialize;
use ts_rs::TS;

use super::entities::{PrincipalAward, PrincipalProfile};

// 校长信息及荣誉（按年份倒序）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/principal.ts")]
pub struct PrincipalWithAwards {
    #[serde(flatten)]
    #[ts(flatten)]
    pub profile: PrincipalProfile,
    pub awards: Vec<PrincipalAward>,
}
