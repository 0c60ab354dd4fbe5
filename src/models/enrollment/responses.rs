use serde::Serialize;
use ts_rs::TS;

use super::entities::{EnrollmentCategory, EnrollmentProcess, EnrollmentRequirement};

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct CategoryWithRequirements {
    #[serde(flatten)]
    #[ts(flatten)]
    pub category: EnrollmentCategory,
    pub requirements: Vec<EnrollmentRequirement>,
}

// 公开招生指南
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct EnrollmentGuidelines {
    pub categories: Vec<CategoryWithRequirements>,
    pub processes: Vec<EnrollmentProcess>,
}
