//! 招生流程实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "enrollment_processes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub step_number: i32,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_process(self) -> crate::models::enrollment::entities::EnrollmentProcess {
        use crate::models::enrollment::entities::EnrollmentProcess;

        EnrollmentProcess {
            id: self.id,
            step_number: self.step_number,
            title: self.title,
            description: self.description,
            is_active: self.is_active,
            created_at: super::timestamp_to_datetime(self.created_at),
            updated_at: super::timestamp_to_datetime(self.updated_at),
        }
    }
}
