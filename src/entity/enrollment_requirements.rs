//! 招生要求实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "enrollment_requirements")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub category_id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub is_required: bool,
    pub sort_order: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::enrollment_categories::Entity",
        from = "Column::CategoryId",
        to = "super::enrollment_categories::Column::Id"
    )]
    Category,
}

impl Related<super::enrollment_categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_requirement(self) -> crate::models::enrollment::entities::EnrollmentRequirement {
        use crate::models::enrollment::entities::EnrollmentRequirement;

        EnrollmentRequirement {
            id: self.id,
            category_id: self.category_id,
            title: self.title,
            description: self.description,
            is_required: self.is_required,
            sort_order: self.sort_order,
            created_at: super::timestamp_to_datetime(self.created_at),
            updated_at: super::timestamp_to_datetime(self.updated_at),
        }
    }
}
