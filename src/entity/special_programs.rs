//! 特色项目实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "special_programs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub category: Option<String>,
    pub schedule: Option<String>,
    pub coordinator: Option<String>,
    pub image_path: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub features: String,
    pub is_active: bool,
    pub sort_order: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_program(self) -> crate::models::programs::entities::SpecialProgram {
        use crate::models::programs::entities::SpecialProgram;

        SpecialProgram {
            id: self.id,
            name: self.name,
            description: self.description,
            category: self.category,
            schedule: self.schedule,
            coordinator: self.coordinator,
            image_path: self.image_path,
            features: super::text_to_list(&self.features),
            is_active: self.is_active,
            sort_order: self.sort_order,
            created_at: super::timestamp_to_datetime(self.created_at),
            updated_at: super::timestamp_to_datetime(self.updated_at),
        }
    }
}
