//! 教职工实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "staff_profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub full_name: String,
    pub position: String,
    pub department: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,
    pub photo_path: Option<String>,
    // JSON 数组
    #[sea_orm(column_type = "Text")]
    pub subjects: String,
    pub is_active: bool,
    pub sort_order: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_staff(self) -> crate::models::staff::entities::StaffProfile {
        use crate::models::staff::entities::StaffProfile;

        StaffProfile {
            id: self.id,
            full_name: self.full_name,
            position: self.position,
            department: self.department,
            email: self.email,
            phone: self.phone,
            bio: self.bio,
            photo_path: self.photo_path,
            subjects: super::text_to_list(&self.subjects),
            is_active: self.is_active,
            sort_order: self.sort_order,
            created_at: super::timestamp_to_datetime(self.created_at),
            updated_at: super::timestamp_to_datetime(self.updated_at),
        }
    }
}
