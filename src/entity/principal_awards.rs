//! 校长荣誉实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "principal_awards")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub principal_profile_id: i64,
    pub title: String,
    pub awarding_body: Option<String>,
    pub year: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub sort_order: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::principal_profiles::Entity",
        from = "Column::PrincipalProfileId",
        to = "super::principal_profiles::Column::Id"
    )]
    Principal,
}

impl Related<super::principal_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Principal.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_award(self) -> crate::models::principal::entities::PrincipalAward {
        use crate::models::principal::entities::PrincipalAward;

        PrincipalAward {
            id: self.id,
            principal_profile_id: self.principal_profile_id,
            title: self.title,
            awarding_body: self.awarding_body,
            year: self.year,
            description: self.description,
            sort_order: self.sort_order,
            created_at: super::timestamp_to_datetime(self.created_at),
            updated_at: super::timestamp_to_datetime(self.updated_at),
        }
    }
}
