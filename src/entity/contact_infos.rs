//! 联系方式实体（单行）

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "contact_infos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub office_hours: Option<String>,
    pub facebook_url: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub map_embed_url: Option<String>,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_contact(self) -> crate::models::contact::entities::ContactInfo {
        use crate::models::contact::entities::ContactInfo;

        ContactInfo {
            address: self.address,
            phone: self.phone,
            email: self.email,
            office_hours: self.office_hours,
            facebook_url: self.facebook_url,
            map_embed_url: self.map_embed_url,
            updated_at: Some(super::timestamp_to_datetime(self.updated_at)),
        }
    }
}
