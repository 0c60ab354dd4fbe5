//! 相册访客评论实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "gallery_comments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub gallery_image_id: i64,
    pub guest_name: String,
    pub guest_id: String,
    pub browser_fingerprint: Option<String>,
    pub ip_address: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub is_approved: bool,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::gallery_images::Entity",
        from = "Column::GalleryImageId",
        to = "super::gallery_images::Column::Id"
    )]
    Image,
}

impl Related<super::gallery_images::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Image.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_comment(self) -> crate::models::gallery::entities::GalleryComment {
        use crate::models::gallery::entities::GalleryComment;

        GalleryComment {
            id: self.id,
            gallery_image_id: self.gallery_image_id,
            guest_name: self.guest_name,
            guest_id: self.guest_id,
            browser_fingerprint: self.browser_fingerprint,
            ip_address: self.ip_address,
            content: self.content,
            is_approved: self.is_approved,
            created_at: super::timestamp_to_datetime(self.created_at),
        }
    }
}
