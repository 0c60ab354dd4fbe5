//! 公告实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "announcements")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub announcement_type: String,
    pub is_active: bool,
    pub is_pinned: bool,
    pub published_at: Option<i64>,
    pub expires_at: Option<i64>,
    pub author_id: Option<i64>,
    pub image_path: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
    pub deleted_at: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::AuthorId",
        to = "super::users::Column::Id"
    )]
    Author,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_announcement(self) -> crate::models::announcements::entities::Announcement {
        use crate::models::announcements::entities::{Announcement, AnnouncementType};

        Announcement {
            id: self.id,
            title: self.title,
            content: self.content,
            announcement_type: self
                .announcement_type
                .parse::<AnnouncementType>()
                .unwrap_or_default(),
            is_active: self.is_active,
            is_pinned: self.is_pinned,
            published_at: self.published_at.map(super::timestamp_to_datetime),
            expires_at: self.expires_at.map(super::timestamp_to_datetime),
            author_id: self.author_id,
            image_path: self.image_path,
            created_at: super::timestamp_to_datetime(self.created_at),
            updated_at: super::timestamp_to_datetime(self.updated_at),
            deleted_at: self.deleted_at.map(super::timestamp_to_datetime),
        }
    }
}
