//! 页面区块实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "page_contents")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub page: String,
    pub section_key: String,
    pub title: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub content: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub metadata: Option<String>,
    pub is_active: bool,
    pub sort_order: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_page_content(self) -> crate::models::pages::entities::PageContent {
        use crate::models::pages::entities::PageContent;

        PageContent {
            id: self.id,
            page: self.page,
            section_key: self.section_key,
            title: self.title,
            content: self.content,
            metadata: self
                .metadata
                .as_deref()
                .and_then(|raw| serde_json::from_str(raw).ok()),
            is_active: self.is_active,
            sort_order: self.sort_order,
            created_at: super::timestamp_to_datetime(self.created_at),
            updated_at: super::timestamp_to_datetime(self.updated_at),
        }
    }
}
