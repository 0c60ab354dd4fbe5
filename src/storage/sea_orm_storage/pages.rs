//! 页面区块与联系方式存储操作

use super::{SeaOrmStorage, db_error};
use crate::entity::contact_infos::{ActiveModel as ContactActiveModel, Entity as ContactInfos};
use crate::entity::page_contents::{ActiveModel, Column, Entity as PageContents};
use crate::errors::Result;
use crate::models::{
    contact::{entities::ContactInfo, requests::UpdateContactRequest},
    pages::{entities::PageContent, requests::UpsertSectionRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn list_page_sections_impl(
        &self,
        page: &str,
        only_active: bool,
    ) -> Result<Vec<PageContent>> {
        let mut select = PageContents::find().filter(Column::Page.eq(page));
        if only_active {
            select = select.filter(Column::IsActive.eq(true));
        }

        let items = select
            .order_by_asc(Column::SortOrder)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error("查询页面区块"))?;

        Ok(items.into_iter().map(|m| m.into_page_content()).collect())
    }

    /// 按 (page, section_key) 写入区块，不存在则创建
    pub async fn upsert_page_section_impl(
        &self,
        page: &str,
        section_key: &str,
        req: UpsertSectionRequest,
    ) -> Result<PageContent> {
        let now = chrono::Utc::now().timestamp();
        let metadata = req
            .metadata
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;

        let existing = PageContents::find()
            .filter(Column::Page.eq(page))
            .filter(Column::SectionKey.eq(section_key))
            .one(&self.db)
            .await
            .map_err(db_error("查询页面区块"))?;

        let result = match existing {
            Some(existing) => {
                let mut model: ActiveModel = existing.into();
                model.title = Set(req.title);
                model.content = Set(req.content);
                model.metadata = Set(metadata);
                model.is_active = Set(req.is_active);
                model.sort_order = Set(req.sort_order);
                model.updated_at = Set(now);
                model.update(&self.db).await.map_err(db_error("更新页面区块"))?
            }
            None => {
                let model = ActiveModel {
                    page: Set(page.to_string()),
                    section_key: Set(section_key.to_string()),
                    title: Set(req.title),
                    content: Set(req.content),
                    metadata: Set(metadata),
                    is_active: Set(req.is_active),
                    sort_order: Set(req.sort_order),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                };
                model.insert(&self.db).await.map_err(db_error("创建页面区块"))?
            }
        };

        Ok(result.into_page_content())
    }

    pub async fn delete_page_section_impl(&self, page: &str, section_key: &str) -> Result<bool> {
        let result = PageContents::delete_many()
            .filter(Column::Page.eq(page))
            .filter(Column::SectionKey.eq(section_key))
            .exec(&self.db)
            .await
            .map_err(db_error("删除页面区块"))?;

        Ok(result.rows_affected > 0)
    }

    // ==================== 联系方式（单行） ====================

    pub async fn get_contact_info_impl(&self) -> Result<Option<ContactInfo>> {
        let result = ContactInfos::find()
            .one(&self.db)
            .await
            .map_err(db_error("查询联系方式"))?;

        Ok(result.map(|m| m.into_contact()))
    }

    pub async fn update_contact_info_impl(&self, req: UpdateContactRequest) -> Result<ContactInfo> {
        let now = chrono::Utc::now().timestamp();

        let existing = ContactInfos::find()
            .one(&self.db)
            .await
            .map_err(db_error("查询联系方式"))?;

        let mut model: ContactActiveModel = match existing {
            Some(existing) => existing.into(),
            None => <ContactActiveModel as ActiveModelTrait>::default(),
        };
        let is_new = model.id.is_not_set();

        model.address = Set(req.address);
        model.phone = Set(req.phone);
        model.email = Set(req.email);
        model.office_hours = Set(req.office_hours);
        model.facebook_url = Set(req.facebook_url);
        model.map_embed_url = Set(req.map_embed_url);
        model.updated_at = Set(now);

        let result = if is_new {
            model.insert(&self.db).await
        } else {
            model.update(&self.db).await
        }
        .map_err(db_error("保存联系方式"))?;

        Ok(result.into_contact())
    }
}

#[cfg(test)]
mod tests {
    use super::super::memory_storage;
    use crate::models::contact::requests::UpdateContactRequest;
    use crate::models::pages::requests::UpsertSectionRequest;
    use serde_json::json;

    fn section(title: &str) -> UpsertSectionRequest {
        UpsertSectionRequest {
            title: Some(title.to_string()),
            content: Some("Body".to_string()),
            metadata: Some(json!({ "icon": "star" })),
            is_active: true,
            sort_order: 0,
        }
    }

    #[tokio::test]
    async fn test_upsert_section_overwrites_same_key() {
        let storage = memory_storage().await;
        let first = storage
            .upsert_page_section_impl("about", "mission", section("Mission"))
            .await
            .unwrap();
        let second = storage
            .upsert_page_section_impl("about", "mission", section("Our Mission"))
            .await
            .unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(second.title.as_deref(), Some("Our Mission"));
        assert_eq!(second.metadata, Some(json!({ "icon": "star" })));

        let sections = storage.list_page_sections_impl("about", true).await.unwrap();
        assert_eq!(sections.len(), 1);
        assert!(storage.list_page_sections_impl("home", true).await.unwrap().is_empty());

        assert!(storage.delete_page_section_impl("about", "mission").await.unwrap());
        assert!(!storage.delete_page_section_impl("about", "mission").await.unwrap());
    }

    #[tokio::test]
    async fn test_contact_info_is_singleton() {
        let storage = memory_storage().await;
        assert!(storage.get_contact_info_impl().await.unwrap().is_none());

        storage
            .update_contact_info_impl(UpdateContactRequest {
                phone: Some("555-0100".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        let updated = storage
            .update_contact_info_impl(UpdateContactRequest {
                email: Some("office@school.test".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        // 整体覆盖，未提供的字段被清空
        assert_eq!(updated.phone, None);
        assert_eq!(updated.email.as_deref(), Some("office@school.test"));

        let stored = storage.get_contact_info_impl().await.unwrap().unwrap();
        assert_eq!(stored.email, updated.email);
    }
}
