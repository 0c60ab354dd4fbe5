//! 相册图片存储操作

use super::{SeaOrmStorage, db_error, trashed_scope};
use crate::entity::gallery_images::{ActiveModel, Column, Entity as GalleryImages};
use crate::errors::Result;
use crate::models::{
    PaginatedResponse, PaginationInfo,
    gallery::{
        entities::GalleryImage,
        requests::{CreateGalleryImage, GalleryListQuery, UpdateGalleryImageRequest},
    },
};
use crate::utils::contains_pattern;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Select, Set,
};

pub(super) fn active_scope(select: Select<GalleryImages>) -> Select<GalleryImages> {
    select
        .filter(Column::IsActive.eq(true))
        .filter(Column::DeletedAt.is_null())
}

pub(super) fn ordered_scope(select: Select<GalleryImages>) -> Select<GalleryImages> {
    select
        .order_by_asc(Column::SortOrder)
        .order_by_desc(Column::CreatedAt)
        .order_by_desc(Column::Id)
}

impl SeaOrmStorage {
    pub async fn create_gallery_image_impl(&self, req: CreateGalleryImage) -> Result<GalleryImage> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            title: Set(req.title),
            description: Set(req.description),
            category: Set(req.category),
            image_path: Set(req.image_path),
            is_active: Set(true),
            sort_order: Set(req.sort_order),
            uploaded_by: Set(req.uploaded_by),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_error("创建相册图片"))?;

        Ok(result.into_gallery_image())
    }

    pub async fn get_gallery_image_by_id_impl(
        &self,
        id: i64,
        only_active: bool,
    ) -> Result<Option<GalleryImage>> {
        let select = if only_active {
            active_scope(GalleryImages::find_by_id(id))
        } else {
            GalleryImages::find_by_id(id).filter(Column::DeletedAt.is_null())
        };

        let result = select.one(&self.db).await.map_err(db_error("查询相册图片"))?;

        Ok(result.map(|m| m.into_gallery_image()))
    }

    pub async fn list_gallery_images_with_pagination_impl(
        &self,
        query: GalleryListQuery,
    ) -> Result<PaginatedResponse<GalleryImage>> {
        let page = query.page.max(1);
        let size = query.size.clamp(1, 100);

        let mut select = if query.only_active {
            active_scope(GalleryImages::find())
        } else {
            trashed_scope(GalleryImages::find(), Column::DeletedAt, query.trashed)
        };

        if let Some(ref category) = query.category
            && !category.is_empty()
        {
            select = select.filter(Column::Category.eq(category.as_str()));
        }

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let term = search.trim();
            select = select.filter(
                Condition::any()
                    .add(Column::Title.like(contains_pattern(term)))
                    .add(Column::Description.like(contains_pattern(term))),
            );
        }

        let paginator = ordered_scope(select).paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(db_error("查询相册图片总数"))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(db_error("查询相册图片页数"))?;
        let items = paginator
            .fetch_page(page - 1)
            .await
            .map_err(db_error("查询相册图片列表"))?;

        Ok(PaginatedResponse {
            items: items.into_iter().map(|m| m.into_gallery_image()).collect(),
            pagination: PaginationInfo::new(page, size, total, pages),
        })
    }

    /// 公开图片的去重分类
    pub async fn list_gallery_categories_impl(&self) -> Result<Vec<String>> {
        let categories: Vec<String> = active_scope(GalleryImages::find())
            .select_only()
            .column(Column::Category)
            .distinct()
            .order_by_asc(Column::Category)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(db_error("查询相册分类"))?;

        Ok(categories)
    }

    pub async fn update_gallery_image_impl(
        &self,
        id: i64,
        update: UpdateGalleryImageRequest,
    ) -> Result<Option<GalleryImage>> {
        let Some(existing) = GalleryImages::find_by_id(id)
            .filter(Column::DeletedAt.is_null())
            .one(&self.db)
            .await
            .map_err(db_error("查询相册图片"))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();

        if let Some(title) = update.title {
            model.title = Set(title);
        }
        if let Some(description) = update.description {
            model.description = Set(description);
        }
        if let Some(category) = update.category {
            model.category = Set(category);
        }
        if let Some(is_active) = update.is_active {
            model.is_active = Set(is_active);
        }
        if let Some(sort_order) = update.sort_order {
            model.sort_order = Set(sort_order);
        }
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let result = model.update(&self.db).await.map_err(db_error("更新相册图片"))?;

        Ok(Some(result.into_gallery_image()))
    }

    pub async fn soft_delete_gallery_image_impl(&self, id: i64) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();
        let result = GalleryImages::update_many()
            .col_expr(Column::DeletedAt, Expr::value(now))
            .filter(Column::Id.eq(id))
            .filter(Column::DeletedAt.is_null())
            .exec(&self.db)
            .await
            .map_err(db_error("删除相册图片"))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn restore_gallery_image_impl(&self, id: i64) -> Result<bool> {
        let result = GalleryImages::update_many()
            .col_expr(Column::DeletedAt, Expr::value(Option::<i64>::None))
            .filter(Column::Id.eq(id))
            .filter(Column::DeletedAt.is_not_null())
            .exec(&self.db)
            .await
            .map_err(db_error("恢复相册图片"))?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
pub(super) mod tests {
    use super::super::{SeaOrmStorage, memory_storage};
    use crate::models::gallery::{
        entities::GalleryImage,
        requests::{CreateGalleryImage, GalleryListQuery},
    };

    pub(in crate::storage::sea_orm_storage) async fn create_image(
        storage: &SeaOrmStorage,
        title: &str,
        category: &str,
    ) -> GalleryImage {
        storage
            .create_gallery_image_impl(CreateGalleryImage {
                title: title.to_string(),
                description: None,
                category: category.to_string(),
                image_path: format!("gallery/{title}.jpg"),
                sort_order: 0,
                uploaded_by: None,
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_categories_are_distinct_and_skip_trashed() {
        let storage = memory_storage().await;
        create_image(&storage, "a", "sports").await;
        create_image(&storage, "b", "sports").await;
        let trashed = create_image(&storage, "c", "arts").await;
        storage
            .soft_delete_gallery_image_impl(trashed.id)
            .await
            .unwrap();

        let categories = storage.list_gallery_categories_impl().await.unwrap();
        assert_eq!(categories, vec!["sports".to_string()]);
    }

    #[tokio::test]
    async fn test_public_listing_hides_trashed() {
        let storage = memory_storage().await;
        let image = create_image(&storage, "field", "sports").await;
        storage.soft_delete_gallery_image_impl(image.id).await.unwrap();

        let query = GalleryListQuery {
            page: 1,
            size: 10,
            only_active: true,
            ..Default::default()
        };
        let listed = storage
            .list_gallery_images_with_pagination_impl(query.clone())
            .await
            .unwrap();
        assert_eq!(listed.pagination.total, 0);

        storage.restore_gallery_image_impl(image.id).await.unwrap();
        let listed = storage
            .list_gallery_images_with_pagination_impl(query)
            .await
            .unwrap();
        assert_eq!(listed.pagination.total, 1);
    }
}
