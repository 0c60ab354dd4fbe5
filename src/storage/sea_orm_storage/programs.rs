//! 特色项目存储操作

use super::{SeaOrmStorage, db_error};
use crate::entity::list_to_text;
use crate::entity::special_programs::{ActiveModel, Column, Entity as SpecialPrograms};
use crate::errors::Result;
use crate::models::{
    PaginatedResponse, PaginationInfo,
    programs::{
        entities::SpecialProgram,
        requests::{CreateProgramRequest, ProgramListQuery, UpdateProgramRequest},
    },
};
use crate::utils::contains_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    pub async fn create_program_impl(&self, req: CreateProgramRequest) -> Result<SpecialProgram> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            description: Set(req.description),
            category: Set(req.category),
            schedule: Set(req.schedule),
            coordinator: Set(req.coordinator),
            image_path: Set(req.image_path),
            features: Set(list_to_text(&req.features)),
            is_active: Set(req.is_active),
            sort_order: Set(req.sort_order),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_error("创建特色项目"))?;

        Ok(result.into_program())
    }

    pub async fn get_program_by_id_impl(
        &self,
        id: i64,
        only_active: bool,
    ) -> Result<Option<SpecialProgram>> {
        let mut select = SpecialPrograms::find_by_id(id);
        if only_active {
            select = select.filter(Column::IsActive.eq(true));
        }

        let result = select.one(&self.db).await.map_err(db_error("查询特色项目"))?;

        Ok(result.map(|m| m.into_program()))
    }

    pub async fn list_programs_with_pagination_impl(
        &self,
        query: ProgramListQuery,
    ) -> Result<PaginatedResponse<SpecialProgram>> {
        let page = query.page.max(1);
        let size = query.size.clamp(1, 100);

        let mut select = SpecialPrograms::find();

        if query.only_active {
            select = select.filter(Column::IsActive.eq(true));
        }

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
                    .add(Column::Name.like(contains_pattern(term)))
                    .add(Column::Description.like(contains_pattern(term))),
            );
        }

        select = select
            .order_by_asc(Column::SortOrder)
            .order_by_asc(Column::Name)
            .order_by_asc(Column::Id);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(db_error("查询特色项目总数"))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(db_error("查询特色项目页数"))?;
        let items = paginator
            .fetch_page(page - 1)
            .await
            .map_err(db_error("查询特色项目列表"))?;

        Ok(PaginatedResponse {
            items: items.into_iter().map(|m| m.into_program()).collect(),
            pagination: PaginationInfo::new(page, size, total, pages),
        })
    }

    pub async fn update_program_impl(
        &self,
        id: i64,
        update: UpdateProgramRequest,
    ) -> Result<Option<SpecialProgram>> {
        let Some(existing) = SpecialPrograms::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error("查询特色项目"))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();

        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(description) = update.description {
            model.description = Set(description);
        }
        if let Some(category) = update.category {
            model.category = Set(category);
        }
        if let Some(schedule) = update.schedule {
            model.schedule = Set(schedule);
        }
        if let Some(coordinator) = update.coordinator {
            model.coordinator = Set(coordinator);
        }
        if let Some(image_path) = update.image_path {
            model.image_path = Set(image_path);
        }
        if let Some(features) = update.features {
            model.features = Set(list_to_text(&features));
        }
        if let Some(is_active) = update.is_active {
            model.is_active = Set(is_active);
        }
        if let Some(sort_order) = update.sort_order {
            model.sort_order = Set(sort_order);
        }
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let result = model.update(&self.db).await.map_err(db_error("更新特色项目"))?;

        Ok(Some(result.into_program()))
    }

    pub async fn delete_program_impl(&self, id: i64) -> Result<bool> {
        let result = SpecialPrograms::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_error("删除特色项目"))?;

        Ok(result.rows_affected > 0)
    }
}
