//! 招生指南存储操作（类别、要求、流程）

use super::{SeaOrmStorage, db_error};
use crate::entity::enrollment_categories::{
    ActiveModel as CategoryActiveModel, Column as CategoryColumn, Entity as EnrollmentCategories,
};
use crate::entity::enrollment_processes::{
    ActiveModel as ProcessActiveModel, Column as ProcessColumn, Entity as EnrollmentProcesses,
};
use crate::entity::enrollment_requirements::{
    ActiveModel as RequirementActiveModel, Column as RequirementColumn,
    Entity as EnrollmentRequirements,
};
use crate::errors::Result;
use crate::models::enrollment::{
    entities::{EnrollmentCategory, EnrollmentProcess, EnrollmentRequirement},
    requests::{
        CreateCategoryRequest, CreateProcessRequest, CreateRequirementRequest,
        UpdateCategoryRequest, UpdateProcessRequest, UpdateRequirementRequest,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    // ==================== 类别 ====================

    pub async fn list_enrollment_categories_impl(
        &self,
        only_active: bool,
    ) -> Result<Vec<EnrollmentCategory>> {
        let mut select = EnrollmentCategories::find();
        if only_active {
            select = select.filter(CategoryColumn::IsActive.eq(true));
        }

        let items = select
            .order_by_asc(CategoryColumn::SortOrder)
            .order_by_asc(CategoryColumn::Id)
            .all(&self.db)
            .await
            .map_err(db_error("查询招生类别"))?;

        Ok(items.into_iter().map(|m| m.into_category()).collect())
    }

    pub async fn get_enrollment_category_impl(
        &self,
        id: i64,
    ) -> Result<Option<EnrollmentCategory>> {
        let result = EnrollmentCategories::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error("查询招生类别"))?;

        Ok(result.map(|m| m.into_category()))
    }

    pub async fn create_enrollment_category_impl(
        &self,
        req: CreateCategoryRequest,
    ) -> Result<EnrollmentCategory> {
        let now = chrono::Utc::now().timestamp();

        let model = CategoryActiveModel {
            name: Set(req.name),
            description: Set(req.description),
            is_active: Set(req.is_active),
            sort_order: Set(req.sort_order),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_error("创建招生类别"))?;

        Ok(result.into_category())
    }

    pub async fn update_enrollment_category_impl(
        &self,
        id: i64,
        update: UpdateCategoryRequest,
    ) -> Result<Option<EnrollmentCategory>> {
        let Some(existing) = EnrollmentCategories::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error("查询招生类别"))?
        else {
            return Ok(None);
        };

        let mut model: CategoryActiveModel = existing.into();

        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(description) = update.description {
            model.description = Set(description);
        }
        if let Some(is_active) = update.is_active {
            model.is_active = Set(is_active);
        }
        if let Some(sort_order) = update.sort_order {
            model.sort_order = Set(sort_order);
        }
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let result = model.update(&self.db).await.map_err(db_error("更新招生类别"))?;

        Ok(Some(result.into_category()))
    }

    /// 删除类别及其下所有要求
    pub async fn delete_enrollment_category_impl(&self, id: i64) -> Result<bool> {
        let txn = self.db.begin().await.map_err(db_error("开启事务"))?;

        EnrollmentRequirements::delete_many()
            .filter(RequirementColumn::CategoryId.eq(id))
            .exec(&txn)
            .await
            .map_err(db_error("删除招生要求"))?;

        let result = EnrollmentCategories::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_error("删除招生类别"))?;

        txn.commit().await.map_err(db_error("提交事务"))?;

        Ok(result.rows_affected > 0)
    }

    // ==================== 要求 ====================

    pub async fn list_enrollment_requirements_impl(&self) -> Result<Vec<EnrollmentRequirement>> {
        let items = EnrollmentRequirements::find()
            .order_by_asc(RequirementColumn::CategoryId)
            .order_by_asc(RequirementColumn::SortOrder)
            .order_by_asc(RequirementColumn::Id)
            .all(&self.db)
            .await
            .map_err(db_error("查询招生要求"))?;

        Ok(items.into_iter().map(|m| m.into_requirement()).collect())
    }

    pub async fn create_enrollment_requirement_impl(
        &self,
        req: CreateRequirementRequest,
    ) -> Result<EnrollmentRequirement> {
        let now = chrono::Utc::now().timestamp();

        let model = RequirementActiveModel {
            category_id: Set(req.category_id),
            title: Set(req.title),
            description: Set(req.description),
            is_required: Set(req.is_required),
            sort_order: Set(req.sort_order),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_error("创建招生要求"))?;

        Ok(result.into_requirement())
    }

    pub async fn update_enrollment_requirement_impl(
        &self,
        id: i64,
        update: UpdateRequirementRequest,
    ) -> Result<Option<EnrollmentRequirement>> {
        let Some(existing) = EnrollmentRequirements::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error("查询招生要求"))?
        else {
            return Ok(None);
        };

        let mut model: RequirementActiveModel = existing.into();

        if let Some(category_id) = update.category_id {
            model.category_id = Set(category_id);
        }
        if let Some(title) = update.title {
            model.title = Set(title);
        }
        if let Some(description) = update.description {
            model.description = Set(description);
        }
        if let Some(is_required) = update.is_required {
            model.is_required = Set(is_required);
        }
        if let Some(sort_order) = update.sort_order {
            model.sort_order = Set(sort_order);
        }
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let result = model.update(&self.db).await.map_err(db_error("更新招生要求"))?;

        Ok(Some(result.into_requirement()))
    }

    pub async fn delete_enrollment_requirement_impl(&self, id: i64) -> Result<bool> {
        let result = EnrollmentRequirements::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_error("删除招生要求"))?;

        Ok(result.rows_affected > 0)
    }

    // ==================== 流程 ====================

    pub async fn list_enrollment_processes_impl(
        &self,
        only_active: bool,
    ) -> Result<Vec<EnrollmentProcess>> {
        let mut select = EnrollmentProcesses::find();
        if only_active {
            select = select.filter(ProcessColumn::IsActive.eq(true));
        }

        let items = select
            .order_by_asc(ProcessColumn::StepNumber)
            .order_by_asc(ProcessColumn::Id)
            .all(&self.db)
            .await
            .map_err(db_error("查询招生流程"))?;

        Ok(items.into_iter().map(|m| m.into_process()).collect())
    }

    pub async fn create_enrollment_process_impl(
        &self,
        req: CreateProcessRequest,
    ) -> Result<EnrollmentProcess> {
        let now = chrono::Utc::now().timestamp();

        let model = ProcessActiveModel {
            step_number: Set(req.step_number),
            title: Set(req.title),
            description: Set(req.description),
            is_active: Set(req.is_active),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_error("创建招生流程"))?;

        Ok(result.into_process())
    }

    pub async fn update_enrollment_process_impl(
        &self,
        id: i64,
        update: UpdateProcessRequest,
    ) -> Result<Option<EnrollmentProcess>> {
        let Some(existing) = EnrollmentProcesses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error("查询招生流程"))?
        else {
            return Ok(None);
        };

        let mut model: ProcessActiveModel = existing.into();

        if let Some(step_number) = update.step_number {
            model.step_number = Set(step_number);
        }
        if let Some(title) = update.title {
            model.title = Set(title);
        }
        if let Some(description) = update.description {
            model.description = Set(description);
        }
        if let Some(is_active) = update.is_active {
            model.is_active = Set(is_active);
        }
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let result = model.update(&self.db).await.map_err(db_error("更新招生流程"))?;

        Ok(Some(result.into_process()))
    }

    pub async fn delete_enrollment_process_impl(&self, id: i64) -> Result<bool> {
        let result = EnrollmentProcesses::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_error("删除招生流程"))?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::super::memory_storage;
    use crate::models::enrollment::requests::{CreateCategoryRequest, CreateRequirementRequest};

    #[tokio::test]
    async fn test_delete_category_cascades_to_requirements() {
        let storage = memory_storage().await;
        let category = storage
            .create_enrollment_category_impl(CreateCategoryRequest {
                name: "Grade 7".to_string(),
                description: None,
                is_active: true,
                sort_order: 0,
            })
            .await
            .unwrap();
        storage
            .create_enrollment_requirement_impl(CreateRequirementRequest {
                category_id: category.id,
                title: "Birth certificate".to_string(),
                description: None,
                is_required: true,
                sort_order: 0,
            })
            .await
            .unwrap();

        assert!(storage.delete_enrollment_category_impl(category.id).await.unwrap());
        assert!(storage
            .list_enrollment_requirements_impl()
            .await
            .unwrap()
            .is_empty());
        assert!(!storage.delete_enrollment_category_impl(category.id).await.unwrap());
    }
}
