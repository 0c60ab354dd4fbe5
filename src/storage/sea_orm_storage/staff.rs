//! 教职工存储操作

use super::{SeaOrmStorage, db_error};
use crate::entity::staff_profiles::{ActiveModel, Column, Entity as StaffProfiles};
use crate::entity::list_to_text;
use crate::errors::Result;
use crate::models::{
    PaginatedResponse, PaginationInfo,
    staff::{
        entities::StaffProfile,
        requests::{CreateStaffRequest, StaffListQuery, UpdateStaffRequest},
    },
};
use crate::utils::contains_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

impl SeaOrmStorage {
    pub async fn create_staff_impl(&self, req: CreateStaffRequest) -> Result<StaffProfile> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            full_name: Set(req.full_name),
            position: Set(req.position),
            department: Set(req.department),
            email: Set(req.email),
            phone: Set(req.phone),
            bio: Set(req.bio),
            photo_path: Set(req.photo_path),
            subjects: Set(list_to_text(&req.subjects)),
            is_active: Set(req.is_active),
            sort_order: Set(req.sort_order),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_error("创建教职工"))?;

        Ok(result.into_staff())
    }

    pub async fn get_staff_by_id_impl(
        &self,
        id: i64,
        only_active: bool,
    ) -> Result<Option<StaffProfile>> {
        let mut select = StaffProfiles::find_by_id(id);
        if only_active {
            select = select.filter(Column::IsActive.eq(true));
        }

        let result = select.one(&self.db).await.map_err(db_error("查询教职工"))?;

        Ok(result.map(|m| m.into_staff()))
    }

    pub async fn list_staff_with_pagination_impl(
        &self,
        query: StaffListQuery,
    ) -> Result<PaginatedResponse<StaffProfile>> {
        let page = query.page.max(1);
        let size = query.size.clamp(1, 100);

        let mut select = StaffProfiles::find();

        if query.only_active {
            select = select.filter(Column::IsActive.eq(true));
        }

        if let Some(ref department) = query.department
            && !department.is_empty()
        {
            select = select.filter(Column::Department.eq(department.as_str()));
        }

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let term = search.trim();
            select = select.filter(
                Condition::any()
                    .add(Column::FullName.like(contains_pattern(term)))
                    .add(Column::Position.like(contains_pattern(term)))
                    .add(Column::Department.like(contains_pattern(term))),
            );
        }

        // ordered 作用域
        select = select
            .order_by_asc(Column::SortOrder)
            .order_by_asc(Column::FullName)
            .order_by_asc(Column::Id);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(db_error("查询教职工总数"))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(db_error("查询教职工页数"))?;
        let items = paginator
            .fetch_page(page - 1)
            .await
            .map_err(db_error("查询教职工列表"))?;

        Ok(PaginatedResponse {
            items: items.into_iter().map(|m| m.into_staff()).collect(),
            pagination: PaginationInfo::new(page, size, total, pages),
        })
    }

    /// 在职教职工的去重部门
    pub async fn list_staff_departments_impl(&self) -> Result<Vec<String>> {
        let departments: Vec<Option<String>> = StaffProfiles::find()
            .filter(Column::IsActive.eq(true))
            .filter(Column::Department.is_not_null())
            .select_only()
            .column(Column::Department)
            .distinct()
            .order_by_asc(Column::Department)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(db_error("查询部门列表"))?;

        Ok(departments
            .into_iter()
            .flatten()
            .filter(|d| !d.is_empty())
            .collect())
    }

    pub async fn update_staff_impl(
        &self,
        id: i64,
        update: UpdateStaffRequest,
    ) -> Result<Option<StaffProfile>> {
        let Some(existing) = StaffProfiles::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error("查询教职工"))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();

        if let Some(full_name) = update.full_name {
            model.full_name = Set(full_name);
        }
        if let Some(position) = update.position {
            model.position = Set(position);
        }
        if let Some(department) = update.department {
            model.department = Set(department);
        }
        if let Some(email) = update.email {
            model.email = Set(email);
        }
        if let Some(phone) = update.phone {
            model.phone = Set(phone);
        }
        if let Some(bio) = update.bio {
            model.bio = Set(bio);
        }
        if let Some(photo_path) = update.photo_path {
            model.photo_path = Set(photo_path);
        }
        if let Some(subjects) = update.subjects {
            model.subjects = Set(list_to_text(&subjects));
        }
        if let Some(is_active) = update.is_active {
            model.is_active = Set(is_active);
        }
        if let Some(sort_order) = update.sort_order {
            model.sort_order = Set(sort_order);
        }
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let result = model.update(&self.db).await.map_err(db_error("更新教职工"))?;

        Ok(Some(result.into_staff()))
    }

    pub async fn delete_staff_impl(&self, id: i64) -> Result<bool> {
        let result = StaffProfiles::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_error("删除教职工"))?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::super::memory_storage;
    use crate::models::staff::requests::{CreateStaffRequest, StaffListQuery};

    fn request(name: &str, department: Option<&str>, sort_order: i32) -> CreateStaffRequest {
        CreateStaffRequest {
            full_name: name.to_string(),
            position: "Teacher".to_string(),
            department: department.map(str::to_string),
            email: None,
            phone: None,
            bio: None,
            photo_path: None,
            subjects: vec!["Math".to_string(), "Physics".to_string()],
            is_active: true,
            sort_order,
        }
    }

    #[tokio::test]
    async fn test_ordered_by_sort_order_then_name() {
        let storage = memory_storage().await;
        storage
            .create_staff_impl(request("Zed", Some("Science"), 0))
            .await
            .unwrap();
        storage
            .create_staff_impl(request("Amy", Some("Science"), 0))
            .await
            .unwrap();
        storage
            .create_staff_impl(request("Principal Bob", None, -1))
            .await
            .unwrap();

        let page = storage
            .list_staff_with_pagination_impl(StaffListQuery {
                page: 1,
                size: 10,
                only_active: true,
                ..Default::default()
            })
            .await
            .unwrap();
        let names: Vec<_> = page.items.iter().map(|s| s.full_name.as_str()).collect();
        assert_eq!(names, vec!["Principal Bob", "Amy", "Zed"]);
        assert_eq!(page.items[0].subjects, vec!["Math", "Physics"]);

        let departments = storage.list_staff_departments_impl().await.unwrap();
        assert_eq!(departments, vec!["Science".to_string()]);
    }
}
