//! 校长信息与荣誉存储操作

use super::{SeaOrmStorage, db_error};
use crate::entity::principal_awards::{
    ActiveModel as AwardActiveModel, Column as AwardColumn, Entity as PrincipalAwards,
};
use crate::entity::principal_profiles::{ActiveModel, Column, Entity as PrincipalProfiles};
use crate::errors::Result;
use crate::models::principal::{
    entities::{PrincipalAward, PrincipalProfile},
    requests::{CreateAwardRequest, UpdateAwardRequest, UpsertPrincipalRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

fn apply_profile(model: &mut ActiveModel, req: UpsertPrincipalRequest, now: i64) {
    model.full_name = Set(req.full_name);
    model.title = Set(req.title);
    model.message = Set(req.message);
    model.bio = Set(req.bio);
    model.photo_path = Set(req.photo_path);
    model.email = Set(req.email);
    model.is_active = Set(req.is_active);
    model.updated_at = Set(now);
}

impl SeaOrmStorage {
    /// 站点只维护一份校长信息，取最早创建的一条
    pub async fn get_principal_impl(&self, only_active: bool) -> Result<Option<PrincipalProfile>> {
        let mut select = PrincipalProfiles::find();
        if only_active {
            select = select.filter(Column::IsActive.eq(true));
        }

        let result = select
            .order_by_asc(Column::Id)
            .one(&self.db)
            .await
            .map_err(db_error("查询校长信息"))?;

        Ok(result.map(|m| m.into_principal()))
    }

    pub async fn upsert_principal_impl(
        &self,
        req: UpsertPrincipalRequest,
    ) -> Result<PrincipalProfile> {
        let now = chrono::Utc::now().timestamp();

        let existing = PrincipalProfiles::find()
            .order_by_asc(Column::Id)
            .one(&self.db)
            .await
            .map_err(db_error("查询校长信息"))?;

        let saved = match existing {
            Some(m) => {
                let mut model: ActiveModel = m.into();
                apply_profile(&mut model, req, now);
                model.update(&self.db).await.map_err(db_error("更新校长信息"))?
            }
            None => {
                let mut model = ActiveModel {
                    created_at: Set(now),
                    ..Default::default()
                };
                apply_profile(&mut model, req, now);
                model.insert(&self.db).await.map_err(db_error("创建校长信息"))?
            }
        };

        Ok(saved.into_principal())
    }

    pub async fn list_principal_awards_impl(&self, principal_id: i64) -> Result<Vec<PrincipalAward>> {
        let items = PrincipalAwards::find()
            .filter(AwardColumn::PrincipalProfileId.eq(principal_id))
            .order_by_desc(AwardColumn::Year)
            .order_by_asc(AwardColumn::SortOrder)
            .order_by_asc(AwardColumn::Id)
            .all(&self.db)
            .await
            .map_err(db_error("查询校长荣誉"))?;

        Ok(items.into_iter().map(|m| m.into_award()).collect())
    }

    pub async fn create_principal_award_impl(
        &self,
        principal_id: i64,
        req: CreateAwardRequest,
    ) -> Result<PrincipalAward> {
        let now = chrono::Utc::now().timestamp();

        let model = AwardActiveModel {
            principal_profile_id: Set(principal_id),
            title: Set(req.title),
            awarding_body: Set(req.awarding_body),
            year: Set(req.year),
            description: Set(req.description),
            sort_order: Set(req.sort_order),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_error("创建校长荣誉"))?;

        Ok(result.into_award())
    }

    pub async fn update_principal_award_impl(
        &self,
        id: i64,
        update: UpdateAwardRequest,
    ) -> Result<Option<PrincipalAward>> {
        let Some(existing) = PrincipalAwards::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error("查询校长荣誉"))?
        else {
            return Ok(None);
        };

        let mut model: AwardActiveModel = existing.into();

        if let Some(title) = update.title {
            model.title = Set(title);
        }
        if let Some(awarding_body) = update.awarding_body {
            model.awarding_body = Set(awarding_body);
        }
        if let Some(year) = update.year {
            model.year = Set(year);
        }
        if let Some(description) = update.description {
            model.description = Set(description);
        }
        if let Some(sort_order) = update.sort_order {
            model.sort_order = Set(sort_order);
        }
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let result = model.update(&self.db).await.map_err(db_error("更新校长荣誉"))?;

        Ok(Some(result.into_award()))
    }

    pub async fn delete_principal_award_impl(&self, id: i64) -> Result<bool> {
        let result = PrincipalAwards::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_error("删除校长荣誉"))?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::super::memory_storage;
    use crate::models::principal::requests::{CreateAwardRequest, UpsertPrincipalRequest};

    fn profile(name: &str) -> UpsertPrincipalRequest {
        UpsertPrincipalRequest {
            full_name: name.to_string(),
            title: "Principal".to_string(),
            message: Some("Welcome".to_string()),
            bio: None,
            photo_path: None,
            email: None,
            is_active: true,
        }
    }

    fn award(title: &str, year: i32, sort_order: i32) -> CreateAwardRequest {
        CreateAwardRequest {
            title: title.to_string(),
            awarding_body: None,
            year,
            description: None,
            sort_order,
        }
    }

    #[tokio::test]
    async fn test_upsert_keeps_single_profile() {
        let storage = memory_storage().await;
        assert!(storage.get_principal_impl(true).await.unwrap().is_none());

        let first = storage.upsert_principal_impl(profile("A. Cruz")).await.unwrap();
        let second = storage.upsert_principal_impl(profile("B. Reyes")).await.unwrap();
        assert_eq!(first.id, second.id);
        assert_eq!(second.full_name, "B. Reyes");
    }

    #[tokio::test]
    async fn test_awards_ordered_by_year_desc() {
        let storage = memory_storage().await;
        let principal = storage.upsert_principal_impl(profile("A. Cruz")).await.unwrap();
        for (title, year, sort) in [("old", 2015, 0), ("new b", 2022, 2), ("new a", 2022, 1)] {
            storage
                .create_principal_award_impl(principal.id, award(title, year, sort))
                .await
                .unwrap();
        }

        let awards = storage.list_principal_awards_impl(principal.id).await.unwrap();
        let titles: Vec<_> = awards.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["new a", "new b", "old"]);
    }
}
