//! 站点主题存储操作

use super::{SeaOrmStorage, db_error};
use crate::entity::site_themes::{ActiveModel, Column, Entity as SiteThemes};
use crate::errors::Result;
use crate::models::themes::{
    entities::SiteTheme,
    requests::{CreateThemeRequest, UpdateThemeRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
    sea_query::Expr,
};

impl SeaOrmStorage {
    pub async fn list_themes_impl(&self) -> Result<Vec<SiteTheme>> {
        let items = SiteThemes::find()
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await
            .map_err(db_error("查询主题列表"))?;

        Ok(items.into_iter().map(|m| m.into_theme()).collect())
    }

    pub async fn get_theme_by_id_impl(&self, id: i64) -> Result<Option<SiteTheme>> {
        let result = SiteThemes::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error("查询主题"))?;

        Ok(result.map(|m| m.into_theme()))
    }

    pub async fn get_theme_by_name_impl(&self, name: &str) -> Result<Option<SiteTheme>> {
        let result = SiteThemes::find()
            .filter(Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(db_error("查询主题"))?;

        Ok(result.map(|m| m.into_theme()))
    }

    pub async fn get_active_theme_impl(&self) -> Result<Option<SiteTheme>> {
        let result = SiteThemes::find()
            .filter(Column::IsActive.eq(true))
            .order_by_desc(Column::UpdatedAt)
            .one(&self.db)
            .await
            .map_err(db_error("查询当前主题"))?;

        Ok(result.map(|m| m.into_theme()))
    }

    /// 新建主题默认未激活
    pub async fn create_theme_impl(&self, req: CreateThemeRequest) -> Result<SiteTheme> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            primary_color: Set(req.primary_color),
            secondary_color: Set(req.secondary_color),
            accent_color: Set(req.accent_color),
            font_family: Set(req.font_family),
            logo_path: Set(req.logo_path),
            is_active: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_error("创建主题"))?;

        Ok(result.into_theme())
    }

    pub async fn update_theme_impl(
        &self,
        id: i64,
        update: UpdateThemeRequest,
    ) -> Result<Option<SiteTheme>> {
        let Some(existing) = SiteThemes::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error("查询主题"))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();

        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(primary_color) = update.primary_color {
            model.primary_color = Set(primary_color);
        }
        if let Some(secondary_color) = update.secondary_color {
            model.secondary_color = Set(secondary_color);
        }
        if let Some(accent_color) = update.accent_color {
            model.accent_color = Set(accent_color);
        }
        if let Some(font_family) = update.font_family {
            model.font_family = Set(font_family);
        }
        if let Some(logo_path) = update.logo_path {
            model.logo_path = Set(logo_path);
        }
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let result = model.update(&self.db).await.map_err(db_error("更新主题"))?;

        Ok(Some(result.into_theme()))
    }

    /// 激活指定主题，同一事务内停用其余主题
    pub async fn activate_theme_impl(&self, id: i64) -> Result<Option<SiteTheme>> {
        let txn = self.db.begin().await.map_err(db_error("开启事务"))?;

        let Some(existing) = SiteThemes::find_by_id(id)
            .one(&txn)
            .await
            .map_err(db_error("查询主题"))?
        else {
            txn.rollback().await.map_err(db_error("回滚事务"))?;
            return Ok(None);
        };

        SiteThemes::update_many()
            .col_expr(Column::IsActive, Expr::value(false))
            .filter(Column::IsActive.eq(true))
            .exec(&txn)
            .await
            .map_err(db_error("停用主题"))?;

        let mut model: ActiveModel = existing.into();
        model.is_active = Set(true);
        model.updated_at = Set(chrono::Utc::now().timestamp());
        let result = model.update(&txn).await.map_err(db_error("激活主题"))?;

        txn.commit().await.map_err(db_error("提交事务"))?;

        Ok(Some(result.into_theme()))
    }

    pub async fn delete_theme_impl(&self, id: i64) -> Result<bool> {
        let result = SiteThemes::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_error("删除主题"))?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::super::memory_storage;
    use crate::models::themes::requests::CreateThemeRequest;

    fn theme(name: &str) -> CreateThemeRequest {
        CreateThemeRequest {
            name: name.to_string(),
            primary_color: "#112233".to_string(),
            secondary_color: "#445566".to_string(),
            accent_color: "#778899".to_string(),
            font_family: None,
            logo_path: None,
        }
    }

    #[tokio::test]
    async fn test_activate_keeps_single_active_theme() {
        let storage = memory_storage().await;
        let spring = storage.create_theme_impl(theme("spring")).await.unwrap();
        let autumn = storage.create_theme_impl(theme("autumn")).await.unwrap();
        assert!(!spring.is_active);
        assert!(storage.get_active_theme_impl().await.unwrap().is_none());

        storage.activate_theme_impl(spring.id).await.unwrap().unwrap();
        storage.activate_theme_impl(autumn.id).await.unwrap().unwrap();

        let themes = storage.list_themes_impl().await.unwrap();
        let active: Vec<_> = themes.iter().filter(|t| t.is_active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].name, "autumn");

        assert!(storage.activate_theme_impl(9999).await.unwrap().is_none());
        assert_eq!(
            storage.get_active_theme_impl().await.unwrap().unwrap().id,
            autumn.id
        );
    }

    #[tokio::test]
    async fn test_duplicate_theme_name_rejected() {
        let storage = memory_storage().await;
        storage.create_theme_impl(theme("spring")).await.unwrap();
        assert!(storage.create_theme_impl(theme("spring")).await.is_err());
        assert!(storage.get_theme_by_name_impl("spring").await.unwrap().is_some());
    }
}
