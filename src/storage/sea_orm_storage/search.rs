//! 全站搜索候选记录查询
//!
//! 每张表取启用且未删除、任一字段包含关键词（不区分大小写）的全部记录，
//! 保持各自的排序作用域；评分、排序与截断都在服务层完成。

use super::{SeaOrmStorage, announcements, db_error, events, gallery};
use crate::entity::prelude::{
    Announcements, Events, GalleryImages, SpecialPrograms, StaffProfiles,
};
use crate::entity::{
    announcements::Column as AnnouncementColumn, events::Column as EventColumn,
    gallery_images::Column as GalleryColumn, special_programs::Column as ProgramColumn,
    staff_profiles::Column as StaffColumn,
};
use crate::errors::Result;
use crate::models::search::{SearchCandidate, SearchResultType};
use crate::utils::contains_pattern;
use sea_orm::sea_query::{Expr, Func, IntoColumnRef};
use sea_orm::{
    ColumnTrait, Condition, EntityTrait, ExprTrait, QueryFilter, QueryOrder, Select,
};

/// 关键词的小写形式，用于 SQL 预筛与最终匹配
fn fold_term(term: &str) -> String {
    term.trim().to_lowercase()
}

/// 任一字段（小写后）包含关键词
fn fields_contain(fields: &[Option<String>], folded: &str) -> bool {
    !folded.is_empty()
        && fields
            .iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(folded))
}

/// `LOWER(col) LIKE %folded%` 的预筛条件
///
/// SQLite 的 `LOWER` 只转换 ASCII 字母，关键词含非 ASCII 字符时不做 SQL 预筛，
/// 交给 [`fields_contain`] 在读出后判断，保证各数据库结果一致。
fn text_filter<C>(columns: Vec<C>, folded: &str) -> Option<Condition>
where
    C: IntoColumnRef,
{
    if !folded.is_ascii() {
        return None;
    }
    Some(columns.into_iter().fold(Condition::any(), |cond, col| {
        cond.add(Expr::expr(Func::lower(Expr::col(col))).like(contains_pattern(folded)))
    }))
}

fn with_text_filter<E: EntityTrait>(select: Select<E>, filter: Option<Condition>) -> Select<E> {
    match filter {
        Some(cond) => select.filter(cond),
        None => select,
    }
}

impl SeaOrmStorage {
    pub async fn search_candidates_impl(&self, term: &str) -> Result<Vec<SearchCandidate>> {
        let folded = fold_term(term);
        let mut candidates = Vec::new();
        if folded.is_empty() {
            return Ok(candidates);
        }

        // 公告
        let now = chrono::Utc::now().timestamp();
        let rows = with_text_filter(
            announcements::ordered_scope(announcements::active_scope(Announcements::find(), now)),
            text_filter(
                vec![AnnouncementColumn::Title, AnnouncementColumn::Content],
                &folded,
            ),
        )
        .all(&self.db)
        .await
        .map_err(db_error("搜索公告"))?;

        candidates.extend(rows.into_iter().map(|m| SearchCandidate {
            result_type: SearchResultType::Announcement,
            id: m.id,
            fields: vec![Some(m.title.clone()), Some(m.content.clone())],
            title: m.title,
            body: Some(m.content),
        }));

        // 活动
        let rows = with_text_filter(
            events::active_scope(Events::find())
                .order_by_asc(EventColumn::StartDate)
                .order_by_asc(EventColumn::Id),
            text_filter(
                vec![
                    EventColumn::Title,
                    EventColumn::Description,
                    EventColumn::Location,
                ],
                &folded,
            ),
        )
        .all(&self.db)
        .await
        .map_err(db_error("搜索活动"))?;

        candidates.extend(rows.into_iter().map(|m| SearchCandidate {
            result_type: SearchResultType::Event,
            id: m.id,
            fields: vec![
                Some(m.title.clone()),
                m.description.clone(),
                m.location.clone(),
            ],
            title: m.title,
            body: m.description,
        }));

        // 教职工
        let rows = with_text_filter(
            StaffProfiles::find()
                .filter(StaffColumn::IsActive.eq(true))
                .order_by_asc(StaffColumn::SortOrder)
                .order_by_asc(StaffColumn::FullName)
                .order_by_asc(StaffColumn::Id),
            text_filter(
                vec![
                    StaffColumn::FullName,
                    StaffColumn::Position,
                    StaffColumn::Department,
                ],
                &folded,
            ),
        )
        .all(&self.db)
        .await
        .map_err(db_error("搜索教职工"))?;

        candidates.extend(rows.into_iter().map(|m| {
            let body = match &m.department {
                Some(department) => format!("{} · {}", m.position, department),
                None => m.position.clone(),
            };
            SearchCandidate {
                result_type: SearchResultType::Staff,
                id: m.id,
                fields: vec![Some(m.full_name.clone()), Some(m.position), m.department],
                title: m.full_name,
                body: Some(body),
            }
        }));

        // 特色项目
        let rows = with_text_filter(
            SpecialPrograms::find()
                .filter(ProgramColumn::IsActive.eq(true))
                .order_by_asc(ProgramColumn::SortOrder)
                .order_by_asc(ProgramColumn::Name)
                .order_by_asc(ProgramColumn::Id),
            text_filter(
                vec![ProgramColumn::Name, ProgramColumn::Description],
                &folded,
            ),
        )
        .all(&self.db)
        .await
        .map_err(db_error("搜索特色项目"))?;

        candidates.extend(rows.into_iter().map(|m| SearchCandidate {
            result_type: SearchResultType::Program,
            id: m.id,
            fields: vec![Some(m.name.clone()), Some(m.description.clone())],
            title: m.name,
            body: Some(m.description),
        }));

        // 相册
        let rows = with_text_filter(
            gallery::ordered_scope(gallery::active_scope(GalleryImages::find())),
            text_filter(
                vec![GalleryColumn::Title, GalleryColumn::Description],
                &folded,
            ),
        )
        .all(&self.db)
        .await
        .map_err(db_error("搜索相册"))?;

        candidates.extend(rows.into_iter().map(|m| SearchCandidate {
            result_type: SearchResultType::Gallery,
            id: m.id,
            fields: vec![Some(m.title.clone()), m.description.clone()],
            title: m.title,
            body: m.description,
        }));

        candidates.retain(|c| fields_contain(&c.fields, &folded));
        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::super::gallery::tests::create_image;
    use super::{fields_contain, fold_term};
    use super::super::memory_storage;
    use crate::models::search::SearchResultType;
    use crate::models::staff::requests::CreateStaffRequest;

    #[tokio::test]
    async fn test_candidates_span_tables_and_skip_inactive() {
        let storage = memory_storage().await;
        create_image(&storage, "Science fair booth", "events").await;
        storage
            .create_staff_impl(CreateStaffRequest {
                full_name: "Maria Santos".to_string(),
                position: "Science teacher".to_string(),
                department: Some("Science".to_string()),
                email: None,
                phone: None,
                bio: None,
                photo_path: None,
                subjects: vec!["Biology".to_string()],
                is_active: true,
                sort_order: 0,
            })
            .await
            .unwrap();
        storage
            .create_staff_impl(CreateStaffRequest {
                full_name: "Retired Science Head".to_string(),
                position: "Head".to_string(),
                department: None,
                email: None,
                phone: None,
                bio: None,
                photo_path: None,
                subjects: Vec::new(),
                is_active: false,
                sort_order: 0,
            })
            .await
            .unwrap();

        let candidates = storage.search_candidates_impl("science").await.unwrap();
        assert_eq!(candidates.len(), 2);
        assert!(
            candidates
                .iter()
                .any(|c| c.result_type == SearchResultType::Gallery)
        );
        assert!(
            candidates
                .iter()
                .any(|c| c.result_type == SearchResultType::Staff && c.title == "Maria Santos")
        );

        // 通配符按字面匹配
        assert!(storage.search_candidates_impl("100%").await.unwrap().is_empty());
    }

    fn staff(full_name: &str, position: &str) -> CreateStaffRequest {
        CreateStaffRequest {
            full_name: full_name.to_string(),
            position: position.to_string(),
            department: None,
            email: None,
            phone: None,
            bio: None,
            photo_path: None,
            subjects: Vec::new(),
            is_active: true,
            sort_order: 0,
        }
    }

    #[tokio::test]
    async fn test_candidates_ignore_case() {
        let storage = memory_storage().await;
        storage
            .create_staff_impl(staff("Émile Durand", "Music Director"))
            .await
            .unwrap();
        storage
            .create_staff_impl(staff("Ana Reyes", "Counselor"))
            .await
            .unwrap();

        for term in ["émile", "ÉMILE", "Émile", "durand", "MUSIC director"] {
            let candidates = storage.search_candidates_impl(term).await.unwrap();
            assert_eq!(candidates.len(), 1, "term {term}");
            assert_eq!(candidates[0].title, "Émile Durand");
        }

        assert!(storage.search_candidates_impl("émilie").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_candidates_are_not_truncated_per_table() {
        let storage = memory_storage().await;
        for i in 0..30 {
            create_image(&storage, &format!("Concert {i}"), "music").await;
        }

        let candidates = storage.search_candidates_impl("concert").await.unwrap();
        assert_eq!(candidates.len(), 30);
    }

    #[test]
    fn test_fields_contain() {
        let fields = vec![Some("Spring Fair".to_string()), None];
        assert!(fields_contain(&fields, "fair"));
        assert!(!fields_contain(&fields, "winter"));
        assert!(!fields_contain(&fields, ""));
        assert_eq!(fold_term("  ÉCOLE "), "école");
    }
}
