//! 搜索结果评分与排序

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::search::{SearchCandidate, SearchResult, SearchResultType};

pub const EXACT_SCORE: u32 = 20;
pub const PREFIX_SCORE: u32 = 15;
pub const SUBSTRING_SCORE: u32 = 10;

const EXCERPT_CHARS: usize = 160;

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("Invalid tag regex"));
static SPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("Invalid space regex"));

/// 单个字段的相关度（不区分大小写）
pub fn score_field(field: &str, term: &str) -> u32 {
    let field = field.to_lowercase();
    let term = term.to_lowercase();
    if term.is_empty() {
        0
    } else if field == term {
        EXACT_SCORE
    } else if field.starts_with(&term) {
        PREFIX_SCORE
    } else if field.contains(&term) {
        SUBSTRING_SCORE
    } else {
        0
    }
}

/// 记录得分为各字段得分之和，空字段不计分
pub fn score_candidate(candidate: &SearchCandidate, term: &str) -> u32 {
    candidate
        .fields
        .iter()
        .flatten()
        .map(|field| score_field(field, term))
        .sum()
}

pub fn effective_limit(requested: Option<i64>, default_limit: usize, max_limit: usize) -> usize {
    let max_limit = max_limit.max(1);
    match requested {
        Some(limit) if limit >= 1 => (limit as usize).min(max_limit),
        Some(_) => 1,
        None => default_limit.clamp(1, max_limit),
    }
}

pub fn result_url(result_type: SearchResultType, id: i64) -> String {
    let section = match result_type {
        SearchResultType::Announcement => "announcements",
        SearchResultType::Event => "events",
        SearchResultType::Staff => "staff",
        SearchResultType::Program => "programs",
        SearchResultType::Gallery => "gallery",
    };
    format!("/{section}/{id}")
}

/// 去掉 HTML 标签、折叠空白后截断
pub fn excerpt(body: Option<&str>) -> String {
    let Some(body) = body else {
        return String::new();
    };
    let plain = TAG_RE.replace_all(body, " ");
    let plain = SPACE_RE.replace_all(plain.trim(), " ");

    if plain.chars().count() <= EXCERPT_CHARS {
        return plain.into_owned();
    }
    let mut cut: String = plain.chars().take(EXCERPT_CHARS).collect();
    cut.truncate(cut.trim_end().len());
    cut.push_str("...");
    cut
}

/// 按得分倒序稳定排序，同分保持各表原有顺序，再截断到 `limit`
pub fn rank(candidates: Vec<SearchCandidate>, term: &str, limit: usize) -> Vec<SearchResult> {
    let mut results: Vec<SearchResult> = candidates
        .into_iter()
        .map(|candidate| {
            let score = score_candidate(&candidate, term);
            SearchResult {
                result_type: candidate.result_type,
                id: candidate.id,
                url: result_url(candidate.result_type, candidate.id),
                excerpt: excerpt(candidate.body.as_deref()),
                title: candidate.title,
                score,
            }
        })
        .collect();

    results.sort_by(|a, b| b.score.cmp(&a.score));
    results.truncate(limit);
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(
        result_type: SearchResultType,
        id: i64,
        fields: &[Option<&str>],
    ) -> SearchCandidate {
        SearchCandidate {
            result_type,
            id,
            title: fields[0].unwrap_or_default().to_string(),
            body: None,
            fields: fields.iter().map(|f| f.map(str::to_string)).collect(),
        }
    }

    #[test]
    fn test_score_field() {
        assert_eq!(score_field("Sports", "sports"), EXACT_SCORE);
        assert_eq!(score_field("Sports Day", "SPORTS"), PREFIX_SCORE);
        assert_eq!(score_field("Annual Sports Day", "sports"), SUBSTRING_SCORE);
        assert_eq!(score_field("Music", "sports"), 0);
        assert_eq!(score_field("Music", ""), 0);
    }

    #[test]
    fn test_scores_sum_across_fields() {
        let c = candidate(
            SearchResultType::Event,
            1,
            &[Some("Sports"), Some("sports day for all"), None],
        );
        assert_eq!(score_candidate(&c, "sports"), EXACT_SCORE + PREFIX_SCORE);
    }

    #[test]
    fn test_rank_sorts_desc_and_keeps_ties_stable() {
        let candidates = vec![
            candidate(SearchResultType::Announcement, 1, &[Some("Annual sports"), None]),
            candidate(SearchResultType::Event, 2, &[Some("Sports"), None]),
            candidate(SearchResultType::Staff, 3, &[Some("Coach of sports"), None]),
            candidate(SearchResultType::Program, 4, &[Some("Sports club"), None]),
        ];
        let ranked = rank(candidates, "sports", 10);
        let order: Vec<(i64, u32)> = ranked.iter().map(|r| (r.id, r.score)).collect();
        assert_eq!(order, vec![(2, 20), (4, 15), (1, 10), (3, 10)]);
        assert_eq!(ranked[0].url, "/events/2");
        assert_eq!(ranked[1].url, "/programs/4");
    }

    #[test]
    fn test_rank_truncates() {
        let candidates = (1..=5)
            .map(|id| candidate(SearchResultType::Gallery, id, &[Some("sports")]))
            .collect();
        let ranked = rank(candidates, "sports", 3);
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked.last().map(|r| r.id), Some(3));
    }

    #[test]
    fn test_effective_limit() {
        assert_eq!(effective_limit(None, 20, 50), 20);
        assert_eq!(effective_limit(Some(100), 20, 50), 50);
        assert_eq!(effective_limit(Some(0), 20, 50), 1);
        assert_eq!(effective_limit(Some(-3), 20, 50), 1);
        assert_eq!(effective_limit(Some(7), 20, 50), 7);
    }

    #[test]
    fn test_excerpt_strips_markup_and_truncates() {
        assert_eq!(excerpt(None), "");
        assert_eq!(
            excerpt(Some("<p>Hello   <b>world</b></p>")),
            "Hello world"
        );
        let long = "word ".repeat(100);
        let cut = excerpt(Some(&long));
        assert!(cut.ends_with("..."));
        assert!(cut.chars().count() <= EXCERPT_CHARS + 3);
    }
}
