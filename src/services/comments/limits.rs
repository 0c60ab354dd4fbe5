//! 访客评论限流
//!
//! 发表前依次检查：冷却时间、单图上限、当日上限，命中第一条即拒绝。

use chrono::{DateTime, NaiveTime, Utc};

use crate::config::CommentConfig;
use crate::models::gallery::entities::GuestCommentStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentLimitViolation {
    /// 距上一条评论不足冷却时间，附带剩余秒数
    Cooldown { retry_after: i64 },
    PerImage { limit: u64 },
    Daily { limit: u64 },
}

impl CommentLimitViolation {
    pub fn message(&self) -> String {
        match self {
            Self::Cooldown { retry_after } => {
                format!("Please wait {retry_after} seconds before commenting again")
            }
            Self::PerImage { limit } => {
                format!("You can post at most {limit} comments on this image")
            }
            Self::Daily { limit } => format!("You can post at most {limit} comments per day"),
        }
    }

    pub fn retry_after(&self) -> Option<i64> {
        match self {
            Self::Cooldown { retry_after } => Some(*retry_after),
            _ => None,
        }
    }
}

/// 当日 UTC 零点
pub fn utc_day_start(now: DateTime<Utc>) -> DateTime<Utc> {
    now.date_naive().and_time(NaiveTime::MIN).and_utc()
}

pub fn evaluate_comment_limits(
    stats: &GuestCommentStats,
    now: DateTime<Utc>,
    config: &CommentConfig,
) -> Result<(), CommentLimitViolation> {
    if let Some(last) = stats.last_comment_at {
        let elapsed = (now - last).num_seconds();
        if elapsed < config.cooldown_secs {
            return Err(CommentLimitViolation::Cooldown {
                retry_after: (config.cooldown_secs - elapsed.max(0)).max(1),
            });
        }
    }

    if stats.on_image >= config.per_image_limit {
        return Err(CommentLimitViolation::PerImage {
            limit: config.per_image_limit,
        });
    }

    if stats.today >= config.daily_limit {
        return Err(CommentLimitViolation::Daily {
            limit: config.daily_limit,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn config() -> CommentConfig {
        CommentConfig {
            cooldown_secs: 60,
            per_image_limit: 5,
            daily_limit: 20,
            auto_approve: false,
        }
    }

    fn stats(last_secs_ago: Option<i64>, on_image: u64, today: u64, now: DateTime<Utc>) -> GuestCommentStats {
        GuestCommentStats {
            last_comment_at: last_secs_ago.map(|s| now - Duration::seconds(s)),
            on_image,
            today,
        }
    }

    #[test]
    fn test_first_comment_allowed() {
        let now = Utc::now();
        assert_eq!(evaluate_comment_limits(&stats(None, 0, 0, now), now, &config()), Ok(()));
    }

    #[test]
    fn test_cooldown_boundary() {
        let now = Utc::now();
        let cfg = config();

        let err = evaluate_comment_limits(&stats(Some(59), 0, 1, now), now, &cfg).unwrap_err();
        assert_eq!(err, CommentLimitViolation::Cooldown { retry_after: 1 });

        let err = evaluate_comment_limits(&stats(Some(0), 0, 1, now), now, &cfg).unwrap_err();
        assert_eq!(err.retry_after(), Some(60));

        // 恰好 60 秒时放行
        assert!(evaluate_comment_limits(&stats(Some(60), 0, 1, now), now, &cfg).is_ok());
    }

    #[test]
    fn test_per_image_cap() {
        let now = Utc::now();
        let cfg = config();
        assert!(evaluate_comment_limits(&stats(Some(600), 4, 4, now), now, &cfg).is_ok());
        assert_eq!(
            evaluate_comment_limits(&stats(Some(600), 5, 5, now), now, &cfg),
            Err(CommentLimitViolation::PerImage { limit: 5 })
        );
    }

    #[test]
    fn test_daily_cap() {
        let now = Utc::now();
        let cfg = config();
        assert!(evaluate_comment_limits(&stats(Some(600), 0, 19, now), now, &cfg).is_ok());
        assert_eq!(
            evaluate_comment_limits(&stats(Some(600), 0, 20, now), now, &cfg),
            Err(CommentLimitViolation::Daily { limit: 20 })
        );
    }

    #[test]
    fn test_checks_run_in_order() {
        let now = Utc::now();
        let cfg = config();
        // 三条规则同时命中时报告冷却
        let err = evaluate_comment_limits(&stats(Some(10), 5, 20, now), now, &cfg).unwrap_err();
        assert!(matches!(err, CommentLimitViolation::Cooldown { .. }));
        // 单图与当日同时命中时报告单图
        let err = evaluate_comment_limits(&stats(Some(600), 5, 20, now), now, &cfg).unwrap_err();
        assert!(matches!(err, CommentLimitViolation::PerImage { .. }));
    }

    #[test]
    fn test_utc_day_start() {
        let now = Utc.with_ymd_and_hms(2025, 3, 14, 15, 9, 26).unwrap();
        assert_eq!(
            utc_day_start(now),
            Utc.with_ymd_and_hms(2025, 3, 14, 0, 0, 0).unwrap()
        );
    }
}
