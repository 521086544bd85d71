//! 派生状态计算：优先级分档与到期状态
//!
//! 两个计算都是 (score, due_date, today) 的纯函数，
//! 通过注入固定的 `today` 即可单测。

use chrono::NaiveDate;
use std::fmt;

/// 优先级分档（由得分决定），边界值归入更高档
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityBand {
    Critical,
    High,
    Medium,
    Low,
}

impl PriorityBand {
    /// score >= 150 critical；>= 100 high；>= 50 medium；其余 low。
    /// 缺失的得分在调用方按 0 处理。
    pub fn from_score(score: f64) -> Self {
        if score >= 150.0 {
            PriorityBand::Critical
        } else if score >= 100.0 {
            PriorityBand::High
        } else if score >= 50.0 {
            PriorityBand::Medium
        } else {
            PriorityBand::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriorityBand::Critical => "critical",
            PriorityBand::High => "high",
            PriorityBand::Medium => "medium",
            PriorityBand::Low => "low",
        }
    }
}

/// 到期状态。无法解析的日期有独立的档位，绝不折算成 `DueLater`。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DueStatus {
    /// 已逾期，days 为逾期天数（正值）
    Overdue { days: i64 },
    DueToday,
    /// 1-3 天内到期
    DueSoon { days: i64 },
    /// 3 天以上
    DueLater { days: i64 },
    InvalidDate,
}

impl fmt::Display for DueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DueStatus::Overdue { days } => write!(f, "OVERDUE ({} days)", days),
            DueStatus::DueToday => write!(f, "Due TODAY"),
            DueStatus::DueSoon { days } => write!(f, "Due in {} day(s)", days),
            DueStatus::DueLater { days } => write!(f, "Due in {} days", days),
            DueStatus::InvalidDate => write!(f, "Invalid due date"),
        }
    }
}

/// 解析 ISO 日期字符串（YYYY-MM-DD），失败返回 None
pub fn parse_due_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// 计算到期状态。
///
/// 天数差按日历日整天计算（日期减日期），剩余不足一天的任务
/// 仍算作今天到期，永远不会被提前判为逾期。
pub fn due_status(due_date: Option<&str>, today: NaiveDate) -> DueStatus {
    let Some(raw) = due_date else {
        return DueStatus::InvalidDate;
    };
    let Some(due) = parse_due_date(raw) else {
        return DueStatus::InvalidDate;
    };

    let days = (due - today).num_days();
    if days < 0 {
        DueStatus::Overdue { days: -days }
    } else if days == 0 {
        DueStatus::DueToday
    } else if days <= 3 {
        DueStatus::DueSoon { days }
    } else {
        DueStatus::DueLater { days }
    }
}
