//! 排序策略引擎

use crate::model::Task;
use crate::pipeline::status::parse_due_date;
use chrono::NaiveDate;
use std::cmp::Ordering;

/// 排序策略，由单一离散值选择
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortStrategy {
    /// 按截止日期升序（最早的在前）
    Deadline,
    /// 按预估工时升序（最短的在前）
    QuickWins,
    /// 按重要度降序（最高的在前）
    Importance,
    /// 按优先级序号升序（数值越小越紧急）
    Priority,
    /// 按得分降序（最高的在前），缺失得分按 0
    #[default]
    Score,
}

impl SortStrategy {
    /// 解析策略 id。未知 id 不报错，回退到默认的按得分降序。
    pub fn parse(id: &str) -> Self {
        match id {
            "deadline" => SortStrategy::Deadline,
            "quickWins" => SortStrategy::QuickWins,
            "importance" => SortStrategy::Importance,
            "priority" => SortStrategy::Priority,
            _ => SortStrategy::Score,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            SortStrategy::Deadline => "deadline",
            SortStrategy::QuickWins => "quickWins",
            SortStrategy::Importance => "importance",
            SortStrategy::Priority => "priority",
            SortStrategy::Score => "score",
        }
    }
}

/// 按策略重排任务集合，返回新序列，不修改输入。
///
/// 底层使用稳定排序，同键任务保持输入相对顺序。
/// 无法比较的值（无法解析的日期、缺失的工时 / 重要度 / 优先级）
/// 统一排在末尾，保证结果可复现。
pub fn sort_tasks(tasks: &[Task], strategy: SortStrategy) -> Vec<Task> {
    let mut sorted = tasks.to_vec();

    match strategy {
        SortStrategy::Deadline => {
            sorted.sort_by(|a, b| {
                let da = a.due_date.as_deref().and_then(parse_due_date);
                let db = b.due_date.as_deref().and_then(parse_due_date);
                cmp_dates_missing_last(da, db)
            });
        }
        SortStrategy::QuickWins => {
            sorted.sort_by(|a, b| {
                cmp_f64_missing_last(a.estimated_hours, b.estimated_hours)
            });
        }
        SortStrategy::Importance => {
            sorted.sort_by(|a, b| match (a.importance, b.importance) {
                (Some(ia), Some(ib)) => ib.cmp(&ia),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            });
        }
        SortStrategy::Priority => {
            sorted.sort_by(|a, b| cmp_f64_missing_last(a.priority, b.priority));
        }
        SortStrategy::Score => {
            sorted.sort_by(|a, b| b.score_or_zero().total_cmp(&a.score_or_zero()));
        }
    }

    sorted
}

fn cmp_dates_missing_last(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (Some(da), Some(db)) => da.cmp(&db),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn cmp_f64_missing_last(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(fa), Some(fb)) => fa.total_cmp(&fb),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
