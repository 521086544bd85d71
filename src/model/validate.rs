//! 宽松校验：产出可恢复的警告，从不拒绝任务
//!
//! 正确性的最终责任在评分服务和使用者；这里只把可疑字段显式报出来，
//! 让调用方决定是否提示。

use crate::model::Task;
use crate::pipeline::parse_due_date;
use std::fmt;

/// 单条字段警告，`index` 为任务在输入序列中的 0 起始下标
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationWarning {
    BlankTitle { index: usize },
    ImportanceOutOfRange { index: usize, value: i64 },
    NegativeHours { index: usize, value: f64 },
    UnparseableDueDate { index: usize, value: String },
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationWarning::BlankTitle { index } => {
                write!(f, "Task {}: title is blank", index + 1)
            }
            ValidationWarning::ImportanceOutOfRange { index, value } => {
                write!(
                    f,
                    "Task {}: importance {} is outside the 1-10 range",
                    index + 1,
                    value
                )
            }
            ValidationWarning::NegativeHours { index, value } => {
                write!(
                    f,
                    "Task {}: estimated_hours {} is negative",
                    index + 1,
                    value
                )
            }
            ValidationWarning::UnparseableDueDate { index, value } => {
                write!(
                    f,
                    "Task {}: due_date '{}' is not a valid date",
                    index + 1,
                    value
                )
            }
        }
    }
}

/// 检查任务序列，返回全部警告。纯函数，不修改输入，也不会失败。
pub fn validate_tasks(tasks: &[Task]) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    for (index, task) in tasks.iter().enumerate() {
        if let Some(title) = &task.title {
            if title.trim().is_empty() {
                warnings.push(ValidationWarning::BlankTitle { index });
            }
        }
        if let Some(importance) = task.importance {
            if !(1..=10).contains(&importance) {
                warnings.push(ValidationWarning::ImportanceOutOfRange {
                    index,
                    value: importance,
                });
            }
        }
        if let Some(hours) = task.estimated_hours {
            if hours < 0.0 {
                warnings.push(ValidationWarning::NegativeHours {
                    index,
                    value: hours,
                });
            }
        }
        if let Some(due) = &task.due_date {
            if parse_due_date(due).is_none() {
                warnings.push(ValidationWarning::UnparseableDueDate {
                    index,
                    value: due.clone(),
                });
            }
        }
    }

    warnings
}
