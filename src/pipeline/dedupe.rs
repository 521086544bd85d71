//! 提交前去重
//!
//! 去重键 = (标题小写去空白, due_date 原文, importance, estimated_hours,
//! dependencies 的 JSON 序列化)，与 `id` / `score` 无关。
//! 依赖列表的顺序参与键的构造：同一依赖集合的不同排列被视为不同任务。

use crate::model::Task;
use std::collections::HashSet;

/// 字段分隔符，选用不易出现在字段内容里的序列
const KEY_SEPARATOR: &str = "||";

fn dedupe_key(task: &Task) -> String {
    let title = task
        .title
        .as_deref()
        .unwrap_or("")
        .trim()
        .to_lowercase();
    let due_date = task.due_date.as_deref().unwrap_or("");
    let importance = task
        .importance
        .map(|v| v.to_string())
        .unwrap_or_default();
    let hours = task
        .estimated_hours
        .map(|v| v.to_string())
        .unwrap_or_default();
    let dependencies =
        serde_json::to_string(&task.dependencies).unwrap_or_else(|_| "[]".to_string());

    [
        title.as_str(),
        due_date,
        importance.as_str(),
        hours.as_str(),
        dependencies.as_str(),
    ]
    .join(KEY_SEPARATOR)
}

/// 稳定去重：保留每个键的首次出现，丢弃之后的重复项。
///
/// 纯函数，不修改输入，O(n) 时间 / O(n) 辅助空间。
pub fn dedupe(tasks: &[Task]) -> Vec<Task> {
    let mut seen = HashSet::with_capacity(tasks.len());
    let mut result = Vec::with_capacity(tasks.len());

    for task in tasks {
        if seen.insert(dedupe_key(task)) {
            result.push(task.clone());
        }
    }

    result
}
