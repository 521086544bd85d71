//! 输入边界：把用户粘贴的 JSON 文本解析为任务序列
//!
//! 只做形状校验（顶层必须是对象数组），字段内容不在这里校验。

use crate::error::{InputError, Result};
use crate::model::Task;
use serde_json::Value;

/// 解析用户输入的 JSON 文本。
///
/// 失败路径全部是本地可恢复的 [`InputError`]，不会触发网络请求，
/// 也不会产生部分结果。
pub fn parse_task_input(input: &str) -> Result<Vec<Task>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty.into());
    }

    let value: Value =
        serde_json::from_str(trimmed).map_err(|e| InputError::InvalidJson(e.to_string()))?;

    let items = value.as_array().ok_or(InputError::NotAnArray)?;

    let mut tasks = Vec::with_capacity(items.len());
    for (idx, item) in items.iter().enumerate() {
        if !item.is_object() {
            return Err(InputError::NotAnObject(idx).into());
        }
        let task: Task = serde_json::from_value(item.clone())
            .map_err(|e| InputError::InvalidJson(format!("task {}: {}", idx + 1, e)))?;
        tasks.push(task);
    }

    Ok(tasks)
}

/// 把手工录入的依赖字符串（逗号分隔的 id）解析成 id 列表，
/// 无法解析为整数的片段直接忽略。
pub fn parse_dependency_list(input: &str) -> Vec<i64> {
    input
        .split(',')
        .filter_map(|part| part.trim().parse::<i64>().ok())
        .collect()
}
