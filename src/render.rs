//! 终端渲染：任务卡片与建议列表
//!
//! 纯字符串拼装，不触碰网络和状态。

use crate::api::types::SuggestResponse;
use crate::model::Task;
use crate::pipeline::{PriorityBand, due_status};
use chrono::NaiveDate;
use std::fmt::Write;

/// 渲染单张任务卡片（排名从 1 开始）
pub fn task_card(task: &Task, rank: usize, today: NaiveDate) -> String {
    let score = task.score_or_zero();
    let band = PriorityBand::from_score(score);
    let due = due_status(task.due_date.as_deref(), today);

    let effort = task
        .estimated_hours
        .map(|h| format!("{}h", h))
        .unwrap_or_else(|| "-".to_string());
    let importance = task
        .importance
        .map(|i| format!("{}/10", i))
        .unwrap_or_else(|| "-".to_string());

    let mut card = String::new();
    let _ = writeln!(
        card,
        "#{} {} [{}] score {}",
        rank,
        task.display_title(),
        band.label(),
        score.round()
    );
    let _ = writeln!(
        card,
        "    Effort: {} | Importance: {} | Status: {}",
        effort, importance, due
    );
    if !task.dependencies.is_empty() {
        let deps: Vec<String> = task.dependencies.iter().map(|d| d.to_string()).collect();
        let _ = writeln!(card, "    Dependencies: {}", deps.join(", "));
    }
    card
}

/// 渲染整个结果区
pub fn results(tasks: &[Task], today: NaiveDate) -> String {
    if tasks.is_empty() {
        return "No tasks to display\n".to_string();
    }

    let mut out = format!("{} tasks\n\n", tasks.len());
    for (idx, task) in tasks.iter().enumerate() {
        out.push_str(&task_card(task, idx + 1, today));
    }
    out
}

/// 渲染今日建议
pub fn suggestions(response: &SuggestResponse) -> String {
    if response.top_tasks.is_empty() {
        return "No tasks found for today.\n".to_string();
    }

    let mut out = format!("{} recommendations\n\n", response.count);
    for (idx, suggestion) in response.top_tasks.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", idx + 1, suggestion.title);
        let _ = writeln!(out, "   {}", suggestion.explanation);
        let importance = suggestion
            .importance
            .map(|i| format!("{}/10", i))
            .unwrap_or_else(|| "-".to_string());
        let effort = suggestion
            .estimated_hours
            .map(|h| format!("{}h", h))
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "   Priority Score: {} | Importance: {} | Effort: {}",
            suggestion.priority_score, importance, effort
        );
    }
    out
}

/// 错误横幅：消息加一行"修好再试"的占位提示，结果区视为已清空
pub fn error_banner(message: &str) -> String {
    format!("{}\nFix the error and try again\n", message)
}
