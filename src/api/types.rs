//! 远端任务服务的请求 / 响应类型

use crate::model::Task;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct AnalyzeRequest {
    pub tasks: Vec<Task>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeResponse {
    #[serde(default)]
    pub count: usize,
    /// 评分后的任务列表，每项都带 score
    pub tasks: Vec<Task>,
}

#[derive(Debug, Deserialize)]
pub struct SuggestResponse {
    pub count: usize,
    #[serde(default)]
    pub top_tasks: Vec<Suggestion>,
}

/// 单条"今日建议"
#[derive(Debug, Clone, Deserialize)]
pub struct Suggestion {
    pub title: String,
    pub explanation: String,
    pub priority_score: f64,
    #[serde(default)]
    pub importance: Option<i64>,
    #[serde(default)]
    pub estimated_hours: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct SaveRequest {
    pub tasks: Vec<Task>,
}

#[derive(Debug, Deserialize)]
pub struct SaveResponse {
    pub saved: usize,
    #[serde(default)]
    pub failed: usize,
}
