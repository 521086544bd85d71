//! 任务记录定义

use serde::{Deserialize, Serialize};

/// 放入分析管线的任务记录。
///
/// 除 `dependencies` 外的所有字段都允许缺失，缺失字段在序列化时省略。
/// 字段级校验刻意宽松：空标题、负工时、超范围重要度都原样通过，
/// 由 [`validate_tasks`](crate::model::validate_tasks) 产出可恢复的警告。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Task {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// ISO 日期字符串，可能缺失或无法解析，所有消费方都必须优雅降级
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    /// 重要度，预期范围 1-10，上游不保证
    #[serde(skip_serializing_if = "Option::is_none")]
    pub importance: Option<i64>,
    /// 预估工时（小时）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<f64>,
    /// 依赖的任务 id 列表，顺序保留；不做引用完整性检查
    #[serde(default)]
    pub dependencies: Vec<i64>,
    /// 仅已持久化的任务携带 id；id 缺失是"新任务"的唯一标记，一经赋值不再改动
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// 已保存标记（服务端回写），保存过滤时与 id 一起参与判断
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved: Option<bool>,
    /// 优先级得分，由远端评分服务填充；新任务上缺失，按 0 处理
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    /// 备选排序视图使用的优先级序号（数值越小越紧急）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority_score: Option<f64>,
}

impl Task {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    pub fn with_importance(mut self, importance: i64) -> Self {
        self.importance = Some(importance);
        self
    }

    pub fn with_estimated_hours(mut self, hours: f64) -> Self {
        self.estimated_hours = Some(hours);
        self
    }

    pub fn with_dependencies(mut self, deps: Vec<i64>) -> Self {
        self.dependencies = deps;
        self
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    /// 是否尚未持久化（没有 id 且没有已保存标记）
    pub fn is_unsaved(&self) -> bool {
        self.id.is_none() && self.saved != Some(true)
    }

    /// 展示用标题，缺失时使用占位文本
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(t) if !t.is_empty() => t,
            _ => "Untitled Task",
        }
    }

    /// 评分服务尚未填充时按 0 处理
    pub fn score_or_zero(&self) -> f64 {
        self.score.unwrap_or(0.0)
    }
}
