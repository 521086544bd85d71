//! 看板视图模型
//!
//! 权威数据是这里持有的内存任务集合；JSON 文本只是它的派生序列化，
//! 不再作为数据源。所有网络往返都带上请求代数，过期代数的完成结果
//! 一律丢弃，后发请求不会被先发请求的迟到响应覆盖。

use crate::api::TaskApi;
use crate::api::types::SuggestResponse;
use crate::error::Result;
use crate::model::{Task, parse_dependency_list};
use crate::pipeline::{SortStrategy, dedupe, sort_tasks};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info, warn};

/// 一次分析流程的结果
#[derive(Debug, PartialEq, Eq)]
pub enum AnalyzeOutcome {
    /// 结果已采纳；count 为展示的任务数，saved 为本次持久化的新任务数
    Applied { count: usize, saved: usize },
    /// 响应到达时已有更新的请求，结果被丢弃
    Stale,
}

/// 看板控制器，持有权威的内存任务集合
pub struct Dashboard {
    api: Arc<dyn TaskApi>,
    tasks: Vec<Task>,
    strategy: SortStrategy,
    /// 单调递增的请求代数
    generation: AtomicU64,
}

impl Dashboard {
    pub fn new(api: Arc<dyn TaskApi>) -> Self {
        Self {
            api,
            tasks: Vec::new(),
            strategy: SortStrategy::default(),
            generation: AtomicU64::new(0),
        }
    }

    pub fn with_tasks(mut self, tasks: Vec<Task>) -> Self {
        self.tasks = tasks;
        self
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn strategy(&self) -> SortStrategy {
        self.strategy
    }

    pub fn set_strategy(&mut self, strategy: SortStrategy) {
        self.strategy = strategy;
    }

    /// 任务集合的 JSON 文本形式（派生视图，供编辑 / 展示）
    pub fn tasks_json(&self) -> String {
        serde_json::to_string_pretty(&self.tasks).unwrap_or_else(|_| "[]".to_string())
    }

    fn begin_request(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    /// 只有最新代数的结果才会被采纳
    fn adopt(&mut self, generation: u64, tasks: Vec<Task>) -> bool {
        if !self.is_current(generation) {
            warn!(generation, "discarding stale response");
            return false;
        }
        self.tasks = tasks;
        true
    }

    /// 从服务端加载已持久化的任务
    pub async fn load(&mut self) -> Result<usize> {
        let generation = self.begin_request();
        let tasks = self.api.list().await?;
        if self.adopt(generation, tasks) {
            info!(count = self.tasks.len(), "loaded tasks from database");
        }
        Ok(self.tasks.len())
    }

    /// 分析流程的本地前半段：登记请求代数并去重
    pub fn begin_analyze(&self, input: &[Task]) -> (u64, Vec<Task>) {
        let generation = self.begin_request();
        let deduped = dedupe(input);
        if deduped.len() != input.len() {
            debug!("Deduplicated tasks: {} -> {}", input.len(), deduped.len());
        }
        (generation, deduped)
    }

    /// 分析流程的本地后半段：按当前策略排序并采纳（过期代数返回 false）
    pub fn apply_analysis(&mut self, generation: u64, scored: Vec<Task>) -> bool {
        let sorted = sort_tasks(&scored, self.strategy);
        self.adopt(generation, sorted)
    }

    /// 完整分析流程：去重 → 远端评分 → 排序采纳 → 持久化新任务。
    /// 持久化失败不影响结果（见 [`save_new_tasks`](Self::save_new_tasks)）。
    pub async fn analyze(&mut self, input: &[Task]) -> Result<AnalyzeOutcome> {
        let (generation, deduped) = self.begin_analyze(input);
        let response = self.api.analyze(deduped).await?;
        if !self.apply_analysis(generation, response.tasks) {
            return Ok(AnalyzeOutcome::Stale);
        }

        let saved = self.save_new_tasks().await;
        Ok(AnalyzeOutcome::Applied {
            count: self.tasks.len(),
            saved,
        })
    }

    /// 持久化尚未保存的任务（没有 id 且没有 saved 标记），payload 中剔除 score。
    /// 失败只记日志：分析结果本身依然有效，不向调用方报错。
    async fn save_new_tasks(&self) -> usize {
        let unsaved: Vec<Task> = self
            .tasks
            .iter()
            .filter(|t| t.is_unsaved())
            .map(|t| strip_score(t.clone()))
            .collect();

        if unsaved.is_empty() {
            debug!("no new tasks to save");
            return 0;
        }

        match self.api.save_analysis(unsaved).await {
            Ok(response) => {
                info!(saved = response.saved, "saved analysis results");
                response.saved
            }
            Err(e) => {
                warn!("save after analyze failed (non-critical): {}", e);
                0
            }
        }
    }

    /// 请求今日建议。不改动任务集合，结果直接交给展示层。
    pub async fn suggest(&self) -> Result<SuggestResponse> {
        let response = self.api.suggest().await?;
        info!(count = response.count, "received suggestions");
        Ok(response)
    }

    /// 删除远端任务并从服务端刷新视图
    pub async fn delete(&mut self, id: i64) -> Result<usize> {
        self.api.delete(id).await?;
        info!(id, "task deleted");
        self.load().await
    }

    /// 手工录入一条任务。缺省重要度 5、工时 1；
    /// 依赖为逗号分隔的 id 串，无法解析的片段忽略。返回新的任务总数。
    pub fn add_task(
        &mut self,
        title: &str,
        due_date: &str,
        importance: Option<i64>,
        estimated_hours: Option<f64>,
        dependencies: &str,
    ) -> usize {
        let task = Task::new(title)
            .with_due_date(due_date)
            .with_importance(importance.unwrap_or(5))
            .with_estimated_hours(estimated_hours.unwrap_or(1.0))
            .with_dependencies(parse_dependency_list(dependencies));

        self.tasks.push(task);
        self.tasks.len()
    }
}

fn strip_score(mut task: Task) -> Task {
    task.score = None;
    task
}
