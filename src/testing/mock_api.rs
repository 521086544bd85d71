//! Mock 任务服务，用于在不发起真实 HTTP 请求的情况下测试控制器。
//!
//! 每个端点都有独立的预设响应队列，按顺序弹出；所有调用都被记录，
//! 可通过 `analyze_calls()` / `save_calls()` 等方法检查。
//!
//! 队列耗尽时的行为：
//! - `list` / `analyze` / `suggest`：返回错误（测试必须显式脚本化）
//! - `save_analysis`：返回 `saved = 任务数` 的成功响应
//! - `delete`：返回成功
//!
//! 后两者是分析流程里"即发即忘"的端点，默认成功能让多数测试
//! 不必为它们写脚本。

use crate::api::TaskApi;
use crate::api::types::{AnalyzeResponse, SaveResponse, SuggestResponse};
use crate::error::{Result, TriageError};
use crate::model::Task;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// 可脚本化的 Mock 任务服务
#[derive(Default)]
pub struct MockTaskApi {
    list_responses: Mutex<VecDeque<Result<Vec<Task>>>>,
    analyze_responses: Mutex<VecDeque<Result<AnalyzeResponse>>>,
    suggest_responses: Mutex<VecDeque<Result<SuggestResponse>>>,
    save_responses: Mutex<VecDeque<Result<SaveResponse>>>,
    delete_responses: Mutex<VecDeque<Result<()>>>,

    analyze_calls: Mutex<Vec<Vec<Task>>>,
    save_calls: Mutex<Vec<Vec<Task>>>,
    delete_calls: Mutex<Vec<i64>>,
    list_call_count: AtomicUsize,
    suggest_call_count: AtomicUsize,
}

impl MockTaskApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一条 `list` 成功响应
    pub fn with_list(self, tasks: Vec<Task>) -> Self {
        self.list_responses.lock().unwrap().push_back(Ok(tasks));
        self
    }

    pub fn with_list_error(self, err: TriageError) -> Self {
        self.list_responses.lock().unwrap().push_back(Err(err));
        self
    }

    /// 追加一条 `analyze` 成功响应（count 自动取任务数）
    pub fn with_scored(self, tasks: Vec<Task>) -> Self {
        let response = AnalyzeResponse {
            count: tasks.len(),
            tasks,
        };
        self.analyze_responses
            .lock()
            .unwrap()
            .push_back(Ok(response));
        self
    }

    pub fn with_analyze_error(self, err: TriageError) -> Self {
        self.analyze_responses.lock().unwrap().push_back(Err(err));
        self
    }

    pub fn with_suggestions(self, response: SuggestResponse) -> Self {
        self.suggest_responses
            .lock()
            .unwrap()
            .push_back(Ok(response));
        self
    }

    pub fn with_suggest_error(self, err: TriageError) -> Self {
        self.suggest_responses.lock().unwrap().push_back(Err(err));
        self
    }

    pub fn with_save(self, saved: usize) -> Self {
        self.save_responses
            .lock()
            .unwrap()
            .push_back(Ok(SaveResponse { saved, failed: 0 }));
        self
    }

    pub fn with_save_error(self, err: TriageError) -> Self {
        self.save_responses.lock().unwrap().push_back(Err(err));
        self
    }

    pub fn with_delete_error(self, err: TriageError) -> Self {
        self.delete_responses.lock().unwrap().push_back(Err(err));
        self
    }

    // ---- 调用记录 ----

    pub fn analyze_calls(&self) -> Vec<Vec<Task>> {
        self.analyze_calls.lock().unwrap().clone()
    }

    pub fn save_calls(&self) -> Vec<Vec<Task>> {
        self.save_calls.lock().unwrap().clone()
    }

    pub fn delete_calls(&self) -> Vec<i64> {
        self.delete_calls.lock().unwrap().clone()
    }

    pub fn list_call_count(&self) -> usize {
        self.list_call_count.load(Ordering::SeqCst)
    }

    pub fn suggest_call_count(&self) -> usize {
        self.suggest_call_count.load(Ordering::SeqCst)
    }

    fn exhausted(endpoint: &str) -> TriageError {
        TriageError::Other(format!(
            "MockTaskApi: no scripted response for {}",
            endpoint
        ))
    }
}

#[async_trait]
impl TaskApi for MockTaskApi {
    async fn list(&self) -> Result<Vec<Task>> {
        self.list_call_count.fetch_add(1, Ordering::SeqCst);
        self.list_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Self::exhausted("list")))
    }

    async fn analyze(&self, tasks: Vec<Task>) -> Result<AnalyzeResponse> {
        self.analyze_calls.lock().unwrap().push(tasks);
        self.analyze_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Self::exhausted("analyze")))
    }

    async fn suggest(&self) -> Result<SuggestResponse> {
        self.suggest_call_count.fetch_add(1, Ordering::SeqCst);
        self.suggest_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Self::exhausted("suggest")))
    }

    async fn save_analysis(&self, tasks: Vec<Task>) -> Result<SaveResponse> {
        let count = tasks.len();
        self.save_calls.lock().unwrap().push(tasks);
        self.save_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Ok(SaveResponse {
                    saved: count,
                    failed: 0,
                })
            })
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.delete_calls.lock().unwrap().push(id);
        self.delete_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(()))
    }
}
