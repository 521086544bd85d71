mod client;
pub mod types;

use crate::api::client::check_status;
use crate::api::types::{AnalyzeRequest, AnalyzeResponse, SaveRequest, SaveResponse, SuggestResponse};
use crate::config::ApiConfig;
use crate::error::{ApiError, Result};
use crate::model::Task;
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use tracing::debug;

/// 远端任务服务的调用接口。
/// 控制器只依赖这个 trait，测试时注入 Mock 实现即可做到零网络。
#[async_trait]
pub trait TaskApi: Send + Sync {
    /// `GET list/`，返回已持久化的任务
    async fn list(&self) -> Result<Vec<Task>>;
    /// `POST analyze/`，提交任务并取回评分结果
    async fn analyze(&self, tasks: Vec<Task>) -> Result<AnalyzeResponse>;
    /// `GET suggest/`，取回今日建议
    async fn suggest(&self) -> Result<SuggestResponse>;
    /// `POST save-analysis/`，持久化分析结果（调用方已剔除 score）
    async fn save_analysis(&self, tasks: Vec<Task>) -> Result<SaveResponse>;
    /// `DELETE delete/{id}/`，响应体被忽略
    async fn delete(&self, id: i64) -> Result<()>;
}

/// 基于 reqwest 的默认实现
pub struct HttpTaskApi {
    client: Arc<Client>,
    base_url: String,
}

impl HttpTaskApi {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self::with_client(Arc::new(client), config.base_url.clone()))
    }

    pub fn with_client(client: Arc<Client>, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[async_trait]
impl TaskApi for HttpTaskApi {
    async fn list(&self) -> Result<Vec<Task>> {
        let response = self.client.get(self.url("list/")).send().await?;
        let response = check_status(response).await?;
        let tasks = response
            .json::<Vec<Task>>()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))?;
        debug!(count = tasks.len(), "listed persisted tasks");
        Ok(tasks)
    }

    async fn analyze(&self, tasks: Vec<Task>) -> Result<AnalyzeResponse> {
        let body = AnalyzeRequest { tasks };
        let response = self
            .client
            .post(self.url("analyze/"))
            .json(&body)
            .send()
            .await?;
        let response = check_status(response).await?;
        response
            .json::<AnalyzeResponse>()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()).into())
    }

    async fn suggest(&self) -> Result<SuggestResponse> {
        let response = self.client.get(self.url("suggest/")).send().await?;
        let response = check_status(response).await?;
        response
            .json::<SuggestResponse>()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()).into())
    }

    async fn save_analysis(&self, tasks: Vec<Task>) -> Result<SaveResponse> {
        let body = SaveRequest { tasks };
        let response = self
            .client
            .post(self.url("save-analysis/"))
            .json(&body)
            .send()
            .await?;
        let response = check_status(response).await?;
        response
            .json::<SaveResponse>()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()).into())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("delete/{}/", id)))
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::client::error_message_from_body;
    use super::*;

    #[test]
    fn error_message_prefers_error_field() {
        let body = r#"{"error": "Tasks list is empty. Please provide at least one task."}"#;
        assert_eq!(
            error_message_from_body(400, body),
            "Tasks list is empty. Please provide at least one task."
        );
    }

    #[test]
    fn error_message_falls_back_on_unparseable_body() {
        assert_eq!(
            error_message_from_body(502, "<html>Bad Gateway</html>"),
            "HTTP error! status: 502"
        );
        assert_eq!(error_message_from_body(500, ""), "HTTP error! status: 500");
        // JSON 合法但没有 error 字段时同样回退
        assert_eq!(
            error_message_from_body(404, r#"{"detail": "gone"}"#),
            "HTTP error! status: 404"
        );
    }

    #[test]
    fn url_joins_without_double_slash() {
        let api = HttpTaskApi::with_client(
            Arc::new(Client::new()),
            "http://127.0.0.1:8000/api/tasks",
        );
        assert_eq!(api.url("list/"), "http://127.0.0.1:8000/api/tasks/list/");
        assert_eq!(
            api.url(&format!("delete/{}/", 7)),
            "http://127.0.0.1:8000/api/tasks/delete/7/"
        );
    }
}
