//! 测试基础设施
//!
//! 提供在不依赖真实任务服务的情况下测试各组件的工具集。
//!
//! | 类型 | 用途 |
//! |------|------|
//! | [`MockTaskApi`] | 替代真实任务服务，用于测试 [`Dashboard`](crate::controller::Dashboard) 的各条流程 |
//!
//! # 设计原则
//!
//! - **零网络请求**：Mock 完全在内存中运行
//! - **可脚本化**：通过 `with_*()` 方法精确控制每个端点的返回值
//! - **可观测**：通过 `analyze_calls()` / `save_calls()` 等方法检查调用情况

mod mock_api;

pub use mock_api::MockTaskApi;
