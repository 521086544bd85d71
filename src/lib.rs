pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod render;
pub mod testing;

pub mod prelude {
    pub use crate::api::{HttpTaskApi, TaskApi};
    pub use crate::controller::{AnalyzeOutcome, Dashboard};
    pub use crate::error::Result;
    pub use crate::model::Task;
    pub use crate::pipeline::{DueStatus, PriorityBand, SortStrategy};
}
