mod input;
mod task;
mod validate;

pub use input::{parse_dependency_list, parse_task_input};
pub use task::Task;
pub use validate::{ValidationWarning, validate_tasks};
