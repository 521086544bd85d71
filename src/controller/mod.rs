mod dashboard;

pub use dashboard::{AnalyzeOutcome, Dashboard};
