pub mod jobs;
pub mod orchestrator;
pub mod report;
pub mod stats;


pub use jobs::{ConversionJob, build_jobs};
pub use orchestrator::run_batch;
pub use report::write_report;
pub use stats::{BatchStats, JobOutcome, JobStatus};
