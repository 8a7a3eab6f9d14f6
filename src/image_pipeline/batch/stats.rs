use std::time::Duration;

use crate::image_pipeline::conversions::hdr_convert::ConversionRecord;

/// Terminal result of one job, reported exactly once.
#[derive(Debug, Clone)]
pub enum JobStatus {
    Succeeded {
        width: usize,
        height: usize,
        input_bytes: u64,
        output_bytes: u64,
    },
    Failed {
        kind: &'static str,
        message: String,
    },
}

#[derive(Debug, Clone)]
pub struct JobOutcome {
    /// Position in the lexicographic input ordering; the reporter sorts
    /// outcomes back on this so output is deterministic regardless of
    /// worker scheduling.
    pub index: usize,
    pub file_name: String,
    pub status: JobStatus,
}

/// Aggregate counters for one batch run. Appended to by the orchestrator
/// under a mutex; read once at the end by the reporter.
#[derive(Debug, Default)]
pub struct BatchStats {
    pub attempted: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub input_bytes: u64,
    pub output_bytes: u64,
    /// Sum of decode + tone-map + resample time across files.
    pub load_time: Duration,
    /// Sum of encode time across files.
    pub save_time: Duration,
    pub elapsed: Duration,
    pub outcomes: Vec<JobOutcome>,
}

impl BatchStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_success(&mut self, index: usize, file_name: String, record: &ConversionRecord) {
        self.attempted += 1;
        self.succeeded += 1;
        self.input_bytes += record.input_bytes;
        self.output_bytes += record.output_bytes;
        for step in ["decode", "tonemap", "resample"] {
            self.load_time += record.timings.get_step(step).unwrap_or(Duration::ZERO);
        }
        self.save_time += record.timings.get_step("encode").unwrap_or(Duration::ZERO);
        self.outcomes.push(JobOutcome {
            index,
            file_name,
            status: JobStatus::Succeeded {
                width: record.width,
                height: record.height,
                input_bytes: record.input_bytes,
                output_bytes: record.output_bytes,
            },
        });
    }

    pub fn record_failure(
        &mut self,
        index: usize,
        file_name: String,
        kind: &'static str,
        message: String,
    ) {
        self.attempted += 1;
        self.failed += 1;
        self.outcomes.push(JobOutcome {
            index,
            file_name,
            status: JobStatus::Failed { kind, message },
        });
    }

    /// Restore input-list ordering after the workers race to completion.
    pub fn sort_outcomes(&mut self) {
        self.outcomes.sort_by_key(|o| o.index);
    }
}
