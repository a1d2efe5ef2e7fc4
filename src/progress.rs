use std::time::{Duration, Instant};
use tracing::info;

#[derive(Debug, Clone)]
pub struct ProgressReporter {
    rows_total: usize,
    rows_processed: usize,
    log_interval: usize,
    start_time: Instant,
}

impl ProgressReporter {
    pub fn new(rows_total: usize, log_interval: usize) -> Self {
        Self {
            rows_total,
            rows_processed: 0,
            log_interval: log_interval.max(1),
            start_time: Instant::now(),
        }
    }

    // rows_processed is 1-based; the last row is always reported
    pub fn update(&mut self, rows_processed: usize) {
        self.rows_processed = rows_processed;

        if self.should_report(rows_processed) {
            let eta_secs = self
                .estimated_time_remaining()
                .map(|d| d.as_secs())
                .unwrap_or(0);
            info!(
                row = rows_processed,
                total = self.rows_total,
                eta_secs,
                "Progress: {}/{} ({:.1}%)",
                rows_processed,
                self.rows_total,
                self.progress() * 100.0
            );
        }
    }

    fn should_report(&self, row: usize) -> bool {
        row % self.log_interval == 0 || row == self.rows_total
    }

    pub fn progress(&self) -> f32 {
        if self.rows_total > 0 {
            self.rows_processed as f32 / self.rows_total as f32
        } else {
            0.0
        }
    }

    pub fn rows_processed(&self) -> usize {
        self.rows_processed
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn estimated_time_remaining(&self) -> Option<Duration> {
        if self.rows_processed == 0 {
            return None;
        }
        let per_row = self.elapsed().as_secs_f64() / self.rows_processed as f64;
        let remaining = self.rows_total.saturating_sub(self.rows_processed);
        Some(Duration::from_secs_f64(per_row * remaining as f64))
    }
}
