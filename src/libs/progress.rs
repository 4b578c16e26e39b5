//! Two-slice completion chart for the progress view.
//!
//! A terminal stand-in for the original doughnut renderer: the done and
//! pending slices become proportional runs of block characters. The value is
//! owned by the dashboard, which drops the previous instance before building
//! a replacement, so at most one chart is alive per render pass.

const CHART_WIDTH: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressChart {
    pub done: usize,
    pub pending: usize,
}

impl ProgressChart {
    pub fn new(done: usize, pending: usize) -> Self {
        ProgressChart { done, pending }
    }

    pub fn total(&self) -> usize {
        self.done + self.pending
    }

    pub fn render(&self) -> String {
        let total = self.total();
        if total == 0 {
            return format!("[{}] nothing tracked yet", "░".repeat(CHART_WIDTH));
        }
        // Rounded share of the done slice
        let filled = (self.done * CHART_WIDTH + total / 2) / total;
        format!(
            "[{}{}] done {} / pending {}",
            "█".repeat(filled),
            "░".repeat(CHART_WIDTH - filled),
            self.done,
            self.pending
        )
    }
}
