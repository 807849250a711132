use std::time::{Duration, Instant};

/// Figures for the current run, kept in memory only
#[derive(Debug, Clone)]
pub struct SessionMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub ticks: u64,
    pub longest: usize,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            ticks: 0,
            longest: 1,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    pub fn on_game_start(&mut self) {
        *self = Self::new();
    }

    /// Count a tick; `length` is the snake's target length afterwards
    pub fn on_tick(&mut self, length: usize) {
        self.ticks += 1;
        self.longest = self.longest.max(length);
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut metrics = SessionMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.elapsed_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_tick_tracking() {
        let mut metrics = SessionMetrics::new();

        metrics.on_tick(2);
        metrics.on_tick(3);
        assert_eq!(metrics.longest, 3);

        // Falling back to length 1 after a reset keeps the record
        metrics.on_tick(1);
        assert_eq!(metrics.longest, 3);
        assert_eq!(metrics.ticks, 3);
    }

    #[test]
    fn test_game_start_clears_counts() {
        let mut metrics = SessionMetrics::new();
        metrics.on_tick(4);
        metrics.on_game_start();
        assert_eq!(metrics.ticks, 0);
        assert_eq!(metrics.longest, 1);
    }
}
