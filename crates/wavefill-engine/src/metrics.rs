//! Per-step metrics for the flood-fill engine.

/// Counters and timing collected during a single `step()` call.
///
/// The engine populates these after every call, including no-op calls
/// after exhaustion. The most recent value is kept on the engine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Cells that entered the frontier this step.
    pub newly_visited: usize,
    /// Frontier length after the step.
    pub frontier_len: usize,
    /// Cells visited since construction or the last reset, start included.
    pub total_visited: usize,
    /// Wall-clock time for the step, in microseconds.
    pub elapsed_us: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = StepMetrics::default();
        assert_eq!(m.newly_visited, 0);
        assert_eq!(m.frontier_len, 0);
        assert_eq!(m.total_visited, 0);
        assert_eq!(m.elapsed_us, 0);
    }
}
