//! Logging helpers for research-loop execution.

use crate::graph::StepOutcome;

/// Log a step (one reasoning invocation) starting.
pub fn log_step_start(step: &str, iteration: u32) {
    tracing::debug!(step, iteration, "Starting step");
}

pub fn log_step_complete(step: &str, iteration: u32, tool_requests: usize) {
    tracing::debug!(step, iteration, tool_requests, "Step complete");
}

pub fn log_route(step: &str, outcome: &StepOutcome) {
    tracing::debug!(step, ?outcome, "Routed");
}

pub fn log_run_start(company: &str) {
    tracing::info!(company, "Starting research run");
}

pub fn log_run_complete(iterations: u32, reason: &str) {
    tracing::info!(iterations, reason, "Research run complete");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_functions() {
        log_step_start("researcher", 1);
        log_step_complete("researcher", 1, 2);
        log_route("researcher", &StepOutcome::Terminate);
        log_run_start("Acme");
        log_run_complete(3, "sentinel");
    }
}
