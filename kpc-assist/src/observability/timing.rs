//! Span timing for engine operations.

use std::time::Instant;

/// Simple span timing helper.
#[derive(Debug)]
pub struct SpanTimer {
    start: Instant,
    name: String,
}

impl SpanTimer {
    /// Starts a new span timer.
    #[must_use]
    pub fn start(name: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            name: name.into(),
        }
    }

    /// Returns the elapsed time in milliseconds.
    #[must_use]
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    /// Returns the span name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Finishes the span and returns the duration.
    #[must_use]
    pub fn finish(self) -> f64 {
        self.elapsed_ms()
    }
}

/// A timed engine operation that logs its outcome when finished.
#[derive(Debug)]
pub struct OperationSpan {
    timer: SpanTimer,
    subject: String,
}

impl OperationSpan {
    /// Starts timing `operation` against `subject` (component name or query).
    #[must_use]
    pub fn start(operation: &str, subject: impl Into<String>) -> Self {
        Self {
            timer: SpanTimer::start(operation),
            subject: subject.into(),
        }
    }

    /// Logs the operation with the number of results it produced.
    pub fn finish(self, result_count: usize) -> f64 {
        let operation = self.timer.name().to_string();
        let duration_ms = self.timer.finish();
        tracing::debug!(
            operation = %operation,
            subject = %self.subject,
            result_count,
            duration_ms,
            "Operation finished"
        );
        duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_timer() {
        let timer = SpanTimer::start("test_span");
        std::thread::sleep(std::time::Duration::from_millis(10));
        assert_eq!(timer.name(), "test_span");
        let duration = timer.finish();
        assert!(duration >= 10.0);
    }

    #[test]
    fn test_operation_span_reports_duration() {
        let span = OperationSpan::start("search", "button");
        let duration = span.finish(3);
        assert!(duration >= 0.0);
    }
}
