//! Observability utilities.

mod logging;
mod timing;

pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use timing::{OperationSpan, SpanTimer};
