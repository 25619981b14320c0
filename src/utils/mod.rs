//! # Utility Modules
//!
//! Supporting utilities shared by the codec and configuration layers.
//!
//! ## Components
//! - **Logging**: Structured logging setup on top of `tracing-subscriber`
//! - **Metrics**: Thread-safe counters for encode/decode activity

pub mod logging;
pub mod metrics;

pub use metrics::{global_metrics, Metrics, MetricsSnapshot};
