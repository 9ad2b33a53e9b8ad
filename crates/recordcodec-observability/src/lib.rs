//! # recordcodec-observability
//!
//! OpenTelemetry-based observability for RecordCodec.
//!
//! ## Built-in metrics
//! - `recordcodec.records_decoded`    — counter, tagged with layout
//! - `recordcodec.fields_soft_failed` — counter, tagged with layout + field type
//! - `recordcodec.batch_errors`       — counter, tagged with layout + error kind
//! - `recordcodec.batch_size`         — histogram, records per batch
//! - `recordcodec.decode_latency_ms`  — histogram, wall time per batch
//!
//! ## Structured logging
//! Human-readable or JSON logs through `tracing-subscriber`.
//! Log levels configurable per component.

pub mod metrics;
pub mod tracing_setup;

pub use metrics::RecordCodecMetrics;
pub use tracing_setup::{init_tracing, LogConfig};
