//! # recordcodec-batch
//!
//! Batch decode engine for buffers of fixed-length records.
//!
//! ## Features
//! - Whole-buffer validation: the buffer must be an exact multiple of the
//!   line size, otherwise nothing is decoded
//! - All-or-nothing: the first fatal record error aborts the batch
//! - Optional CPU-parallel decoding via Rayon, with input order preserved
//! - Progress callbacks between chunks, and optional OpenTelemetry metrics
//!
//! ## Usage
//! ```no_run
//! use recordcodec_batch::BatchEngine;
//! use recordcodec_layout::LayoutParser;
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let layout = Arc::new(LayoutParser::parse(&std::fs::read_to_string("layout.yaml")?)?);
//! let data = std::fs::read("records.dat")?;
//! let records = BatchEngine::default().parallel(true).decode_all(&data, &layout)?;
//! println!("{} records", records.len());
//! # Ok(())
//! # }
//! ```

pub mod engine;
pub mod split;

pub use engine::{BatchEngine, DEFAULT_CHUNK_SIZE};
