//! # recordcodec-layout
//!
//! Layout descriptions for RecordCodec.
//!
//! - [`LayoutParser`] reads YAML or JSON layout documents into `LineSpec`s
//!   and writes them back out
//! - [`LayoutRegistry`] keeps named layouts in memory, loaded from files or
//!   whole directories

pub mod format;
pub mod registry;

pub use format::LayoutParser;
pub use registry::{LayoutRegistry, LAYOUT_EXTENSIONS};
