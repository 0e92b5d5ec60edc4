//! # chainbridge-observability
//!
//! Structured logging for ChainBridge binaries.
//!
//! Libraries in this workspace only emit `tracing` events; a binary calls
//! [`init_tracing`] once at startup to decide where they go. Log levels are
//! configurable per component, and output can be text or JSON.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, LogConfig};
