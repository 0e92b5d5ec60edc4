//! chainbridge-core — shared wire types for the ChainBridge provider bridge.
//!
//! This crate defines:
//! - [`Eip1193ErrorPayload`]: the canonical `{code, message}` error handed to a page
//! - [`EIP1193_ERROR_CODES`]: the standardized provider error-code table
//! - [`PermissionRequest`]: a (chain, account, origin) permission grant
//! - [`ErrorSink`]: the logging port used when normalizing raw failures

pub mod eip1193;
pub mod permission;
pub mod sink;

pub use eip1193::{
    is_eip1193_error, lookup_code, Eip1193ErrorCode, Eip1193ErrorPayload, EIP1193_ERROR_CODES,
    USER_REJECTED_REQUEST,
};
pub use permission::{PermissionRequest, PermissionState};
pub use sink::{ErrorSink, NoopSink, TracingSink};
