//! chainbridge-errors — turns whatever an RPC transport or provider call
//! failed with into the one error shape a dApp page knows how to handle.
//!
//! Resolution priority (first match wins):
//! 1. `eip1193Error` holding a compliant payload → passed through as-is
//! 2. `body` holding a JSON-RPC response string  → `4001` + node message
//! 3. `error.body`, same parsing as (2)
//! 4. Anything else                              → `4001 "User Rejected Request"`

pub mod body;
pub mod classify;
pub mod normalizer;

pub use body::{capitalize_first, parse_rpc_error_body};
pub use classify::RawFailure;
pub use normalizer::{normalize, ErrorNormalizer};
