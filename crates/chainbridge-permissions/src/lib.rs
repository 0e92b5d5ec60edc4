//! chainbridge-permissions — the permission index consulted before a page
//! request is forwarded to the wallet.
//!
//! Grants are keyed `chainID → accountAddress → origin`; a missing path at any
//! level means "not granted".

pub mod error;
pub mod map;

pub use error::PermissionError;
pub use map::{index_permissions, ChainPermissions, PermissionMap};
