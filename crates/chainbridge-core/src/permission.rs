//! Permission grants: a dApp origin's access to one account on one chain.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Where a grant is in its approval lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionState {
    /// Requested by the page, not yet answered by the user.
    #[default]
    Request,
    Allow,
    Deny,
}

/// A single permission grant.
///
/// Identity is the `(chain_id, account_address, origin)` triple; every other
/// field is payload. Unknown fields are kept in `extra` so a grant produced by
/// a newer collaborator round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionRequest {
    /// Storage key assigned by the approval collaborator.
    #[serde(default)]
    pub key: String,
    /// Requesting page, as scheme + host + port.
    pub origin: String,
    #[serde(default)]
    pub favicon_url: String,
    /// Chain the grant applies to (e.g. `"1"`, `"137"`).
    #[serde(rename = "chainID")]
    pub chain_id: String,
    /// Page title shown in the approval popup.
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub state: PermissionState,
    pub account_address: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PermissionRequest {
    /// Create a pending grant with empty display fields.
    pub fn new(
        chain_id: impl Into<String>,
        account_address: impl Into<String>,
        origin: impl Into<String>,
    ) -> Self {
        Self {
            key: String::new(),
            origin: origin.into(),
            favicon_url: String::new(),
            chain_id: chain_id.into(),
            title: String::new(),
            state: PermissionState::Request,
            account_address: account_address.into(),
            extra: Map::new(),
        }
    }

    pub fn with_state(mut self, state: PermissionState) -> Self {
        self.state = state;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// The identity triple `(chain_id, account_address, origin)`.
    pub fn triple(&self) -> (&str, &str, &str) {
        (&self.chain_id, &self.account_address, &self.origin)
    }

    pub fn is_allowed(&self) -> bool {
        self.state == PermissionState::Allow
    }
}
