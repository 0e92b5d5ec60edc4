//! `PermissionMap`, grants nested by chain, account, then origin.
//!
//! Each level is created on first use and owned by its parent:
//! the map owns per-chain maps, which own per-account maps, which own the
//! per-origin grant slots. A later grant for the same triple replaces the
//! earlier one.

use std::collections::BTreeMap;

use chainbridge_core::PermissionRequest;
use serde::{Deserialize, Serialize};

use crate::error::PermissionError;

/// origin → grant
pub type OriginPermissions = BTreeMap<String, PermissionRequest>;
/// accountAddress → origin → grant
pub type AccountPermissions = BTreeMap<String, OriginPermissions>;
/// chainID → accountAddress → origin → grant
pub type ChainPermissions = BTreeMap<String, AccountPermissions>;

/// The indexed permission structure, namespaced by chain family.
///
/// Serializes as `{ "evm": { chainID: { accountAddress: { origin: grant } } } }`.
/// Not synchronized: callers sharing one map across handlers must serialize
/// access themselves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PermissionMap {
    #[serde(default)]
    pub evm: ChainPermissions,
}

impl PermissionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a fresh map from a sequence of grants.
    pub fn from_grants<I>(grants: I) -> Result<Self, PermissionError>
    where
        I: IntoIterator<Item = PermissionRequest>,
    {
        let mut map = Self::new();
        map.insert_all(grants)?;
        Ok(map)
    }

    /// Merge grants into this map in order, last write wins per triple.
    ///
    /// Every grant is validated before the first insert, so on error the map
    /// is left exactly as it was.
    pub fn insert_all<I>(&mut self, grants: I) -> Result<(), PermissionError>
    where
        I: IntoIterator<Item = PermissionRequest>,
    {
        let grants: Vec<PermissionRequest> = grants.into_iter().collect();
        for (position, grant) in grants.iter().enumerate() {
            validate(position, grant)?;
        }

        let submitted = grants.len();
        let mut replaced = 0usize;
        for grant in grants {
            if self.insert_unchecked(grant).is_some() {
                replaced += 1;
            }
        }
        tracing::debug!(submitted, replaced, total = self.len(), "indexed permission grants");
        Ok(())
    }

    /// Insert a single grant, returning the one it replaced.
    pub fn insert(
        &mut self,
        grant: PermissionRequest,
    ) -> Result<Option<PermissionRequest>, PermissionError> {
        validate(0, &grant)?;
        Ok(self.insert_unchecked(grant))
    }

    fn insert_unchecked(&mut self, grant: PermissionRequest) -> Option<PermissionRequest> {
        let origins = self
            .evm
            .entry(grant.chain_id.clone())
            .or_default()
            .entry(grant.account_address.clone())
            .or_default();
        origins.insert(grant.origin.clone(), grant)
    }

    /// Look up the grant for an exact triple.
    pub fn get(
        &self,
        chain_id: &str,
        account_address: &str,
        origin: &str,
    ) -> Option<&PermissionRequest> {
        self.evm.get(chain_id)?.get(account_address)?.get(origin)
    }

    /// Returns `true` if a grant exists for the triple and it was allowed.
    pub fn is_allowed(&self, chain_id: &str, account_address: &str, origin: &str) -> bool {
        self.get(chain_id, account_address, origin)
            .is_some_and(PermissionRequest::is_allowed)
    }

    /// Accounts on `chain_id` that `origin` has been allowed to use.
    pub fn allowed_accounts<'a>(
        &'a self,
        chain_id: &str,
        origin: &'a str,
    ) -> impl Iterator<Item = &'a str> + 'a {
        self.evm
            .get(chain_id)
            .into_iter()
            .flat_map(|accounts| accounts.iter())
            .filter(move |(_, origins)| origins.get(origin).is_some_and(|g| g.is_allowed()))
            .map(|(address, _)| address.as_str())
    }

    /// Remove the grant for one triple.
    ///
    /// Parent levels left empty are pruned, so a revoked path looks exactly
    /// like one that was never granted.
    pub fn revoke(
        &mut self,
        chain_id: &str,
        account_address: &str,
        origin: &str,
    ) -> Option<PermissionRequest> {
        let accounts = self.evm.get_mut(chain_id)?;
        let origins = accounts.get_mut(account_address)?;
        let removed = origins.remove(origin)?;

        if origins.is_empty() {
            accounts.remove(account_address);
        }
        if accounts.is_empty() {
            self.evm.remove(chain_id);
        }
        tracing::debug!(chain_id, account_address, origin, "revoked permission grant");
        Some(removed)
    }

    /// All grants, ordered by chain, account, then origin.
    pub fn iter(&self) -> impl Iterator<Item = &PermissionRequest> {
        self.evm
            .values()
            .flat_map(|accounts| accounts.values())
            .flat_map(|origins| origins.values())
    }

    /// Number of indexed grants.
    pub fn len(&self) -> usize {
        self.evm
            .values()
            .flat_map(|accounts| accounts.values())
            .map(|origins| origins.len())
            .sum()
    }

    /// Returns `true` if no grant is indexed, even when empty levels remain
    /// (e.g. after deserializing `{"evm":{"1":{}}}`).
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

/// Index `grants`, merging into `existing` when one is supplied.
///
/// The supplied map is moved in, mutated, and handed back; without one a new
/// map is allocated.
pub fn index_permissions<I>(
    grants: I,
    existing: Option<PermissionMap>,
) -> Result<PermissionMap, PermissionError>
where
    I: IntoIterator<Item = PermissionRequest>,
{
    let mut map = existing.unwrap_or_default();
    map.insert_all(grants)?;
    Ok(map)
}

fn validate(position: usize, grant: &PermissionRequest) -> Result<(), PermissionError> {
    let (chain_id, account_address, origin) = grant.triple();
    let field = if chain_id.is_empty() {
        "chainID"
    } else if account_address.is_empty() {
        "accountAddress"
    } else if origin.is_empty() {
        "origin"
    } else {
        return Ok(());
    };
    Err(PermissionError::MissingKey { position, field })
}

// ─── Tests ────────────────────────────────────────────────────────────────────
