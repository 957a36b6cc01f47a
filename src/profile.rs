//! Sync profiles: a named account plus the directories it keeps in sync.
//!
//! Root mappings are addressed by position. Reads and writes never panic on a
//! bad index; they return `None`/`false` and leave a diagnostic in the log.
//!
//! Index contract:
//! - getters take `Option<usize>`, and `None` means the first mapping
//! - setters always take an explicit index

use pathmap::{PathMapping, Side};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::account::Account;
use crate::log_level::LogLevel;

/// A cached storage usage figure, supplied by whoever measured it.
///
/// No unit is implied; the profile stores it and hands it back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UsedSpace {
    Bytes(u64),
    Text(String),
}

impl fmt::Display for UsedSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsedSpace::Bytes(bytes) => write!(f, "{bytes}"),
            UsedSpace::Text(text) => f.write_str(text),
        }
    }
}

impl From<u64> for UsedSpace {
    fn from(bytes: u64) -> Self {
        UsedSpace::Bytes(bytes)
    }
}

impl From<String> for UsedSpace {
    fn from(text: String) -> Self {
        UsedSpace::Text(text)
    }
}

impl From<&str> for UsedSpace {
    fn from(text: &str) -> Self {
        UsedSpace::Text(text.to_string())
    }
}

/// A named account together with its ordered local/remote root mappings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncProfile {
    name: String,

    #[serde(flatten)]
    account: Account,

    #[serde(rename = "mappings", default)]
    root_mappings: Vec<PathMapping>,

    /// Caches are never persisted
    #[serde(skip)]
    local_used_space: Option<UsedSpace>,

    #[serde(skip)]
    remote_used_space: Option<UsedSpace>,
}

impl SyncProfile {
    /// Create a profile. Both used-space caches start unset.
    pub fn new(
        profile_name: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        root_mappings: Vec<PathMapping>,
        log_level: LogLevel,
    ) -> Self {
        Self {
            name: profile_name.into(),
            account: Account::new(username, password, log_level),
            root_mappings,
            local_used_space: None,
            remote_used_space: None,
        }
    }

    /// Credentials this profile syncs with
    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn account_mut(&mut self) -> &mut Account {
        &mut self.account
    }

    pub fn profile_name(&self) -> &str {
        &self.name
    }

    pub fn set_profile_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
    }

    pub fn local_used_space(&self) -> Option<&UsedSpace> {
        self.local_used_space.as_ref()
    }

    /// Replace the cached local usage; `None` clears it
    pub fn set_local_used_space(&mut self, value: Option<UsedSpace>) {
        self.local_used_space = value;
    }

    pub fn remote_used_space(&self) -> Option<&UsedSpace> {
        self.remote_used_space.as_ref()
    }

    /// Replace the cached remote usage; `None` clears it
    pub fn set_remote_used_space(&mut self, value: Option<UsedSpace>) {
        self.remote_used_space = value;
    }

    // ========================================================================
    // Root Mappings
    // ========================================================================

    /// All root mappings in order
    pub fn root_mappings(&self) -> &[PathMapping] {
        &self.root_mappings
    }

    /// Mapping at `index`, if there is one
    pub fn root_mapping(&self, index: usize) -> Option<&PathMapping> {
        self.root_mappings.get(index)
    }

    pub fn root_mappings_count(&self) -> usize {
        self.root_mappings.len()
    }

    /// Append a new mapping at the end.
    ///
    /// Returns `false` if the paths do not form a valid mapping. The reason is
    /// logged and the profile is left as it was.
    pub fn add_root_mapping(&mut self, local_root: &str, remote_path: &str) -> bool {
        match PathMapping::new(local_root, remote_path) {
            Ok(mapping) => {
                log::debug!(
                    "Profile '{}': added root mapping #{} ({mapping})",
                    self.name,
                    self.root_mappings.len()
                );
                self.root_mappings.push(mapping);
                true
            }
            Err(e) => {
                log::error!("Profile '{}': cannot add root mapping: {e}", self.name);
                false
            }
        }
    }

    /// Local path of the mapping at `index` (first mapping when `None`)
    pub fn root_mapping_local_root(&self, index: Option<usize>) -> Option<&str> {
        self.root_path(Side::Local, index)
    }

    /// Remote path of the mapping at `index` (first mapping when `None`)
    pub fn root_mapping_remote_root(&self, index: Option<usize>) -> Option<&str> {
        self.root_path(Side::Remote, index)
    }

    /// Overwrite the local path at `index`; `false` if out of range or rejected
    pub fn set_root_mapping_local_root(&mut self, index: usize, value: &str) -> bool {
        self.set_root_path(Side::Local, index, value)
    }

    /// Overwrite the remote path at `index`; `false` if out of range or rejected
    pub fn set_root_mapping_remote_root(&mut self, index: usize, value: &str) -> bool {
        self.set_root_path(Side::Remote, index, value)
    }

    fn root_path(&self, side: Side, index: Option<usize>) -> Option<&str> {
        let position = index.unwrap_or(0);
        match self.root_mappings.get(position) {
            Some(mapping) => Some(mapping.path(side)),
            None => {
                self.log_out_of_range(side, position);
                None
            }
        }
    }

    fn set_root_path(&mut self, side: Side, index: usize, value: &str) -> bool {
        let count = self.root_mappings.len();
        let Some(mapping) = self.root_mappings.get_mut(index) else {
            self.log_out_of_range(side, index);
            return false;
        };

        match mapping.set_path(side, value) {
            Ok(()) => {
                log::debug!(
                    "Profile '{}': {side} root of mapping #{index} of {count} set to {value}",
                    self.name
                );
                true
            }
            Err(e) => {
                log::error!(
                    "Profile '{}': cannot set {side} root of mapping #{index}: {e}",
                    self.name
                );
                false
            }
        }
    }

    fn log_out_of_range(&self, side: Side, index: usize) {
        if self.root_mappings.is_empty() {
            log::warn!("Profile '{}': no root mappings ({side} root)", self.name);
        } else {
            log::warn!(
                "Profile '{}': root mapping index {index} out of range ({} mappings, {side} root)",
                self.name,
                self.root_mappings.len()
            );
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
