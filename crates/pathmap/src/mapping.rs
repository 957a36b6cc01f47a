use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// Which end of a mapping a path belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The directory on this machine
    Local,
    /// The directory on the remote storage service
    Remote,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Local => write!(f, "local"),
            Side::Remote => write!(f, "remote"),
        }
    }
}

/// A local directory paired with its remote counterpart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMapping", into = "RawMapping")]
pub struct PathMapping {
    local: String,
    remote: String,
}

/// Unchecked on-disk shape; converted through [`PathMapping::new`].
#[derive(Serialize, Deserialize)]
struct RawMapping {
    local: String,
    remote: String,
}

impl TryFrom<RawMapping> for PathMapping {
    type Error = Error;

    fn try_from(raw: RawMapping) -> Result<Self> {
        Self::new(raw.local, raw.remote)
    }
}

impl From<PathMapping> for RawMapping {
    fn from(mapping: PathMapping) -> Self {
        Self {
            local: mapping.local,
            remote: mapping.remote,
        }
    }
}

impl PathMapping {
    /// Create a mapping, rejecting paths that can never be synchronized.
    pub fn new(local: impl Into<String>, remote: impl Into<String>) -> Result<Self> {
        let local = local.into();
        let remote = remote.into();
        validate(Side::Local, &local)?;
        validate(Side::Remote, &remote)?;
        Ok(Self { local, remote })
    }

    /// Local directory, exactly as supplied
    pub fn local_path(&self) -> &str {
        &self.local
    }

    /// Remote directory, exactly as supplied
    pub fn remote_path(&self) -> &str {
        &self.remote
    }

    /// Path on the given side
    pub fn path(&self, side: Side) -> &str {
        match side {
            Side::Local => &self.local,
            Side::Remote => &self.remote,
        }
    }

    /// Replace the local directory. The mapping is unchanged on error.
    pub fn set_local_path(&mut self, value: impl Into<String>) -> Result<()> {
        self.set_path(Side::Local, value)
    }

    /// Replace the remote directory. The mapping is unchanged on error.
    pub fn set_remote_path(&mut self, value: impl Into<String>) -> Result<()> {
        self.set_path(Side::Remote, value)
    }

    /// Replace the path on the given side. The mapping is unchanged on error.
    pub fn set_path(&mut self, side: Side, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        validate(side, &value)?;
        match side {
            Side::Local => self.local = value,
            Side::Remote => self.remote = value,
        }
        Ok(())
    }
}

impl fmt::Display for PathMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.local, self.remote)
    }
}

fn validate(side: Side, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(Error::EmptyPath(side));
    }
    if path.contains('\0') {
        return Err(Error::NulByte(side, path.to_string()));
    }
    Ok(())
}
