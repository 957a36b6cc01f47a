use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::paths;
use crate::profile::SyncProfile;

/// Profiles persisted in `profiles.toml`.
///
/// ```toml
/// [[profiles]]
/// name = "home"
/// username = "alice@example.com"
/// password = "..."
/// log_level = "WARN"
///
/// [[profiles.mappings]]
/// local = "~/Documents"
/// remote = "/Root/Documents"
/// ```
///
/// Profile names are unique within a store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileStore {
    #[serde(default)]
    profiles: Vec<SyncProfile>,
}

impl ProfileStore {
    /// Load the store from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::profiles_file()?)
    }

    /// Load the store from `path`, or return an empty store if it doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("Profile file does not exist, using empty store");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read profile file: {}", path.display()))?;

        let store: ProfileStore = toml::from_str(&content)
            .with_context(|| format!("Failed to parse profile file: {}", path.display()))?;

        log::debug!(
            "Loaded {} profile(s) from {}",
            store.profiles.len(),
            path.display()
        );
        Ok(store)
    }

    /// Save the store to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&paths::profiles_file()?)
    }

    /// Save the store to `path`, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;
        }

        let content =
            toml::to_string_pretty(self).context("Failed to serialize profiles to TOML")?;

        write_owner_only(path, &content)
            .with_context(|| format!("Failed to write profile file: {}", path.display()))?;

        log::debug!("Saved profiles to {}", path.display());
        Ok(())
    }

    pub fn profiles(&self) -> &[SyncProfile] {
        &self.profiles
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(SyncProfile::profile_name)
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Find a profile by name
    pub fn find(&self, name: &str) -> Option<&SyncProfile> {
        self.profiles.iter().find(|p| p.profile_name() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut SyncProfile> {
        self.profiles.iter_mut().find(|p| p.profile_name() == name)
    }

    /// Add a profile, replacing any existing profile with the same name
    pub fn upsert(&mut self, profile: SyncProfile) {
        self.profiles
            .retain(|p| p.profile_name() != profile.profile_name());
        self.profiles.push(profile);
        self.profiles
            .sort_by(|a, b| a.profile_name().cmp(b.profile_name()));
    }

    /// Remove a profile by name
    pub fn remove(&mut self, name: &str) -> bool {
        let len_before = self.profiles.len();
        self.profiles.retain(|p| p.profile_name() != name);
        self.profiles.len() < len_before
    }
}

/// Write `content` to `path`, readable by the owner only (the file holds passwords)
fn write_owner_only(path: &Path, content: &str) -> io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path)?;

    // An existing file keeps its old mode on open
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = file.metadata()?.permissions();
        perms.set_mode(0o600);
        file.set_permissions(perms)?;
    }

    file.write_all(content.as_bytes())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log_level::LogLevel;
    use tempfile::TempDir;

    fn profile(name: &str) -> SyncProfile {
        let mut profile = SyncProfile::new(name, "alice", "pw", Vec::new(), LogLevel::Info);
        assert!(profile.add_root_mapping("~/Documents", "/Root/Documents"));
        profile
    }

    #[test]
    fn test_missing_file_is_empty_store() {
        let temp = TempDir::new().unwrap();
        let store = ProfileStore::load_from(&temp.path().join("profiles.toml")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("profiles.toml");

        let mut store = ProfileStore::default();
        store.upsert(profile("home"));
        store.upsert(profile("work"));
        store.save_to(&path).unwrap();

        let loaded = ProfileStore::load_from(&path).unwrap();
        assert_eq!(loaded.names().collect::<Vec<_>>(), vec!["home", "work"]);

        let home = loaded.find("home").unwrap();
        assert_eq!(home.account().username(), "alice");
        assert_eq!(home.account().log_level(), LogLevel::Info);
        assert_eq!(home.root_mappings_count(), 1);
        assert_eq!(home.root_mapping_local_root(None), Some("~/Documents"));
        assert_eq!(home.root_mapping_remote_root(None), Some("/Root/Documents"));
    }

    #[test]
    fn test_load_hand_written_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("profiles.toml");
        fs::write(
            &path,
            r#"
[[profiles]]
name = "laptop"
username = "bob"
password = "secret"
log_level = "warning"

[[profiles.mappings]]
local = "/home/bob/music"
remote = "/Root/music"

[[profiles.mappings]]
local = "/home/bob/photos"
remote = "/Root/photos"

[[profiles]]
name = "empty"
username = "bob"
password = "secret"
"#,
        )
        .unwrap();

        let store = ProfileStore::load_from(&path).unwrap();
        let laptop = store.find("laptop").unwrap();
        assert_eq!(laptop.account().log_level(), LogLevel::Warn);
        assert_eq!(laptop.root_mappings_count(), 2);
        assert_eq!(laptop.root_mapping_local_root(Some(1)), Some("/home/bob/photos"));

        let empty = store.find("empty").unwrap();
        assert_eq!(empty.root_mappings_count(), 0);
        assert_eq!(empty.account().log_level(), LogLevel::Debug);
    }

    #[test]
    fn test_invalid_mapping_fails_to_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("profiles.toml");
        fs::write(
            &path,
            "[[profiles]]\nname = \"x\"\nusername = \"u\"\npassword = \"p\"\n\n\
             [[profiles.mappings]]\nlocal = \"/home/u\"\nremote = \"  \"\n",
        )
        .unwrap();

        let err = ProfileStore::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse profile file"));
    }

    #[cfg(unix)]
    #[test]
    fn test_saved_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let path = temp.path().join("profiles.toml");

        let mut store = ProfileStore::default();
        store.upsert(SyncProfile::new("home", "alice", "topsecret", Vec::new(), LogLevel::Info));
        store.save_to(&path).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o077, 0);
        assert!(fs::read_to_string(&path).unwrap().contains("topsecret"));
    }

    #[cfg(unix)]
    #[test]
    fn test_save_tightens_existing_file() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let path = temp.path().join("profiles.toml");
        fs::write(&path, "").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        ProfileStore::default().save_to(&path).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_upsert_replaces_same_name() {
        let mut store = ProfileStore::default();
        store.upsert(profile("home"));

        let mut replacement = profile("home");
        replacement.account_mut().set_username("carol");
        store.upsert(replacement);

        assert_eq!(store.profiles().len(), 1);
        assert_eq!(store.find("home").unwrap().account().username(), "carol");
    }

    #[test]
    fn test_upsert_keeps_names_sorted() {
        let mut store = ProfileStore::default();
        store.upsert(profile("zeta"));
        store.upsert(profile("alpha"));
        assert_eq!(store.names().collect::<Vec<_>>(), vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_find_mut_and_remove() {
        let mut store = ProfileStore::default();
        store.upsert(profile("home"));

        let home = store.find_mut("home").unwrap();
        assert!(home.add_root_mapping("/home/a", "/remote/a"));
        assert_eq!(store.find("home").unwrap().root_mappings_count(), 2);

        assert!(store.remove("home"));
        assert!(!store.remove("home"));
        assert!(store.find("home").is_none());
    }
}
