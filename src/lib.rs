//! # syncprofile
//!
//! In-memory configuration for a file-synchronization client: the account a
//! client signs in with and the sync profiles that map local directories to
//! directories on the remote drive.
//!
//! Nothing here transfers files or talks to the network. The surrounding
//! application reads profiles, hands the mappings to its sync engine, and
//! writes back whatever usage figures it measures.
//!
//! ## Example
//!
//! ```
//! use syncprofile::{LogLevel, SyncProfile};
//!
//! let mut profile = SyncProfile::new("p1", "u", "pw", Vec::new(), LogLevel::Debug);
//! assert!(profile.add_root_mapping("/home/a", "/remote/a"));
//! assert_eq!(profile.root_mappings_count(), 1);
//! assert_eq!(profile.root_mapping_local_root(Some(0)), Some("/home/a"));
//! assert_eq!(profile.root_mapping_remote_root(None), Some("/remote/a"));
//!
//! // Bad indices are reported by value, never by panicking
//! assert_eq!(profile.root_mapping_local_root(Some(7)), None);
//! assert!(!profile.set_root_mapping_local_root(7, "/home/b"));
//! ```

pub mod account;
pub mod config;
pub mod diagnostics;
pub mod log_level;
pub mod paths;
pub mod profile;

pub use account::Account;
pub use config::ProfileStore;
pub use log_level::{LogLevel, ParseLogLevelError};
pub use pathmap::{PathMapping, Side};
pub use profile::{SyncProfile, UsedSpace};
