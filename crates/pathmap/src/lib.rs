//! # pathmap
//!
//! A `PathMapping` pairs a local directory with the remote directory it is
//! synchronized against.
//!
//! Both sides are kept as the text the caller supplied. Construction and
//! every mutation go through the same checks, so a `PathMapping` value is
//! always valid:
//!
//! - neither side is blank
//! - neither side contains a NUL byte
//!
//! ## Example
//!
//! ```
//! use pathmap::PathMapping;
//!
//! let mapping = PathMapping::new("~/Documents", "/Root/Documents").unwrap();
//! assert_eq!(mapping.local_path(), "~/Documents");
//! assert_eq!(mapping.remote_path(), "/Root/Documents");
//!
//! assert!(PathMapping::new("~/Documents", "").is_err());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

/// Error types for mapping construction.
pub mod error;
/// The mapping value type.
pub mod mapping;

pub use error::{Error, Result};
pub use mapping::{PathMapping, Side};
