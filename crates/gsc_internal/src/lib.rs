//! Internal crate for `gsc-rs`.
//!
//! This module is separated into its own crate to keep the format and
//! filesystem layers reusable on their own, and should not be used
//! directly.
//!
//! # Examples
//!
//! ```rust
//! use gsc_internal::prelude::*;
//!
//! // All commonly used types are available
//! let palette = Palette::grayscale(256);
//! assert_eq!(palette.len(), 256);
//! ```

/// `use gsc_internal::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export the member crates for convenience
pub use gsc_types;
pub use gsc_vfs;
