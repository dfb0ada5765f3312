//! Prelude module for `gsc_internal`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```no_run
//! use gsc_internal::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Now you can use all common types directly
//! let container = Container::load("ALL.GSC")?;
//! let palette = Palette::grayscale(256);
//!
//! let mut file = container.open("/units/cav.gp")?;
//! let gp = GpFile::from_reader(&mut file, &palette)?;
//! # Ok(())
//! # }
//! ```

// Re-export everything from gsc_types::prelude
#[doc(inline)]
pub use gsc_types::prelude::*;

// Virtual filesystem types
#[doc(inline)]
pub use gsc_vfs::{ArchiveHeader, Container, Entry, FatEntry, OpenFile, VfsError};

// Re-export the member crates for advanced usage
#[doc(inline)]
pub use gsc_types;

#[doc(inline)]
pub use gsc_vfs;
