//! Prelude module for `gsc_types`.
//!
//! This module provides a convenient way to import commonly used types, traits, and constants.
//!
//! # Examples
//!
//! ```rust
//! use gsc_types::prelude::*;
//!
//! // Now you can use all common types directly
//! let palette = Palette::grayscale(256);
//! assert_eq!(palette.color(128), Color::gray(128));
//! ```

// File module types
#[doc(inline)]
pub use crate::file::{
	// Palette types
	Color,
	FileType,

	// GP sprite types
	GpFile,
	GpFrame,
	GpFrameType,
	GpHeader,

	GscFileError,
	// LZSS decompression
	LzssDecoder,

	PalChannel,
	PalDecoder,
	Palette,
	Sprite,
};

// Sprite geometry
#[doc(inline)]
pub use crate::file::gp::Rect;

// Re-export the file module for advanced usage
#[doc(inline)]
pub use crate::file;
