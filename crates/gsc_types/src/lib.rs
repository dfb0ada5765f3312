//! This crate provides core data types and binary file format support for the `gsc-rs` project.
//!
//! # File Formats
//!
//! - **GP**: multi-frame, palette-indexed sprite files with LZSS-compressed pixel streams
//! - **PAL**: packed palette tables in several channel layouts
//! - **LZSS**: the dictionary-coded compression used for GP pixel data
//!
//! # Examples
//!
//! ```rust
//! use gsc_types::file::pal::{Channel, Decoder};
//!
//! let raw = [0xFF, 0x00, 0x00, 0x00, 0xFF, 0x00];
//! let mut decoder = Decoder::new(&raw[..]);
//! let palette = decoder.decode(Channel::Rgb, 2)?;
//!
//! assert_eq!(palette.len(), 2);
//! # Ok::<(), gsc_types::file::GscFileError>(())
//! ```

pub mod file;
pub mod prelude;
pub mod util;

// Re-export commonly used file types at crate root for convenience
pub use file::{
	Color, FileType, GpFile, GpFrame, GpFrameType, GpHeader, GscFileError, LzssDecoder, PalChannel,
	PalDecoder, Palette, Sprite,
};
