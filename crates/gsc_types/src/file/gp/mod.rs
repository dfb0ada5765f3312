//! GP sprite file support.
//!
//! This module provides support for loading GP files, the multi-frame,
//! palette-indexed sprite format used by the game for units, buildings and
//! interface art.
//!
//! # File Structure
//!
//! | Offset     | Size | Field                                     |
//! |------------|------|-------------------------------------------|
//! | 0x00       | 4    | signature                                 |
//! | 0x04       | 2    | picture count (i16, LE)                   |
//! | 0x06       | 2    | reserved                                  |
//! | 0x08       | 4    | dictionary offset (u32, LE)               |
//! | 0x0C       | 2    | dictionary length (u16, LE)               |
//! | 0x0E       | 4×N  | absolute frame-start offsets, one per picture |
//! | …          | …    | chained frame records                     |
//! | dict. off. | …    | LZSS dictionary bytes                     |
//!
//! Each picture is a chain of frames. A frame record is a 23-byte header
//! followed by its *shaper* bytes (per-line run-length commands); its
//! *painter* bytes (LZSS-compressed palette indices) start at an offset
//! packed into the header's `cdata` and `options` fields. The chain ends at
//! a zero `next` offset, a truncated header, or a header whose line count
//! disagrees with its height.
//!
//! # Usage Examples
//!
//! ## Loading a GP file
//!
//! ```no_run
//! use gsc_types::file::gp::File;
//! use gsc_types::file::pal::Palette;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let palette = Palette::grayscale(256);
//! let gp = File::open("CAVALRY.GP", &palette)?;
//!
//! println!("Sprites: {}", gp.sprite_count());
//!
//! for sprite in gp.sprites() {
//!     for frame in sprite.frames() {
//!         println!("  {}×{} at ({}, {})", frame.width(), frame.height(), frame.dx(), frame.dy());
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use std::io::Read;
use std::path::Path;

use crate::file::pal::Palette;
use crate::file::{FileType, GscFileError};

mod decoder;
pub mod frame;
mod render;


pub use frame::{Frame, FrameHeader, FrameType, Rect, Sprite};

/// GP file constants.
pub mod constants {
	/// Size of the file header in bytes
	pub const HEADER_SIZE: usize = 14;

	/// Size of each frame header in bytes
	pub const FRAME_HEADER_SIZE: usize = 23;

	/// Painter offset added when bit 6 of the options byte is set
	pub const PAINTER_OFFSET_BIT6: usize = 16384;

	/// Painter offset added when bit 7 of the options byte is set
	pub const PAINTER_OFFSET_BIT7: usize = 32768;

	/// Painter length added for option value 43
	pub const PAINTER_LENGTH_EXT_43: u64 = 262144;

	/// Painter length added for option value 42
	pub const PAINTER_LENGTH_EXT_42: u64 = 524288;
}

/// GP file header (14 bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
	/// File signature; shipped assets carry several variants, none is validated
	pub sign: [u8; 4],
	/// Number of pictures (sprites) in the file
	pub pictures_count: i16,
	/// Reserved field
	pub reserved: i16,
	/// Absolute offset of the dictionary
	pub voc_offset: u32,
	/// Length of the dictionary in bytes
	pub voc_length: u16,
}

impl Header {
	/// Parses a header from the start of `data`.
	///
	/// # Errors
	///
	/// Returns [`GscFileError::InsufficientData`] when `data` is shorter
	/// than the fixed header size.
	pub fn from_bytes(data: &[u8]) -> Result<Self, GscFileError> {
		if data.len() < constants::HEADER_SIZE {
			return Err(GscFileError::insufficient_data(
				FileType::Gp,
				constants::HEADER_SIZE,
				data.len(),
			));
		}

		Ok(Self {
			sign: [data[0], data[1], data[2], data[3]],
			pictures_count: i16::from_le_bytes([data[4], data[5]]),
			reserved: i16::from_le_bytes([data[6], data[7]]),
			voc_offset: u32::from_le_bytes([data[8], data[9], data[10], data[11]]),
			voc_length: u16::from_le_bytes([data[12], data[13]]),
		})
	}
}

/// Decoded GP file: an ordered list of sprites with rendered frames.
#[derive(Debug, Clone)]
pub struct File {
	header: Header,
	sprites: Vec<Sprite>,
}

impl File {
	/// Opens and decodes a GP file from the specified path.
	///
	/// # Errors
	///
	/// Returns an error if the file cannot be read or its structure is
	/// invalid.
	pub fn open(path: impl AsRef<Path>, palette: &Palette) -> Result<Self, GscFileError> {
		let data = std::fs::read(path)?;
		Self::from_bytes(&data, palette)
	}

	/// Decodes a GP file from a byte slice.
	///
	/// Standard frames are rendered against `palette` during decoding;
	/// other frame variants are parsed but left with transparent canvases.
	///
	/// # Errors
	///
	/// Returns an error if the header, dictionary, offset table or any
	/// frame's pixel streams are invalid.
	pub fn from_bytes(data: &[u8], palette: &Palette) -> Result<Self, GscFileError> {
		decoder::Decoder::decode(data, palette)
	}

	/// Decodes a GP file from any reader.
	///
	/// The whole stream is buffered first; frame decoding needs random
	/// access.
	///
	/// # Errors
	///
	/// Returns an error if reading fails or the file structure is invalid.
	pub fn from_reader<R: Read>(reader: &mut R, palette: &Palette) -> Result<Self, GscFileError> {
		let mut data = Vec::new();
		reader.read_to_end(&mut data)?;
		Self::from_bytes(&data, palette)
	}

	/// Returns the file header.
	pub fn header(&self) -> &Header {
		&self.header
	}

	/// Returns all sprites in file order.
	pub fn sprites(&self) -> &[Sprite] {
		&self.sprites
	}

	/// Returns the number of sprites.
	pub fn sprite_count(&self) -> usize {
		self.sprites.len()
	}

	/// Returns a specific sprite by index.
	pub fn get_sprite(&self, index: usize) -> Option<&Sprite> {
		self.sprites.get(index)
	}
}

impl std::fmt::Display for File {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "GP File: {} sprites", self.sprites.len())
	}
}
