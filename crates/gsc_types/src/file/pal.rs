//! Palette table decoding.
//!
//! Palette files store packed byte groups, one group per color, in one of a
//! handful of channel layouts. The decoder turns such a stream into an
//! indexable RGBA table; the entry count is declared by the caller
//! (typically 256).
//!
//! # Layouts
//!
//! | Layout  | Bytes per entry | Mapping                             |
//! |---------|-----------------|-------------------------------------|
//! | `Alpha` | 1               | byte → A, color channels zero       |
//! | `Red`   | 1               | byte → R, others zero, opaque       |
//! | `Green` | 1               | byte → G, others zero, opaque       |
//! | `Blue`  | 1               | byte → B, others zero, opaque       |
//! | `Gray`  | 1               | byte replicated into R, G, B        |
//! | `Rgb`   | 3               | bytes → R, G, B, opaque             |
//! | `Argb`  | 4               | bytes → A, R, G, B                  |

use std::fmt;
use std::io::Read;

use crate::file::GscFileError;

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
	/// Red component (0-255)
	pub r: u8,
	/// Green component (0-255)
	pub g: u8,
	/// Blue component (0-255)
	pub b: u8,
	/// Alpha component (0-255)
	pub a: u8,
}

impl Color {
	/// Creates a new RGBA color.
	pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
		Self {
			r,
			g,
			b,
			a,
		}
	}

	/// Creates a new RGB color with full opacity.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self::new(r, g, b, 255)
	}

	/// Creates a new opaque grayscale color.
	pub const fn gray(value: u8) -> Self {
		Self::rgb(value, value, value)
	}

	/// Creates a transparent black color.
	pub const fn transparent() -> Self {
		Self::new(0, 0, 0, 0)
	}
}

impl Default for Color {
	fn default() -> Self {
		Self::transparent()
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "RGBA({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// Channel layout of a packed palette file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
	/// One byte per entry, stored into the alpha channel
	Alpha,
	/// One byte per entry, stored into the red channel
	Red,
	/// One byte per entry, stored into the green channel
	Green,
	/// One byte per entry, stored into the blue channel
	Blue,
	/// One byte per entry, replicated across red, green and blue
	Gray,
	/// Three bytes per entry: red, green, blue
	Rgb,
	/// Four bytes per entry: alpha first, then red, green, blue
	Argb,
}

impl Channel {
	/// Bytes occupied by one palette entry in this layout.
	pub const fn bytes_per_entry(self) -> usize {
		match self {
			Self::Alpha | Self::Red | Self::Green | Self::Blue | Self::Gray => 1,
			Self::Rgb => 3,
			Self::Argb => 4,
		}
	}
}

/// Indexable RGBA color table.
///
/// A palette is a plain value type; callers may clone and share it freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
	colors: Vec<Color>,
}

impl Palette {
	/// Creates a grayscale ramp of `count` entries.
	///
	/// Entry `i` is the opaque gray `(i, i, i)`; counts above 256 wrap.
	pub fn grayscale(count: usize) -> Self {
		Self {
			colors: (0..count).map(|i| Color::gray(i as u8)).collect(),
		}
	}

	/// Returns the number of entries.
	pub fn len(&self) -> usize {
		self.colors.len()
	}

	/// Returns `true` when the palette has no entries.
	pub fn is_empty(&self) -> bool {
		self.colors.is_empty()
	}

	/// Returns the entry at `index`, or `None` when out of range.
	pub fn get(&self, index: usize) -> Option<Color> {
		self.colors.get(index).copied()
	}

	/// Returns the color for a pixel index.
	///
	/// Indices past the end of the table resolve to transparent black, so
	/// renderers never fail on sparse palettes.
	pub fn color(&self, index: u8) -> Color {
		self.colors.get(usize::from(index)).copied().unwrap_or_default()
	}

	/// Returns all entries as a slice.
	pub fn colors(&self) -> &[Color] {
		&self.colors
	}
}

impl From<Vec<Color>> for Palette {
	fn from(colors: Vec<Color>) -> Self {
		Self {
			colors,
		}
	}
}

impl std::ops::Index<usize> for Palette {
	type Output = Color;

	fn index(&self, index: usize) -> &Self::Output {
		&self.colors[index]
	}
}

impl fmt::Display for Palette {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Palette: {} colors", self.colors.len())
	}
}

/// Reads packed palette files.
pub struct Decoder<R> {
	reader: R,
}

impl<R: Read> Decoder<R> {
	/// Creates a decoder over the given byte source.
	pub fn new(reader: R) -> Self {
		Self {
			reader,
		}
	}

	/// Decodes `count` entries laid out as `channel`.
	///
	/// Consumes exactly `count * channel.bytes_per_entry()` input bytes.
	///
	/// # Errors
	///
	/// Returns an error when the source ends before all entries are read.
	pub fn decode(&mut self, channel: Channel, count: usize) -> Result<Palette, GscFileError> {
		let depth = channel.bytes_per_entry();
		let mut colors = Vec::with_capacity(count);
		let mut buf = [0u8; 4];

		for _ in 0..count {
			let buf = &mut buf[..depth];
			self.reader.read_exact(buf)?;
			colors.push(match channel {
				Channel::Alpha => Color::new(0, 0, 0, buf[0]),
				Channel::Red => Color::new(buf[0], 0, 0, 255),
				Channel::Green => Color::new(0, buf[0], 0, 255),
				Channel::Blue => Color::new(0, 0, buf[0], 255),
				Channel::Gray => Color::gray(buf[0]),
				Channel::Rgb => Color::new(buf[0], buf[1], buf[2], 255),
				Channel::Argb => Color::new(buf[1], buf[2], buf[3], buf[0]),
			});
		}

		Ok(Palette::from(colors))
	}
}
