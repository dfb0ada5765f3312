//! Standard-frame rendering: the shaper/painter line protocol.
//!
//! A standard frame is drawn line by line. The shaper stream opens each
//! line with a command byte:
//!
//! - `0` — the line is empty;
//! - top bit set — *masked form*: the low five bits count packed segments,
//!   each one byte holding a 4-bit spacing run and a 4-bit pixel run, with
//!   bits 6 and 5 of the command extending either nibble by 16;
//! - otherwise — *plain form*: the command counts `(space, pixels)` byte
//!   pairs.
//!
//! Every painted pixel consumes one painter byte, a palette index. Pixels
//! clipped at the right edge still consume their painter byte.

use std::io::{self, Read};

use crate::file::pal::Palette;
use crate::file::{FileType, GscFileError};
use crate::util;

use super::frame::Frame;

impl Frame {
	/// Renders the standard-frame pixel pass onto this frame's canvas.
	///
	/// Shaper exhaustion mid-command is an error; painter exhaustion ends
	/// the pass silently with the pixels painted so far.
	pub(super) fn render_standard<S: Read, P: Read>(
		&mut self,
		shaper: &mut S,
		painter: &mut P,
		palette: &Palette,
	) -> Result<(), GscFileError> {
		let width = i32::from(self.header().lx);
		let lines = self.header().lines.max(0);

		for y in 0..lines {
			let cmd = util::read_u8(shaper).map_err(shaper_eos)?;
			if cmd == 0 {
				continue;
			}

			let mut x = 0i32;
			if cmd & 0x80 != 0 {
				let space_mask = if cmd & 0x40 != 0 { 0x10 } else { 0 };
				let pix_mask = if cmd & 0x20 != 0 { 0x10 } else { 0 };
				let segments = cmd & 0x1F;

				for _ in 0..segments {
					let pack = util::read_u8(shaper).map_err(shaper_eos)?;
					let space = (pack & 0x0F) | space_mask;
					let pixels = ((pack >> 4) & 0x0F) | pix_mask;

					x += i32::from(space);
					if !self.paint_run(painter, palette, &mut x, y as u32, u32::from(pixels), width)? {
						return Ok(());
					}
				}
			} else {
				for _ in 0..cmd {
					let space = util::read_u8(shaper).map_err(shaper_eos)?;
					let pixels = util::read_u8(shaper).map_err(shaper_eos)?;

					x += i32::from(space);
					if !self.paint_run(painter, palette, &mut x, y as u32, u32::from(pixels), width)? {
						return Ok(());
					}
				}
			}
		}
		Ok(())
	}

	/// Paints `pixels` consecutive pixels at `(x, y)`, consuming one painter
	/// byte per pixel. Writes past the right edge are dropped but still
	/// consume their byte. Returns `Ok(false)` when the painter runs dry.
	fn paint_run<P: Read>(
		&mut self,
		painter: &mut P,
		palette: &Palette,
		x: &mut i32,
		y: u32,
		pixels: u32,
		width: i32,
	) -> Result<bool, GscFileError> {
		for _ in 0..pixels {
			let index = match util::read_u8(painter) {
				Ok(index) => index,
				Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => return Ok(false),
				Err(err) => return Err(painter_error(err)),
			};
			if *x >= 0 && *x < width {
				self.put_pixel(*x as u32, y, palette.color(index));
			}
			*x += 1;
		}
		Ok(true)
	}
}

fn shaper_eos(err: io::Error) -> GscFileError {
	if err.kind() == io::ErrorKind::UnexpectedEof {
		GscFileError::UnexpectedEndOfStream {
			file_type: FileType::Gp,
		}
	} else {
		GscFileError::from(err)
	}
}

/// Recovers the domain error a failing painter read carries, if any.
fn painter_error(err: io::Error) -> GscFileError {
	match err.downcast::<GscFileError>() {
		Ok(inner) => inner,
		Err(err) => GscFileError::from(err),
	}
}
