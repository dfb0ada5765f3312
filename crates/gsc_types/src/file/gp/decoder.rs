//! GP file decoding: header, offset table, dictionary and frame chains.

use log::{debug, trace};

use crate::file::lzss;
use crate::file::pal::Palette;
use crate::file::{FileType, GscFileError};

use super::frame::{Frame, FrameHeader, FrameType, Sprite};
use super::{File, Header, constants};

/// One-shot decoder state: the whole file plus its dictionary.
pub(super) struct Decoder<'a> {
	data: &'a [u8],
	palette: &'a Palette,
	voc: Vec<u8>,
}

impl<'a> Decoder<'a> {
	pub(super) fn decode(data: &'a [u8], palette: &'a Palette) -> Result<File, GscFileError> {
		let header = Header::from_bytes(data)?;
		debug!(
			"gp: {} pictures, dictionary {} bytes at {:#010x}",
			header.pictures_count, header.voc_length, header.voc_offset
		);

		let mut decoder = Decoder {
			data,
			palette,
			voc: Vec::new(),
		};
		decoder.read_voc(&header)?;
		let offsets = decoder.read_offset_table(&header)?;

		let mut sprites = Vec::with_capacity(offsets.len());
		for offset in offsets {
			sprites.push(decoder.decode_sprite(offset as usize)?);
		}

		Ok(File {
			header,
			sprites,
		})
	}

	/// Loads the dictionary in a single read.
	fn read_voc(&mut self, header: &Header) -> Result<(), GscFileError> {
		let start = header.voc_offset as usize;
		let end = start + usize::from(header.voc_length);
		if end > self.data.len() {
			return Err(GscFileError::insufficient_data(FileType::Gp, end, self.data.len()));
		}
		self.voc = self.data[start..end].to_vec();
		Ok(())
	}

	/// Reads the absolute frame-start offset table that follows the header.
	fn read_offset_table(&self, header: &Header) -> Result<Vec<u32>, GscFileError> {
		let count = header.pictures_count.max(0) as usize;
		let start = constants::HEADER_SIZE;
		let end = start + count * 4;
		if end > self.data.len() {
			return Err(GscFileError::insufficient_data(FileType::Gp, end, self.data.len()));
		}

		Ok(self.data[start..end]
			.chunks_exact(4)
			.map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
			.collect())
	}

	/// Walks one sprite's frame chain starting at `offset`.
	fn decode_sprite(&self, mut offset: usize) -> Result<Sprite, GscFileError> {
		let mut sprite = Sprite::new();
		loop {
			let Some((frame, next)) = self.decode_frame(offset)? else {
				break;
			};
			sprite.add_frame(frame);
			if next == 0 {
				break;
			}
			offset = match offset.checked_add_signed(next as isize) {
				Some(next_offset) => next_offset,
				None => break,
			};
		}
		trace!("gp: sprite with {} frames, bounds {}", sprite.frame_count(), sprite.rect());
		Ok(sprite)
	}

	/// Returns the bytes from `offset` onward, or an empty slice when the
	/// offset lies outside the file.
	fn tail(&self, offset: usize) -> &'a [u8] {
		self.data.get(offset..).unwrap_or(&[])
	}

	/// Decodes one frame.
	///
	/// Returns `None` on clean chain termination: a truncated header or a
	/// line count that disagrees with the frame height.
	fn decode_frame(&self, offset: usize) -> Result<Option<(Frame, i32)>, GscFileError> {
		let Some(header) = FrameHeader::from_bytes(self.tail(offset)) else {
			return Ok(None);
		};
		if header.lines != header.ly {
			return Ok(None);
		}

		let mut frame = Frame::new(header);
		if header.frame_type() == FrameType::Standard {
			self.decode_standard_frame(&mut frame, offset)?;
		}
		Ok(Some((frame, header.next)))
	}

	/// Runs the pixel pass of a standard frame.
	///
	/// The shaper bytes follow the header up to the painter offset; the
	/// painter bytes are LZSS-decompressed against the file dictionary.
	fn decode_standard_frame(&self, frame: &mut Frame, offset: usize) -> Result<(), GscFileError> {
		let header = *frame.header();
		let coff = header.painter_offset();
		let clen = header.painter_length();
		trace!("gp: standard frame at {offset:#x}, painter +{coff:#x}, {clen} bytes");

		let mut shaper = self.tail(offset + constants::FRAME_HEADER_SIZE);
		if coff >= constants::FRAME_HEADER_SIZE {
			let shaper_len = coff - constants::FRAME_HEADER_SIZE;
			if shaper.len() > shaper_len {
				shaper = &shaper[..shaper_len];
			}
		}

		let painter_input = self.tail(offset.saturating_add(coff));
		let mut painter = lzss::Decoder::new(painter_input, &self.voc, clen);

		frame.render_standard(&mut shaper, &mut painter, self.palette)
	}
}
