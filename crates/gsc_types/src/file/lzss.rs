//! Dictionary-coded LZSS decompression.
//!
//! GP sprite files compress their pixel streams with an LZSS variant whose
//! sliding window is not the decoded history but a per-file dictionary
//! supplied out of band. The input interleaves command bytes with payload:
//! one command byte is consumed for every eight operations, and each of its
//! bits, most significant first, selects between a literal byte and a
//! back-reference into the dictionary.
//!
//! A back-reference is a little-endian 16-bit word packing a 4-bit phrase
//! length (`count = (word >> 12) + 3`, so 3 to 18 bytes) and a 12-bit
//! dictionary offset (`word & 0x0FFF`). References never address the decoded
//! output.
//!
//! # Examples
//!
//! ```rust
//! use std::io::Read;
//!
//! use gsc_types::file::lzss::Decoder;
//!
//! // One command byte announcing eight literals, then the literals.
//! let input = [0x00, 1, 2, 3, 4, 5, 6, 7, 8];
//! let mut output = Vec::new();
//! Decoder::new(&input[..], &[], 8).read_to_end(&mut output)?;
//!
//! assert_eq!(output, [1, 2, 3, 4, 5, 6, 7, 8]);
//! # Ok::<(), std::io::Error>(())
//! ```

use std::io::{self, Read};

use crate::file::{FileType, GscFileError};
use crate::util;

/// Longest phrase a single back-reference can emit (`0xF + 3`).
pub const MAX_PHRASE: usize = 18;

/// Streaming decoder over a dictionary-coded LZSS byte stream.
///
/// Wraps any byte reader and implements [`Read`], yielding exactly the
/// number of bytes declared at construction and reporting end of stream
/// thereafter. The decoder buffers at most one phrase at a time; the
/// dictionary is borrowed from the caller.
pub struct Decoder<'v, R> {
	reader: R,
	voc: &'v [u8],
	/// Bytes decoded but not yet handed to the caller.
	pending: [u8; MAX_PHRASE],
	pending_len: usize,
	pending_pos: usize,
	flag: u8,
	bits_left: u8,
	remaining: u64,
}

impl<'v, R: Read> Decoder<'v, R> {
	/// Creates a decoder that produces `unpack_length` bytes.
	///
	/// `voc` is the dictionary all back-references address. Readers that hit
	/// the underlying source often should be buffered by the caller.
	pub fn new(reader: R, voc: &'v [u8], unpack_length: u64) -> Self {
		Self {
			reader,
			voc,
			pending: [0; MAX_PHRASE],
			pending_len: 0,
			pending_pos: 0,
			flag: 0,
			bits_left: 0,
			remaining: unpack_length,
		}
	}

	/// Bytes still owed to the caller, not counting buffered ones.
	pub fn remaining(&self) -> u64 {
		self.remaining
	}

	/// Decodes the next command into the pending buffer.
	fn fill_pending(&mut self) -> Result<(), GscFileError> {
		if self.bits_left == 0 {
			self.flag = util::read_u8(&mut self.reader).map_err(eos)?;
			self.bits_left = 8;
		}

		if self.flag & 0x80 != 0 {
			let word = util::read_u16_le(&mut self.reader).map_err(eos)?;
			let count = usize::from(word >> 12) + 3;
			let offset = usize::from(word & 0x0FFF);
			if offset + count > self.voc.len() {
				return Err(GscFileError::DictionaryOutOfRange {
					offset,
					count,
					len: self.voc.len(),
				});
			}
			// A phrase never emits past the declared output length.
			let take = count.min(self.remaining as usize);
			self.pending[..take].copy_from_slice(&self.voc[offset..offset + take]);
			self.pending_len = take;
			self.remaining -= take as u64;
		} else {
			self.pending[0] = util::read_u8(&mut self.reader).map_err(eos)?;
			self.pending_len = 1;
			self.remaining -= 1;
		}
		self.pending_pos = 0;

		self.flag <<= 1;
		self.bits_left -= 1;
		Ok(())
	}
}

fn eos(err: io::Error) -> GscFileError {
	if err.kind() == io::ErrorKind::UnexpectedEof {
		GscFileError::UnexpectedEndOfStream {
			file_type: FileType::Lzss,
		}
	} else {
		GscFileError::from(err)
	}
}

impl<R: Read> Read for Decoder<'_, R> {
	fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
		let mut written = 0;
		while written < buf.len() {
			if self.pending_pos < self.pending_len {
				let take = (self.pending_len - self.pending_pos).min(buf.len() - written);
				buf[written..written + take]
					.copy_from_slice(&self.pending[self.pending_pos..self.pending_pos + take]);
				self.pending_pos += take;
				written += take;
				continue;
			}
			if self.remaining == 0 {
				break;
			}
			self.fill_pending().map_err(|e| match e {
				GscFileError::IOError(io_err) => io_err,
				other => io::Error::other(other),
			})?;
		}
		Ok(written)
	}
}
