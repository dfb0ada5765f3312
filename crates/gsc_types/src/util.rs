//! Small byte-level helpers shared by the format decoders.

use std::fmt::Write as _;
use std::io::{self, Read};

/// Reads a single byte from the reader.
pub fn read_u8<R: Read>(reader: &mut R) -> io::Result<u8> {
	let mut buf = [0u8; 1];
	reader.read_exact(&mut buf)?;
	Ok(buf[0])
}

/// Reads a little-endian `u16` from the reader.
pub fn read_u16_le<R: Read>(reader: &mut R) -> io::Result<u16> {
	let mut buf = [0u8; 2];
	reader.read_exact(&mut buf)?;
	Ok(u16::from_le_bytes(buf))
}

/// Returns the prefix of `bytes` up to, but not including, the first NUL.
///
/// Slices without a NUL terminator are returned whole.
pub fn null_terminated(bytes: &[u8]) -> &[u8] {
	match bytes.iter().position(|&b| b == 0) {
		Some(i) => &bytes[..i],
		None => bytes,
	}
}

/// Decodes a NUL-terminated code page 866 byte string.
///
/// Entry names inside the game's archives are stored as CP866. Input that
/// fails to decode falls back to a lossy UTF-8 interpretation.
pub fn decode_cp866(bytes: &[u8]) -> String {
	let bytes = null_terminated(bytes);
	let (decoded, _, had_errors) = encoding_rs::IBM866.decode(bytes);
	if had_errors {
		String::from_utf8_lossy(bytes).into_owned()
	} else {
		decoded.into_owned()
	}
}

/// Formats a byte slice as a 16-bytes-per-row hex dump with an ASCII gutter.
///
/// Intended for diagnostics; the output ends with a newline unless `data`
/// is empty.
pub fn hex_dump(data: &[u8]) -> String {
	let mut out = String::new();
	for chunk in data.chunks(16) {
		for b in chunk {
			let _ = write!(out, "{b:02x} ");
		}
		for _ in chunk.len()..16 {
			out.push_str("   ");
		}
		out.push_str(" |");
		for &b in chunk {
			if (0x20..0x7F).contains(&b) {
				out.push(b as char);
			} else {
				out.push('.');
			}
		}
		out.push_str("|\n");
	}
	out
}
