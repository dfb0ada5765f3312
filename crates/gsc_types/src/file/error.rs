//! Error types for binary format parsing.

use thiserror::Error;

/// Identifies which format a decoding error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
	/// GP sprite file
	Gp,
	/// LZSS compressed stream
	Lzss,
	/// Palette table
	Pal,
}

impl std::fmt::Display for FileType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Gp => write!(f, "GP"),
			Self::Lzss => write!(f, "LZSS"),
			Self::Pal => write!(f, "PAL"),
		}
	}
}

/// Errors that can occur when decoding game asset formats
#[derive(Debug, Error)]
pub enum GscFileError {
	/// Not enough data to parse a structure
	#[error("{file_type}: insufficient data: expected {expected} bytes, got {actual} bytes")]
	InsufficientData {
		/// Format being decoded
		file_type: FileType,
		/// Expected number of bytes
		expected: usize,
		/// Actual number of bytes
		actual: usize,
	},

	/// A frame record is structurally invalid
	#[error("{file_type}: malformed frame: {message}")]
	MalformedFrame {
		/// Format being decoded
		file_type: FileType,
		/// What was wrong
		message: String,
	},

	/// A back-reference addressed bytes past the end of the dictionary
	#[error("dictionary reference out of range: offset {offset} + count {count} > {len}")]
	DictionaryOutOfRange {
		/// Dictionary offset of the reference
		offset: usize,
		/// Number of bytes referenced
		count: usize,
		/// Length of the dictionary
		len: usize,
	},

	/// Input ended in the middle of a command or its operands
	#[error("{file_type}: unexpected end of stream")]
	UnexpectedEndOfStream {
		/// Format being decoded
		file_type: FileType,
	},

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}

impl GscFileError {
	/// Shorthand for [`GscFileError::InsufficientData`].
	pub(crate) fn insufficient_data(file_type: FileType, expected: usize, actual: usize) -> Self {
		Self::InsufficientData {
			file_type,
			expected,
			actual,
		}
	}
}
