//! Error types for container archives.

use thiserror::Error;

/// Errors that can occur when parsing a container archive or opening entries
#[derive(Debug, Error)]
pub enum VfsError {
	/// Archive header or FAT is structurally invalid
	#[error("malformed archive: {reason}")]
	MalformedArchive {
		/// What was wrong
		reason: String,
	},

	/// No entry exists at the requested path
	#[error("entry not found: {path}")]
	NotFound {
		/// The path that was looked up
		path: String,
	},

	/// The path names a directory where a file was required
	#[error("invalid argument: {path} is not a file")]
	InvalidArgument {
		/// The offending path
		path: String,
	},

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}
