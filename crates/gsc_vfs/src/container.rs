//! Container archive parsing and file access.

use std::io::{self, Read};
use std::path::Path;

use gsc_types::util;
use log::debug;

use crate::entry::{DirTree, Entry};
use crate::error::VfsError;

/// Obfuscation key; payload bytes are recovered as `(!b) ^ (!KEY)`,
/// equivalent to `b ^ (KEY ^ 0xFF)`.
const KEY: u8 = 0x78;

/// Archive layout constants.
pub mod constants {
	/// Size of the archive header in bytes
	pub const HEADER_SIZE: usize = 14;

	/// Size of one FAT record in bytes
	pub const FAT_ENTRY_SIZE: usize = 81;

	/// Length of the name field inside a FAT record
	pub const NAME_SIZE: usize = 64;
}

/// Archive header (14 bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchiveHeader {
	/// Magic descriptor
	pub descriptor: [u8; 6],
	/// Format version
	pub version: u16,
	/// Key field; shipped archives carry the fixed constant 0x78
	pub key: u16,
	/// Number of FAT records
	pub entries: u32,
}

impl ArchiveHeader {
	fn from_bytes(data: &[u8]) -> Option<Self> {
		if data.len() < constants::HEADER_SIZE {
			return None;
		}

		Some(Self {
			descriptor: [data[0], data[1], data[2], data[3], data[4], data[5]],
			version: u16::from_le_bytes([data[6], data[7]]),
			key: u16::from_le_bytes([data[8], data[9]]),
			entries: u32::from_le_bytes([data[10], data[11], data[12], data[13]]),
		})
	}
}

/// One 81-byte FAT record.
#[derive(Debug, Clone, Copy)]
pub struct FatEntry {
	/// Identity hash, displayed as lowercase hex
	pub hash: [u8; 4],
	/// CP866 NUL-terminated name with backslash separators
	pub name: [u8; constants::NAME_SIZE],
	/// One's complement of the data-relative payload offset
	pub offset: u32,
	/// Payload size in bytes
	pub size: u32,
	/// Reserved field
	pub reserved: u32,
	/// Nonzero when the payload is obfuscated
	pub flags: u8,
}

impl FatEntry {
	/// Parses one record. `data` must hold at least
	/// [`constants::FAT_ENTRY_SIZE`] bytes.
	fn from_bytes(data: &[u8]) -> Self {
		let mut name = [0u8; constants::NAME_SIZE];
		name.copy_from_slice(&data[4..68]);

		Self {
			hash: [data[0], data[1], data[2], data[3]],
			name,
			offset: u32::from_le_bytes([data[68], data[69], data[70], data[71]]),
			size: u32::from_le_bytes([data[72], data[73], data[74], data[75]]),
			reserved: u32::from_le_bytes([data[76], data[77], data[78], data[79]]),
			flags: data[80],
		}
	}

	/// The entry's logical path: CP866-decoded name with backslashes turned
	/// into forward slashes and a leading `/`.
	pub fn logical_path(&self) -> String {
		let name = util::decode_cp866(&self.name);
		format!("/{}", name.replace('\\', "/"))
	}
}

/// An obfuscated virtual filesystem mapping logical paths to byte ranges.
///
/// The FAT and directory tree are immutable once the container is built, so
/// shared references may be used from multiple threads; opened files are
/// independent read cursors.
#[derive(Debug, Clone)]
pub struct Container {
	data: Vec<u8>,
	header: ArchiveHeader,
	fat: Vec<FatEntry>,
	tree: DirTree,
	data_offset: usize,
}

impl Container {
	/// Opens a container archive from the specified path.
	///
	/// # Errors
	///
	/// Returns an error if the file cannot be read or is not a valid
	/// archive.
	pub fn load(path: impl AsRef<Path>) -> Result<Self, VfsError> {
		let data = std::fs::read(path)?;
		Self::from_bytes(data)
	}

	/// Parses a container archive from owned bytes.
	///
	/// # Errors
	///
	/// Returns [`VfsError::MalformedArchive`] when the header or FAT is
	/// truncated.
	pub fn from_bytes(data: Vec<u8>) -> Result<Self, VfsError> {
		let Some(header) = ArchiveHeader::from_bytes(&data) else {
			return Err(VfsError::MalformedArchive {
				reason: format!("{} bytes is too short for the header", data.len()),
			});
		};

		let fat_len = header.entries as usize * constants::FAT_ENTRY_SIZE;
		let data_offset = constants::HEADER_SIZE + fat_len;
		if data.len() < data_offset {
			return Err(VfsError::MalformedArchive {
				reason: format!(
					"FAT needs {} bytes, archive has {}",
					data_offset,
					data.len()
				),
			});
		}

		let fat: Vec<FatEntry> = data[constants::HEADER_SIZE..data_offset]
			.chunks_exact(constants::FAT_ENTRY_SIZE)
			.map(FatEntry::from_bytes)
			.collect();

		let mut tree = DirTree::new();
		for (i, record) in fat.iter().enumerate() {
			tree.insert_file(&record.logical_path(), i);
		}

		debug!("container: {} entries, data region at {:#x}", fat.len(), data_offset);

		Ok(Self {
			data,
			header,
			fat,
			tree,
			data_offset,
		})
	}

	/// Parses a container archive from any reader.
	///
	/// # Errors
	///
	/// Returns an error if reading fails or the archive is invalid.
	pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self, VfsError> {
		let mut data = Vec::new();
		reader.read_to_end(&mut data)?;
		Self::from_bytes(data)
	}

	/// Returns the archive header.
	pub fn header(&self) -> &ArchiveHeader {
		&self.header
	}

	/// Returns the raw FAT records in file order.
	pub fn fat(&self) -> &[FatEntry] {
		&self.fat
	}

	pub(crate) fn tree(&self) -> &DirTree {
		&self.tree
	}

	/// Returns the root directory.
	pub fn root(&self) -> Entry<'_> {
		Entry::new(self, self.tree.root())
	}

	/// Looks up any canonical path, directory or file.
	pub fn entry(&self, path: &str) -> Option<Entry<'_>> {
		self.tree.lookup(path).map(|id| Entry::new(self, id))
	}

	/// Opens the file at `path` for reading.
	///
	/// The returned handle streams the payload byte range, undoing the
	/// per-byte obfuscation as reads happen.
	///
	/// # Errors
	///
	/// Returns [`VfsError::NotFound`] for unknown paths and
	/// [`VfsError::InvalidArgument`] for directories.
	pub fn open(&self, path: &str) -> Result<OpenFile<'_>, VfsError> {
		let id = self.tree.lookup(path).ok_or_else(|| VfsError::NotFound {
			path: path.to_string(),
		})?;

		let node = self.tree.node(id);
		let Some(fat_index) = node.fat else {
			return Err(VfsError::InvalidArgument {
				path: path.to_string(),
			});
		};

		let record = &self.fat[fat_index];
		let start = self.data_offset + (!record.offset) as usize;
		let end = start + record.size as usize;
		if end > self.data.len() {
			return Err(VfsError::MalformedArchive {
				reason: format!(
					"payload of {} runs to {:#x}, archive ends at {:#x}",
					path,
					end,
					self.data.len()
				),
			});
		}

		Ok(OpenFile {
			entry: Entry::new(self, id),
			data: &self.data[start..end],
			pos: 0,
			obfuscated: record.flags > 0,
		})
	}
}

impl std::fmt::Display for Container {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Container: {} entries, {} bytes", self.fat.len(), self.data.len())
	}
}

/// A readable handle onto one archived file.
///
/// Implements [`Read`] over the entry's byte range. Obfuscated payloads are
/// decoded byte-wise as they are read, so large entries stream without an
/// up-front pass.
#[derive(Debug)]
pub struct OpenFile<'a> {
	entry: Entry<'a>,
	data: &'a [u8],
	pos: usize,
	obfuscated: bool,
}

impl<'a> OpenFile<'a> {
	/// The directory entry this handle was opened from.
	pub fn entry(&self) -> Entry<'a> {
		self.entry
	}

	/// Total payload size in bytes.
	pub fn size(&self) -> u64 {
		self.data.len() as u64
	}
}

impl Read for OpenFile<'_> {
	fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
		let n = (self.data.len() - self.pos).min(buf.len());
		buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
		if self.obfuscated {
			for b in &mut buf[..n] {
				*b = !*b ^ !KEY;
			}
		}
		self.pos += n;
		Ok(n)
	}
}
