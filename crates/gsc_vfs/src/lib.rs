//! Virtual filesystem support for the game's container archives.
//!
//! A container archive is an obfuscated packed filesystem: a fixed header,
//! a file allocation table of 81-byte records, and a data region of payload
//! byte ranges. Entry names are CP866, backslash-separated logical paths;
//! stored payload offsets are one's-complemented and payloads may be
//! XOR-obfuscated.
//!
//! [`Container`] parses the header and FAT, builds an insertion-ordered
//! directory tree, and opens any file entry as a byte stream with the
//! obfuscation undone on the fly.
//!
//! # Examples
//!
//! ```no_run
//! use std::io::Read;
//!
//! use gsc_vfs::Container;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let container = Container::load("ALL.GSC")?;
//!
//! for entry in container.root().entries() {
//!     println!("{} ({})", entry.path(), entry.size());
//! }
//!
//! let mut file = container.open("/units/cav.gp")?;
//! let mut data = Vec::new();
//! file.read_to_end(&mut data)?;
//! # Ok(())
//! # }
//! ```

pub mod container;
pub mod entry;

mod error;

pub use container::{ArchiveHeader, Container, FatEntry, OpenFile, constants};
pub use entry::Entry;
pub use error::VfsError;
