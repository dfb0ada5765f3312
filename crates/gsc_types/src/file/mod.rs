//! Binary format support for the `gsc-rs` project.

mod error;

pub mod gp;
pub mod lzss;
pub mod pal;

// Re-export unified error type
pub use error::{FileType, GscFileError};

// Re-export main file types
pub use gp::{
	File as GpFile, Frame as GpFrame, FrameType as GpFrameType, Header as GpHeader, Sprite,
};
pub use lzss::Decoder as LzssDecoder;
pub use pal::{Channel as PalChannel, Color, Decoder as PalDecoder, Palette};
