#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `gsc-rs` is a toolkit for extracting and decoding the asset archives of a
//! classic real-time strategy game: the obfuscated container format, the GP
//! sprite format with its dictionary-coded pixel streams, and the packed
//! palette tables that color them.
//!
pub use gsc_internal::*;
