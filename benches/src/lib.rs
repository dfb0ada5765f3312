//! Benchmark helper utilities for gsc-rs
//!
//! This module generates synthetic GP sprites and LZSS streams shaped like
//! real game assets, so the decoders can be profiled without shipping any
//! game data.

/// Generates an LZSS input stream plus its dictionary.
///
/// The stream mixes maximum-length dictionary phrases with literal runs and
/// encodes at least `output_len` decompressed bytes; decode it with
/// `unpack_length = output_len`.
pub fn generate_lzss_input(output_len: usize) -> (Vec<u8>, Vec<u8>) {
	// 4 KiB dictionary with a byte ramp
	let voc: Vec<u8> = (0..4096usize).map(|i| (i * 31) as u8).collect();

	let mut input = Vec::new();
	let mut produced = 0usize;
	while produced < output_len {
		// Four phrases, then four literals per command byte
		input.push(0xF0);
		for _ in 0..4 {
			let offset = (produced * 97) % (voc.len() - 18);
			let word = 0xF000u16 | offset as u16;
			input.extend_from_slice(&word.to_le_bytes());
			produced += 18;
		}
		for i in 0..4u8 {
			input.push(i);
			produced += 1;
		}
	}
	(input, voc)
}

/// Packs raw bytes as an all-literals LZSS stream.
fn compress_literals(data: &[u8]) -> Vec<u8> {
	let mut out = Vec::with_capacity(data.len() + data.len() / 8 + 1);
	for chunk in data.chunks(8) {
		out.push(0x00);
		out.extend_from_slice(chunk);
	}
	out
}

/// Generates a valid single-sprite GP file with `frame_count` chained
/// frames of `width × height` pixels, every pixel painted.
pub fn generate_test_gp_data(width: u8, height: i16, frame_count: usize) -> Vec<u8> {
	let mut records: Vec<Vec<u8>> = Vec::new();

	for frame in 0..frame_count {
		// One full-width run per line
		let mut shaper = Vec::with_capacity(3 * height as usize);
		for _ in 0..height {
			shaper.extend_from_slice(&[0x01, 0x00, width]);
		}

		let pixels: Vec<u8> = (0..u32::from(width) * height as u32)
			.map(|i| (i as usize * 7 + frame) as u8)
			.collect();
		let painter = compress_literals(&pixels);

		let coff = (23 + shaper.len()) as u32;
		let clen = pixels.len() as u32;
		let record_len = 23 + shaper.len() + painter.len();
		let next = if frame + 1 == frame_count {
			0i32
		} else {
			record_len as i32
		};

		let mut record = Vec::with_capacity(record_len);
		record.extend_from_slice(&next.to_le_bytes());
		record.extend_from_slice(&0i16.to_le_bytes()); // dx
		record.extend_from_slice(&0i16.to_le_bytes()); // dy
		record.extend_from_slice(&i16::from(width).to_le_bytes());
		record.extend_from_slice(&height.to_le_bytes());
		record.extend_from_slice(&0u32.to_le_bytes()); // pack
		record.push(0); // options: standard
		record.extend_from_slice(&((clen << 14) | coff).to_le_bytes());
		record.extend_from_slice(&height.to_le_bytes()); // lines
		record.extend_from_slice(&shaper);
		record.extend_from_slice(&painter);
		records.push(record);
	}

	let first_frame_offset = 14 + 4;
	let voc_offset = first_frame_offset + records.iter().map(Vec::len).sum::<usize>();

	let mut data = Vec::new();
	data.extend_from_slice(b"GP\0\0");
	data.extend_from_slice(&1i16.to_le_bytes()); // pictures
	data.extend_from_slice(&0i16.to_le_bytes()); // reserved
	data.extend_from_slice(&(voc_offset as u32).to_le_bytes());
	data.extend_from_slice(&0u16.to_le_bytes()); // no dictionary
	data.extend_from_slice(&(first_frame_offset as u32).to_le_bytes());
	for record in records {
		data.extend_from_slice(&record);
	}
	data
}
