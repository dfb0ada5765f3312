//! End-to-end extraction tests: container → palette → GP sprite → pixels.

use std::io::Read;

use gsc_rs::prelude::*;
use log::info;

/// Builds a one-sprite, one-frame GP file.
///
/// The frame is 4×1: one skipped pixel, then two painted with palette
/// indices 5 and 6.
fn build_gp_fixture() -> Vec<u8> {
	let shaper = [0x01u8, 0x01, 0x02];
	let painter = [0x00u8, 0x05, 0x06]; // LZSS: command byte + two literals

	let first_frame_offset = 14 + 4;
	let record_len = 23 + shaper.len() + painter.len();
	let voc_offset = first_frame_offset + record_len;
	let coff = (23 + shaper.len()) as u32;
	let clen = 2u32;

	let mut gp = Vec::new();
	gp.extend_from_slice(b"GP\0\0");
	gp.extend_from_slice(&1i16.to_le_bytes()); // pictures
	gp.extend_from_slice(&0i16.to_le_bytes()); // reserved
	gp.extend_from_slice(&(voc_offset as u32).to_le_bytes());
	gp.extend_from_slice(&0u16.to_le_bytes()); // empty dictionary

	gp.extend_from_slice(&(first_frame_offset as u32).to_le_bytes());

	// Frame header
	gp.extend_from_slice(&0i32.to_le_bytes()); // next
	gp.extend_from_slice(&0i16.to_le_bytes()); // dx
	gp.extend_from_slice(&0i16.to_le_bytes()); // dy
	gp.extend_from_slice(&4i16.to_le_bytes()); // lx
	gp.extend_from_slice(&1i16.to_le_bytes()); // ly
	gp.extend_from_slice(&0u32.to_le_bytes()); // pack
	gp.push(0); // options: standard
	gp.extend_from_slice(&((clen << 14) | coff).to_le_bytes());
	gp.extend_from_slice(&1i16.to_le_bytes()); // lines

	gp.extend_from_slice(&shaper);
	gp.extend_from_slice(&painter);
	gp
}

/// Builds a 256-entry RGB palette file with index 5 red and index 6 green.
fn build_palette_fixture() -> Vec<u8> {
	let mut pal = vec![0u8; 256 * 3];
	pal[5 * 3] = 0xFF; // index 5: red
	pal[6 * 3 + 1] = 0xFF; // index 6: green
	pal
}

/// Lays out an archive from `(logical_name, payload, flags)` triples.
fn build_archive(entries: &[(&[u8], Vec<u8>, u8)]) -> Vec<u8> {
	let mut data = Vec::new();
	data.extend_from_slice(b"GSCAS\0");
	data.extend_from_slice(&1u16.to_le_bytes());
	data.extend_from_slice(&0x78u16.to_le_bytes());
	data.extend_from_slice(&(entries.len() as u32).to_le_bytes());

	let mut offset = 0u32;
	for (name, payload, flags) in entries {
		let mut name_field = [0u8; 64];
		name_field[..name.len()].copy_from_slice(name);

		data.extend_from_slice(&[0xCA, 0xFE, 0xBA, 0xBE]);
		data.extend_from_slice(&name_field);
		data.extend_from_slice(&(!offset).to_le_bytes());
		data.extend_from_slice(&(payload.len() as u32).to_le_bytes());
		data.extend_from_slice(&0u32.to_le_bytes());
		data.push(*flags);

		offset += payload.len() as u32;
	}
	for (_, payload, _) in entries {
		data.extend_from_slice(payload);
	}
	data
}

fn obfuscate(data: &[u8]) -> Vec<u8> {
	data.iter().map(|b| b ^ 0x87).collect()
}

fn decode_palette(container: &Container, path: &str) -> Palette {
	let mut file = container.open(path).unwrap();
	PalDecoder::new(&mut file).decode(PalChannel::Rgb, 256).unwrap()
}

#[test_log::test]
fn test_extract_and_render_sprite() -> anyhow::Result<()> {
	let archive = build_archive(&[
		(&b"gfx\\pal\\unit.pal"[..], build_palette_fixture(), 0),
		(&b"gfx\\units\\cav.gp"[..], build_gp_fixture(), 0),
	]);
	let container = Container::from_bytes(archive)?;

	let palette = decode_palette(&container, "/gfx/pal/unit.pal");
	assert_eq!(palette.color(5), Color::rgb(255, 0, 0));
	assert_eq!(palette.color(6), Color::rgb(0, 255, 0));

	let mut file = container.open("/gfx/units/cav.gp")?;
	let gp = GpFile::from_reader(&mut file, &palette)?;
	info!("decoded {gp}");

	assert_eq!(gp.sprite_count(), 1);
	let sprite = gp.get_sprite(0).unwrap();
	assert_eq!(sprite.rect(), Rect::new(0, 0, 4, 1));

	let frame = sprite.get_frame(0).unwrap();
	assert_eq!(frame.frame_type(), GpFrameType::Standard);
	assert_eq!(frame.pixel(0, 0).unwrap(), Color::transparent());
	assert_eq!(frame.pixel(1, 0).unwrap(), Color::rgb(255, 0, 0));
	assert_eq!(frame.pixel(2, 0).unwrap(), Color::rgb(0, 255, 0));
	assert_eq!(frame.pixel(3, 0).unwrap(), Color::transparent());
	Ok(())
}

#[test_log::test]
fn test_obfuscated_gp_decodes_identically() {
	let gp_bytes = build_gp_fixture();
	let archive = build_archive(&[
		(&b"plain.gp"[..], gp_bytes.clone(), 0),
		(&b"hidden.gp"[..], obfuscate(&gp_bytes), 1),
	]);
	let container = Container::from_bytes(archive).unwrap();
	let palette = Palette::grayscale(256);

	let mut plain = Vec::new();
	container.open("/plain.gp").unwrap().read_to_end(&mut plain).unwrap();
	let mut hidden = Vec::new();
	container.open("/hidden.gp").unwrap().read_to_end(&mut hidden).unwrap();
	assert_eq!(plain, hidden);

	let from_plain = GpFile::from_bytes(&plain, &palette).unwrap();
	let from_hidden = GpFile::from_bytes(&hidden, &palette).unwrap();
	assert_eq!(
		from_plain.get_sprite(0).unwrap().get_frame(0).unwrap().canvas(),
		from_hidden.get_sprite(0).unwrap().get_frame(0).unwrap().canvas()
	);
}

#[test_log::test]
fn test_archive_tree_walk() {
	let archive = build_archive(&[
		(&b"gfx\\pal\\unit.pal"[..], vec![0; 12], 0),
		(&b"gfx\\units\\cav.gp"[..], vec![1; 34], 0),
		(&b"readme.txt"[..], vec![2; 5], 0),
	]);
	let container = Container::from_bytes(archive).unwrap();

	fn walk(entry: Entry<'_>, paths: &mut Vec<String>) {
		for child in entry.entries() {
			paths.push(child.path().to_string());
			if child.is_dir() {
				walk(child, paths);
			}
		}
	}

	let mut paths = Vec::new();
	walk(container.root(), &mut paths);
	assert_eq!(
		paths,
		[
			"/gfx",
			"/gfx/pal",
			"/gfx/pal/unit.pal",
			"/gfx/units",
			"/gfx/units/cav.gp",
			"/readme.txt",
		]
	);

	let entry = container.entry("/gfx/units/cav.gp").unwrap();
	assert_eq!(entry.size(), 34);
	assert_eq!(entry.hash(), hex::encode([0xCA, 0xFE, 0xBA, 0xBE]));
}
