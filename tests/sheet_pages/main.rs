//! Integration tests for `sheetview-rs`: loading sheet folders and paging through them.

mod config;
mod extract;
mod pages;

use std::path::Path;

use image::{Rgba, RgbaImage};

/// Writes a sheet of `frames` solid frames, frame `i` filled with shade `i`.
pub(crate) fn write_sheet(dir: &Path, name: &str, frames: u32, frame_w: u32, frame_h: u32) {
	let sheet = RgbaImage::from_fn(frames * frame_w, frame_h, |x, _| {
		let shade = (x / frame_w.max(1)) as u8;
		Rgba([shade, shade, shade, 255])
	});
	sheet.save(dir.join(name)).unwrap();
}

/// Creates `root/group` and returns its path.
pub(crate) fn group_dir(root: &Path, group: &str) -> std::path::PathBuf {
	let dir = root.join(group);
	std::fs::create_dir_all(&dir).unwrap();
	dir
}
