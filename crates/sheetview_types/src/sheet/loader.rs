//! Spritesheet loading and slicing.
//!
//! A sheet is a single image holding every frame of one action side by side. The
//! loader walks a folder of sheets, validates each one against the expected frame
//! size and cuts it into independent frames.
//!
//! Failure handling differs by cause:
//! - a file that cannot be decoded is logged and skipped
//! - a readable sheet whose size does not fit the frame size aborts the whole folder

use std::path::{Path, PathBuf};

use image::RgbaImage;
use log::{debug, info, warn};

use super::{ActionMap, AnimationTable, FrameSequence, FrameSize};
use crate::color::ColorKey;
use crate::error::SheetError;

/// Decodes sheet files into RGBA buffers.
pub trait SheetDecoder {
	/// Decodes the image at `path`.
	///
	/// # Errors
	///
	/// Returns [`SheetError::Decode`] if the file is not a readable image.
	fn decode(&self, path: &Path) -> Result<RgbaImage, SheetError>;
}

/// Decoder backed by the `image` crate, accepting every format it was built with.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageDecoder;

impl SheetDecoder for ImageDecoder {
	fn decode(&self, path: &Path) -> Result<RgbaImage, SheetError> {
		image::open(path).map(|img| img.to_rgba8()).map_err(|e| SheetError::Decode {
			path: path.to_path_buf(),
			reason: e.to_string(),
		})
	}
}

/// Returns the action name of a sheet file: the file name up to its first `.`.
pub fn action_name(file_name: &str) -> &str {
	file_name.split('.').next().unwrap_or(file_name)
}

/// Validates a decoded sheet and cuts it into frames of `frame_width × frame_height`.
///
/// Frames are taken left to right starting at `x = 0`, each copied into its own
/// buffer.
///
/// # Errors
///
/// Returns an error if:
/// - the sheet height differs from `frame_height`
/// - the sheet width is not a multiple of `frame_width`
pub fn slice_sheet(
	name: &str,
	sheet: &RgbaImage,
	frame_width: u32,
	frame_height: u32,
) -> Result<FrameSequence, SheetError> {
	let (sheet_w, sheet_h) = sheet.dimensions();

	if sheet_h != frame_height {
		return Err(SheetError::HeightMismatch {
			name: name.to_string(),
			expected: frame_height,
			actual: sheet_h,
		});
	}
	if frame_width == 0 || sheet_w % frame_width != 0 {
		return Err(SheetError::WidthNotDivisible {
			name: name.to_string(),
			expected: frame_width,
			actual: sheet_w,
		});
	}

	let mut frames = FrameSequence::new(frame_width, frame_height);
	for x in (0..sheet_w).step_by(frame_width as usize) {
		frames.push(image::imageops::crop_imm(sheet, x, 0, frame_width, frame_height).to_image());
	}

	Ok(frames)
}

/// Loads folders of spritesheets below a common root.
#[derive(Debug, Clone)]
pub struct SheetLoader<D = ImageDecoder> {
	root: PathBuf,
	cell_size: u32,
	color_key: ColorKey,
	decoder: D,
}

impl SheetLoader<ImageDecoder> {
	/// Creates a loader decoding sheets with the `image` crate.
	///
	/// # Arguments
	///
	/// * `root` - Folder holding one sub-folder per group
	/// * `cell_size` - Base cell size in pixels
	/// * `color_key` - Color made transparent in every sheet
	///
	/// # Errors
	///
	/// Returns an error if:
	/// - `root` does not exist or is not a directory
	/// - `cell_size` is zero
	pub fn new(
		root: impl AsRef<Path>,
		cell_size: u32,
		color_key: ColorKey,
	) -> Result<Self, SheetError> {
		Self::with_decoder(root, cell_size, color_key, ImageDecoder)
	}
}

impl<D: SheetDecoder> SheetLoader<D> {
	/// Creates a loader with a custom decoder.
	///
	/// # Errors
	///
	/// Same as [`SheetLoader::new`].
	pub fn with_decoder(
		root: impl AsRef<Path>,
		cell_size: u32,
		color_key: ColorKey,
		decoder: D,
	) -> Result<Self, SheetError> {
		let root = root.as_ref();
		let root = match std::fs::canonicalize(root) {
			Ok(path) if path.is_dir() => path,
			_ => return Err(SheetError::InvalidDirectory(root.to_path_buf())),
		};
		if cell_size == 0 {
			return Err(SheetError::InvalidCellSize);
		}

		Ok(Self {
			root,
			cell_size,
			color_key,
			decoder,
		})
	}

	/// Returns the absolute root folder.
	pub fn root(&self) -> &Path {
		&self.root
	}

	/// Returns the cell size in pixels.
	pub fn cell_size(&self) -> u32 {
		self.cell_size
	}

	/// Returns the transparency key.
	pub fn color_key(&self) -> ColorKey {
		self.color_key
	}

	/// Loads every sheet of `root/folder` and registers the result in `table`
	/// under `folder`.
	///
	/// A group already present in the table is replaced in place.
	///
	/// # Errors
	///
	/// Returns an error if `frame_size` overflows in pixels, if the folder cannot
	/// be listed, or if any readable sheet does not match `frame_size`. Files that
	/// fail to decode are skipped.
	pub fn prepare<'t>(
		&self,
		table: &'t mut AnimationTable,
		folder: &str,
		frame_size: FrameSize,
	) -> Result<&'t ActionMap, SheetError> {
		let actions = self.load_folder(folder, frame_size)?;
		Ok(table.register(folder, actions))
	}

	/// Loads every sheet of `root/folder` without touching any table.
	///
	/// Files are visited in file name order. When two files share an action name
	/// the later one replaces the earlier.
	///
	/// # Errors
	///
	/// Same as [`SheetLoader::prepare`].
	pub fn load_folder(&self, folder: &str, frame_size: FrameSize) -> Result<ActionMap, SheetError> {
		let directory = self.root.join(folder);
		let (frame_w, frame_h) = frame_size.to_pixels(self.cell_size)?;

		let mut entries = std::fs::read_dir(&directory)?
			.map(|entry| entry.map(|e| e.path()))
			.collect::<Result<Vec<_>, _>>()?;
		entries.sort();

		let mut actions = ActionMap::new();
		for path in entries {
			let Some(file_name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
				continue;
			};
			if path.is_dir() {
				debug!("Skipping sub-folder {}", path.display());
				continue;
			}

			let mut sheet = match self.decoder.decode(&path) {
				Ok(sheet) => sheet,
				Err(e) => {
					warn!("{file_name} cannot be loaded! ({e})");
					continue;
				}
			};
			self.color_key.apply(&mut sheet);

			let frames = slice_sheet(&file_name, &sheet, frame_w, frame_h)?;
			debug!("{folder}/{file_name}: {} frames of {frame_w}x{frame_h}", frames.len());

			let name = action_name(&file_name).to_string();
			if actions.insert(name.clone(), frames).is_some() {
				debug!("{folder}/{file_name} replaces an earlier sheet for action '{name}'");
			}
		}

		info!("Loaded {} actions from {}", actions.len(), directory.display());
		Ok(actions)
	}
}
