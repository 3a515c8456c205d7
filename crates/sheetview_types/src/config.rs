//! Viewer configuration.
//!
//! Settings are read from a TOML file, with `SHEETVIEW_*` environment variables
//! overriding scalar values (e.g. `SHEETVIEW_CELL_SIZE=64`).
//!
//! ```toml
//! root = "assets/sprites"
//! cell_size = 32
//! color_key = [255, 255, 255]
//! max_rows_per_page = 12
//!
//! [window]
//! width = 1280
//! height = 720
//!
//! [[groups]]
//! folder = "bob"
//! frame_cells = [1, 1]
//! ```

use std::path::{Path, PathBuf};

use ::config::{Config, Environment, File, FileFormat};
use log::info;
use serde::Deserialize;

use crate::color::ColorKey;
use crate::error::SheetError;
use crate::sheet::{AnimationTable, FrameSize, SheetLoader};
use crate::view::PageLayout;

/// Prefix of environment overrides
pub const ENV_PREFIX: &str = "SHEETVIEW";

fn default_color_key() -> Vec<i64> {
	vec![255, 255, 255]
}

fn default_max_rows() -> usize {
	PageLayout::DEFAULT_MAX_ROWS
}

fn default_frame_cells() -> [u32; 2] {
	[1, 1]
}

/// Display area the pages are fitted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct WindowConfig {
	/// Width in pixels
	pub width: u32,
	/// Height in pixels
	pub height: u32,
}

impl Default for WindowConfig {
	fn default() -> Self {
		Self {
			width: 1280,
			height: 720,
		}
	}
}

/// One folder of sheets to load.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GroupConfig {
	/// Folder name below the root, also the group name
	pub folder: String,
	/// Frame size in cells, `[width, height]`
	#[serde(default = "default_frame_cells")]
	pub frame_cells: [u32; 2],
}

/// Complete viewer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ViewerConfig {
	/// Folder holding one sub-folder per group
	pub root: PathBuf,
	/// Base cell size in pixels
	pub cell_size: u32,
	/// Transparent color as `[r, g, b]`
	#[serde(default = "default_color_key")]
	pub color_key: Vec<i64>,
	/// Rows per page
	#[serde(default = "default_max_rows")]
	pub max_rows_per_page: usize,
	/// Display area
	#[serde(default)]
	pub window: WindowConfig,
	/// Folders to load, in display order
	#[serde(default)]
	pub groups: Vec<GroupConfig>,
}

impl ViewerConfig {
	/// Loads the configuration from a TOML file plus environment overrides.
	///
	/// # Errors
	///
	/// Returns [`SheetError::Config`] if the file cannot be read or a value has the
	/// wrong type.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SheetError> {
		let settings = Config::builder()
			.add_source(File::from(path.as_ref()))
			.add_source(
				Environment::with_prefix(ENV_PREFIX)
					.prefix_separator("_")
					.separator("__")
					.try_parsing(true),
			)
			.build()?;

		Ok(settings.try_deserialize()?)
	}

	/// Parses the configuration from TOML text, without environment overrides.
	///
	/// # Errors
	///
	/// Returns [`SheetError::Config`] on malformed input.
	pub fn from_toml_str(text: &str) -> Result<Self, SheetError> {
		let settings = Config::builder().add_source(File::from_str(text, FileFormat::Toml)).build()?;
		Ok(settings.try_deserialize()?)
	}

	/// Returns the validated color key.
	///
	/// # Errors
	///
	/// Returns an error if the key does not hold 3 values in `0..=255`.
	pub fn color_key(&self) -> Result<ColorKey, SheetError> {
		ColorKey::from_components(&self.color_key)
	}

	/// Returns the page layout.
	///
	/// # Errors
	///
	/// Returns an error if the cell size or rows per page is zero.
	pub fn layout(&self) -> Result<PageLayout, SheetError> {
		PageLayout::new(self.cell_size, self.max_rows_per_page)
	}

	/// Returns the display area as `(width, height)`.
	pub fn area(&self) -> (u32, u32) {
		(self.window.width, self.window.height)
	}

	/// Builds a loader for the configured root.
	///
	/// # Errors
	///
	/// Returns an error if the root, cell size or color key is invalid.
	pub fn loader(&self) -> Result<SheetLoader, SheetError> {
		SheetLoader::new(&self.root, self.cell_size, self.color_key()?)
	}

	/// Loads every configured group into a fresh table.
	///
	/// # Errors
	///
	/// Returns the first configuration or dimension error encountered.
	pub fn load_table(&self) -> Result<AnimationTable, SheetError> {
		let loader = self.loader()?;
		let mut table = AnimationTable::new();

		for group in &self.groups {
			let [w, h] = group.frame_cells;
			loader.prepare(&mut table, &group.folder, FrameSize::new(w, h)?)?;
		}

		info!("Loaded {} groups with {} actions", table.group_count(), table.row_count());
		Ok(table)
	}
}
