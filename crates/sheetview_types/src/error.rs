//! Error types for sheet loading, layout and configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Coarse classification of a [`SheetError`].
///
/// Loading treats these classes differently: decode failures skip the file,
/// dimension mismatches abort the current folder, configuration errors abort setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
	/// Invalid setup (directory, color key, cell/frame size, layout limits)
	Configuration,
	/// A file could not be decoded as an image
	Decode,
	/// A readable sheet does not match the expected frame dimensions
	DimensionMismatch,
	/// Filesystem failure while listing a folder
	Io,
}

/// Errors that can occur when loading spritesheets or building the page view
#[derive(Debug, Error)]
pub enum SheetError {
	/// Root folder does not exist or is not a directory
	#[error("The folder path provided is invalid: {}", .0.display())]
	InvalidDirectory(PathBuf),

	/// Color key does not have exactly three components
	#[error("Color key must have exactly 3 RGB components, got {0}")]
	InvalidColorKeyLength(usize),

	/// Color key component outside 0..=255
	#[error("Color key component {value} at index {index} is outside 0..=255")]
	InvalidColorKey {
		/// Index of the offending component
		index: usize,
		/// Offending value
		value: i64,
	},

	/// Cell size of zero
	#[error("Cell size must be greater than zero")]
	InvalidCellSize,

	/// Frame size with a zero dimension
	#[error("Frame size must be positive, got {width}x{height} cells")]
	InvalidFrameSize {
		/// Width in cells
		width: u32,
		/// Height in cells
		height: u32,
	},

	/// Layout limits with a zero cell size or zero rows per page
	#[error("Invalid layout: cell size {cell_size}, max rows per page {max_rows}")]
	InvalidLayout {
		/// Cell size in pixels
		cell_size: u32,
		/// Rows per page
		max_rows: usize,
	},

	/// Sheet file could not be decoded
	#[error("{} cannot be loaded: {reason}", .path.display())]
	Decode {
		/// Path of the file
		path: PathBuf,
		/// Decoder message
		reason: String,
	},

	/// Sheet height differs from the expected frame height
	#[error("The height of <{name}>: {actual} does not equal the provided sprite height: {expected}")]
	HeightMismatch {
		/// Sheet file name
		name: String,
		/// Expected frame height in pixels
		expected: u32,
		/// Actual sheet height in pixels
		actual: u32,
	},

	/// Sheet width is not a multiple of the expected frame width
	#[error("The width of <{name}>: {actual} is not a multiple of the provided sprite width: {expected}")]
	WidthNotDivisible {
		/// Sheet file name
		name: String,
		/// Expected frame width in pixels
		expected: u32,
		/// Actual sheet width in pixels
		actual: u32,
	},

	/// Configuration source could not be read or deserialized
	#[error(transparent)]
	Config(#[from] ::config::ConfigError),

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}

impl SheetError {
	/// Returns the class of this error.
	pub fn kind(&self) -> ErrorKind {
		match self {
			Self::InvalidDirectory(_)
			| Self::InvalidColorKeyLength(_)
			| Self::InvalidColorKey {
				..
			}
			| Self::InvalidCellSize
			| Self::InvalidFrameSize {
				..
			}
			| Self::InvalidLayout {
				..
			}
			| Self::Config(_) => ErrorKind::Configuration,
			Self::Decode {
				..
			} => ErrorKind::Decode,
			Self::HeightMismatch {
				..
			}
			| Self::WidthNotDivisible {
				..
			} => ErrorKind::DimensionMismatch,
			Self::IOError(_) => ErrorKind::Io,
		}
	}

	/// Returns `true` if the error can be skipped while loading a folder.
	pub fn is_recoverable(&self) -> bool {
		self.kind() == ErrorKind::Decode
	}
}
