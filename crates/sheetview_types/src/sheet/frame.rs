//! Frame sizes and frame sequences.

use std::fmt;

use image::RgbaImage;

use crate::error::SheetError;

/// Expected size of a single frame, measured in grid cells.
///
/// The pixel size is obtained by multiplying both dimensions by the cell size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameSize {
	/// Width in cells
	pub width: u32,
	/// Height in cells
	pub height: u32,
}

impl FrameSize {
	/// Creates a new frame size.
	///
	/// # Errors
	///
	/// Returns [`SheetError::InvalidFrameSize`] if either dimension is zero.
	pub fn new(width: u32, height: u32) -> Result<Self, SheetError> {
		if width == 0 || height == 0 {
			return Err(SheetError::InvalidFrameSize {
				width,
				height,
			});
		}

		Ok(Self {
			width,
			height,
		})
	}

	/// A frame that occupies exactly one cell.
	pub const fn unit() -> Self {
		Self {
			width: 1,
			height: 1,
		}
	}

	/// Returns the frame size in pixels for the given cell size.
	///
	/// # Errors
	///
	/// Returns [`SheetError::InvalidFrameSize`] if a dimension overflows `u32`.
	pub fn to_pixels(&self, cell_size: u32) -> Result<(u32, u32), SheetError> {
		match (self.width.checked_mul(cell_size), self.height.checked_mul(cell_size)) {
			(Some(w), Some(h)) => Ok((w, h)),
			_ => Err(SheetError::InvalidFrameSize {
				width: self.width,
				height: self.height,
			}),
		}
	}
}

impl TryFrom<(u32, u32)> for FrameSize {
	type Error = SheetError;

	fn try_from((width, height): (u32, u32)) -> Result<Self, Self::Error> {
		Self::new(width, height)
	}
}

impl fmt::Display for FrameSize {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}×{} cells", self.width, self.height)
	}
}

/// Ordered frames of one action.
///
/// Every frame owns its own pixel buffer and all frames share the same size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSequence {
	frame_width: u32,
	frame_height: u32,
	frames: Vec<RgbaImage>,
}

impl FrameSequence {
	/// Creates an empty sequence for frames of the given pixel size.
	pub fn new(frame_width: u32, frame_height: u32) -> Self {
		Self {
			frame_width,
			frame_height,
			frames: Vec::new(),
		}
	}

	/// Appends a frame.
	///
	/// # Panics
	///
	/// Panics if the frame size differs from the sequence's frame size.
	pub fn push(&mut self, frame: RgbaImage) {
		assert_eq!(
			frame.dimensions(),
			(self.frame_width, self.frame_height),
			"Frame size mismatch"
		);
		self.frames.push(frame);
	}

	/// Returns the frame width in pixels.
	#[inline]
	pub fn frame_width(&self) -> u32 {
		self.frame_width
	}

	/// Returns the frame height in pixels.
	#[inline]
	pub fn frame_height(&self) -> u32 {
		self.frame_height
	}

	/// Returns the number of frames.
	#[inline]
	pub fn len(&self) -> usize {
		self.frames.len()
	}

	/// Returns `true` if the sequence has no frames.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.frames.is_empty()
	}

	/// Width of the whole row in pixels (frame width × frame count), saturating
	/// at `u32::MAX`.
	#[inline]
	pub fn row_width(&self) -> u32 {
		u32::try_from(self.frames.len())
			.ok()
			.and_then(|count| self.frame_width.checked_mul(count))
			.unwrap_or(u32::MAX)
	}

	/// Returns the frame at `index`.
	pub fn get(&self, index: usize) -> Option<&RgbaImage> {
		self.frames.get(index)
	}

	/// Returns a mutable reference to the frame at `index`.
	pub fn get_mut(&mut self, index: usize) -> Option<&mut RgbaImage> {
		self.frames.get_mut(index)
	}

	/// Returns all frames.
	pub fn frames(&self) -> &[RgbaImage] {
		&self.frames
	}

	/// Returns an iterator over the frames.
	pub fn iter(&self) -> std::slice::Iter<'_, RgbaImage> {
		self.frames.iter()
	}
}

impl<'a> IntoIterator for &'a FrameSequence {
	type Item = &'a RgbaImage;
	type IntoIter = std::slice::Iter<'a, RgbaImage>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}
