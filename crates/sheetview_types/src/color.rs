//! Color key and named label colors.

use std::fmt;

use image::Rgba;

use crate::error::SheetError;

/// RGB color treated as transparent when a sheet is decoded.
///
/// Every pixel whose RGB channels match the key exactly gets alpha 0 before the
/// sheet is sliced into frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorKey {
	/// Red component (0-255)
	pub r: u8,
	/// Green component (0-255)
	pub g: u8,
	/// Blue component (0-255)
	pub b: u8,
}

impl ColorKey {
	/// Creates a new color key.
	pub const fn new(r: u8, g: u8, b: u8) -> Self {
		Self {
			r,
			g,
			b,
		}
	}

	/// Builds a color key from loosely typed components, as read from configuration.
	///
	/// # Errors
	///
	/// Returns an error if:
	/// - `components` does not hold exactly 3 values
	/// - any value is outside `0..=255`
	pub fn from_components(components: &[i64]) -> Result<Self, SheetError> {
		let [r, g, b] = components else {
			return Err(SheetError::InvalidColorKeyLength(components.len()));
		};

		let mut rgb = [0u8; 3];
		for (index, (slot, &value)) in rgb.iter_mut().zip([r, g, b]).enumerate() {
			*slot = u8::try_from(value).map_err(|_| SheetError::InvalidColorKey {
				index,
				value,
			})?;
		}

		Ok(Self::new(rgb[0], rgb[1], rgb[2]))
	}

	/// Returns `true` if the pixel's RGB channels equal the key.
	#[inline]
	pub fn matches(&self, pixel: &Rgba<u8>) -> bool {
		pixel[0] == self.r && pixel[1] == self.g && pixel[2] == self.b
	}

	/// Clears the alpha channel of every matching pixel.
	pub fn apply(&self, image: &mut image::RgbaImage) {
		for pixel in image.pixels_mut() {
			if self.matches(pixel) {
				pixel[3] = 0;
			}
		}
	}
}

impl Default for ColorKey {
	/// White, the usual background of exported sheets.
	fn default() -> Self {
		Self::new(255, 255, 255)
	}
}

impl TryFrom<&[i64]> for ColorKey {
	type Error = SheetError;

	fn try_from(value: &[i64]) -> Result<Self, Self::Error> {
		Self::from_components(value)
	}
}

impl From<(u8, u8, u8)> for ColorKey {
	fn from((r, g, b): (u8, u8, u8)) -> Self {
		Self::new(r, g, b)
	}
}

impl fmt::Display for ColorKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "RGB({}, {}, {})", self.r, self.g, self.b)
	}
}

/// Named colors used by the page view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NamedColor {
	/// Default label color
	#[default]
	White,
	/// Group headers
	Gold,
	/// Frame indices
	Red,
	/// Host background
	DarkGrey,
}

impl NamedColor {
	/// Returns the opaque RGBA value of the color.
	pub const fn rgba(self) -> Rgba<u8> {
		match self {
			Self::White => Rgba([255, 255, 255, 255]),
			Self::Gold => Rgba([255, 215, 0, 255]),
			Self::Red => Rgba([255, 0, 0, 255]),
			Self::DarkGrey => Rgba([40, 40, 40, 255]),
		}
	}
}

impl From<NamedColor> for Rgba<u8> {
	fn from(color: NamedColor) -> Self {
		color.rgba()
	}
}
