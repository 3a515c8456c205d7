//! Text labels for the page view.

use image::{Rgba, RgbaImage};

use crate::color::NamedColor;

/// Renders strings into drawable labels.
pub trait TextRenderer {
	/// Renders `text` in `color` on a transparent background.
	///
	/// The label's size is the image's size.
	fn render(&self, text: &str, color: NamedColor) -> RgbaImage;
}

/// Glyph width in font pixels
const GLYPH_WIDTH: u32 = 3;

/// Glyph height in font pixels
const GLYPH_HEIGHT: u32 = 5;

/// Blank column between glyphs
const GLYPH_SPACING: u32 = 1;

/// Drawn for characters the font does not cover
const MISSING_GLYPH: [u8; 5] = [0b111, 0b111, 0b111, 0b111, 0b111];

/// Returns the rows of a 3×5 glyph, most significant of the 3 bits leftmost.
fn glyph_rows(c: char) -> [u8; 5] {
	match c.to_ascii_uppercase() {
		'0' => [7, 5, 5, 5, 7],
		'1' => [2, 6, 2, 2, 7],
		'2' => [7, 1, 7, 4, 7],
		'3' => [7, 1, 7, 1, 7],
		'4' => [5, 5, 7, 1, 1],
		'5' => [7, 4, 7, 1, 7],
		'6' => [7, 4, 7, 5, 7],
		'7' => [7, 1, 1, 1, 1],
		'8' => [7, 5, 7, 5, 7],
		'9' => [7, 5, 7, 1, 7],
		'A' => [2, 5, 7, 5, 5],
		'B' => [6, 5, 6, 5, 6],
		'C' => [3, 4, 4, 4, 3],
		'D' => [6, 5, 5, 5, 6],
		'E' => [7, 4, 6, 4, 7],
		'F' => [7, 4, 6, 4, 4],
		'G' => [3, 4, 5, 5, 3],
		'H' => [5, 5, 7, 5, 5],
		'I' => [7, 2, 2, 2, 7],
		'J' => [1, 1, 1, 5, 2],
		'K' => [5, 5, 6, 5, 5],
		'L' => [4, 4, 4, 4, 7],
		'M' => [5, 7, 7, 5, 5],
		'N' => [6, 5, 5, 5, 5],
		'O' => [2, 5, 5, 5, 2],
		'P' => [6, 5, 6, 4, 4],
		'Q' => [2, 5, 5, 6, 3],
		'R' => [6, 5, 6, 5, 5],
		'S' => [3, 4, 2, 1, 6],
		'T' => [7, 2, 2, 2, 2],
		'U' => [5, 5, 5, 5, 7],
		'V' => [5, 5, 5, 5, 2],
		'W' => [5, 5, 7, 7, 5],
		'X' => [5, 5, 2, 5, 5],
		'Y' => [5, 5, 2, 2, 2],
		'Z' => [7, 1, 2, 4, 7],
		' ' => [0, 0, 0, 0, 0],
		'_' => [0, 0, 0, 0, 7],
		'-' => [0, 0, 7, 0, 0],
		'.' => [0, 0, 0, 0, 2],
		':' => [0, 2, 0, 2, 0],
		'/' => [1, 1, 2, 4, 4],
		_ => MISSING_GLYPH,
	}
}

/// Built-in 3×5 pixel font, scaled by an integer factor.
///
/// Letters are rendered upper case. Characters outside digits, ASCII letters and
/// `_-.:/ ` are drawn as a filled box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapFont {
	scale: u32,
}

impl BitmapFont {
	/// Creates a font drawing every font pixel as a `scale × scale` block.
	pub fn new(scale: u32) -> Self {
		Self {
			scale: scale.max(1),
		}
	}

	/// Returns the scale factor.
	pub fn scale(&self) -> u32 {
		self.scale
	}

	/// Returns the pixel size `text` would render at.
	pub fn measure(&self, text: &str) -> (u32, u32) {
		let count = text.chars().count() as u32;
		let width = if count == 0 {
			0
		} else {
			(count * (GLYPH_WIDTH + GLYPH_SPACING) - GLYPH_SPACING) * self.scale
		};
		(width, GLYPH_HEIGHT * self.scale)
	}
}

impl Default for BitmapFont {
	fn default() -> Self {
		Self::new(2)
	}
}

impl TextRenderer for BitmapFont {
	fn render(&self, text: &str, color: NamedColor) -> RgbaImage {
		let (width, height) = self.measure(text);
		let mut label = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0]));
		let ink = color.rgba();
		let s = self.scale;

		for (i, c) in text.chars().enumerate() {
			let origin_x = i as u32 * (GLYPH_WIDTH + GLYPH_SPACING) * s;
			for (row, &bits) in glyph_rows(c).iter().enumerate() {
				for col in 0..GLYPH_WIDTH {
					if (bits >> (GLYPH_WIDTH - 1 - col)) & 1 == 0 {
						continue;
					}
					let x0 = origin_x + col * s;
					let y0 = row as u32 * s;
					for dy in 0..s {
						for dx in 0..s {
							label.put_pixel(x0 + dx, y0 + dy, ink);
						}
					}
				}
			}
		}

		label
	}
}
