//! Grid overlay drawn over finished pages.

use image::{Rgba, RgbaImage};

/// Draws cell grids over canvases.
pub trait GridPainter {
	/// Draws grid lines every `cell.0` pixels horizontally and every `cell.1`
	/// pixels vertically, returning the painted canvas.
	fn overlay(&self, canvas: RgbaImage, cell: (u32, u32), color: Rgba<u8>) -> RgbaImage;
}

/// One pixel wide grid lines starting at the canvas origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineGrid;

impl GridPainter for LineGrid {
	fn overlay(&self, mut canvas: RgbaImage, (cell_w, cell_h): (u32, u32), color: Rgba<u8>) -> RgbaImage {
		let (width, height) = canvas.dimensions();

		if cell_w > 0 {
			for x in (0..width).step_by(cell_w as usize) {
				for y in 0..height {
					canvas.put_pixel(x, y, color);
				}
			}
		}
		if cell_h > 0 {
			for y in (0..height).step_by(cell_h as usize) {
				for x in 0..width {
					canvas.put_pixel(x, y, color);
				}
			}
		}

		canvas
	}
}
