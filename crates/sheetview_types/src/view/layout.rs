//! Page layout: sizing, pagination, rendering and rescaling.
//!
//! Every action of an [`AnimationTable`] becomes one row of `cell_size` pixels.
//! The first cell of a row holds the action name, the frames follow left to
//! right, each tagged with its index. Rows are split across pages of at most
//! `max_rows_per_page` rows, all pages sharing one canvas size.
//!
//! ```text
//! +------+------+------+------+
//! | bob  |  0   |  1   |      |
//! | idle | ░░░  | ░░░  |      |
//! +------+------+------+------+
//! |      |  0   |  1   |  2   |
//! | run  | ▓▓▓  | ▓▓▓  | ▓▓▓  |
//! +------+------+------+------+
//! ```

use image::{Rgba, RgbaImage, imageops};
use log::debug;

use super::grid::GridPainter;
use super::text::TextRenderer;
use crate::color::NamedColor;
use crate::error::SheetError;
use crate::sheet::AnimationTable;

/// Offset of group headers from the top-left corner of their row
pub const LABEL_INSET: u32 = 10;

/// Offset of frame index labels from the top-left corner of their frame
pub const INDEX_INSET: (u32, u32) = (10, 3);

/// Pixels removed from both sides of an action label that is wider than a cell
pub const LABEL_SHRINK: u32 = 5;

/// Pages with fewer rows than this get extra margin when rescaled
pub const DENSE_PAGE_ROWS: usize = 6;

/// Extra scale factor applied to sparse pages
pub const SPARSE_PAGE_DAMPENING: f64 = 0.75;

/// Grid line color
pub const GRID_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Rendered pages, all of the same size, and where to draw them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSet {
	pages: Vec<RgbaImage>,
	width: u32,
	height: u32,
	offset: (i64, i64),
}

impl PageSet {
	/// Returns all pages.
	pub fn pages(&self) -> &[RgbaImage] {
		&self.pages
	}

	/// Returns the page at `index`.
	pub fn page(&self, index: usize) -> Option<&RgbaImage> {
		self.pages.get(index)
	}

	/// Number of pages, at least 1.
	pub fn len(&self) -> usize {
		self.pages.len()
	}

	/// Returns `true` if the set holds no pages. Sets built by
	/// [`PageLayout::layout`] always hold at least one.
	pub fn is_empty(&self) -> bool {
		self.pages.is_empty()
	}

	/// Page width in pixels.
	pub fn width(&self) -> u32 {
		self.width
	}

	/// Page height in pixels.
	pub fn height(&self) -> u32 {
		self.height
	}

	/// Top-left corner that centers a page in the display area.
	pub fn offset(&self) -> (i64, i64) {
		self.offset
	}

	/// Consumes the set, returning the pages.
	pub fn into_pages(self) -> Vec<RgbaImage> {
		self.pages
	}
}

/// Layout parameters for the paginated view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
	cell_size: u32,
	max_rows_per_page: usize,
}

impl PageLayout {
	/// Default number of rows per page
	pub const DEFAULT_MAX_ROWS: usize = 12;

	/// Creates a layout.
	///
	/// # Errors
	///
	/// Returns [`SheetError::InvalidLayout`] if either value is zero.
	pub fn new(cell_size: u32, max_rows_per_page: usize) -> Result<Self, SheetError> {
		if cell_size == 0 || max_rows_per_page == 0 {
			return Err(SheetError::InvalidLayout {
				cell_size,
				max_rows: max_rows_per_page,
			});
		}

		Ok(Self {
			cell_size,
			max_rows_per_page,
		})
	}

	/// Returns the cell size in pixels.
	pub fn cell_size(&self) -> u32 {
		self.cell_size
	}

	/// Returns the maximum number of rows per page.
	pub fn max_rows_per_page(&self) -> usize {
		self.max_rows_per_page
	}

	/// Number of pages needed for `rows` rows, at least 1.
	pub fn page_count(&self, rows: usize) -> usize {
		rows.div_ceil(self.max_rows_per_page).max(1)
	}

	/// Unscaled page size for `table`.
	///
	/// The width fits the widest row plus the name column, the height fits as
	/// many rows as one page holds.
	pub fn page_size(&self, table: &AnimationTable) -> (u32, u32) {
		let widest = table.rows().map(|row| row.frames.row_width()).max().unwrap_or(0);
		let rows = u32::try_from(table.row_count().min(self.max_rows_per_page)).unwrap_or(u32::MAX);
		(widest.saturating_add(self.cell_size), rows.saturating_mul(self.cell_size))
	}

	/// Sizes, renders and rescales the pages of `table` to fit `area`.
	pub fn layout<T, G>(&self, table: &AnimationTable, text: &T, grid: &G, area: (u32, u32)) -> PageSet
	where
		T: TextRenderer + ?Sized,
		G: GridPainter + ?Sized,
	{
		let pages = self.render(table, text, grid);
		self.rescale(pages, area)
	}

	/// Renders every page at its unscaled size.
	///
	/// Each page receives exactly one grid overlay once its rows are drawn.
	pub fn render<T, G>(&self, table: &AnimationTable, text: &T, grid: &G) -> Vec<RgbaImage>
	where
		T: TextRenderer + ?Sized,
		G: GridPainter + ?Sized,
	{
		let cell = self.cell_size;
		let (width, height) = self.page_size(table);
		let total = self.page_count(table.row_count());
		debug!("Laying out {} rows on {total} pages of {width}x{height}", table.row_count());

		let mut pages: Vec<RgbaImage> = (0..total).map(|_| RgbaImage::new(width, height)).collect();
		let mut slot = 0usize;
		let mut page = 0usize;

		for (group, actions) in table {
			let header = text.render(group, NamedColor::Gold);
			blit(&mut pages[page], &header, LABEL_INSET, row_y(slot, cell) + LABEL_INSET);

			for (action, frames) in actions {
				let y = row_y(slot, cell);
				let canvas = &mut pages[page];

				let mut label = text.render(action, NamedColor::White);
				if label.width() > cell {
					label = shrink(&label, cell);
				}
				let label_x = i64::from(cell / 2) - i64::from(label.width() / 2);
				let label_y = i64::from(y + cell / 2) - i64::from(label.height() / 2);
				imageops::overlay(canvas, &label, label_x, label_y);

				for (col, frame) in frames.iter().enumerate() {
					let x = cell + col as u32 * frames.frame_width();
					blit(canvas, frame, x, y);

					let index = text.render(&col.to_string(), NamedColor::Red);
					blit(canvas, &index, x + INDEX_INSET.0, y + INDEX_INSET.1);
				}

				slot += 1;
				if slot >= self.max_rows_per_page && page != total - 1 {
					paint_grid(&mut pages[page], grid, cell);
					page += 1;
					slot = 0;
				}
			}
		}

		paint_grid(&mut pages[page], grid, cell);
		pages
	}

	/// Shrinks every page uniformly when it does not fit `area`, and computes the
	/// centered offset.
	pub fn rescale(&self, pages: Vec<RgbaImage>, (area_w, area_h): (u32, u32)) -> PageSet {
		let (mut width, mut height) = pages.first().map(RgbaImage::dimensions).unwrap_or((0, 0));
		let mut pages = pages;

		if width > area_w || height > area_h {
			let mut ratio = f64::min(
				f64::from(area_w) / f64::from(width),
				f64::from(area_h) / f64::from(height),
			);
			if self.max_rows_per_page < DENSE_PAGE_ROWS {
				ratio *= SPARSE_PAGE_DAMPENING;
			}

			let new_w = (f64::from(width) * ratio) as u32;
			let new_h = (f64::from(height) * ratio) as u32;
			debug!("Rescaling pages from {width}x{height} to {new_w}x{new_h} (ratio {ratio:.3})");

			pages = pages
				.into_iter()
				.map(|page| {
					if page.width() == 0 || page.height() == 0 || new_w == 0 || new_h == 0 {
						RgbaImage::new(new_w, new_h)
					} else {
						imageops::resize(&page, new_w, new_h, imageops::FilterType::Nearest)
					}
				})
				.collect();
			width = new_w;
			height = new_h;
		}

		let offset = (
			(i64::from(area_w) - i64::from(width)).div_euclid(2),
			(i64::from(area_h) - i64::from(height)).div_euclid(2),
		);

		PageSet {
			pages,
			width,
			height,
			offset,
		}
	}
}

#[inline]
fn row_y(slot: usize, cell: u32) -> u32 {
	slot as u32 * cell
}

/// Alpha-composites `top` onto `canvas`, clipping at the canvas edges.
#[inline]
fn blit(canvas: &mut RgbaImage, top: &RgbaImage, x: u32, y: u32) {
	imageops::overlay(canvas, top, i64::from(x), i64::from(y));
}

/// Squeezes a label that is wider than a cell.
fn shrink(label: &RgbaImage, cell: u32) -> RgbaImage {
	let w = cell.saturating_sub(LABEL_SHRINK).max(1);
	let h = label.height().saturating_sub(LABEL_SHRINK).max(1);
	imageops::resize(label, w, h, imageops::FilterType::Nearest)
}

fn paint_grid<G: GridPainter + ?Sized>(canvas: &mut RgbaImage, grid: &G, cell: u32) {
	let finished = std::mem::replace(canvas, RgbaImage::new(0, 0));
	*canvas = grid.overlay(finished, (cell, cell), GRID_COLOR);
}
