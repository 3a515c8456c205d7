//! Pagination, rescaling and navigation

use std::cell::Cell;

use image::{Rgba, RgbaImage};
use sheetview_rs::prelude::*;

use crate::{group_dir, write_sheet};

/// Grid painter that only counts how often it is used.
#[derive(Default)]
struct CountingGrid {
	calls: Cell<usize>,
}

impl GridPainter for CountingGrid {
	fn overlay(&self, canvas: RgbaImage, cell: (u32, u32), color: Rgba<u8>) -> RgbaImage {
		self.calls.set(self.calls.get() + 1);
		LineGrid.overlay(canvas, cell, color)
	}
}

fn thirteen_actions() -> AnimationTable {
	let root = tempfile::tempdir().unwrap();
	let bob = group_dir(root.path(), "bob");
	for i in 0..13 {
		write_sheet(&bob, &format!("act{i:02}.png"), (i % 4) + 1, 16, 16);
	}

	let loader = SheetLoader::new(root.path(), 16, ColorKey::default()).unwrap();
	let mut table = AnimationTable::new();
	loader.prepare(&mut table, "bob", FrameSize::unit()).unwrap();
	table
}

#[test_log::test]
fn test_thirteen_actions_make_two_pages() {
	let table = thirteen_actions();
	assert_eq!(table.row_count(), 13);

	let layout = PageLayout::new(16, 12).unwrap();
	let grid = CountingGrid::default();
	let pages = layout.layout(&table, &BitmapFont::default(), &grid, (1920, 1080));

	assert_eq!(pages.len(), 2);
	assert_eq!(grid.calls.get(), 2);
	// widest row has 4 frames of 16px, plus the name column
	assert_eq!((pages.width(), pages.height()), (80, 192));
	assert!(pages.pages().iter().all(|p| p.dimensions() == (80, 192)));
}

#[test]
fn test_page_count_formula() {
	let layout = PageLayout::new(8, 5).unwrap();
	for rows in 0..30usize {
		let expected = if rows == 0 {
			1
		} else {
			rows.div_ceil(5)
		};
		assert_eq!(layout.page_count(rows), expected);
	}
}

#[test]
fn test_empty_table_has_one_page() {
	let layout = PageLayout::new(32, 12).unwrap();
	let pages = layout.layout(&AnimationTable::new(), &BitmapFont::default(), &LineGrid, (640, 480));
	assert_eq!(pages.len(), 1);
}

#[test]
fn test_oversized_pages_are_rescaled_together() {
	let table = thirteen_actions();
	let layout = PageLayout::new(16, 12).unwrap();
	let pages = layout.layout(&table, &BitmapFont::default(), &LineGrid, (40, 96));

	// ratio = min(40/80, 96/192) = 0.5
	assert_eq!((pages.width(), pages.height()), (40, 96));
	assert!(pages.pages().iter().all(|p| p.dimensions() == (40, 96)));
	assert_eq!(pages.offset(), (0, 0));
}

#[test]
fn test_viewer_navigation_wraps() {
	let table = thirteen_actions();
	let layout = PageLayout::new(16, 4).unwrap();
	let mut viewer = SheetViewer::new(table, layout);
	viewer.initialize((1024, 768));

	let total = viewer.pages().map(PageSet::len).unwrap();
	assert_eq!(total, 4);

	for n in 0..10 {
		assert_eq!(viewer.navigator().current(), n % total);
		viewer.handle_input(InputEvent::Key(Key::Right));
	}

	let mut nav = Navigator::new(total);
	nav.retreat();
	assert_eq!(nav.current(), total - 1);
}

#[test]
fn test_registry_drives_viewer() {
	let table = thirteen_actions();
	let layout = PageLayout::new(16, 12).unwrap();
	let mut registry = ScreenRegistry::new();
	registry.register(Box::new(SheetViewer::new(table, layout)));

	assert_eq!(VIEWER_SCREEN_NAME, "Spritesheet");
	assert_eq!(registry.names().collect::<Vec<_>>(), vec![VIEWER_SCREEN_NAME]);

	let mut window = RgbaImage::new(320, 240);
	let screen = registry.get_mut(VIEWER_SCREEN_NAME).unwrap();
	screen.initialize(window.size());
	screen.handle_input(InputEvent::PointerPress);
	screen.update(1.0 / 60.0);
	screen.render(&mut window);

	assert_eq!(window.get_pixel(0, 0), &NamedColor::DarkGrey.rgba());
}
