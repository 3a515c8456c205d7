//! Host integration: display surfaces, screens and the spritesheet viewer.

use image::{Rgba, RgbaImage, imageops};
use log::{debug, info};
use ordermap::OrderMap;

use super::grid::{GridPainter, LineGrid};
use super::layout::{PageLayout, PageSet};
use super::navigation::{InputEvent, Navigator};
use super::text::{BitmapFont, TextRenderer};
use crate::color::NamedColor;
use crate::sheet::AnimationTable;

/// A drawable window area owned by the host.
pub trait DisplaySurface {
	/// Returns `(win_w, win_h)`.
	fn size(&self) -> (u32, u32);

	/// Fills the whole surface.
	fn fill(&mut self, color: Rgba<u8>);

	/// Draws `image` with its top-left corner at `(x, y)`, clipped to the surface.
	fn blit(&mut self, image: &RgbaImage, x: i64, y: i64);
}

/// Software surface, used for headless hosts and tests.
impl DisplaySurface for RgbaImage {
	fn size(&self) -> (u32, u32) {
		self.dimensions()
	}

	fn fill(&mut self, color: Rgba<u8>) {
		for pixel in self.pixels_mut() {
			*pixel = color;
		}
	}

	fn blit(&mut self, image: &RgbaImage, x: i64, y: i64) {
		imageops::overlay(self, image, x, y);
	}
}

/// Capabilities a host expects from a screen it drives.
pub trait Screen {
	/// Name the screen is registered under.
	fn name(&self) -> &str;

	/// Prepares the screen for a surface of `surface_size` pixels.
	fn initialize(&mut self, surface_size: (u32, u32));

	/// Reacts to one input event.
	fn handle_input(&mut self, event: InputEvent);

	/// Draws the screen once per host tick.
	fn render(&self, surface: &mut dyn DisplaySurface);

	/// Advances time-based state by `dt` seconds.
	fn update(&mut self, dt: f64);
}

/// Screens known to a host, in registration order.
#[derive(Default)]
pub struct ScreenRegistry {
	screens: OrderMap<String, Box<dyn Screen>>,
}

impl ScreenRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a screen under its name, returning any screen it replaces.
	pub fn register(&mut self, screen: Box<dyn Screen>) -> Option<Box<dyn Screen>> {
		let name = screen.name().to_string();
		debug!("Registering screen '{name}'");
		self.screens.insert(name, screen)
	}

	/// Returns a registered screen.
	pub fn get(&self, name: &str) -> Option<&dyn Screen> {
		self.screens.get(name).map(|screen| &**screen)
	}

	/// Returns a registered screen for mutation.
	pub fn get_mut(&mut self, name: &str) -> Option<&mut Box<dyn Screen>> {
		self.screens.get_mut(name)
	}

	/// Names of all registered screens.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.screens.keys().map(String::as_str)
	}

	/// Number of registered screens.
	pub fn len(&self) -> usize {
		self.screens.len()
	}

	/// Returns `true` if no screen is registered.
	pub fn is_empty(&self) -> bool {
		self.screens.is_empty()
	}
}

/// Paginated debug view of an [`AnimationTable`].
///
/// Pages are rendered once in [`Screen::initialize`], sized for the host
/// surface. Afterwards input only swaps which page is drawn.
pub struct SheetViewer<T = BitmapFont, G = LineGrid> {
	table: AnimationTable,
	layout: PageLayout,
	text: T,
	grid: G,
	pages: Option<PageSet>,
	navigator: Navigator,
}

/// Name the spritesheet viewer registers under
pub const VIEWER_SCREEN_NAME: &str = "Spritesheet";

impl SheetViewer {
	/// Creates a viewer with the built-in font and grid.
	pub fn new(table: AnimationTable, layout: PageLayout) -> Self {
		Self::with_renderers(table, layout, BitmapFont::default(), LineGrid)
	}
}

impl<T: TextRenderer, G: GridPainter> SheetViewer<T, G> {
	/// Creates a viewer with custom label and grid renderers.
	pub fn with_renderers(table: AnimationTable, layout: PageLayout, text: T, grid: G) -> Self {
		Self {
			table,
			layout,
			text,
			grid,
			pages: None,
			navigator: Navigator::new(1),
		}
	}

	/// Returns the table being viewed.
	pub fn table(&self) -> &AnimationTable {
		&self.table
	}

	/// Returns the rendered pages, once initialized.
	pub fn pages(&self) -> Option<&PageSet> {
		self.pages.as_ref()
	}

	/// Returns the navigation state.
	pub fn navigator(&self) -> &Navigator {
		&self.navigator
	}

	/// Returns the page currently displayed, once initialized.
	pub fn current_page(&self) -> Option<&RgbaImage> {
		self.pages.as_ref()?.page(self.navigator.current())
	}
}

impl<T: TextRenderer, G: GridPainter> Screen for SheetViewer<T, G> {
	fn name(&self) -> &str {
		VIEWER_SCREEN_NAME
	}

	fn initialize(&mut self, surface_size: (u32, u32)) {
		if self.pages.is_some() {
			return;
		}

		let pages = self.layout.layout(&self.table, &self.text, &self.grid, surface_size);
		info!(
			"Rendered {} pages of {}x{} for a {}x{} surface",
			pages.len(),
			pages.width(),
			pages.height(),
			surface_size.0,
			surface_size.1
		);
		self.navigator = Navigator::new(pages.len());
		self.pages = Some(pages);
	}

	fn handle_input(&mut self, event: InputEvent) {
		if self.pages.is_none() {
			return;
		}
		if self.navigator.handle(event) {
			debug!("Showing page {}/{}", self.navigator.current() + 1, self.navigator.total());
		}
	}

	fn render(&self, surface: &mut dyn DisplaySurface) {
		surface.fill(NamedColor::DarkGrey.rgba());

		let Some(pages) = &self.pages else {
			return;
		};
		if let Some(page) = pages.page(self.navigator.current()) {
			let (x, y) = pages.offset();
			surface.blit(page, x, y);
		}
	}

	fn update(&mut self, _dt: f64) {}
}
