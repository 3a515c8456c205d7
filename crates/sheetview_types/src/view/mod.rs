//! Paginated debug view of an animation table.
//!
//! The view lays every action of an [`AnimationTable`](crate::sheet::AnimationTable)
//! out as one row, splits the rows across equally sized pages that fit the host
//! surface, and lets the user flip through them.
//!
//! # Usage Examples
//!
//! ```no_run
//! use sheetview_types::sheet::AnimationTable;
//! use sheetview_types::view::{DisplaySurface, InputEvent, PageLayout, Screen, SheetViewer};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let table = AnimationTable::new();
//! let mut viewer = SheetViewer::new(table, PageLayout::new(32, 12)?);
//!
//! let mut window = image::RgbaImage::new(1280, 720);
//! viewer.initialize(window.size());
//! viewer.handle_input(InputEvent::PointerPress);
//! viewer.render(&mut window);
//! # Ok(())
//! # }
//! ```

pub mod grid;
pub mod layout;
pub mod navigation;
pub mod screen;
pub mod text;

pub use grid::{GridPainter, LineGrid};
pub use layout::{PageLayout, PageSet};
pub use navigation::{InputEvent, Key, Navigator};
pub use screen::{DisplaySurface, Screen, ScreenRegistry, SheetViewer, VIEWER_SCREEN_NAME};
pub use text::{BitmapFont, TextRenderer};
