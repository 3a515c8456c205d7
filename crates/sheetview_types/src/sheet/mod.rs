//! Spritesheet extraction.
//!
//! This module turns folders of spritesheets into an [`AnimationTable`]. Each
//! folder becomes a group, each sheet file an action, and each sheet is cut into
//! equally sized frames laid out side by side.
//!
//! # Usage Examples
//!
//! ```no_run
//! use sheetview_types::sheet::{AnimationTable, FrameSize, SheetLoader};
//! use sheetview_types::color::ColorKey;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let loader = SheetLoader::new("assets/sprites", 32, ColorKey::new(255, 255, 255))?;
//!
//! let mut table = AnimationTable::new();
//! loader.prepare(&mut table, "bob", FrameSize::new(1, 1)?)?;
//! loader.prepare(&mut table, "amy", FrameSize::new(2, 2)?)?;
//!
//! for row in table.rows() {
//!     println!("{}/{}: {} frames", row.group, row.action, row.frames.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod frame;
pub mod loader;
pub mod table;

pub use frame::{FrameSequence, FrameSize};
pub use loader::{ImageDecoder, SheetDecoder, SheetLoader, action_name, slice_sheet};
pub use table::{ActionMap, AnimationTable, Row};
