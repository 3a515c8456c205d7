//! This crate provides the spritesheet slicing and page view types for the `sheetview-rs` project.
//!
//! # Modules
//!
//! - **sheet**: Validates spritesheets and cuts them into per-action frame sequences
//! - **view**: Lays an animation table out as equally sized pages and navigates them
//! - **config**: TOML/environment configuration for a viewing session
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```no_run
//! use sheetview_types::prelude::*;
//!
//! # fn main() -> Result<(), SheetError> {
//! let loader = SheetLoader::new("assets/sprites", 32, ColorKey::new(255, 255, 255))?;
//! let mut table = AnimationTable::new();
//! loader.prepare(&mut table, "bob", FrameSize::unit())?;
//!
//! let layout = PageLayout::new(32, 12)?;
//! let pages = layout.layout(&table, &BitmapFont::default(), &LineGrid, (1280, 720));
//! println!("{} pages", pages.len());
//! # Ok(())
//! # }
//! ```

pub mod color;
pub mod config;
mod error;
pub mod sheet;
pub mod view;

/// `use sheetview_types::prelude::*;` to import commonly used items.
pub mod prelude;

pub use error::{ErrorKind, SheetError};
