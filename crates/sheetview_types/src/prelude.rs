//! Prelude module for `sheetview_types`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```no_run
//! use sheetview_types::prelude::*;
//!
//! let table = AnimationTable::new();
//! let mut navigator = Navigator::new(3);
//! navigator.handle(InputEvent::Key(Key::Left));
//! ```

#[doc(inline)]
pub use crate::{ErrorKind, SheetError};

#[doc(inline)]
pub use crate::color::{ColorKey, NamedColor};

#[doc(inline)]
pub use crate::config::{GroupConfig, ViewerConfig, WindowConfig};

// Sheet types
#[doc(inline)]
pub use crate::sheet::{
	ActionMap, AnimationTable, FrameSequence, FrameSize, ImageDecoder, Row, SheetDecoder, SheetLoader,
};

// View types
#[doc(inline)]
pub use crate::view::{
	BitmapFont, DisplaySurface, GridPainter, InputEvent, Key, LineGrid, Navigator, PageLayout, PageSet,
	Screen, ScreenRegistry, SheetViewer, TextRenderer, VIEWER_SCREEN_NAME,
};
