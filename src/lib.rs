#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `sheetview-rs` slices spritesheets into per-action animation frames and renders a
//! paginated, navigable debug view of them.
//!
//! The heavy lifting lives in [`sheetview_types`]; this crate re-exports it together
//! with a prelude.
//!
pub use sheetview_types::*;

/// `use sheetview_rs::prelude::*;` to import commonly used items.
pub mod prelude {
	#[doc(inline)]
	pub use sheetview_types::prelude::*;

	#[doc(inline)]
	pub use sheetview_types;
}
