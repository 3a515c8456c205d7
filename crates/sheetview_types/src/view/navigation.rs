//! Page navigation state machine.

/// Keys the viewer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
	/// Left arrow
	Left,
	/// Right arrow
	Right,
	/// Space bar
	Space,
	/// Any other key
	Other,
}

/// Input events dispatched by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
	/// Mouse button or touch press
	PointerPress,
	/// Key press
	Key(Key),
}

/// Current page of a paginated view.
///
/// The index always stays within `0..total` and wraps around in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
	index: usize,
	total: usize,
}

impl Navigator {
	/// Creates a navigator at page 0. A total of 0 is treated as 1.
	pub fn new(total: usize) -> Self {
		Self {
			index: 0,
			total: total.max(1),
		}
	}

	/// Returns the current page index.
	#[inline]
	pub fn current(&self) -> usize {
		self.index
	}

	/// Returns the number of pages.
	#[inline]
	pub fn total(&self) -> usize {
		self.total
	}

	/// Moves to the next page, wrapping to the first.
	pub fn advance(&mut self) -> usize {
		self.index = (self.index + 1) % self.total;
		self.index
	}

	/// Moves to the previous page, wrapping to the last.
	pub fn retreat(&mut self) -> usize {
		self.index = (self.index + self.total - 1) % self.total;
		self.index
	}

	/// Applies an input event.
	///
	/// Pointer presses, right arrow and space advance; left arrow retreats.
	/// Returns `true` if the event was consumed.
	pub fn handle(&mut self, event: InputEvent) -> bool {
		match event {
			InputEvent::PointerPress | InputEvent::Key(Key::Right | Key::Space) => {
				self.advance();
				true
			}
			InputEvent::Key(Key::Left) => {
				self.retreat();
				true
			}
			InputEvent::Key(Key::Other) => false,
		}
	}
}
