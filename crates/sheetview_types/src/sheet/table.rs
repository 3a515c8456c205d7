//! Animation table: group name → action name → frame sequence.

use ordermap::{OrderMap, map::Entry};

use super::FrameSequence;

/// Ordered mapping from action name to its frames.
pub type ActionMap = OrderMap<String, FrameSequence>;

/// One action row of the table, as visited by the page layout.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
	/// Group the action belongs to
	pub group: &'a str,
	/// Action name
	pub action: &'a str,
	/// Frames of the action
	pub frames: &'a FrameSequence,
	/// `true` for the first action of its group
	pub starts_group: bool,
}

/// All extracted frame sequences of a viewing session.
///
/// Iteration follows insertion order, which is also the order rows are laid out
/// in. Replacing an existing group keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnimationTable {
	groups: OrderMap<String, ActionMap>,
}

impl AnimationTable {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts or replaces the actions of a group, returning the previous ones.
	pub fn insert_group(&mut self, group: impl Into<String>, actions: ActionMap) -> Option<ActionMap> {
		self.groups.insert(group.into(), actions)
	}

	/// Inserts or replaces the actions of a group and returns the stored actions.
	pub fn register(&mut self, group: impl Into<String>, actions: ActionMap) -> &ActionMap {
		match self.groups.entry(group.into()) {
			Entry::Occupied(mut entry) => {
				entry.insert(actions);
				entry.into_mut()
			}
			Entry::Vacant(entry) => entry.insert(actions),
		}
	}

	/// Returns the actions of a group.
	pub fn group(&self, group: &str) -> Option<&ActionMap> {
		self.groups.get(group)
	}

	/// Returns the frames of one action.
	pub fn action(&self, group: &str, action: &str) -> Option<&FrameSequence> {
		self.groups.get(group)?.get(action)
	}

	/// Removes a group, keeping the order of the remaining ones.
	pub fn remove_group(&mut self, group: &str) -> Option<ActionMap> {
		self.groups.remove(group)
	}

	/// Number of groups.
	pub fn group_count(&self) -> usize {
		self.groups.len()
	}

	/// Total number of action rows across all groups.
	pub fn row_count(&self) -> usize {
		self.groups.values().map(OrderMap::len).sum()
	}

	/// Returns `true` if the table holds no groups.
	pub fn is_empty(&self) -> bool {
		self.groups.is_empty()
	}

	/// Iterates over `(group, actions)` pairs in insertion order.
	pub fn iter(&self) -> ordermap::map::Iter<'_, String, ActionMap> {
		self.groups.iter()
	}

	/// Iterates over every action row, flattened across groups.
	pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
		self.groups.iter().flat_map(|(group, actions)| {
			actions.iter().enumerate().map(move |(i, (action, frames))| Row {
				group,
				action,
				frames,
				starts_group: i == 0,
			})
		})
	}
}

impl<'a> IntoIterator for &'a AnimationTable {
	type Item = (&'a String, &'a ActionMap);
	type IntoIter = ordermap::map::Iter<'a, String, ActionMap>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}
