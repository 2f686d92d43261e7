use thiserror::Error;

use super::types::Category;

/// Result type for layout operations
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Reasons a layout run is refused before any positioning happens.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
	/// A record's id is blank.
	#[error("{category} record at index {index} has no usable id")]
	MissingId {
		/// Collection the record came from.
		category: Category,
		/// Position within that collection.
		index: usize,
	},

	/// Two records of one category share an id.
	#[error("duplicate node id `{id}`")]
	DuplicateId {
		/// The repeated node id.
		id: String,
	},

	/// An axis has `min > max` or a non-finite end.
	#[error("bounds on the {axis} axis are inverted (min > max)")]
	InvertedBounds {
		/// `"x"`, `"y"` or `"z"`.
		axis: &'static str,
	},

	/// A coefficient is negative or not finite.
	#[error("layout parameter `{name}` must be finite and non-negative")]
	InvalidParameter {
		/// Config field name.
		name: &'static str,
	},
}
