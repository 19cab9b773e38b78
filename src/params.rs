//! Page configuration read from the URL query string.

use crate::error::ParamError;
use crate::graph::{DEFAULT_TREE_SIZE, GraphShape, MAX_TREE_SIZE, TreeOptions};

/// Tree generation settings for a page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TreeParams {
	/// `n`: number of nodes.
	pub size: usize,
	/// `reverse`: point edges from child to parent.
	pub reverse: bool,
	/// `shape`: serialization convention; each page picks its own default.
	pub shape: Option<GraphShape>,
}

impl Default for TreeParams {
	fn default() -> Self {
		Self {
			size: DEFAULT_TREE_SIZE,
			reverse: false,
			shape: None,
		}
	}
}

impl TreeParams {
	/// Build params from a key lookup, falling back to defaults for
	/// missing keys. `n` above [`MAX_TREE_SIZE`] is rejected.
	pub fn from_lookup<F>(lookup: F) -> Result<Self, ParamError>
	where
		F: Fn(&str) -> Option<String>,
	{
		let defaults = Self::default();

		let size = match lookup("n") {
			Some(raw) => raw
				.trim()
				.parse::<usize>()
				.map_err(|_| ParamError::InvalidSize(raw))?,
			None => defaults.size,
		};
		if size > MAX_TREE_SIZE {
			return Err(ParamError::SizeTooLarge {
				size,
				max: MAX_TREE_SIZE,
			});
		}
		let reverse = match lookup("reverse") {
			Some(raw) => parse_flag("reverse", &raw)?,
			None => defaults.reverse,
		};
		let shape = lookup("shape").map(|raw| raw.parse()).transpose()?;

		Ok(Self {
			size,
			reverse,
			shape,
		})
	}

	/// Generator options for these params.
	pub fn tree_options(&self) -> TreeOptions {
		TreeOptions {
			size: self.size,
			reverse: self.reverse,
		}
	}
}

fn parse_flag(key: &str, raw: &str) -> Result<bool, ParamError> {
	match raw.trim().to_ascii_lowercase().as_str() {
		"true" | "1" | "yes" => Ok(true),
		"false" | "0" | "no" => Ok(false),
		_ => Err(ParamError::InvalidFlag {
			key: key.to_string(),
			value: raw.to_string(),
		}),
	}
}
