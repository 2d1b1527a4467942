//! Builder configuration.
//!
//! Options are plain serde records so container settings can come from a
//! settings file or JSON payload as well as from code.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Ordered (`<ol>`) or unordered (`<ul>`) list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
	/// `<ol>`
	#[serde(alias = "ol")]
	Ordered,
	/// `<ul>`
	#[default]
	#[serde(alias = "ul")]
	Unordered,
}

impl ListKind {
	/// The container tag for this kind.
	pub const fn tag_name(self) -> &'static str {
		match self {
			ListKind::Ordered => "ol",
			ListKind::Unordered => "ul",
		}
	}
}

impl fmt::Display for ListKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.tag_name())
	}
}

/// Error returned when parsing an unknown [`ListKind`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown list kind `{0}` (expected `ul`, `ol`, `unordered` or `ordered`)")]
pub struct ParseListKindError(String);

impl FromStr for ListKind {
	type Err = ParseListKindError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"ol" | "ordered" => Ok(ListKind::Ordered),
			"ul" | "unordered" => Ok(ListKind::Unordered),
			other => Err(ParseListKindError(other.to_string())),
		}
	}
}

/// Options for [`ListBuilder`](super::ListBuilder).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListOptions {
	/// Container kind.
	pub kind: ListKind,
	/// Attributes applied to the container at construction.
	pub attrs: BTreeMap<String, String>,
}

impl ListOptions {
	/// Creates default options (unordered, no attributes).
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the list kind.
	pub fn kind(mut self, kind: ListKind) -> Self {
		self.kind = kind;
		self
	}

	/// Adds a container attribute.
	pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.attrs.insert(name.into(), value.into());
		self
	}
}

/// Options for [`DefinitionListBuilder`](super::DefinitionListBuilder).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefinitionListOptions {
	/// Attributes applied to the container at construction.
	pub attrs: BTreeMap<String, String>,
}

impl DefinitionListOptions {
	/// Creates default options (no attributes).
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a container attribute.
	pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.attrs.insert(name.into(), value.into());
		self
	}
}
