//! DOM abstraction layer
//!
//! The builders never create nodes themselves. They receive a [`NodeFactory`]
//! and drive it through a handful of primitives, so the same code produces an
//! in-memory tree on the server and real `web_sys` elements in the browser.

pub mod memory;
#[cfg(target_arch = "wasm32")]
pub mod web;

/// Errors raised by a [`NodeFactory`] backend.
///
/// The builders never construct these themselves; whatever the backend
/// reports is handed back to the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
	/// A tag or attribute name contains characters the DOM rejects.
	#[error("invalid character in name `{name}`")]
	InvalidCharacter {
		/// The rejected name.
		name: String,
	},
	/// A node was appended to itself or to one of its own descendants.
	#[error("the new child is an ancestor of the parent")]
	HierarchyRequest,
	/// Window object not available.
	#[error("window object not available")]
	NoWindow,
	/// Document object not available.
	#[error("document object not available")]
	NoDocument,
	/// Any other failure reported by the browser DOM.
	#[error("DOM operation failed: {0}")]
	Js(String),
}

/// Node creation capability consumed by the builders.
///
/// `Node` is a handle: cloning it must yield another handle to the same
/// underlying node, never a deep copy.
pub trait NodeFactory {
	/// Handle to an element created by this factory.
	type Node: Clone;

	/// Creates a detached element with the given tag name.
	fn create_element(&self, tag: &str) -> Result<Self::Node, DomError>;

	/// Sets (or replaces) an attribute on `node`.
	fn set_attribute(&self, node: &Self::Node, name: &str, value: &str) -> Result<(), DomError>;

	/// Appends `child` as the last child of `parent`, detaching it from any
	/// previous parent first.
	fn append_child(&self, parent: &Self::Node, child: Self::Node) -> Result<(), DomError>;

	/// Replaces all children of `node` with a single text node.
	///
	/// The text is stored literally and never parsed as markup.
	fn set_text(&self, node: &Self::Node, text: &str) -> Result<(), DomError>;

	/// Number of element children (text nodes are not counted).
	fn child_element_count(&self, node: &Self::Node) -> usize;
}

/// Applies every `(name, value)` pair to `node` in iteration order.
pub(crate) fn apply_attributes<F, I, K, V>(
	factory: &F,
	node: &F::Node,
	attrs: I,
) -> Result<(), DomError>
where
	F: NodeFactory + ?Sized,
	I: IntoIterator<Item = (K, V)>,
	K: AsRef<str>,
	V: AsRef<str>,
{
	for (name, value) in attrs {
		factory.set_attribute(node, name.as_ref(), value.as_ref())?;
	}
	Ok(())
}

/// Checks a tag or attribute name the way `createElement`/`setAttribute` do.
pub(crate) fn validate_name(name: &str) -> Result<(), DomError> {
	let mut chars = name.chars();
	let valid = match chars.next() {
		Some(first) if first.is_alphabetic() || first == '_' || first == ':' => {
			chars.all(|c| c.is_alphanumeric() || matches!(c, '-' | '.' | '_' | ':'))
		}
		_ => false,
	};

	if valid {
		Ok(())
	} else {
		Err(DomError::InvalidCharacter {
			name: name.to_string(),
		})
	}
}
