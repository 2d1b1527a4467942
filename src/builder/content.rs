//! Entry content accepted by the list builders.

use std::fmt;

use crate::dom::memory::Element;
use crate::dom::{DomError, NodeFactory};

/// What goes inside a `<dd>` or `<li>`.
///
/// `N` is the node handle type of the [`NodeFactory`] in use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content<N> {
	/// Plain text, set literally (markup is not interpreted).
	Text(String),
	/// A single pre-built node, attached as the only child.
	Node(N),
	/// Pre-built nodes, attached as siblings in order.
	Nodes(Vec<N>),
}

impl<N> Content<N> {
	/// Plain text content.
	pub fn text(text: impl Into<String>) -> Self {
		Self::Text(text.into())
	}

	/// Text content taken from any `Display` value.
	///
	/// ```
	/// use reinhardt_htmlhelpers::Content;
	/// use reinhardt_htmlhelpers::dom::memory::Element;
	///
	/// let content: Content<Element> = Content::display(42);
	/// assert_eq!(content, Content::Text("42".to_string()));
	/// ```
	pub fn display(value: impl fmt::Display) -> Self {
		Self::Text(value.to_string())
	}

	/// A single node.
	pub fn node(node: N) -> Self {
		Self::Node(node)
	}

	/// A sequence of nodes.
	pub fn nodes(nodes: impl IntoIterator<Item = N>) -> Self {
		Self::Nodes(nodes.into_iter().collect())
	}

	/// Attaches this content to `target` through `factory`.
	pub(crate) fn fill_into<F>(self, factory: &F, target: &N) -> Result<(), DomError>
	where
		F: NodeFactory<Node = N> + ?Sized,
	{
		match self {
			Content::Text(text) => factory.set_text(target, &text),
			Content::Node(node) => factory.append_child(target, node),
			Content::Nodes(nodes) => {
				for node in nodes {
					factory.append_child(target, node)?;
				}
				Ok(())
			}
		}
	}
}

impl<N> From<&str> for Content<N> {
	fn from(text: &str) -> Self {
		Self::Text(text.to_string())
	}
}

impl<N> From<String> for Content<N> {
	fn from(text: String) -> Self {
		Self::Text(text)
	}
}

impl<N> From<&String> for Content<N> {
	fn from(text: &String) -> Self {
		Self::Text(text.clone())
	}
}

impl<N> From<Vec<N>> for Content<N> {
	fn from(nodes: Vec<N>) -> Self {
		Self::Nodes(nodes)
	}
}

impl From<Element> for Content<Element> {
	fn from(node: Element) -> Self {
		Self::Node(node)
	}
}

#[cfg(target_arch = "wasm32")]
impl From<web_sys::Element> for Content<web_sys::Element> {
	fn from(node: web_sys::Element) -> Self {
		Self::Node(node)
	}
}
