//! Ordered/unordered list (`<ol>`/`<ul>`) builder.

use super::content::Content;
use super::options::{ListKind, ListOptions};
use crate::dom::{DomError, NodeFactory, apply_attributes};

/// Builds a `<ul>` or `<ol>` out of `<li>` items.
///
/// The kind is chosen at construction and cannot change afterwards.
///
/// ## Example
///
/// ```
/// use reinhardt_htmlhelpers::{ListBuilder, ListKind};
/// use reinhardt_htmlhelpers::dom::memory::Document;
///
/// # fn main() -> Result<(), reinhardt_htmlhelpers::DomError> {
/// let doc = Document::new();
/// let mut builder = ListBuilder::with_attrs(&doc, ListKind::Ordered, [("start", "3")])?;
/// builder.add_entry("third")?.add_entry("fourth")?;
///
/// assert_eq!(
///     builder.build().outer_html(),
///     r#"<ol start="3"><li>third</li><li>fourth</li></ol>"#
/// );
/// # Ok(())
/// # }
/// ```
pub struct ListBuilder<'d, D>
where
	D: NodeFactory + ?Sized,
{
	document: &'d D,
	list: D::Node,
	kind: ListKind,
}

impl<'d, D> ListBuilder<'d, D>
where
	D: NodeFactory + ?Sized,
{
	/// Creates a builder for an empty `<ul>` without attributes.
	///
	/// # Errors
	///
	/// Propagates any error from the node factory.
	pub fn new(document: &'d D) -> Result<Self, DomError> {
		Self::with_kind(document, ListKind::default())
	}

	/// Creates a builder for an empty list of the given kind.
	///
	/// # Errors
	///
	/// Propagates any error from the node factory.
	pub fn with_kind(document: &'d D, kind: ListKind) -> Result<Self, DomError> {
		Self::with_attrs(document, kind, std::iter::empty::<(&str, &str)>())
	}

	/// Creates a builder for an empty list of the given kind and applies
	/// `attrs` to the container.
	///
	/// # Errors
	///
	/// Propagates any error from the node factory.
	pub fn with_attrs<I, K, V>(document: &'d D, kind: ListKind, attrs: I) -> Result<Self, DomError>
	where
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<str>,
		V: AsRef<str>,
	{
		let list = document.create_element(kind.tag_name())?;
		apply_attributes(document, &list, attrs)?;
		tracing::debug!(tag = kind.tag_name(), "created list container");
		Ok(Self {
			document,
			list,
			kind,
		})
	}

	/// Creates a builder configured from [`ListOptions`].
	///
	/// # Errors
	///
	/// Propagates any error from the node factory.
	pub fn from_options(document: &'d D, options: &ListOptions) -> Result<Self, DomError> {
		Self::with_attrs(document, options.kind, &options.attrs)
	}

	/// The kind fixed at construction.
	pub fn kind(&self) -> ListKind {
		self.kind
	}

	/// Appends an `<li>` holding `value`.
	///
	/// Text becomes the item's text, a single node its only child, and a node
	/// sequence its children in order.
	///
	/// # Errors
	///
	/// Propagates any error from the node factory.
	pub fn add_entry(&mut self, value: impl Into<Content<D::Node>>) -> Result<&mut Self, DomError> {
		let li = self.document.create_element("li")?;
		value.into().fill_into(self.document, &li)?;
		self.document.append_child(&self.list, li)?;
		tracing::trace!(tag = self.kind.tag_name(), "added list item");
		Ok(self)
	}

	/// Returns `true` if no items have been added.
	pub fn is_empty(&self) -> bool {
		self.document.child_element_count(&self.list) == 0
	}

	/// Returns the container (same node on every call).
	pub fn build(&self) -> D::Node {
		self.list.clone()
	}
}
