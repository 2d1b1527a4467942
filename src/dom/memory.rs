//! In-memory DOM backend.
//!
//! [`Document`] creates [`Element`] handles backed by `Rc<RefCell<_>>`, so a
//! cloned handle always refers to the same node. Trees can be inspected
//! (tag, attributes, children, text) and serialized with [`Element::outer_html`].
//!
//! Handles are neither `Send` nor `Sync`; a tree belongs to one thread.

use std::borrow::Cow;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use super::{DomError, NodeFactory, validate_name};

/// Factory for in-memory elements.
#[derive(Debug, Default, Clone, Copy)]
pub struct Document;

impl Document {
	/// Creates a new document.
	pub fn new() -> Self {
		Self
	}

	/// Creates a detached element.
	///
	/// # Errors
	///
	/// Returns [`DomError::InvalidCharacter`] if `tag` is not a valid name.
	pub fn create_element(&self, tag: &str) -> Result<Element, DomError> {
		validate_name(tag)?;
		Ok(Element::new(tag))
	}
}

impl NodeFactory for Document {
	type Node = Element;

	fn create_element(&self, tag: &str) -> Result<Element, DomError> {
		Document::create_element(self, tag)
	}

	fn set_attribute(&self, node: &Element, name: &str, value: &str) -> Result<(), DomError> {
		node.set_attribute(name, value)
	}

	fn append_child(&self, parent: &Element, child: Element) -> Result<(), DomError> {
		parent.append_child(child)
	}

	fn set_text(&self, node: &Element, text: &str) -> Result<(), DomError> {
		node.set_text_content(text);
		Ok(())
	}

	fn child_element_count(&self, node: &Element) -> usize {
		node.child_element_count()
	}
}

/// A child slot of an [`Element`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChildNode {
	/// A nested element.
	Element(Element),
	/// A text node, stored unescaped.
	Text(String),
}

impl From<Element> for ChildNode {
	fn from(element: Element) -> Self {
		Self::Element(element)
	}
}

/// Handle to an in-memory element.
///
/// Equality is node identity: two handles are equal when they point at the
/// same node, regardless of content.
#[derive(Clone)]
pub struct Element(Rc<RefCell<ElementData>>);

struct ElementData {
	tag: String,
	attrs: Vec<(String, String)>,
	children: Vec<ChildNode>,
	parent: Weak<RefCell<ElementData>>,
}

impl Element {
	fn new(tag: &str) -> Self {
		Self(Rc::new(RefCell::new(ElementData {
			tag: tag.to_string(),
			attrs: Vec::new(),
			children: Vec::new(),
			parent: Weak::new(),
		})))
	}

	/// Returns `true` if both handles refer to the same node.
	pub fn ptr_eq(&self, other: &Element) -> bool {
		Rc::ptr_eq(&self.0, &other.0)
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> String {
		self.0.borrow().tag.clone()
	}

	/// Returns the value of an attribute, if set.
	pub fn attribute(&self, name: &str) -> Option<String> {
		self.0
			.borrow()
			.attrs
			.iter()
			.find(|(n, _)| n == name)
			.map(|(_, v)| v.clone())
	}

	/// Returns all attributes in the order they were first set.
	pub fn attributes(&self) -> Vec<(String, String)> {
		self.0.borrow().attrs.clone()
	}

	/// Sets an attribute, replacing the value in place if it already exists.
	///
	/// # Errors
	///
	/// Returns [`DomError::InvalidCharacter`] if `name` is not a valid name.
	pub fn set_attribute(&self, name: &str, value: &str) -> Result<(), DomError> {
		validate_name(name)?;
		let mut data = self.0.borrow_mut();
		match data.attrs.iter_mut().find(|(n, _)| n == name) {
			Some((_, existing)) => *existing = value.to_string(),
			None => data.attrs.push((name.to_string(), value.to_string())),
		}
		Ok(())
	}

	/// Removes an attribute. Does nothing if it is not set.
	pub fn remove_attribute(&self, name: &str) {
		self.0.borrow_mut().attrs.retain(|(n, _)| n != name);
	}

	/// Returns the parent element, if attached.
	pub fn parent(&self) -> Option<Element> {
		self.0.borrow().parent.upgrade().map(Element)
	}

	/// Returns a snapshot of the child list.
	pub fn children(&self) -> Vec<ChildNode> {
		self.0.borrow().children.clone()
	}

	/// Returns the element children, skipping text nodes.
	pub fn child_elements(&self) -> Vec<Element> {
		self.0
			.borrow()
			.children
			.iter()
			.filter_map(|child| match child {
				ChildNode::Element(el) => Some(el.clone()),
				ChildNode::Text(_) => None,
			})
			.collect()
	}

	/// Number of element children.
	pub fn child_element_count(&self) -> usize {
		self.0
			.borrow()
			.children
			.iter()
			.filter(|child| matches!(child, ChildNode::Element(_)))
			.count()
	}

	/// Appends a child node.
	///
	/// An element that already has a parent is moved, not copied.
	///
	/// # Errors
	///
	/// Returns [`DomError::HierarchyRequest`] if `child` is this element or
	/// one of its ancestors.
	pub fn append_child(&self, child: impl Into<ChildNode>) -> Result<(), DomError> {
		let child = child.into();
		if let ChildNode::Element(el) = &child {
			if self.is_inclusive_descendant_of(el) {
				return Err(DomError::HierarchyRequest);
			}
			if let Some(old_parent) = el.parent() {
				old_parent.detach(el);
			}
			el.0.borrow_mut().parent = Rc::downgrade(&self.0);
		}
		self.0.borrow_mut().children.push(child);
		Ok(())
	}

	/// Replaces all children with a single text node.
	///
	/// An empty string leaves the element without children.
	pub fn set_text_content(&self, text: &str) {
		let removed = std::mem::take(&mut self.0.borrow_mut().children);
		for child in removed {
			if let ChildNode::Element(el) = child {
				el.0.borrow_mut().parent = Weak::new();
			}
		}
		if !text.is_empty() {
			self.0
				.borrow_mut()
				.children
				.push(ChildNode::Text(text.to_string()));
		}
	}

	/// Concatenated text of all descendant text nodes.
	pub fn text_content(&self) -> String {
		let mut out = String::new();
		self.collect_text(&mut out);
		out
	}

	/// Serializes the children of this element.
	pub fn inner_html(&self) -> String {
		let mut out = String::new();
		for child in self.0.borrow().children.iter() {
			write_child(child, &mut out);
		}
		out
	}

	/// Serializes this element, including its own tag.
	pub fn outer_html(&self) -> String {
		let mut out = String::new();
		self.write_html(&mut out);
		out
	}

	fn is_inclusive_descendant_of(&self, other: &Element) -> bool {
		let mut current = Some(self.clone());
		while let Some(node) = current {
			if node.ptr_eq(other) {
				return true;
			}
			current = node.parent();
		}
		false
	}

	fn detach(&self, child: &Element) {
		self.0
			.borrow_mut()
			.children
			.retain(|c| !matches!(c, ChildNode::Element(el) if el.ptr_eq(child)));
		child.0.borrow_mut().parent = Weak::new();
	}

	fn collect_text(&self, out: &mut String) {
		for child in self.0.borrow().children.iter() {
			match child {
				ChildNode::Text(text) => out.push_str(text),
				ChildNode::Element(el) => el.collect_text(out),
			}
		}
	}

	fn write_html(&self, out: &mut String) {
		let data = self.0.borrow();
		out.push('<');
		out.push_str(&data.tag);
		for (name, value) in &data.attrs {
			out.push(' ');
			out.push_str(name);
			out.push_str("=\"");
			out.push_str(&html_escape(value));
			out.push('"');
		}

		if is_void(&data.tag) {
			out.push_str(" />");
			return;
		}

		out.push('>');
		for child in &data.children {
			write_child(child, out);
		}
		out.push_str("</");
		out.push_str(&data.tag);
		out.push('>');
	}
}

impl PartialEq for Element {
	fn eq(&self, other: &Self) -> bool {
		self.ptr_eq(other)
	}
}

impl Eq for Element {}

impl fmt::Debug for Element {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let data = self.0.borrow();
		f.debug_struct("Element")
			.field("tag", &data.tag)
			.field("attrs", &data.attrs)
			.field("children", &data.children)
			.finish()
	}
}

impl fmt::Display for Element {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.outer_html())
	}
}

fn write_child(child: &ChildNode, out: &mut String) {
	match child {
		ChildNode::Element(el) => el.write_html(out),
		ChildNode::Text(text) => out.push_str(&html_escape(text)),
	}
}

fn is_void(tag: &str) -> bool {
	matches!(
		tag,
		"area"
			| "base" | "br"
			| "col" | "embed"
			| "hr" | "img"
			| "input" | "link"
			| "meta" | "source"
			| "track" | "wbr"
	)
}

/// Escapes HTML special characters.
fn html_escape(s: &str) -> Cow<'_, str> {
	if s.contains(['&', '<', '>', '"', '\'']) {
		let mut escaped = String::with_capacity(s.len() + 8);
		for c in s.chars() {
			match c {
				'&' => escaped.push_str("&amp;"),
				'<' => escaped.push_str("&lt;"),
				'>' => escaped.push_str("&gt;"),
				'"' => escaped.push_str("&quot;"),
				'\'' => escaped.push_str("&#x27;"),
				_ => escaped.push(c),
			}
		}
		Cow::Owned(escaped)
	} else {
		Cow::Borrowed(s)
	}
}
