//! Definition list (`<dl>`) builder.

use super::content::Content;
use super::options::DefinitionListOptions;
use crate::dom::{DomError, NodeFactory, apply_attributes};

/// Builds a `<dl>` out of `<dt>`/`<dd>` pairs.
///
/// Each [`add_entry`](Self::add_entry) appends one term and one definition,
/// so the container always holds an even number of element children.
///
/// ## Example
///
/// ```
/// use reinhardt_htmlhelpers::DefinitionListBuilder;
/// use reinhardt_htmlhelpers::dom::memory::Document;
///
/// # fn main() -> Result<(), reinhardt_htmlhelpers::DomError> {
/// let doc = Document::new();
/// let mut builder = DefinitionListBuilder::with_attrs(&doc, [("id", "specs")])?;
/// assert!(builder.is_empty());
///
/// builder.add_entry("CPU", "4 cores")?.add_entry("RAM", "16 GiB")?;
///
/// let dl = builder.build();
/// assert_eq!(dl.attribute("id").as_deref(), Some("specs"));
/// assert_eq!(dl.child_element_count(), 4);
/// # Ok(())
/// # }
/// ```
pub struct DefinitionListBuilder<'d, D>
where
	D: NodeFactory + ?Sized,
{
	/// Factory used for every node this builder creates
	document: &'d D,
	/// The container being assembled
	dl: D::Node,
}

impl<'d, D> DefinitionListBuilder<'d, D>
where
	D: NodeFactory + ?Sized,
{
	/// Creates a builder for an empty `<dl>` without attributes.
	///
	/// # Errors
	///
	/// Propagates any error from the node factory.
	pub fn new(document: &'d D) -> Result<Self, DomError> {
		Self::with_attrs(document, std::iter::empty::<(&str, &str)>())
	}

	/// Creates a builder for an empty `<dl>` and applies `attrs` to it.
	///
	/// Attribute names and values are passed to the factory as-is.
	///
	/// # Errors
	///
	/// Propagates any error from the node factory.
	pub fn with_attrs<I, K, V>(document: &'d D, attrs: I) -> Result<Self, DomError>
	where
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<str>,
		V: AsRef<str>,
	{
		let dl = document.create_element("dl")?;
		apply_attributes(document, &dl, attrs)?;
		tracing::debug!("created <dl> container");
		Ok(Self { document, dl })
	}

	/// Creates a builder configured from [`DefinitionListOptions`].
	///
	/// # Errors
	///
	/// Propagates any error from the node factory.
	pub fn from_options(document: &'d D, options: &DefinitionListOptions) -> Result<Self, DomError> {
		Self::with_attrs(document, &options.attrs)
	}

	/// Appends a `<dt>` holding `term` and a `<dd>` holding `definition`.
	///
	/// - text: becomes the text of the `<dd>` (not parsed as HTML)
	/// - a single node: becomes the only child of the `<dd>`
	/// - a node sequence: each node is appended to the `<dd>` in order
	///
	/// ## Example
	///
	/// ```
	/// use reinhardt_htmlhelpers::DefinitionListBuilder;
	/// use reinhardt_htmlhelpers::dom::memory::Document;
	///
	/// # fn main() -> Result<(), reinhardt_htmlhelpers::DomError> {
	/// let doc = Document::new();
	/// let mut builder = DefinitionListBuilder::new(&doc)?;
	/// builder.add_entry("Markup", "<b>x</b>")?;
	/// assert_eq!(
	///     builder.build().inner_html(),
	///     "<dt>Markup</dt><dd>&lt;b&gt;x&lt;/b&gt;</dd>"
	/// );
	/// # Ok(())
	/// # }
	/// ```
	///
	/// # Errors
	///
	/// Propagates any error from the node factory.
	pub fn add_entry(
		&mut self,
		term: &str,
		definition: impl Into<Content<D::Node>>,
	) -> Result<&mut Self, DomError> {
		let dt = self.document.create_element("dt")?;
		let dd = self.document.create_element("dd")?;
		self.document.set_text(&dt, term)?;
		definition.into().fill_into(self.document, &dd)?;
		self.document.append_child(&self.dl, dt)?;
		self.document.append_child(&self.dl, dd)?;
		tracing::trace!(term, "added definition list entry");
		Ok(self)
	}

	/// Returns `true` if the container has no element children.
	pub fn is_empty(&self) -> bool {
		self.document.child_element_count(&self.dl) == 0
	}

	/// Returns the container.
	///
	/// Every call returns a handle to the same node; the builder keeps it and
	/// stays usable afterwards.
	pub fn build(&self) -> D::Node {
		self.dl.clone()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::dom::memory::{ChildNode, Document, Element};
	use rstest::{fixture, rstest};

	#[fixture]
	fn doc() -> Document {
		Document::new()
	}

	fn texts(elements: &[Element]) -> Vec<String> {
		elements.iter().map(Element::text_content).collect()
	}

	#[rstest]
	fn test_new_builder_is_empty(doc: Document) {
		let builder = DefinitionListBuilder::new(&doc).unwrap();
		let dl = builder.build();

		assert!(builder.is_empty());
		assert_eq!(dl.tag_name(), "dl");
		assert_eq!(dl.outer_html(), "<dl></dl>");
	}

	#[rstest]
	fn test_attributes_applied_before_entries(doc: Document) {
		let builder =
			DefinitionListBuilder::with_attrs(&doc, [("id", "foo"), ("class", "meta")]).unwrap();
		let dl = builder.build();

		assert_eq!(dl.attribute("id").as_deref(), Some("foo"));
		assert_eq!(dl.attribute("class").as_deref(), Some("meta"));
		assert!(builder.is_empty());
	}

	#[rstest]
	fn test_entries_preserve_call_order(doc: Document) {
		let mut builder = DefinitionListBuilder::new(&doc).unwrap();
		builder
			.add_entry("A", "1")
			.unwrap()
			.add_entry("B", "2")
			.unwrap();

		let children = builder.build().child_elements();
		let tags: Vec<String> = children.iter().map(Element::tag_name).collect();
		assert_eq!(tags, ["dt", "dd", "dt", "dd"]);
		assert_eq!(texts(&children), ["A", "1", "B", "2"]);
	}

	#[rstest]
	fn test_text_definition_is_literal(doc: Document) {
		let mut builder = DefinitionListBuilder::new(&doc).unwrap();
		builder.add_entry("A", "<b>x</b>").unwrap();

		let dd = builder.build().child_elements()[1].clone();
		assert_eq!(dd.children(), vec![ChildNode::Text("<b>x</b>".to_string())]);
		assert_eq!(dd.child_element_count(), 0);
	}

	#[rstest]
	fn test_node_sequence_definition(doc: Document) {
		let x = doc.create_element("span").unwrap();
		let y = doc.create_element("em").unwrap();
		let mut builder = DefinitionListBuilder::new(&doc).unwrap();
		builder.add_entry("A", vec![x.clone(), y.clone()]).unwrap();

		let dd = builder.build().child_elements()[1].clone();
		assert_eq!(dd.child_elements(), vec![x.clone(), y]);
		assert_eq!(x.parent(), Some(dd));
	}

	#[rstest]
	fn test_single_node_definition(doc: Document) {
		let link = doc.create_element("a").unwrap();
		let mut builder = DefinitionListBuilder::new(&doc).unwrap();
		builder.add_entry("Home", link.clone()).unwrap();

		let dd = builder.build().child_elements()[1].clone();
		assert_eq!(dd.children(), vec![ChildNode::Element(link)]);
	}

	#[rstest]
	fn test_build_is_referentially_stable(doc: Document) {
		let mut builder = DefinitionListBuilder::new(&doc).unwrap();
		builder.add_entry("A", "1").unwrap();

		let first = builder.build();
		let second = builder.build();
		assert!(first.ptr_eq(&second));

		first.set_attribute("data-seen", "yes").unwrap();
		assert_eq!(builder.build().attribute("data-seen").as_deref(), Some("yes"));
	}

	#[rstest]
	fn test_builder_usable_after_build(doc: Document) {
		let mut builder = DefinitionListBuilder::new(&doc).unwrap();
		let dl = builder.build();
		builder.add_entry("Late", "entry").unwrap();

		assert_eq!(dl.child_element_count(), 2);
		assert!(!builder.is_empty());
	}

	#[rstest]
	fn test_from_options(doc: Document) {
		let options = DefinitionListOptions::new().attr("class", "facts");
		let builder = DefinitionListBuilder::from_options(&doc, &options).unwrap();
		assert_eq!(builder.build().outer_html(), "<dl class=\"facts\"></dl>");
	}

	#[rstest]
	fn test_invalid_attribute_propagates(doc: Document) {
		let result = DefinitionListBuilder::with_attrs(&doc, [("bad name", "x")]);
		assert_eq!(
			result.err(),
			Some(DomError::InvalidCharacter {
				name: "bad name".to_string()
			})
		);
	}

	#[rstest]
	fn test_appending_container_into_itself_propagates(doc: Document) {
		let mut builder = DefinitionListBuilder::new(&doc).unwrap();
		let dl = builder.build();

		let result = builder.add_entry("Loop", dl);

		assert_eq!(result.err(), Some(DomError::HierarchyRequest));
	}
}
