//! Browser DOM backend tests
//!
//! Run with:
//!   wasm-pack test --chrome --headless

#![cfg(target_arch = "wasm32")]

use reinhardt_htmlhelpers::dom::web::document;
use reinhardt_htmlhelpers::{DefinitionListBuilder, ListBuilder, ListKind};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_definition_list_in_browser() {
	let doc = document().unwrap();
	let mut builder = DefinitionListBuilder::with_attrs(&doc, [("id", "foo")]).unwrap();
	assert!(builder.is_empty());

	builder
		.add_entry("A", "<b>x</b>")
		.unwrap()
		.add_entry("B", "2")
		.unwrap();

	let dl = builder.build();
	assert_eq!(dl.tag_name(), "DL");
	assert_eq!(dl.get_attribute("id").as_deref(), Some("foo"));
	assert_eq!(dl.child_element_count(), 4);
	assert_eq!(
		dl.inner_html(),
		"<dt>A</dt><dd>&lt;b&gt;x&lt;/b&gt;</dd><dt>B</dt><dd>2</dd>"
	);
}

#[wasm_bindgen_test]
fn test_list_with_nodes_in_browser() {
	let doc = document().unwrap();
	let a = doc.create_element("a").unwrap();
	let b = doc.create_element("b").unwrap();

	let mut builder = ListBuilder::with_kind(&doc, ListKind::Ordered).unwrap();
	builder.add_entry(a).unwrap().add_entry(vec![b]).unwrap();

	let ol = builder.build();
	assert_eq!(ol.tag_name(), "OL");
	assert_eq!(ol.inner_html(), "<li><a></a></li><li><b></b></li>");
	assert!(builder.build().is_same_node(Some(&ol)));
}
