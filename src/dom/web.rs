//! Browser DOM backend (wasm32 only).
//!
//! Implements [`NodeFactory`] for `web_sys::Document`, so the builders
//! produce live elements that can be inserted into the page.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use super::{DomError, NodeFactory};

/// Returns the global `document`.
///
/// # Errors
///
/// Returns [`DomError::NoWindow`] or [`DomError::NoDocument`] outside a
/// browser main thread.
pub fn document() -> Result<Document, DomError> {
	web_sys::window()
		.ok_or(DomError::NoWindow)?
		.document()
		.ok_or(DomError::NoDocument)
}

fn js_error(err: JsValue) -> DomError {
	DomError::Js(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl NodeFactory for Document {
	type Node = Element;

	fn create_element(&self, tag: &str) -> Result<Element, DomError> {
		Document::create_element(self, tag).map_err(js_error)
	}

	fn set_attribute(&self, node: &Element, name: &str, value: &str) -> Result<(), DomError> {
		node.set_attribute(name, value).map_err(js_error)
	}

	fn append_child(&self, parent: &Element, child: Element) -> Result<(), DomError> {
		parent.append_child(&child).map(|_| ()).map_err(js_error)
	}

	fn set_text(&self, node: &Element, text: &str) -> Result<(), DomError> {
		node.set_text_content(Some(text));
		Ok(())
	}

	fn child_element_count(&self, node: &Element) -> usize {
		node.child_element_count() as usize
	}
}
