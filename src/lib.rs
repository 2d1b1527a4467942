//! Reinhardt HTML Helpers - fluent list builders over an injectable DOM
//!
//! Two small builders that assemble HTML lists from in-memory data:
//!
//! - [`DefinitionListBuilder`]: `<dl>` containers made of `<dt>`/`<dd>` pairs
//! - [`ListBuilder`]: `<ul>`/`<ol>` containers made of `<li>` items
//!
//! Neither builder talks to a browser directly. Both go through the
//! [`NodeFactory`] capability, which is implemented by:
//!
//! - [`dom::memory::Document`]: an in-memory tree that can be serialized to HTML
//!   (native targets, SSR, tests)
//! - `web_sys::Document` (wasm32 only, see `dom::web`)
//!
//! ## Architecture
//!
//! - [`dom`]: node-factory trait, DOM errors, in-memory and browser backends
//! - [`builder`]: the list builders, their [`Content`] type and serde options
//! - [`data_files`]: the `name\0url` to `dataFilesList` JSON converter used by
//!   the `make-data-config` binary
//!
//! ## Example
//!
//! ```
//! use reinhardt_htmlhelpers::{DefinitionListBuilder, ListBuilder, ListKind};
//! use reinhardt_htmlhelpers::dom::memory::Document;
//!
//! # fn main() -> Result<(), reinhardt_htmlhelpers::DomError> {
//! let doc = Document::new();
//!
//! let mut details = DefinitionListBuilder::with_attrs(&doc, [("class", "details")])?;
//! details.add_entry("Name", "Ada")?.add_entry("Role", "Engineer")?;
//! assert_eq!(
//!     details.build().outer_html(),
//!     r#"<dl class="details"><dt>Name</dt><dd>Ada</dd><dt>Role</dt><dd>Engineer</dd></dl>"#
//! );
//!
//! let mut steps = ListBuilder::with_kind(&doc, ListKind::Ordered)?;
//! steps.add_entry("Fetch")?.add_entry("Build")?;
//! assert_eq!(steps.build().outer_html(), "<ol><li>Fetch</li><li>Build</li></ol>");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod builder;
pub mod data_files;
pub mod dom;

pub use builder::{
	Content, DefinitionListBuilder, DefinitionListOptions, ListBuilder, ListKind, ListOptions,
	ParseListKindError,
};
pub use dom::{DomError, NodeFactory};
