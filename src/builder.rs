//! List Builder API
//!
//! Fluent builders that turn in-memory data into HTML list containers.
//!
//! ## Features
//!
//! - **Fluent API**: `add_entry` returns the builder, so calls chain with `?`
//! - **Backend agnostic**: every node is created through a [`NodeFactory`](crate::NodeFactory)
//! - **Literal text**: string content is set as text, never parsed as markup
//! - **Stable output**: `build()` always hands back the same container node
//!
//! ## Example
//!
//! ```
//! use reinhardt_htmlhelpers::builder::{Content, DefinitionListBuilder};
//! use reinhardt_htmlhelpers::dom::memory::Document;
//!
//! # fn main() -> Result<(), reinhardt_htmlhelpers::DomError> {
//! let doc = Document::new();
//! let link = doc.create_element("a")?;
//! link.set_attribute("href", "/docs")?;
//! link.set_text_content("docs");
//!
//! let mut dl = DefinitionListBuilder::new(&doc)?;
//! dl.add_entry("Guide", link)?
//!     .add_entry("Count", Content::display(3))?;
//!
//! assert_eq!(
//!     dl.build().outer_html(),
//!     r#"<dl><dt>Guide</dt><dd><a href="/docs">docs</a></dd><dt>Count</dt><dd>3</dd></dl>"#
//! );
//! # Ok(())
//! # }
//! ```

pub mod content;
pub mod definition_list;
pub mod list;
pub mod options;

// Re-exports for convenience
pub use content::Content;
pub use definition_list::DefinitionListBuilder;
pub use list::ListBuilder;
pub use options::{DefinitionListOptions, ListKind, ListOptions, ParseListKindError};
