//! In-memory XML document model
//!
//! Input is parsed with roxmltree into an owned tree that the conversion
//! mutates in place, then written back out as text.

mod parse;
pub mod tree;
mod write;

pub use tree::{Attribute, Document, Element, NamespaceDecl, Node, QName, SVG_NS, XML_NS};
