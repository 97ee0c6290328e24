//! Parser for the CSS subset used in SVG `<style>` blocks
//!
//! Only the shape `.class { property: value; ... }` carries meaning here; the
//! result of interest is the class → fill table in [`StyleMapping`].

pub mod ast;
mod grammar;
pub mod lexer;
pub mod mapping;

pub use ast::{Declaration, Selector, StyleRule};
pub use grammar::parse_stylesheet;
pub use mapping::StyleMapping;
