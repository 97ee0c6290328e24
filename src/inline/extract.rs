//! Locating the document's style block

use crate::document::Document;

/// Text of the first SVG `<style>` element in document order
///
/// Later style elements are ignored. An element with no text counts as absent.
pub fn extract_style_block(doc: &Document) -> Option<String> {
    let style = doc.root.descendants().find(|e| e.is_svg("style"))?;
    let text = style.text();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
