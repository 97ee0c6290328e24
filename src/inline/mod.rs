//! The conversion pipeline: extract the style block, inline fills, clean up
//!
//! Each stage works on an owned [`Document`] in place. [`inline_document`]
//! runs all three in order and reports what each one did.

mod apply;
mod cleanup;
mod extract;

pub use apply::{apply_inline_styles, ApplyReport};
pub use cleanup::{remove_style_elements, CleanupReport};
pub use extract::extract_style_block;

use tracing::{debug, info};

use crate::config::InlineConfig;
use crate::css::StyleMapping;
use crate::document::Document;

/// Summary of a full conversion run
#[derive(Debug, Clone, Default)]
pub struct InlineReport {
    /// Class fills extracted from the style block
    pub mapping: StyleMapping,
    pub applied: ApplyReport,
    pub cleanup: CleanupReport,
}

/// Run the whole conversion on a parsed document
///
/// A document with no usable style block still gets default fills and has its
/// style elements removed.
pub fn inline_document(doc: &mut Document, config: &InlineConfig) -> InlineReport {
    let mapping = match extract_style_block(doc) {
        Some(text) => {
            debug!(style = %text.trim(), "raw style content");
            let mapping = StyleMapping::from_css(&text);
            info!(classes = mapping.len(), "extracted class fills");
            for (class, fill) in mapping.iter() {
                debug!(class, fill, "class fill");
            }
            mapping
        }
        None => {
            info!("no styles found in the <style> block");
            StyleMapping::new()
        }
    };

    let applied = apply_inline_styles(doc, &mapping, config);
    let cleanup = remove_style_elements(doc);

    InlineReport {
        mapping,
        applied,
        cleanup,
    }
}
