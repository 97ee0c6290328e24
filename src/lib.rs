//! SVG Inliner - turn class-based SVG fills into inline `fill` attributes
//!
//! Design tools often export SVG whose colors live in an embedded `<style>`
//! block and are referenced through `class` attributes. Many consumers
//! (icon pipelines, rasterizers, some browsers' `<img>` handling) ignore that
//! block. This library resolves each class to its fill, writes it onto the
//! element, and removes the style machinery.
//!
//! # Example
//!
//! ```rust
//! use svg_inliner::inline_styles;
//!
//! let svg = inline_styles(
//!     r#"<svg xmlns="http://www.w3.org/2000/svg">
//!         <defs><style>.cls-1 { fill: #e30613; }</style></defs>
//!         <path class="cls-1" d="M0 0h10v10z"/>
//!     </svg>"#,
//! ).unwrap();
//!
//! assert!(svg.contains(r##"fill="#e30613""##));
//! assert!(!svg.contains("<style"));
//! ```

pub mod config;
pub mod css;
pub mod document;
pub mod error;
pub mod inline;
pub mod logging;

use std::fs;
use std::path::Path;

use tracing::debug;

pub use config::{ConfigError, InlineConfig};
pub use css::{parse_stylesheet, StyleMapping, StyleRule};
pub use document::Document;
pub use error::{ConvertError, XmlError};
pub use inline::{
    apply_inline_styles, extract_style_block, inline_document, remove_style_elements,
    ApplyReport, CleanupReport, InlineReport,
};

/// Load conversion settings from a TOML file, or the defaults when no path is given
pub fn load_config(path: Option<&Path>) -> Result<InlineConfig, ConvertError> {
    match path {
        Some(path) => Ok(InlineConfig::from_file(path)?),
        None => Ok(InlineConfig::default()),
    }
}

/// Convert SVG text with default configuration
///
/// # Example
///
/// ```rust
/// use svg_inliner::inline_styles;
///
/// let svg = inline_styles(r#"<svg xmlns="http://www.w3.org/2000/svg"><path d="M0 0"/></svg>"#)
///     .unwrap();
/// assert!(svg.contains(r##"<path d="M0 0" fill="#000" />"##));
/// ```
pub fn inline_styles(source: &str) -> Result<String, ConvertError> {
    inline_styles_with_config(source, &InlineConfig::default())
}

/// Convert SVG text with custom configuration
///
/// # Example
///
/// ```rust
/// use svg_inliner::{inline_styles_with_config, InlineConfig};
///
/// let config = InlineConfig::new()
///     .with_default_fill("currentColor")
///     .with_default_fill_elements(["path", "circle"]);
///
/// let svg = inline_styles_with_config(
///     r#"<svg xmlns="http://www.w3.org/2000/svg"><circle r="2"/></svg>"#,
///     &config,
/// ).unwrap();
/// assert!(svg.contains(r#"fill="currentColor""#));
/// ```
pub fn inline_styles_with_config(
    source: &str,
    config: &InlineConfig,
) -> Result<String, ConvertError> {
    let mut doc = Document::parse(source)?;
    inline_document(&mut doc, config);
    Ok(doc.to_xml_string())
}

/// Convert the SVG file at `input` and write the result to `output`
///
/// The output file is only created once the input has been read and parsed,
/// so a malformed input never leaves a partial output behind. `input` and
/// `output` may be the same path.
pub fn convert_file(input: &Path, output: &Path) -> Result<(), ConvertError> {
    convert_file_with_config(input, output, &InlineConfig::default())
}

/// Like [`convert_file`], with custom configuration
pub fn convert_file_with_config(
    input: &Path,
    output: &Path,
    config: &InlineConfig,
) -> Result<(), ConvertError> {
    let source = fs::read_to_string(input).map_err(|source| ConvertError::Read {
        path: input.to_path_buf(),
        source,
    })?;

    let svg = inline_styles_with_config(&source, config)?;

    fs::write(output, svg).map_err(|source| ConvertError::Write {
        path: output.to_path_buf(),
        source,
    })?;
    debug!(input = %input.display(), output = %output.display(), "conversion written");
    Ok(())
}
