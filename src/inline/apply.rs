//! Writing resolved fills onto elements

use tracing::warn;

use crate::config::InlineConfig;
use crate::css::StyleMapping;
use crate::document::{Document, Element, SVG_NS};

/// What [`apply_inline_styles`] changed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Elements whose class was replaced by a fill attribute
    pub inlined: usize,
    /// Class values that had no rule, in document order
    pub unmatched: Vec<String>,
    /// Elements that received the default fill
    pub defaulted: usize,
}

/// Resolve class fills, then give default-fill elements a fill if they still lack one
///
/// An element whose class has no rule keeps its `class` attribute and gets no
/// fill from it.
pub fn apply_inline_styles(
    doc: &mut Document,
    mapping: &StyleMapping,
    config: &InlineConfig,
) -> ApplyReport {
    let mut report = ApplyReport::default();
    resolve_class_fills(&mut doc.root, mapping, &mut report);
    apply_default_fill(&mut doc.root, config, &mut report);
    report
}

fn resolve_class_fills(root: &mut Element, mapping: &StyleMapping, report: &mut ApplyReport) {
    root.visit_descendants_mut(&mut |element: &mut Element| {
        let Some(class) = element.attr("class") else {
            return;
        };
        match mapping.fill_for(class) {
            Some(fill) => {
                element.set_attr("fill", fill);
                element.remove_attr("class");
                report.inlined += 1;
            }
            None => {
                warn!(class, element = %element.name.local, "class not found in styles");
                report.unmatched.push(class.to_string());
            }
        }
    });
}

fn apply_default_fill(root: &mut Element, config: &InlineConfig, report: &mut ApplyReport) {
    root.visit_descendants_mut(&mut |element: &mut Element| {
        let eligible = element.name.namespace.as_deref() == Some(SVG_NS)
            && config.takes_default_fill(&element.name.local);
        if eligible && !element.has_attr("fill") {
            element.set_attr("fill", config.default_fill.as_str());
            report.defaulted += 1;
        }
    });
}
