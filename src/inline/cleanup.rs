//! Removing style elements and the containers they leave empty

use tracing::debug;

use crate::document::{Document, Element};

/// What [`remove_style_elements`] removed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupReport {
    pub styles_removed: usize,
    /// `defs` elements dropped for having no child elements left
    pub containers_removed: usize,
}

/// Remove every SVG `<style>` element from the document
///
/// Styles under `defs` go first, and any `defs` left without child elements
/// is removed from its parent, innermost first. Styles that are direct
/// children of the root go next. A final sweep catches styles nested anywhere
/// else, so no style element survives.
pub fn remove_style_elements(doc: &mut Document) -> CleanupReport {
    let mut report = CleanupReport::default();

    clean_containers(&mut doc.root, &mut report);
    report.styles_removed += doc.root.retain_child_elements(|e| !e.is_svg("style"));

    let stray = remove_nested_styles(&mut doc.root);
    if stray > 0 {
        debug!(count = stray, "removed style elements outside defs");
    }
    report.styles_removed += stray;

    debug!(
        styles = report.styles_removed,
        containers = report.containers_removed,
        "style cleanup done"
    );
    report
}

fn clean_containers(parent: &mut Element, report: &mut CleanupReport) {
    for child in parent.child_elements_mut() {
        if child.is_svg("defs") {
            report.styles_removed += remove_nested_styles(child);
        }
        clean_containers(child, report);
    }
    report.containers_removed +=
        parent.retain_child_elements(|e| !(e.is_svg("defs") && e.element_count() == 0));
}

/// Remove every style element below `element`, returning how many
fn remove_nested_styles(element: &mut Element) -> usize {
    let mut removed = element.retain_child_elements(|e| !e.is_svg("style"));
    for child in element.child_elements_mut() {
        removed += remove_nested_styles(child);
    }
    removed
}
