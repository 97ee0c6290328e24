//! Integration tests for the SVG Inliner conversion

use pretty_assertions::assert_eq;
use svg_inliner::{inline_styles, Document, StyleMapping};

fn convert(source: &str) -> Document {
    let svg = inline_styles(source).expect("should convert");
    Document::parse(&svg).expect("output should parse")
}

fn find<'a>(doc: &'a Document, id: &str) -> &'a svg_inliner::document::Element {
    doc.root
        .descendants()
        .find(|e| e.attr("id") == Some(id))
        .unwrap_or_else(|| panic!("no element with id {}", id))
}

#[test]
fn test_class_fill_inlined() {
    let doc = convert(
        r#"<svg xmlns="http://www.w3.org/2000/svg">
            <style>.c { fill: #ff0000; }</style>
            <rect id="r" class="c" width="4" height="4"/>
        </svg>"#,
    );
    let rect = find(&doc, "r");
    assert_eq!(rect.attr("fill"), Some("#ff0000"));
    assert!(!rect.has_attr("class"));
}

#[test]
fn test_bare_path_gets_black() {
    let doc = convert(
        r#"<svg xmlns="http://www.w3.org/2000/svg"><path id="p" d="M0 0L1 1"/></svg>"#,
    );
    assert_eq!(find(&doc, "p").attr("fill"), Some("#000"));
}

#[test]
fn test_bare_rect_stays_unfilled() {
    let doc = convert(
        r#"<svg xmlns="http://www.w3.org/2000/svg"><rect id="r" width="1" height="1"/></svg>"#,
    );
    assert_eq!(find(&doc, "r").attr("fill"), None);
}

#[test]
fn test_no_style_elements_survive() {
    let doc = convert(
        r#"<svg xmlns="http://www.w3.org/2000/svg">
            <defs><style>.a{fill:red}</style></defs>
            <style>.b{fill:blue}</style>
            <g><style>.c{fill:green}</style><rect class="a"/></g>
            <defs><linearGradient id="grad"/><style>.d{fill:gray}</style></defs>
        </svg>"#,
    );
    assert!(doc.root.descendants().all(|e| !e.is_svg("style")));

    let defs: Vec<_> = doc.root.descendants().filter(|e| e.is_svg("defs")).collect();
    assert_eq!(defs.len(), 1);
    assert!(defs[0].child_elements().all(|e| e.is_svg("linearGradient")));
}

#[test]
fn test_document_without_classes_only_gains_path_fills() {
    let source = r#"<svg xmlns="http://www.w3.org/2000/svg" width="10"><g id="g" opacity="0.5"><rect id="r"/><path id="p" d="M0 0"/><path id="q" fill="red"/></g></svg>"#;
    let before = Document::parse(source).expect("should parse");
    let after = convert(source);

    for id in ["g", "r", "q"] {
        assert_eq!(find(&after, id).attributes, find(&before, id).attributes);
    }
    assert_eq!(find(&after, "p").attr("fill"), Some("#000"));
    assert_eq!(after.root.attr("width"), Some("10"));
}

#[test]
fn test_unmatched_class_preserved() {
    let doc = convert(
        r#"<svg xmlns="http://www.w3.org/2000/svg">
            <style>.known { fill: red }</style>
            <rect id="r" class="missing"/>
        </svg>"#,
    );
    let rect = find(&doc, "r");
    assert_eq!(rect.attr("class"), Some("missing"));
    assert_eq!(rect.attr("fill"), None);
}

#[test]
fn test_later_rule_wins() {
    let mapping = StyleMapping::from_css(".a { fill: red; } .a { fill: blue; }");
    assert_eq!(mapping.fill_for("a"), Some("blue"));

    let doc = convert(
        r#"<svg xmlns="http://www.w3.org/2000/svg">
            <style>.a { fill: red; } .a { fill: blue; }</style>
            <rect id="r" class="a"/>
        </svg>"#,
    );
    assert_eq!(find(&doc, "r").attr("fill"), Some("blue"));
}

#[test]
fn test_tags_are_unprefixed() {
    let svg = inline_styles(
        r#"<svg xmlns="http://www.w3.org/2000/svg"><g><path d="M0 0"/></g></svg>"#,
    )
    .expect("should convert");
    assert!(svg.contains(r#"<svg xmlns="http://www.w3.org/2000/svg">"#));
    assert!(svg.contains("<g><path"));
    assert!(!svg.contains("ns0:"));
}

#[test]
fn test_rules_that_are_not_single_classes_ignored() {
    let doc = convert(
        r#"<svg xmlns="http://www.w3.org/2000/svg">
            <style>
                /* exported by a design tool */
                @media print { .a { fill: gray } }
                rect.a { fill: green }
                .a:hover { fill: yellow }
                .a, .b { fill: purple }
                .a { stroke: black }
                .b { fill: none }
            </style>
            <rect id="a" class="a"/>
            <rect id="b" class="b"/>
        </svg>"#,
    );
    assert_eq!(find(&doc, "a").attr("class"), Some("a"));
    assert_eq!(find(&doc, "a").attr("fill"), None);
    assert_eq!(find(&doc, "b").attr("fill"), Some("none"));
}

#[test]
fn test_comment_before_class_rule() {
    let doc = convert(
        r#"<svg xmlns="http://www.w3.org/2000/svg">
            <style>/* Generator: design tool */ .a { fill: red } /* accents */ .b { fill: #0af }</style>
            <rect id="a" class="a"/>
            <circle id="b" class="b"/>
        </svg>"#,
    );
    let rect = find(&doc, "a");
    assert_eq!(rect.attr("fill"), Some("red"));
    assert!(!rect.has_attr("class"));
    assert_eq!(find(&doc, "b").attr("fill"), Some("#0af"));
}

#[test]
fn test_non_ascii_class_inlined() {
    let doc = convert(
        r#"<svg xmlns="http://www.w3.org/2000/svg">
            <style>.café { fill: blue }</style>
            <rect id="r" class="café"/>
        </svg>"#,
    );
    let rect = find(&doc, "r");
    assert_eq!(rect.attr("fill"), Some("blue"));
    assert!(!rect.has_attr("class"));
}

#[test]
fn test_broken_css_does_not_stop_later_rules() {
    let doc = convert(
        r#"<svg xmlns="http://www.w3.org/2000/svg">
            <style>.a { fill: ; } .b fill: red; } .c { fill: #123456 }</style>
            <rect id="a" class="a"/>
            <rect id="c" class="c"/>
        </svg>"#,
    );
    assert_eq!(find(&doc, "a").attr("fill"), None);
    assert_eq!(find(&doc, "c").attr("fill"), Some("#123456"));
}

#[test]
fn test_xlink_references_keep_their_prefix() {
    let svg = inline_styles(
        r##"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink">
            <defs><style>.a{fill:red}</style><path id="shape" d="M0 0"/></defs>
            <use class="a" xlink:href="#shape"/>
        </svg>"##,
    )
    .expect("should convert");
    assert!(svg.contains(r#"xmlns:xlink="http://www.w3.org/1999/xlink""#));
    assert!(svg.contains(r##"<use xlink:href="#shape" fill="red" />"##));
}

#[test]
fn test_full_output_of_exported_icon() {
    let svg = inline_styles(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><defs><style>.cls-1{fill:#e30613;}.cls-2{fill:#fff}</style></defs><path class="cls-1" d="M0 0h24v24H0z"/><circle class="cls-2" cx="12" cy="12" r="6"/><path d="M12 6v12"/></svg>"#,
    )
    .expect("should convert");

    insta::assert_snapshot!(svg, @r###"
    <?xml version="1.0" encoding="UTF-8"?>
    <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M0 0h24v24H0z" fill="#e30613" /><circle cx="12" cy="12" r="6" fill="#fff" /><path d="M12 6v12" fill="#000" /></svg>
    "###);
}
