//! Loading XML text into the owned tree, using roxmltree

use roxmltree::{NodeType, ParsingOptions};

use super::tree::{Attribute, Document, Element, NamespaceDecl, Node, QName, XML_NS};
use crate::error::XmlError;

impl Document {
    /// Parse XML text
    ///
    /// A DOCTYPE is accepted and dropped. Processing instructions are dropped;
    /// text (including CDATA and whitespace) and comments are kept.
    pub fn parse(source: &str) -> Result<Document, XmlError> {
        let mut options = ParsingOptions::default();
        options.allow_dtd = true;

        let xml = roxmltree::Document::parse_with_options(source, options)?;
        let mut namespaces = Vec::new();
        let root = convert_element(xml.root_element(), &mut namespaces);
        Ok(Document { root, namespaces })
    }
}

fn convert_element(node: roxmltree::Node<'_, '_>, namespaces: &mut Vec<NamespaceDecl>) -> Element {
    record_namespaces(node, namespaces);

    let tag = node.tag_name();
    let mut element = Element::new(QName::new(tag.namespace(), tag.name()));

    element.attributes = node
        .attributes()
        .map(|attr| Attribute {
            name: QName::new(attr.namespace(), attr.name()),
            value: attr.value().to_string(),
        })
        .collect();

    for child in node.children() {
        let converted = match child.node_type() {
            NodeType::Element => Node::Element(convert_element(child, namespaces)),
            NodeType::Text => Node::Text(child.text().unwrap_or_default().to_string()),
            NodeType::Comment => Node::Comment(child.text().unwrap_or_default().to_string()),
            NodeType::Root | NodeType::PI => continue,
        };
        element.children.push(converted);
    }

    element
}

/// Remember the first prefix declared for each namespace URI
fn record_namespaces(node: roxmltree::Node<'_, '_>, namespaces: &mut Vec<NamespaceDecl>) {
    for ns in node.namespaces() {
        let Some(prefix) = ns.name() else { continue };
        if ns.uri() == XML_NS || namespaces.iter().any(|d| d.uri == ns.uri()) {
            continue;
        }
        namespaces.push(NamespaceDecl {
            prefix: prefix.to_string(),
            uri: ns.uri().to_string(),
        });
    }
}
