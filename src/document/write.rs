//! Serialization of the owned tree back to XML text
//!
//! SVG is written as the default namespace so that tags come out unprefixed
//! (`<path/>`, never `<ns0:path/>`). Other namespaces keep the prefix the
//! source declared for them, or get a generated `nsN` prefix, and are all
//! declared on the root element.

use super::tree::{Document, Element, Node, QName, SVG_NS, XML_NS};

/// Prefixes assigned to every non-default namespace used in a document
struct PrefixTable {
    entries: Vec<(String, String)>,
}

impl PrefixTable {
    fn build(doc: &Document) -> Self {
        let mut table = Self {
            entries: Vec::new(),
        };
        table.collect(doc, &doc.root);
        table
    }

    fn collect(&mut self, doc: &Document, element: &Element) {
        if let Some(ns) = element.name.namespace.as_deref() {
            if ns != SVG_NS {
                self.assign(doc, ns);
            }
        }
        // Attributes never use the default namespace, so even SVG needs a
        // prefix when an attribute is explicitly qualified with it
        for attr in &element.attributes {
            if let Some(ns) = attr.name.namespace.as_deref() {
                self.assign(doc, ns);
            }
        }
        for child in element.child_elements() {
            self.collect(doc, child);
        }
    }

    fn assign(&mut self, doc: &Document, uri: &str) {
        if uri == XML_NS || self.lookup(uri).is_some() {
            return;
        }
        let prefix = match doc.prefix_for(uri) {
            Some(prefix) if !self.prefix_taken(prefix) => prefix.to_string(),
            _ => (0..)
                .map(|n| format!("ns{}", n))
                .find(|p| !self.prefix_taken(p) && doc.namespaces.iter().all(|d| &d.prefix != p))
                .unwrap_or_default(),
        };
        self.entries.push((uri.to_string(), prefix));
    }

    fn prefix_taken(&self, prefix: &str) -> bool {
        self.entries.iter().any(|(_, p)| p == prefix)
    }

    fn lookup(&self, uri: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(u, _)| u == uri)
            .map(|(_, p)| p.as_str())
    }
}

/// Build XML output incrementally
struct XmlWriter {
    prefixes: PrefixTable,
    out: String,
}

impl XmlWriter {
    fn element_name(&self, name: &QName) -> String {
        match name.namespace.as_deref() {
            None | Some(SVG_NS) => name.local.clone(),
            Some(ns) => self.qualified(ns, &name.local),
        }
    }

    fn attribute_name(&self, name: &QName) -> String {
        match name.namespace.as_deref() {
            None => name.local.clone(),
            Some(ns) => self.qualified(ns, &name.local),
        }
    }

    fn qualified(&self, ns: &str, local: &str) -> String {
        if ns == XML_NS {
            return format!("xml:{}", local);
        }
        match self.prefixes.lookup(ns) {
            Some(prefix) => format!("{}:{}", prefix, local),
            None => local.to_string(),
        }
    }

    fn push_attr(&mut self, name: &str, value: &str) {
        self.out.push(' ');
        self.out.push_str(name);
        self.out.push_str("=\"");
        self.out.push_str(&escape_attr(value));
        self.out.push('"');
    }

    /// `default_svg` tells whether SVG is the default namespace in scope
    fn write_element(&mut self, element: &Element, is_root: bool, default_svg: bool) {
        let name = self.element_name(&element.name);
        let is_svg = element.name.namespace.as_deref() == Some(SVG_NS);

        self.out.push('<');
        self.out.push_str(&name);

        if is_svg && !default_svg {
            self.push_attr("xmlns", SVG_NS);
        } else if element.name.namespace.is_none() && default_svg {
            self.push_attr("xmlns", "");
        }
        if is_root {
            let declarations: Vec<(String, String)> = self
                .prefixes
                .entries
                .iter()
                .map(|(uri, prefix)| (format!("xmlns:{}", prefix), uri.clone()))
                .collect();
            for (name, uri) in &declarations {
                self.push_attr(name, uri);
            }
        }

        for attr in &element.attributes {
            let attr_name = self.attribute_name(&attr.name);
            self.push_attr(&attr_name, &attr.value);
        }

        if element.children.is_empty() {
            self.out.push_str(" />");
            return;
        }
        self.out.push('>');

        let child_default_svg = match element.name.namespace.as_deref() {
            Some(SVG_NS) => true,
            None => false,
            Some(_) => default_svg,
        };
        for child in &element.children {
            match child {
                Node::Element(e) => self.write_element(e, false, child_default_svg),
                Node::Text(t) => self.out.push_str(&escape_text(t)),
                Node::Comment(c) => {
                    self.out.push_str("<!--");
                    self.out.push_str(c);
                    self.out.push_str("-->");
                }
            }
        }

        self.out.push_str("</");
        self.out.push_str(&name);
        self.out.push('>');
    }
}

impl Document {
    /// Serialize as UTF-8 XML with an XML declaration
    pub fn to_xml_string(&self) -> String {
        let mut writer = XmlWriter {
            prefixes: PrefixTable::build(self),
            out: String::new(),
        };
        writer.out.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        writer.out.push('\n');
        writer.write_element(&self.root, true, false);
        writer.out
    }
}

/// Escape special XML characters in text content
fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape special XML characters in an attribute value, including the
/// whitespace characters attribute normalization would otherwise fold
fn escape_attr(s: &str) -> String {
    escape_text(s)
        .replace('"', "&quot;")
        .replace('\n', "&#10;")
        .replace('\r', "&#13;")
        .replace('\t', "&#9;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("a < b"), "a &lt; b");
        assert_eq!(escape_text("a & b"), "a &amp; b");
        assert_eq!(escape_text("it's \"x\""), "it's \"x\"");
    }

    #[test]
    fn test_escape_attr() {
        assert_eq!(escape_attr("a\"b"), "a&quot;b");
        assert_eq!(escape_attr("x\ny"), "x&#10;y");
        assert_eq!(escape_attr("<&>"), "&lt;&amp;&gt;");
    }

    #[test]
    fn test_svg_is_default_namespace() {
        let doc = Document::new(
            Element::new(QName::svg("svg"))
                .with_attr("width", "10")
                .with_child(Element::new(QName::svg("path")).with_attr("fill", "#000")),
        );
        assert_eq!(
            doc.to_xml_string(),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <svg xmlns=\"http://www.w3.org/2000/svg\" width=\"10\"><path fill=\"#000\" /></svg>"
        );
    }

    #[test]
    fn test_source_prefix_kept() {
        let doc = Document::parse(
            r##"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink"><use xlink:href="#a"/></svg>"##,
        )
        .expect("should parse");
        let xml = doc.to_xml_string();
        assert!(xml.contains(r#"xmlns:xlink="http://www.w3.org/1999/xlink""#));
        assert!(xml.contains(r##"<use xlink:href="#a" />"##));
    }

    #[test]
    fn test_unused_namespace_not_declared() {
        let doc = Document::parse(
            r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink"/>"#,
        )
        .expect("should parse");
        assert!(!doc.to_xml_string().contains("xlink"));
    }

    #[test]
    fn test_foreign_default_namespace_gets_generated_prefix() {
        let doc = Document::parse(
            r#"<svg xmlns="http://www.w3.org/2000/svg"><metadata><info xmlns="urn:example"/></metadata></svg>"#,
        )
        .expect("should parse");
        let xml = doc.to_xml_string();
        assert!(xml.contains(r#"xmlns:ns0="urn:example""#));
        assert!(xml.contains("<ns0:info />"));
    }

    #[test]
    fn test_xml_prefix_never_declared() {
        let doc = Document::parse(
            r#"<svg xmlns="http://www.w3.org/2000/svg"><text xml:space="preserve">a  b</text></svg>"#,
        )
        .expect("should parse");
        let xml = doc.to_xml_string();
        assert!(xml.contains(r#"<text xml:space="preserve">a  b</text>"#));
        assert!(!xml.contains("xmlns:xml"));
    }

    #[test]
    fn test_unqualified_child_undeclares_default() {
        let doc = Document::new(
            Element::new(QName::svg("svg")).with_child(Element::new(QName::local("plain"))),
        );
        assert!(doc.to_xml_string().contains(r#"<plain xmlns="" />"#));
    }

    #[test]
    fn test_comments_and_text_round_trip() {
        let source = "<svg xmlns=\"http://www.w3.org/2000/svg\">\n  <!-- logo -->\n  <g>a &amp; b</g>\n</svg>";
        let doc = Document::parse(source).expect("should parse");
        assert_eq!(
            doc.to_xml_string(),
            format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{}", source)
        );
    }
}
