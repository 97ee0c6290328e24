//! Owned, mutable XML element tree

/// The SVG namespace URI
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// The namespace bound to the reserved `xml` prefix
pub const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";

/// A namespace-qualified name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QName {
    pub namespace: Option<String>,
    pub local: String,
}

impl QName {
    pub fn new(namespace: Option<&str>, local: impl Into<String>) -> Self {
        Self {
            namespace: namespace.map(str::to_string),
            local: local.into(),
        }
    }

    /// A name without a namespace, as used by ordinary SVG attributes
    pub fn local(local: impl Into<String>) -> Self {
        Self::new(None, local)
    }

    /// A name in the SVG namespace
    pub fn svg(local: impl Into<String>) -> Self {
        Self::new(Some(SVG_NS), local)
    }

    pub fn is(&self, namespace: Option<&str>, local: &str) -> bool {
        self.namespace.as_deref() == namespace && self.local == local
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: QName,
    pub value: String,
}

/// A child of an element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    Comment(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: QName,
    /// Attributes in document order
    pub attributes: Vec<Attribute>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: QName) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Is this the SVG element `local`?
    pub fn is_svg(&self, local: &str) -> bool {
        self.name.is(Some(SVG_NS), local)
    }

    /// Value of an unqualified attribute
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name.is(None, name))
            .map(|a| a.value.as_str())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Set an unqualified attribute. An existing value is replaced in place,
    /// a new attribute goes last.
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attributes.iter_mut().find(|a| a.name.is(None, name)) {
            Some(attr) => attr.value = value,
            None => self.attributes.push(Attribute {
                name: QName::local(name),
                value,
            }),
        }
    }

    /// Remove an unqualified attribute, returning its value
    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        let index = self.attributes.iter().position(|a| a.name.is(None, name))?;
        Some(self.attributes.remove(index).value)
    }

    /// Builder-style [`Element::set_attr`]
    pub fn with_attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Builder-style child append
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Concatenated text of the direct text children
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|n| match n {
                Node::Text(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            _ => None,
        })
    }

    pub fn child_elements_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.children.iter_mut().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            _ => None,
        })
    }

    /// Number of child elements, ignoring text and comments
    pub fn element_count(&self) -> usize {
        self.child_elements().count()
    }

    /// All elements below this one in document order, not including `self`
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: vec![self.children.iter()],
        }
    }

    /// Visit every element below this one in document order, not including `self`
    pub fn visit_descendants_mut(&mut self, visit: &mut impl FnMut(&mut Element)) {
        for child in self.child_elements_mut() {
            visit(&mut *child);
            child.visit_descendants_mut(&mut *visit);
        }
    }

    /// Drop child elements for which `keep` returns false. Text and comment
    /// children are always kept. Returns how many elements were removed.
    pub fn retain_child_elements(&mut self, mut keep: impl FnMut(&Element) -> bool) -> usize {
        let before = self.children.len();
        self.children.retain(|n| match n {
            Node::Element(e) => keep(e),
            _ => true,
        });
        before - self.children.len()
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// Pre-order iterator over descendant elements
pub struct Descendants<'a> {
    stack: Vec<std::slice::Iter<'a, Node>>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<&'a Element> {
        loop {
            let next = self.stack.last_mut()?.next();
            match next {
                Some(Node::Element(element)) => {
                    self.stack.push(element.children.iter());
                    return Some(element);
                }
                Some(_) => {}
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// A namespace prefix declared in the source document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceDecl {
    pub prefix: String,
    pub uri: String,
}

/// A parsed XML document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub root: Element,
    /// Prefixed namespace declarations seen while parsing, first one per URI.
    /// Used to keep the source's prefixes when writing.
    pub namespaces: Vec<NamespaceDecl>,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self {
            root,
            namespaces: Vec::new(),
        }
    }

    /// Prefix the source document used for a namespace, if any
    pub fn prefix_for(&self, uri: &str) -> Option<&str> {
        self.namespaces
            .iter()
            .find(|ns| ns.uri == uri)
            .map(|ns| ns.prefix.as_str())
    }
}
