//! Parsed records for the CSS subset

use super::lexer::Span;

/// The selector part of a rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// A single class selector such as `.cls-1`, stored without the dot
    Class(String),
    /// Anything else (compound selectors, selector lists, at-rule preludes),
    /// kept as the raw source text
    Other(String),
}

impl Selector {
    /// The class name, if this is a single class selector
    pub fn class_name(&self) -> Option<&str> {
        match self {
            Selector::Class(name) => Some(name),
            Selector::Other(_) => None,
        }
    }
}

/// A `property: value` pair from a rule block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Property name, lowercased
    pub property: String,
    /// Trimmed value text. A `!important` marker is stripped and not recorded.
    pub value: String,
}

/// A rule of the form `<selector> { <declarations> }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
    pub selector: Selector,
    pub declarations: Vec<Declaration>,
    /// Byte range of the whole rule in the style text
    pub span: Span,
}

impl StyleRule {
    /// Value of the last non-empty `fill` declaration in this rule
    pub fn fill(&self) -> Option<&str> {
        self.declarations
            .iter()
            .rev()
            .find(|d| d.property == "fill" && !d.value.is_empty())
            .map(|d| d.value.as_str())
    }
}
