//! Class name → fill table built from parsed style rules

use std::collections::BTreeMap;

use tracing::debug;

use super::ast::StyleRule;
use super::grammar::parse_stylesheet;

/// Fill colors keyed by class name
///
/// Built once per conversion and read-only afterwards. When several rules
/// target the same class, the last one wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleMapping {
    fills: BTreeMap<String, String>,
}

impl StyleMapping {
    /// An empty mapping, used when the document has no style block
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse style text and collect the fill of every single-class rule
    ///
    /// Never fails; anything that cannot be understood contributes no entry.
    pub fn from_css(text: &str) -> Self {
        Self::from_rules(&parse_stylesheet(text))
    }

    /// Collect fills from already parsed rules
    pub fn from_rules(rules: &[StyleRule]) -> Self {
        let mut fills = BTreeMap::new();
        for rule in rules {
            match (rule.selector.class_name(), rule.fill()) {
                (Some(class), Some(fill)) => {
                    fills.insert(class.to_string(), fill.to_string());
                }
                (Some(class), None) => debug!(class, "rule has no fill, skipping"),
                (None, _) => debug!(selector = ?rule.selector, "not a single class selector, skipping"),
            }
        }
        Self { fills }
    }

    /// Fill color for a class, if a rule defined one
    pub fn fill_for(&self, class: &str) -> Option<&str> {
        self.fills.get(class).map(|s| s.as_str())
    }

    pub fn contains(&self, class: &str) -> bool {
        self.fills.contains_key(class)
    }

    pub fn len(&self) -> usize {
        self.fills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fills.is_empty()
    }

    /// Entries in class name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fills.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StyleMapping {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            fills: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_mapping() {
        let mapping = StyleMapping::from_css(".cls-1 { fill: #ff0000; } .cls-2 { fill: none; }");
        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.fill_for("cls-1"), Some("#ff0000"));
        assert_eq!(mapping.fill_for("cls-2"), Some("none"));
        assert_eq!(mapping.fill_for("cls-3"), None);
    }

    #[test]
    fn test_comments_between_rules() {
        let mapping = StyleMapping::from_css("/* c */ .a{fill:red} /* d */ .b{fill:blue}");
        assert_eq!(mapping.fill_for("a"), Some("red"));
        assert_eq!(mapping.fill_for("b"), Some("blue"));
    }

    #[test]
    fn test_exporter_header_comment() {
        let mapping =
            StyleMapping::from_css("/* Generator: Illustrator 27.0 */ .cls-1{fill:#e30613;}");
        assert_eq!(mapping.fill_for("cls-1"), Some("#e30613"));
    }

    #[test]
    fn test_non_ascii_class_names() {
        let mapping =
            StyleMapping::from_css(".größe { fill: red } .café{fill:blue} .a{fill:green}");
        assert_eq!(mapping.len(), 3);
        assert_eq!(mapping.fill_for("größe"), Some("red"));
        assert_eq!(mapping.fill_for("café"), Some("blue"));
    }

    #[test]
    fn test_last_rule_wins() {
        let mapping = StyleMapping::from_css(".a { fill: red; } .a { fill: blue; }");
        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.fill_for("a"), Some("blue"));
    }

    #[test]
    fn test_rules_without_fill_are_skipped() {
        let mapping = StyleMapping::from_css(".a { stroke: red; } .b { fill: ; } .c { fill: green }");
        assert!(!mapping.contains("a"));
        assert!(!mapping.contains("b"));
        assert_eq!(mapping.fill_for("c"), Some("green"));
    }

    #[test]
    fn test_later_rule_without_fill_keeps_earlier_fill() {
        let mapping = StyleMapping::from_css(".a { fill: red } .a { stroke: blue }");
        assert_eq!(mapping.fill_for("a"), Some("red"));
    }

    #[test]
    fn test_non_class_selectors_ignored() {
        let mapping = StyleMapping::from_css("path { fill: red } .a > .b { fill: red } .c:hover { fill: red }");
        assert!(mapping.is_empty());
    }

    #[test]
    fn test_malformed_css_yields_partial_mapping() {
        let mapping = StyleMapping::from_css("}}} .a { fill: red } @@@ .b { fill blue } .c { fill: #0f0 }");
        assert_eq!(mapping.fill_for("a"), Some("red"));
        assert!(!mapping.contains("b"));
        assert_eq!(mapping.fill_for("c"), Some("#0f0"));
    }

    #[test]
    fn test_iter_is_sorted() {
        let mapping: StyleMapping = [("b", "blue"), ("a", "red")].into_iter().collect();
        let entries: Vec<_> = mapping.iter().collect();
        assert_eq!(entries, vec![("a", "red"), ("b", "blue")]);
    }
}
