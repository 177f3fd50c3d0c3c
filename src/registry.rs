//! Tag to rule bindings

use crate::node::TagId;
use crate::rules::TagRule;
use std::collections::HashMap;
use std::sync::LazyLock;

static STANDARD: LazyLock<Registry> = LazyLock::new(Registry::standard);

/// Fixed table mapping tag identities to their rule
#[derive(Debug, Clone)]
pub struct Registry {
    rules: HashMap<TagId, TagRule>,
}

impl Registry {
    /// Build the standard bindings
    pub fn standard() -> Self {
        let bindings = [
            (TagId::Html, TagRule::Html),
            (TagId::Script, TagRule::Script),
            (TagId::Table, TagRule::Table),
            (TagId::Caption, TagRule::Caption),
            (TagId::Hr, TagRule::Hr),
            (TagId::Img, TagRule::Img),
            (TagId::Area, TagRule::Area),
            (TagId::A, TagRule::Anchor),
            (TagId::Map, TagRule::Map),
            (TagId::Style, TagRule::Style),
            (TagId::Form, TagRule::Form),
            (TagId::Meta, TagRule::Meta),
            (TagId::Td, TagRule::TableCell),
            (TagId::Th, TagRule::TableCell),
            (TagId::Link, TagRule::Link),
        ];

        Self {
            rules: bindings.into_iter().collect(),
        }
    }

    /// Process-wide standard registry, built on first use
    pub fn global() -> &'static Registry {
        &STANDARD
    }

    /// Rule bound to `tag`, or the baseline rule
    pub fn rule_for(&self, tag: TagId) -> TagRule {
        self.rules.get(&tag).copied().unwrap_or(TagRule::Baseline)
    }

    /// Bound (tag, rule) pairs sorted by tag name
    pub fn rules(&self) -> Vec<(TagId, TagRule)> {
        let mut rules: Vec<_> = self.rules.iter().map(|(t, r)| (*t, *r)).collect();
        rules.sort_by_key(|(tag, _)| tag.name());
        rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_bindings() {
        let registry = Registry::standard();
        assert_eq!(registry.len(), 15);
        assert_eq!(registry.rule_for(TagId::A), TagRule::Anchor);
        assert_eq!(registry.rule_for(TagId::Td), TagRule::TableCell);
        assert_eq!(registry.rule_for(TagId::Th), TagRule::TableCell);
    }

    #[test]
    fn test_unbound_tag_gets_baseline() {
        let registry = Registry::standard();
        assert_eq!(registry.rule_for(TagId::P), TagRule::Baseline);
        assert_eq!(registry.rule_for(TagId::Div), TagRule::Baseline);
    }

    #[test]
    fn test_rules_sorted_by_tag() {
        let names: Vec<&str> = Registry::global()
            .rules()
            .iter()
            .map(|(tag, _)| tag.name())
            .collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
        assert_eq!(names.first(), Some(&"a"));
    }

    #[test]
    fn test_global_is_shared() {
        assert!(std::ptr::eq(Registry::global(), Registry::global()));
    }
}
