//! Element Attributes
//!
//! Ordered attribute collection with name lookup.

use std::collections::HashMap;

/// Named node map (attribute collection)
#[derive(Debug, Clone, Default)]
pub struct NamedNodeMap {
    attributes: Vec<Attr>,
    by_name: HashMap<String, usize>,
}

/// Single attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    pub name: String,
    pub value: String,
}

impl Attr {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl NamedNodeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get number of attributes
    pub fn length(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Get attribute by name
    pub fn get_named_item(&self, name: &str) -> Option<&Attr> {
        self.by_name.get(name).and_then(|&i| self.attributes.get(i))
    }

    /// Get attribute value
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.get_named_item(name).map(|a| a.value.as_str())
    }

    /// Set attribute, returning the replaced one.
    /// An existing attribute keeps its position.
    pub fn set_named_item(&mut self, attr: Attr) -> Option<Attr> {
        if let Some(&index) = self.by_name.get(&attr.name) {
            Some(std::mem::replace(&mut self.attributes[index], attr))
        } else {
            self.by_name.insert(attr.name.clone(), self.attributes.len());
            self.attributes.push(attr);
            None
        }
    }

    /// Set attribute by name/value
    pub fn set_attribute(&mut self, name: &str, value: &str) -> Option<Attr> {
        self.set_named_item(Attr::new(name, value))
    }

    /// Remove attribute by name
    pub fn remove_named_item(&mut self, name: &str) -> Option<Attr> {
        let index = self.by_name.remove(name)?;
        // Shift indices for items after the removed one
        for idx in self.by_name.values_mut() {
            if *idx > index {
                *idx -= 1;
            }
        }
        Some(self.attributes.remove(index))
    }

    /// Check if attribute exists
    pub fn has_attribute(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Get attribute names in insertion order
    pub fn get_attribute_names(&self) -> Vec<&str> {
        self.attributes.iter().map(|a| a.name.as_str()).collect()
    }

    /// Iterate over attributes in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Attr> {
        self.attributes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_attribute() {
        let mut attrs = NamedNodeMap::new();
        attrs.set_attribute("class", "btn");
        attrs.set_attribute("id", "submit");

        assert_eq!(attrs.length(), 2);
        assert_eq!(attrs.get_attribute("class"), Some("btn"));
        assert_eq!(attrs.get_attribute("id"), Some("submit"));
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut attrs = NamedNodeMap::new();
        attrs.set_attribute("a", "1");
        attrs.set_attribute("b", "2");
        let old = attrs.set_attribute("a", "3");

        assert_eq!(old, Some(Attr::new("a", "1")));
        assert_eq!(attrs.get_attribute_names(), vec!["a", "b"]);
        assert_eq!(attrs.get_attribute("a"), Some("3"));
    }

    #[test]
    fn test_remove_attribute_reindexes() {
        let mut attrs = NamedNodeMap::new();
        attrs.set_attribute("foo", "bar");
        attrs.set_attribute("baz", "qux");

        assert!(attrs.remove_named_item("foo").is_some());
        assert!(!attrs.has_attribute("foo"));
        assert_eq!(attrs.get_attribute("baz"), Some("qux"));
        assert!(attrs.remove_named_item("foo").is_none());
    }
}
