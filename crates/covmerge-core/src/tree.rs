// Rust guideline compliant 2026-08-12

//! In-memory XML document model for coverage reports.
//!
//! Reports are held as a tree of [`Element`] nodes. Attribute order and
//! child order are preserved so a merged document serializes in the same
//! shape it was read in.

use crate::error::{Error, Result};

/// A node in the document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A nested element.
    Element(Element),
    /// Text content between tags.
    Text(String),
}

/// An XML element with its attributes and children.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    /// Tag name.
    pub name: String,
    /// Attributes in document order.
    pub attributes: Vec<(String, String)>,
    /// Child nodes in document order.
    pub children: Vec<Node>,
}

impl Element {
    /// Creates an empty element with the given tag name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Returns the value of an attribute, if present.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns the value of an attribute that must be present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingAttribute`] if the attribute is absent.
    pub fn require_attr(&self, name: &str) -> Result<&str> {
        self.attr(name).ok_or_else(|| Error::MissingAttribute {
            element: self.name.clone(),
            attribute: name.to_string(),
        })
    }

    /// Sets an attribute, replacing its value in place if the key exists.
    ///
    /// Existing attributes keep their position; new attributes append at
    /// the end.
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attributes.iter_mut().find(|(key, _)| key == name) {
            Some(entry) => entry.1 = value,
            None => self.attributes.push((name.to_string(), value)),
        }
    }

    /// Iterates over child elements, skipping text nodes.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// Finds the first child element with the given tag name.
    pub fn find_child(&self, name: &str) -> Option<&Element> {
        self.child_elements().find(|element| element.name == name)
    }

    /// Finds the first child element with the given tag name, mutably.
    pub fn find_child_mut(&mut self, name: &str) -> Option<&mut Element> {
        self.children.iter_mut().find_map(|node| match node {
            Node::Element(element) if element.name == name => Some(element),
            _ => None,
        })
    }

    /// Appends a child element.
    pub fn append_element(&mut self, element: Element) {
        self.children.push(Node::Element(element));
    }

    /// Removes and returns all child elements with the given tag name.
    ///
    /// Other children keep their relative order.
    pub fn take_elements(&mut self, name: &str) -> Vec<Element> {
        let mut taken = Vec::new();
        let mut kept = Vec::new();
        for node in self.children.drain(..) {
            match node {
                Node::Element(element) if element.name == name => taken.push(element),
                other => kept.push(other),
            }
        }
        self.children = kept;
        taken
    }

    /// Returns the first child element regardless of tag name.
    pub fn first_element(&self) -> Option<&Element> {
        self.child_elements().next()
    }

    /// Removes and returns the first child element regardless of tag name.
    pub fn take_first_element(&mut self) -> Option<Element> {
        let index = self
            .children
            .iter()
            .position(|node| matches!(node, Node::Element(_)))?;
        match self.children.remove(index) {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// Replaces the first child element with the given one.
    ///
    /// # Returns
    ///
    /// `true` if a child element existed and was replaced, `false` if the
    /// element has no child elements.
    pub fn replace_first_element(&mut self, replacement: Element) -> bool {
        for node in self.children.iter_mut() {
            if let Node::Element(element) = node {
                *element = replacement;
                return true;
            }
        }
        false
    }

    /// Concatenates the values of the given attributes into one key.
    ///
    /// Used to identify an element within its group, e.g. a class is keyed
    /// by `filename` plus `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingAttribute`] if any of the attributes is
    /// absent.
    pub fn attribute_chain(&self, names: &[&str]) -> Result<String> {
        let mut key = String::new();
        for name in names {
            key.push_str(self.require_attr(name)?);
        }
        Ok(key)
    }
}
