//! Owned, mutable XML tree
//!
//! Transposition rewrites text in place and metadata replacement inserts and
//! removes elements, so the score is kept as an owned tree rather than a
//! borrowed DOM.

/// A whole document: prolog, root element and trailing misc nodes
#[derive(Debug, Clone, PartialEq)]
pub struct XmlDocument {
    /// `standalone` value from the XML declaration, if one was given
    pub standalone: Option<String>,
    /// DOCTYPE, comments and processing instructions before the root
    pub prolog: Vec<XmlNode>,
    pub root: XmlElement,
    /// Comments and processing instructions after the root
    pub epilogue: Vec<XmlNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum XmlNode {
    Element(XmlElement),
    /// Unescaped character data
    Text(String),
    CData(String),
    /// Raw comment body, written back verbatim
    Comment(String),
    /// Raw processing instruction body (target and content)
    ProcessingInstruction(String),
    /// Raw DOCTYPE body after `<!DOCTYPE `
    DocType(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlNode>,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Element containing a single text node
    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        let mut element = Self::new(name);
        element.children.push(XmlNode::Text(text.into()));
        element
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Child elements in document order
    pub fn elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(element) => Some(element),
            _ => None,
        })
    }

    pub fn elements_mut(&mut self) -> impl Iterator<Item = &mut XmlElement> {
        self.children.iter_mut().filter_map(|node| match node {
            XmlNode::Element(element) => Some(element),
            _ => None,
        })
    }

    /// First child element with the given name
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.elements().find(|e| e.name == name)
    }

    pub fn child_mut(&mut self, name: &str) -> Option<&mut XmlElement> {
        self.elements_mut().find(|e| e.name == name)
    }

    pub fn has_child(&self, name: &str) -> bool {
        self.child(name).is_some()
    }

    /// Concatenated text and CDATA content, `None` if there is none
    pub fn text(&self) -> Option<String> {
        let mut text = String::new();
        let mut found = false;
        for node in &self.children {
            match node {
                XmlNode::Text(t) | XmlNode::CData(t) => {
                    text.push_str(t);
                    found = true;
                }
                _ => {}
            }
        }
        found.then_some(text)
    }

    /// Trimmed text of a child element
    pub fn child_text(&self, name: &str) -> Option<String> {
        self.child(name)
            .and_then(|e| e.text())
            .map(|t| t.trim().to_string())
    }

    /// Replace all content with a single text node
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.children.clear();
        self.children.push(XmlNode::Text(text.into()));
    }

    /// Remove child elements matching the predicate; other nodes are kept
    pub fn remove_elements<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&XmlElement) -> bool,
    {
        self.children.retain(|node| match node {
            XmlNode::Element(element) => !predicate(element),
            _ => true,
        });
    }

    /// Insert a child element before the first child element named `before`,
    /// or append it when there is no such child
    pub fn insert_before(&mut self, element: XmlElement, before: &str) {
        let position = self
            .children
            .iter()
            .position(|node| matches!(node, XmlNode::Element(e) if e.name == before));

        match position {
            Some(index) => self.children.insert(index, XmlNode::Element(element)),
            None => self.children.push(XmlNode::Element(element)),
        }
    }

    /// Pre-order traversal over this element and every descendant element
    pub fn visit<F>(&self, visitor: &mut F)
    where
        F: FnMut(&XmlElement),
    {
        visitor(self);
        for child in self.elements() {
            child.visit(visitor);
        }
    }

    /// Pre-order traversal that may fail; stops at the first error
    pub fn try_visit_mut<F, E>(&mut self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&mut XmlElement) -> Result<(), E>,
    {
        visitor(self)?;
        for child in self.elements_mut() {
            child.try_visit_mut(visitor)?;
        }
        Ok(())
    }
}
