//! Pull-parser front end: quick-xml events → owned [`XmlDocument`]

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::errors::ParseError;
use super::tree::{XmlDocument, XmlElement, XmlNode};

/// Deepest element nesting accepted; the tree is walked recursively
pub const MAX_DEPTH: usize = 1024;

/// Parse an XML string into an owned tree
///
/// Whitespace-only text is dropped (the writer re-indents); every other node,
/// including the DOCTYPE, comments and CDATA sections, is kept.
pub fn parse_document(xml: &str) -> Result<XmlDocument, ParseError> {
    let mut reader = Reader::from_str(xml);
    let mut builder = TreeBuilder::default();

    loop {
        let event = match reader.read_event() {
            Ok(event) => event,
            Err(e) => {
                return Err(ParseError::InvalidXml(format!(
                    "XML error at position {}: {}",
                    reader.buffer_position(),
                    e
                )))
            }
        };

        match event {
            Event::Start(ref e) => builder.open(start_element(e)?)?,
            Event::Empty(ref e) => builder.push(XmlNode::Element(start_element(e)?))?,
            Event::End(_) => builder.close()?,
            Event::Text(e) => {
                let text = e
                    .unescape()
                    .map_err(|err| ParseError::InvalidXml(format!("Invalid text content: {}", err)))?;
                if !text.trim().is_empty() {
                    builder.push(XmlNode::Text(text.into_owned()))?;
                }
            }
            Event::CData(e) => builder.push(XmlNode::CData(utf8(e.into_inner().into_owned())?))?,
            Event::Comment(e) => builder.push(XmlNode::Comment(utf8(e.into_inner().into_owned())?))?,
            Event::PI(e) => builder.push(XmlNode::ProcessingInstruction(utf8(
                e.into_inner().into_owned(),
            )?))?,
            Event::DocType(e) => builder.push(XmlNode::DocType(utf8(e.into_inner().into_owned())?))?,
            Event::Decl(e) => {
                builder.standalone = match e.standalone() {
                    Some(Ok(value)) => Some(utf8(value.into_owned())?),
                    Some(Err(err)) => {
                        return Err(ParseError::InvalidXml(format!("Invalid XML declaration: {}", err)))
                    }
                    None => None,
                };
            }
            Event::Eof => break,
        }
    }

    builder.finish()
}

fn start_element(e: &BytesStart) -> Result<XmlElement, ParseError> {
    let name = utf8(e.name().as_ref().to_vec())?;
    let mut element = XmlElement::new(name);

    for attribute in e.attributes() {
        let attribute = attribute
            .map_err(|err| ParseError::InvalidXml(format!("Malformed attribute in <{}>: {}", element.name, err)))?;
        let key = utf8(attribute.key.as_ref().to_vec())?;
        let value = attribute
            .unescape_value()
            .map_err(|err| ParseError::InvalidXml(format!("Invalid attribute value for '{}': {}", key, err)))?
            .into_owned();
        element.attributes.push((key, value));
    }

    Ok(element)
}

fn utf8(bytes: Vec<u8>) -> Result<String, ParseError> {
    String::from_utf8(bytes).map_err(|e| ParseError::InvalidXml(format!("Invalid UTF-8: {}", e)))
}

/// Stack of open elements plus the document-level node lists
#[derive(Default)]
struct TreeBuilder {
    standalone: Option<String>,
    prolog: Vec<XmlNode>,
    epilogue: Vec<XmlNode>,
    root: Option<XmlElement>,
    open: Vec<XmlElement>,
}

impl TreeBuilder {
    fn open(&mut self, element: XmlElement) -> Result<(), ParseError> {
        if self.open.len() >= MAX_DEPTH {
            return Err(ParseError::InvalidXml(format!(
                "Elements nested deeper than {} levels",
                MAX_DEPTH
            )));
        }
        self.open.push(element);
        Ok(())
    }

    fn close(&mut self) -> Result<(), ParseError> {
        let element = self
            .open
            .pop()
            .ok_or_else(|| ParseError::InvalidXml("Closing tag without matching opening tag".to_string()))?;
        self.push(XmlNode::Element(element))
    }

    fn push(&mut self, node: XmlNode) -> Result<(), ParseError> {
        if let Some(parent) = self.open.last_mut() {
            parent.children.push(node);
            return Ok(());
        }

        match node {
            XmlNode::Element(element) => {
                if self.root.is_some() {
                    return Err(ParseError::InvalidXml(format!(
                        "Second root element <{}>",
                        element.name
                    )));
                }
                self.root = Some(element);
            }
            XmlNode::Text(_) | XmlNode::CData(_) => {
                return Err(ParseError::InvalidXml(
                    "Character data outside the root element".to_string(),
                ));
            }
            XmlNode::DocType(_) if self.root.is_some() => {
                return Err(ParseError::InvalidXml(
                    "DOCTYPE after the root element".to_string(),
                ));
            }
            other if self.root.is_none() => self.prolog.push(other),
            other => self.epilogue.push(other),
        }
        Ok(())
    }

    fn finish(self) -> Result<XmlDocument, ParseError> {
        if let Some(unclosed) = self.open.last() {
            return Err(ParseError::InvalidXml(format!(
                "Unexpected end of document inside <{}>",
                unclosed.name
            )));
        }

        let root = self
            .root
            .ok_or_else(|| ParseError::MissingRequiredElement("root element".to_string()))?;

        Ok(XmlDocument {
            standalone: self.standalone,
            prolog: self.prolog,
            root,
            epilogue: self.epilogue,
        })
    }
}
