//! Serializer: owned [`XmlDocument`] → indented UTF-8 text

use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::errors::WriteError;
use super::tree::{XmlDocument, XmlElement, XmlNode};

/// Serialize a document with a UTF-8 declaration and two-space indentation
pub fn write_document(document: &XmlDocument) -> Result<String, WriteError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    write_event(
        &mut writer,
        Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), document.standalone.as_deref())),
    )?;
    for node in &document.prolog {
        write_node(&mut writer, node)?;
    }
    write_element(&mut writer, &document.root)?;
    for node in &document.epilogue {
        write_node(&mut writer, node)?;
    }

    let mut bytes = writer.into_inner();
    bytes.push(b'\n');
    String::from_utf8(bytes).map_err(|e| WriteError::Encoding(e.to_string()))
}

fn write_event(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), WriteError> {
    writer
        .write_event(event)
        .map_err(|e| WriteError::Xml(e.to_string()))
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &XmlElement) -> Result<(), WriteError> {
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if element.children.is_empty() {
        return write_event(writer, Event::Empty(start));
    }

    write_event(writer, Event::Start(start))?;
    for child in &element.children {
        write_node(writer, child)?;
    }
    write_event(writer, Event::End(BytesEnd::new(element.name.as_str())))
}

fn write_node(writer: &mut Writer<Vec<u8>>, node: &XmlNode) -> Result<(), WriteError> {
    match node {
        XmlNode::Element(element) => write_element(writer, element),
        XmlNode::Text(text) => write_event(writer, Event::Text(BytesText::new(text))),
        XmlNode::CData(text) => write_event(writer, Event::CData(BytesCData::new(text.as_str()))),
        XmlNode::Comment(raw) => write_event(writer, Event::Comment(BytesText::from_escaped(raw.as_str()))),
        XmlNode::ProcessingInstruction(raw) => {
            write_event(writer, Event::PI(BytesText::from_escaped(raw.as_str())))
        }
        XmlNode::DocType(raw) => write_event(writer, Event::DocType(BytesText::from_escaped(raw.as_str()))),
    }
}
