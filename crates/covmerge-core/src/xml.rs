// Rust guideline compliant 2026-08-12

//! XML reading and writing for coverage reports.
//!
//! Documents are parsed into the [`Element`] tree and serialized back with
//! a UTF-8 declaration, two-space indentation and self-closing tags for
//! childless elements. Whitespace-only text between tags is dropped on
//! input; the XML declaration, comments and doctype of the source are not
//! carried over.

use crate::error::{Error, Result};
use crate::tree::{Element, Node};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use std::fs;
use std::io;
use std::path::Path;

/// Reads and parses an XML report from a file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not contain a
/// well-formed single-root document.
pub fn parse_file(path: &Path) -> Result<Element> {
    let content = fs::read_to_string(path)?;
    parse_str(&content)
}

/// Parses an XML report from a string.
///
/// # Returns
///
/// The root element of the document.
///
/// # Errors
///
/// Returns an error if the document is not well-formed or does not have
/// exactly one root element.
pub fn parse_str(xml: &str) -> Result<Element> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Element> = Vec::new();
    let mut roots: Vec<Element> = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                stack.push(element_from_start(&start)?);
            }
            Event::Empty(start) => {
                let element = element_from_start(&start)?;
                attach(&mut stack, &mut roots, element);
            }
            Event::End(_) => {
                let element = stack.pop().ok_or_else(|| {
                    Error::MalformedReport("closing tag without an open element".to_string())
                })?;
                attach(&mut stack, &mut roots, element);
            }
            Event::Text(text) => {
                let content = text.unescape()?.into_owned();
                if !content.is_empty() {
                    if let Some(parent) = stack.last_mut() {
                        parent.children.push(Node::Text(content));
                    }
                }
            }
            Event::CData(data) => {
                let content = String::from_utf8_lossy(&data.into_inner()).into_owned();
                if let Some(parent) = stack.last_mut() {
                    parent.children.push(Node::Text(content));
                }
            }
            Event::Decl(_) | Event::Comment(_) | Event::PI(_) | Event::DocType(_) => {}
            Event::Eof => break,
        }
    }

    if let Some(open) = stack.last() {
        return Err(Error::MalformedReport(format!(
            "unclosed element <{}>",
            open.name
        )));
    }

    let mut roots = roots.into_iter();
    match (roots.next(), roots.next()) {
        (Some(root), None) => Ok(root),
        (Some(_), Some(extra)) => Err(Error::MalformedReport(format!(
            "unexpected second root element <{}>",
            extra.name
        ))),
        (None, _) => Err(Error::MalformedReport(
            "document has no root element".to_string(),
        )),
    }
}

/// Serializes a report and writes it to a file.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub fn write_file(path: &Path, root: &Element) -> Result<()> {
    let text = write_string(root)?;
    fs::write(path, text)?;
    Ok(())
}

/// Serializes a report to a string with an XML declaration.
///
/// # Errors
///
/// Returns an error if an event cannot be written.
pub fn write_string(root: &Element) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    write_element(&mut writer, root)?;
    let mut text = String::from_utf8(writer.into_inner())
        .map_err(|err| Error::MalformedReport(format!("serialized report is not UTF-8: {err}")))?;
    text.push('\n');
    Ok(text)
}

/// Builds an [`Element`] from an opening tag and its attributes.
fn element_from_start(start: &BytesStart<'_>) -> Result<Element> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut element = Element::new(name);
    for attr in start.attributes() {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value()?.into_owned();
        element.attributes.push((key, value));
    }
    Ok(element)
}

/// Attaches a completed element to its parent, or records it as a root.
fn attach(stack: &mut Vec<Element>, roots: &mut Vec<Element>, element: Element) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(Node::Element(element)),
        None => roots.push(element),
    }
}

fn write_element<W: io::Write>(writer: &mut Writer<W>, element: &Element) -> Result<()> {
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if element.children.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    for node in &element.children {
        match node {
            Node::Element(child) => write_element(writer, child)?,
            Node::Text(text) => writer.write_event(Event::Text(BytesText::new(text)))?,
        }
    }
    writer.write_event(Event::End(BytesEnd::new(element.name.as_str())))?;
    Ok(())
}
