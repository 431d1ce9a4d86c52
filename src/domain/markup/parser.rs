//! Markup fragment parsing into a `DocumentNode` tree

use super::DocumentNode;
use crate::error::{Result, TtxmlError};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fmt::Display;

/// Name of the synthetic element wrapped around every fragment
pub const WRAPPER_NAME: &str = "ttxml-root";

/// Parse a fragment that may hold several top-level elements or bare prose.
///
/// The fragment is wrapped in a `<ttxml-root>` element first; the returned
/// node is that wrapper.
pub fn parse_fragment(markup: &str) -> Result<DocumentNode> {
    let wrapped = format!("<{0}>{1}</{0}>", WRAPPER_NAME, markup);
    parse_document(&wrapped)
}

/// Parse a well-formed document with a single root element.
///
/// Comments and processing instructions are dropped and the text around them
/// joined. CDATA sections become plain text.
pub fn parse_document(xml: &str) -> Result<DocumentNode> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<DocumentNode> = Vec::new();
    let mut root: Option<DocumentNode> = None;

    loop {
        let event = match reader.read_event() {
            Ok(event) => event,
            Err(e) => return Err(markup_error(e, reader.buffer_position())),
        };

        match event {
            Event::Start(start) => {
                if root.is_some() {
                    return Err(TtxmlError::Markup(
                        "junk after document element".to_string(),
                    ));
                }
                stack.push(element_from_start(&start)?);
            }
            Event::Empty(start) => {
                let node = element_from_start(&start)?;
                attach(&mut stack, &mut root, node)?;
            }
            Event::End(_) => {
                let node = stack.pop().ok_or_else(|| {
                    TtxmlError::Markup("closing tag without matching start".to_string())
                })?;
                attach(&mut stack, &mut root, node)?;
            }
            Event::Text(text) => {
                let text = text
                    .unescape()
                    .map_err(|e| markup_error(e, reader.buffer_position()))?;
                push_text(&mut stack, &text)?;
            }
            Event::CData(cdata) => {
                let text = String::from_utf8(cdata.into_inner().into_owned())
                    .map_err(|e| TtxmlError::Markup(e.to_string()))?;
                push_text(&mut stack, &text)?;
            }
            Event::Decl(_) | Event::DocType(_) => {
                return Err(TtxmlError::Markup(
                    "declaration inside document content".to_string(),
                ));
            }
            Event::Eof => break,
            // comments and processing instructions
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(TtxmlError::Markup(format!(
            "unclosed element <{}>",
            open.name
        )));
    }

    root.ok_or_else(|| TtxmlError::Markup("no root element".to_string()))
}

fn element_from_start(start: &BytesStart<'_>) -> Result<DocumentNode> {
    let name = utf8(start.name().as_ref())?;
    let mut node = DocumentNode::new(name);

    for attr in start.attributes() {
        let attr = attr.map_err(|e| TtxmlError::Markup(e.to_string()))?;
        let key = utf8(attr.key.as_ref())?;
        let value = attr
            .unescape_value()
            .map_err(|e| TtxmlError::Markup(e.to_string()))?;
        node.attributes.push((key, value.into_owned()));
    }

    Ok(node)
}

fn attach(
    stack: &mut [DocumentNode],
    root: &mut Option<DocumentNode>,
    node: DocumentNode,
) -> Result<()> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
        return Ok(());
    }

    if root.is_some() {
        return Err(TtxmlError::Markup(
            "multiple top-level elements".to_string(),
        ));
    }
    *root = Some(node);
    Ok(())
}

fn push_text(stack: &mut [DocumentNode], text: &str) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => {
            parent.push_text(text);
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err(TtxmlError::Markup(
            "text outside the document element".to_string(),
        )),
    }
}

fn utf8(bytes: &[u8]) -> Result<String> {
    std::str::from_utf8(bytes)
        .map(str::to_string)
        .map_err(|e| TtxmlError::Markup(e.to_string()))
}

fn markup_error(err: impl Display, position: impl Display) -> TtxmlError {
    TtxmlError::Markup(format!("{} (at byte {})", err, position))
}
