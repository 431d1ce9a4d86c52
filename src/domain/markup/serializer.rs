//! Writing `DocumentNode` trees back to markup

use super::DocumentNode;
use quick_xml::escape::{escape, partial_escape};

/// Serialize only what is inside `node`: its text and its children.
///
/// Used for the synthetic wrapper, whose own tags must not be written.
pub fn content_to_markup(node: &DocumentNode) -> String {
    let mut out = String::new();
    write_content(node, &mut out);
    out
}

fn write_node(node: &DocumentNode, out: &mut String) {
    out.push('<');
    out.push_str(&node.name);
    for (key, value) in &node.attributes {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(&escape(value.as_str()));
        out.push('"');
    }

    if node.text.is_empty() && node.children.is_empty() {
        out.push_str(" />");
    } else {
        out.push('>');
        write_content(node, out);
        out.push_str("</");
        out.push_str(&node.name);
        out.push('>');
    }

    out.push_str(&partial_escape(node.tail.as_str()));
}

fn write_content(node: &DocumentNode, out: &mut String) {
    out.push_str(&partial_escape(node.text.as_str()));
    for child in &node.children {
        write_node(child, out);
    }
}
