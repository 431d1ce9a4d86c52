//! Element tree with the text/tail model
//!
//! Every element carries two free-text fields:
//! - `text`: text inside the element before its first child
//! - `tail`: text after the element's closing tag, still inside the parent
//!
//! ```xml
//! <p>TEXT<b>bold</b>TAIL OF B</p>
//! ```

/// One element of a parsed markup fragment
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocumentNode {
    pub name: String,
    /// Attributes in document order, values unescaped
    pub attributes: Vec<(String, String)>,
    pub children: Vec<DocumentNode>,
    pub text: String,
    pub tail: String,
}

impl DocumentNode {
    pub fn new(name: impl Into<String>) -> Self {
        DocumentNode {
            name: name.into(),
            ..Default::default()
        }
    }

    /// This node and all descendants in document (pre-)order
    pub fn preorder(&self) -> Vec<&DocumentNode> {
        let mut nodes = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            nodes.push(node);
            stack.extend(node.children.iter().rev());
        }
        nodes
    }

    /// Append free text at the current end of this element's content
    pub(crate) fn push_text(&mut self, text: &str) {
        match self.children.last_mut() {
            Some(last) => last.tail.push_str(text),
            None => self.text.push_str(text),
        }
    }
}
