//! Structure-preserving retagging of markup text regions.

use super::{content_to_markup, parse_fragment, DocumentNode};
use crate::domain::tagging::{tag_or_empty, TaggingProvider};
use crate::domain::{format_block, Language};
use log::{debug, warn};
use quick_xml::escape::{escape, partial_escape};
use regex::Regex;
use std::sync::OnceLock;

fn prolog_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^\x{FEFF}?\s*<\?xml[^>]*\?>").unwrap())
}

/// Result of tagging one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetagResult {
    pub content: String,
    /// Tokens written across all text regions
    pub tokens: usize,
}

/// Replace every non-blank text region of `raw` with its tagged-line block.
///
/// Element names, attributes and nesting are kept as they are. Input that
/// does not parse is tagged as a whole and wrapped in `<text lang="..">`.
pub fn retag_document(
    raw: &str,
    provider: &dyn TaggingProvider,
    language: Language,
) -> RetagResult {
    let body = strip_prolog(raw);

    match parse_fragment(body) {
        Ok(root) => {
            let mut tokens = 0usize;
            let tagged = retag_node(&root, provider, &mut tokens);
            RetagResult {
                content: content_to_markup(&tagged),
                tokens,
            }
        }
        Err(e) => {
            warn!("Markup did not parse, tagging as plain text: {}", e);
            text_envelope(raw, provider, language)
        }
    }
}

/// Tag `text` as a whole into `<corpus lang=".." id="..">`.
pub fn corpus_document(
    text: &str,
    provider: &dyn TaggingProvider,
    language: Language,
    id: &str,
) -> RetagResult {
    let tokens = tag_or_empty(provider, text);
    let content = format!(
        "<corpus lang=\"{}\" id=\"{}\">\n{}\n</corpus>",
        language.code(),
        escape(id),
        partial_escape(format_block(&tokens).as_str())
    );

    RetagResult {
        content,
        tokens: tokens.len(),
    }
}

/// Remove a leading `<?xml ...?>` declaration and surrounding whitespace
pub fn strip_prolog(raw: &str) -> &str {
    let rest = match prolog_regex().find(raw) {
        Some(m) => &raw[m.end()..],
        None => raw.trim_start_matches('\u{feff}'),
    };
    rest.trim()
}

fn text_envelope(raw: &str, provider: &dyn TaggingProvider, language: Language) -> RetagResult {
    let tokens = tag_or_empty(provider, raw);
    let content = format!(
        "<text lang=\"{}\">\n{}\n</text>",
        language.code(),
        partial_escape(format_block(&tokens).as_str())
    );

    RetagResult {
        content,
        tokens: tokens.len(),
    }
}

fn retag_node(
    node: &DocumentNode,
    provider: &dyn TaggingProvider,
    tokens: &mut usize,
) -> DocumentNode {
    let text = retag_region(&node.text, provider, tokens);
    let children = node
        .children
        .iter()
        .map(|child| retag_node(child, provider, tokens))
        .collect();
    let tail = retag_region(&node.tail, provider, tokens);

    DocumentNode {
        name: node.name.clone(),
        attributes: node.attributes.clone(),
        children,
        text,
        tail,
    }
}

fn retag_region(text: &str, provider: &dyn TaggingProvider, tokens: &mut usize) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }

    let tagged = tag_or_empty(provider, text);
    debug!("Tagged region of {} bytes into {} tokens", text.len(), tagged.len());
    *tokens += tagged.len();
    format!("\n{}\n", format_block(&tagged))
}
