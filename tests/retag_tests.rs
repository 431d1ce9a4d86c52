//! Library-level tests for structure-preserving retagging

use ttxml::domain::markup::{parse_document, DocumentNode};
use ttxml::domain::{retag_document, Language, TaggedToken, TaggingProvider};
use ttxml::error::{Result, TtxmlError};

struct Upper;

impl TaggingProvider for Upper {
    fn name(&self) -> &str {
        "upper"
    }

    fn tag(&self, text: &str) -> Result<Vec<TaggedToken>> {
        if text.contains("boom") {
            return Err(TtxmlError::Tagging("boom".to_string()));
        }
        Ok(text
            .split_whitespace()
            .map(|w| TaggedToken::new(w, "X", w.to_uppercase()))
            .collect())
    }
}

fn names(root: &DocumentNode) -> Vec<String> {
    root.preorder().into_iter().map(|n| n.name.clone()).collect()
}

#[test]
fn test_nested_document_keeps_element_order() {
    let input = r#"<?xml version="1.0"?>
<text id="t1"><s n="1">The cat</s><s n="2">sat <hi rend="it">down</hi> quietly</s></text>"#;
    let result = retag_document(input, &Upper, Language::English);

    assert_eq!(
        result.content,
        "<text id=\"t1\"><s n=\"1\">\nThe\tX\tTHE\ncat\tX\tCAT\n</s>\
         <s n=\"2\">\nsat\tX\tSAT\n<hi rend=\"it\">\ndown\tX\tDOWN\n</hi>\nquietly\tX\tQUIETLY\n</s></text>"
    );
    assert_eq!(result.tokens, 5);

    let before = parse_document(input.split_once('\n').unwrap().1).unwrap();
    let after = parse_document(&result.content).unwrap();
    assert_eq!(names(&before), names(&after));
}

#[test]
fn test_one_failing_region_does_not_spoil_the_rest() {
    let result = retag_document("<d><a>boom</a><b>fine</b></d>", &Upper, Language::Japanese);
    assert_eq!(result.content, "<d><a>\n\n</a><b>\nfine\tX\tFINE\n</b></d>");
    assert_eq!(result.tokens, 1);
}

#[test]
fn test_unbalanced_markup_uses_text_envelope() {
    let result = retag_document("<a>one <b>two</a>", &Upper, Language::English);
    assert!(result.content.starts_with("<text lang=\"EN\">\n"));
    assert!(result.content.ends_with("\n</text>"));
}
