//! Tagged tokens and the TreeTagger line format

/// One analyzed token: surface form, part-of-speech tag and lemma
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    pub token: String,
    pub pos: String,
    pub lemma: String,
}

impl TaggedToken {
    pub fn new(token: impl Into<String>, pos: impl Into<String>, lemma: impl Into<String>) -> Self {
        TaggedToken {
            token: token.into(),
            pos: pos.into(),
            lemma: lemma.into(),
        }
    }
}

/// Render a token as `token<TAB>pos<TAB>lemma`.
///
/// Fields are written verbatim. A tab or newline inside a field makes the
/// line ambiguous to readers of the format; nothing here guards against it.
pub fn format_line(token: &TaggedToken) -> String {
    format!("{}\t{}\t{}", token.token, token.pos, token.lemma)
}

/// Render tokens one per line, joined with `\n` (no trailing newline).
pub fn format_block(tokens: &[TaggedToken]) -> String {
    tokens
        .iter()
        .map(format_line)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        let token = TaggedToken::new("cats", "NNS", "cat");
        assert_eq!(format_line(&token), "cats\tNNS\tcat");
    }

    #[test]
    fn test_format_block() {
        let tokens = vec![
            TaggedToken::new("The", "DT", "the"),
            TaggedToken::new("cats", "NNS", "cat"),
        ];
        assert_eq!(format_block(&tokens), "The\tDT\tthe\ncats\tNNS\tcat");
    }

    #[test]
    fn test_format_block_empty() {
        assert_eq!(format_block(&[]), "");
    }

    #[test]
    fn test_format_line_passes_through_tabs() {
        let token = TaggedToken::new("a\tb", "SYM", "a\tb");
        assert_eq!(format_line(&token), "a\tb\tSYM\ta\tb");
    }
}
