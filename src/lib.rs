/// A block parser for assistant-generated chat replies
pub mod ast;
pub mod inline;
pub mod parser;

pub use ast::{Block, Inline, InlineText};

use parser::Parser;

/// Parse a complete assistant reply into its renderable block sequence.
///
/// Deterministic and total: the same input always yields the same sequence,
/// and no input produces an error. Each call owns fresh buffers, so replies
/// may be parsed concurrently from independent callers.
pub fn parse_reply(input: &str) -> Vec<Block> {
    let mut parser = Parser::new();
    parser.parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_reply(""), Vec::<Block>::new());
    }

    #[test]
    fn test_basic_paragraph() {
        let blocks = parse_reply("hello world\n");
        assert_eq!(
            blocks,
            vec![Block::Paragraph {
                text: vec![Inline::Text("hello world".to_string())],
            }]
        );
    }

    #[test]
    fn test_paragraph_with_link() {
        let blocks = parse_reply("see [docs](https://example.com)\n");
        assert_eq!(
            blocks,
            vec![Block::Paragraph {
                text: vec![
                    Inline::Text("see ".to_string()),
                    Inline::Anchor {
                        label: "docs".to_string(),
                        destination: "https://example.com".to_string(),
                        new_tab: true,
                    },
                ],
            }]
        );
    }
}
