/// Block and inline types for parsed assistant replies
use serde::{Deserialize, Serialize};

/// One typed, immutable unit of parsed output. Blocks are emitted in input
/// line order and never mutated after emission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Block {
    Paragraph {
        text: InlineText,
    },
    Heading {
        level: u8, // 1..=3
        text: InlineText,
    },
    /// A maximal run of consecutive bullet lines. Never empty.
    List {
        items: Vec<InlineText>,
    },
    Table {
        headers: Vec<InlineText>,
        /// Row cell counts need not match the header cell count.
        rows: Vec<Vec<InlineText>>,
    },
    /// Fence markers are not part of the payload; content is raw and never
    /// inline-resolved.
    CodeBlock {
        lines: Vec<String>,
    },
    /// Zero-content spacing marker, one per blank input line (not coalesced).
    ParagraphSeparator,
}

/// A resolved text fragment: bold markers stripped, links and backtick spans
/// rewritten into their own variants.
pub type InlineText = Vec<Inline>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Inline {
    Text(String),
    Anchor {
        label: String,
        destination: String,
        /// Anchors always open in a new context; the renderer reads this flag.
        new_tab: bool,
    },
    Code(String), // Inline code span
}
