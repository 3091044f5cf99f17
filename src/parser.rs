/// Line-oriented block assembler for assistant replies
use crate::ast::{Block, InlineText};
use crate::inline::resolve;
use once_cell::sync::Lazy;
use regex::Regex;
use std::mem;

/// The table header/body divider row: dashes, colons, pipes, and spaces only.
static SEPARATOR_ROW: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-:| ]+$").unwrap());

/// Single-pass assembler. Each input line updates exactly one provisional
/// buffer or triggers one or more flushes; flushed blocks keep input line
/// order. Never fails: worst-case malformed constructs degrade to paragraphs.
pub struct Parser {
    blocks: Vec<Block>,
    /// Resolved items of the bullet run currently accumulating.
    list_items: Vec<InlineText>,
    /// Raw trimmed table-candidate lines; table-vs-paragraphs is decided only
    /// when the run ends.
    table_lines: Vec<String>,
    /// Verbatim lines captured inside a code fence.
    code_lines: Vec<String>,
    in_code_fence: bool,
}

impl Parser {
    pub fn new() -> Self {
        Parser {
            blocks: Vec::new(),
            list_items: Vec::new(),
            table_lines: Vec::new(),
            code_lines: Vec::new(),
            in_code_fence: false,
        }
    }

    /// Parse a complete reply into its block sequence.
    ///
    /// Total over any input: the empty string yields an empty sequence and no
    /// input can make this return an error or panic.
    pub fn parse(&mut self, input: &str) -> Vec<Block> {
        for line in input.lines() {
            self.step(line);
        }
        self.finish();
        mem::take(&mut self.blocks)
    }

    fn step(&mut self, line: &str) {
        let trimmed = line.trim();

        // Fence delimiters outrank every other rule, including fence content.
        // The delimiter line itself contributes nothing; an info string after
        // the backticks is discarded.
        if trimmed.starts_with("```") {
            if self.in_code_fence {
                self.blocks.push(Block::CodeBlock {
                    lines: mem::take(&mut self.code_lines),
                });
            }
            self.in_code_fence = !self.in_code_fence;
            return;
        }

        if self.in_code_fence {
            // Verbatim capture, blank lines included. Never inline-resolved.
            self.code_lines.push(line.to_string());
            return;
        }

        if let Some(item) = self.bullet_text(trimmed) {
            // A bullet ends any table-candidate run but lets the bullet run
            // keep accumulating.
            self.flush_table();
            self.list_items.push(resolve(item));
            return;
        }

        if trimmed.contains('|') {
            self.table_lines.push(trimmed.to_string());
            return;
        }

        // Any other line ends a pending table-candidate run.
        self.flush_table();

        if trimmed.is_empty() {
            self.flush_list();
            self.blocks.push(Block::ParagraphSeparator);
            return;
        }

        self.flush_list();
        let block = match self.parse_heading(trimmed) {
            Some(heading) => heading,
            None => Block::Paragraph {
                text: resolve(trimmed),
            },
        };
        self.blocks.push(block);
    }

    /// End-of-input finalization. A pending table run is kept as a table
    /// without checking the divider row, so a lone captured line still yields
    /// headers and zero rows. Then the bullet run flushes, then an
    /// unterminated fence gives up whatever it captured.
    fn finish(&mut self) {
        if !self.table_lines.is_empty() {
            self.flush_list();
            let lines = mem::take(&mut self.table_lines);
            let table = self.build_table(&lines);
            self.blocks.push(table);
        }
        self.flush_list();
        if self.in_code_fence {
            self.blocks.push(Block::CodeBlock {
                lines: mem::take(&mut self.code_lines),
            });
            self.in_code_fence = false;
        }
    }

    /// A bullet is `-` or `•` followed by at least one whitespace character.
    fn bullet_text<'a>(&self, trimmed: &'a str) -> Option<&'a str> {
        let rest = trimmed
            .strip_prefix('-')
            .or_else(|| trimmed.strip_prefix('•'))?;
        if rest.chars().next()?.is_whitespace() {
            Some(rest.trim_start())
        } else {
            None
        }
    }

    /// One to three `#` characters followed by whitespace. Four or more
    /// hashes never match and fall through to a paragraph.
    fn parse_heading(&self, trimmed: &str) -> Option<Block> {
        let hashes = trimmed.chars().take_while(|&c| c == '#').count();
        if !(1..=3).contains(&hashes) {
            return None;
        }
        let rest = &trimmed[hashes..];
        if !rest.chars().next()?.is_whitespace() {
            return None;
        }
        Some(Block::Heading {
            level: hashes as u8,
            text: resolve(rest.trim()),
        })
    }

    /// Resolve a pending table-candidate run mid-stream. A pending bullet run
    /// always flushes first so block order follows input line order.
    fn flush_table(&mut self) {
        if self.table_lines.is_empty() {
            return;
        }
        self.flush_list();
        let lines = mem::take(&mut self.table_lines);
        if lines.len() >= 2 && SEPARATOR_ROW.is_match(&lines[1]) {
            let table = self.build_table(&lines);
            self.blocks.push(table);
        } else {
            // Not a table after all: each captured line becomes its own
            // paragraph, in capture order.
            for line in &lines {
                self.blocks.push(Block::Paragraph {
                    text: resolve(line),
                });
            }
        }
    }

    fn flush_list(&mut self) {
        if !self.list_items.is_empty() {
            self.blocks.push(Block::List {
                items: mem::take(&mut self.list_items),
            });
        }
    }

    /// Line one holds the headers; line two, when present, is dropped as the
    /// divider row; everything after becomes body rows.
    fn build_table(&self, lines: &[String]) -> Block {
        let headers = self.split_cells(&lines[0]);
        let rows = lines
            .iter()
            .skip(2)
            .map(|line| self.split_cells(line))
            .collect();
        Block::Table { headers, rows }
    }

    /// Pipe-delimited cells, trimmed, empties discarded, each resolved in
    /// isolation.
    fn split_cells(&self, line: &str) -> Vec<InlineText> {
        line.split('|')
            .map(str::trim)
            .filter(|cell| !cell.is_empty())
            .map(resolve)
            .collect()
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}
