use serde::Serialize;

/// Inline text spans with formatting
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "content", rename_all = "snake_case")]
pub enum Span {
    Text(String),
    Bold(Vec<Span>),
    Italic(Vec<Span>),
    Strikethrough(Vec<Span>),
    /// Inline code; never re-parsed.
    Code(String),
    LineBreak,
}

impl Span {
    /// The text of this span with all markers removed.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.push_text(&mut out);
        out
    }

    fn push_text(&self, out: &mut String) {
        match self {
            Span::Text(text) | Span::Code(text) => out.push_str(text),
            Span::Bold(inner) | Span::Italic(inner) | Span::Strikethrough(inner) => {
                for span in inner {
                    span.push_text(out);
                }
            }
            Span::LineBreak => out.push('\n'),
        }
    }
}

/// Concatenated text of a run of spans.
pub fn spans_text(spans: &[Span]) -> String {
    let mut out = String::new();
    for span in spans {
        span.push_text(&mut out);
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    Bullet,
    Numbered,
}

/// A single list item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub content: Vec<Span>,
}

/// A run of consecutive list lines of the same kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct List {
    pub kind: ListKind,
    pub items: Vec<ListItem>,
}

/// Line-level elements parsed from a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// An ordinary line. Ends with `Span::LineBreak` unless it was the last line.
    Line {
        content: Vec<Span>,
    },
    /// A blank line, or the break ending the line of a quote, list or code block.
    LineBreak,
    CodeBlock {
        content: String,
    },
    Quote {
        content: Vec<Span>,
    },
    List(List),
}

impl Block {
    /// The text of this block with all markers removed.
    ///
    /// List items are joined with `\n`; a code block keeps its own newlines.
    pub fn text_content(&self) -> String {
        match self {
            Block::Line { content } | Block::Quote { content } => spans_text(content),
            Block::LineBreak => "\n".to_string(),
            Block::CodeBlock { content } => content.clone(),
            Block::List(list) => list
                .items
                .iter()
                .map(|item| spans_text(&item.content))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    /// Quotes, lists and code blocks stand on their own line(s). Their line
    /// break, if any, is the `Block::LineBreak` that follows them.
    pub fn is_standalone(&self) -> bool {
        matches!(
            self,
            Block::CodeBlock { .. } | Block::Quote { .. } | Block::List(_)
        )
    }
}
