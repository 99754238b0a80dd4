use crate::block::{Block, List, ListItem, ListKind, Span};
use crate::config::ParserConfig;
use crate::patterns::{BULLET_ITEM_RE, NUMBERED_ITEM_RE};

const FENCE: &str = "```";

/// Characters that can open an inline span
const MARKERS: [char; 4] = ['`', '*', '_', '~'];

/// Parse a message into a list of blocks
pub fn parse(text: &str, config: &ParserConfig) -> Vec<Block> {
    if text.is_empty() {
        return Vec::new();
    }

    let lines: Vec<&str> = text.split('\n').collect();
    let last = lines.len() - 1;
    let mut blocks = Vec::new();
    let mut state = ParseState::new(config.max_depth);

    for (index, line) in lines.into_iter().enumerate() {
        process_line(line, index == last, &mut state, &mut blocks);
    }

    state.flush_list(&mut blocks, false);

    if state.in_code_block && !state.code_lines.is_empty() {
        log::debug!(
            "unterminated code fence, emitting {} buffered line(s)",
            state.code_lines.len()
        );
        let content = state.code_lines.join("\n");
        blocks.push(Block::CodeBlock { content });
    }

    blocks
}

struct ParseState<'a> {
    max_depth: usize,

    // Code block state
    in_code_block: bool,
    code_lines: Vec<&'a str>,

    // Open list group
    list: Option<ListBuilder<'a>>,
}

struct ListBuilder<'a> {
    kind: ListKind,
    items: Vec<&'a str>,
}

impl<'a> ParseState<'a> {
    fn new(max_depth: usize) -> Self {
        Self {
            max_depth,
            in_code_block: false,
            code_lines: Vec::new(),
            list: None,
        }
    }

    fn push_item(&mut self, kind: ListKind, content: &'a str, blocks: &mut Vec<Block>) {
        // Bullet and numbered groups never merge
        if self.list.as_ref().is_some_and(|list| list.kind != kind) {
            self.flush_list(blocks, true);
        }
        self.list
            .get_or_insert_with(|| ListBuilder {
                kind,
                items: Vec::new(),
            })
            .items
            .push(content);
    }

    /// Emit the open list group. `line_ended` is set when more lines follow
    /// the group's last item.
    fn flush_list(&mut self, blocks: &mut Vec<Block>, line_ended: bool) {
        if let Some(builder) = self.list.take() {
            let items = builder
                .items
                .into_iter()
                .map(|content| ListItem {
                    content: parse_inline(content, 0, self.max_depth),
                })
                .collect();
            blocks.push(Block::List(List {
                kind: builder.kind,
                items,
            }));
            if line_ended {
                blocks.push(Block::LineBreak);
            }
        }
    }
}

/// Every line but the last ends in a break: ordinary lines carry it as a
/// trailing span, quotes, lists and code blocks are followed by a
/// `Block::LineBreak`.
fn process_line<'a>(
    line: &'a str,
    is_last: bool,
    state: &mut ParseState<'a>,
    blocks: &mut Vec<Block>,
) {
    let trimmed = line.trim();

    // Opening fence, possibly closed on the same line
    if !state.in_code_block && trimmed.starts_with(FENCE) {
        state.flush_list(blocks, true);
        let rest = &trimmed[FENCE.len()..];
        if let Some(content) = rest.strip_suffix(FENCE) {
            blocks.push(Block::CodeBlock {
                content: content.to_string(),
            });
            end_block_line(is_last, blocks);
        } else {
            state.in_code_block = true;
            if !rest.is_empty() {
                state.code_lines.push(rest);
            }
        }
        return;
    }

    // Code block body, kept verbatim
    if state.in_code_block {
        if let Some(last_line) = trimmed.strip_suffix(FENCE) {
            if !last_line.is_empty() {
                state.code_lines.push(last_line);
            }
            let content = std::mem::take(&mut state.code_lines).join("\n");
            blocks.push(Block::CodeBlock { content });
            end_block_line(is_last, blocks);
            state.in_code_block = false;
        } else {
            state.code_lines.push(line);
        }
        return;
    }

    if let Some(rest) = line.strip_prefix("> ") {
        state.flush_list(blocks, true);
        blocks.push(Block::Quote {
            content: parse_inline(rest, 0, state.max_depth),
        });
        end_block_line(is_last, blocks);
        return;
    }

    if let Some(marker) = BULLET_ITEM_RE.captures(line).and_then(|caps| caps.get(1)) {
        state.push_item(ListKind::Bullet, &line[marker.end()..], blocks);
        return;
    }

    if let Some(item) = NUMBERED_ITEM_RE.captures(line).and_then(|caps| caps.get(1)) {
        state.push_item(ListKind::Numbered, item.as_str(), blocks);
        return;
    }

    state.flush_list(blocks, true);

    if line.is_empty() {
        // A trailing newline leaves an empty last line with nothing to break
        if !is_last {
            blocks.push(Block::LineBreak);
        }
    } else {
        let mut content = parse_inline(line, 0, state.max_depth);
        if !is_last {
            content.push(Span::LineBreak);
        }
        blocks.push(Block::Line { content });
    }
}

fn end_block_line(is_last: bool, blocks: &mut Vec<Block>) {
    if !is_last {
        blocks.push(Block::LineBreak);
    }
}

/// Parse inline formatting within a single line.
///
/// Emphasis spans are parsed recursively; at `depth >= max_depth` they are
/// kept as literal text.
fn parse_inline(text: &str, depth: usize, max_depth: usize) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut remaining = text;

    while !remaining.is_empty() {
        if let Some((span, consumed)) = match_span(remaining, depth, max_depth) {
            match span {
                Span::Text(literal) => push_text(&mut spans, &literal),
                span => spans.push(span),
            }
            remaining = &remaining[consumed..];
            continue;
        }

        // No span here: take this character and everything up to the next marker
        let first_len = remaining.chars().next().map_or(1, char::len_utf8);
        match remaining[first_len..].find(&MARKERS[..]) {
            Some(offset) => {
                let split = first_len + offset;
                push_text(&mut spans, &remaining[..split]);
                remaining = &remaining[split..];
            }
            None => {
                push_text(&mut spans, remaining);
                break;
            }
        }
    }

    spans
}

/// Match the shortest non-empty `<m>...<m>` span at the start of `text`.
/// Returns the span and the number of bytes consumed.
fn match_span(text: &str, depth: usize, max_depth: usize) -> Option<(Span, usize)> {
    let marker = text.chars().next().filter(|c| MARKERS.contains(c))?;
    let close = text[1..].find(marker)?;
    if close == 0 {
        return None;
    }
    let inner = &text[1..1 + close];
    let consumed = close + 2;

    if marker == '`' {
        return Some((Span::Code(inner.to_string()), consumed));
    }

    if depth >= max_depth {
        log::debug!("inline nesting depth {} reached, keeping markers literal", depth);
        return Some((Span::Text(text[..consumed].to_string()), consumed));
    }

    let children = parse_inline(inner, depth + 1, max_depth);
    let span = match marker {
        '*' => Span::Bold(children),
        '_' => Span::Italic(children),
        _ => Span::Strikethrough(children),
    };
    Some((span, consumed))
}

fn push_text(spans: &mut Vec<Span>, text: &str) {
    if let Some(Span::Text(prev)) = spans.last_mut() {
        prev.push_str(text);
    } else {
        spans.push(Span::Text(text.to_string()));
    }
}
