//! End-to-end formatting of chat messages through the public API.

use chatfmt::{Block, ListKind, Span, parse, spans_text, strip, to_html};

/// Every span in the tree, depth first, paired with its enclosing spans.
fn walk<'a>(
    spans: &'a [Span],
    parents: &mut Vec<&'a Span>,
    out: &mut Vec<(Vec<&'a Span>, &'a Span)>,
) {
    for span in spans {
        out.push((parents.clone(), span));
        if let Span::Bold(inner) | Span::Italic(inner) | Span::Strikethrough(inner) = span {
            parents.push(span);
            walk(inner, parents, out);
            parents.pop();
        }
    }
}

fn all_spans(blocks: &[Block]) -> Vec<(Vec<&Span>, &Span)> {
    let mut out = Vec::new();
    for block in blocks {
        match block {
            Block::Line { content } | Block::Quote { content } => {
                walk(content, &mut Vec::new(), &mut out)
            }
            Block::List(list) => {
                for item in &list.items {
                    walk(&item.content, &mut Vec::new(), &mut out);
                }
            }
            Block::LineBreak | Block::CodeBlock { .. } => {}
        }
    }
    out
}

/// The innermost span whose text is exactly `text`, like a DOM text query.
fn find_by_text<'a>(blocks: &'a [Block], text: &str) -> (Vec<&'a Span>, &'a Span) {
    all_spans(blocks)
        .into_iter()
        .filter(|(_, span)| !matches!(span, Span::Text(_)))
        .filter(|(_, span)| span.text_content() == text)
        .last()
        .unwrap_or_else(|| panic!("no span with text {:?} in {:?}", text, blocks))
}

fn blocks_text(blocks: &[Block]) -> String {
    blocks.iter().map(Block::text_content).collect()
}

#[test]
fn plain_text() {
    let blocks = parse("Hello world");
    assert_eq!(blocks_text(&blocks), "Hello world");
    assert!(all_spans(&blocks).iter().all(|(_, s)| matches!(s, Span::Text(_))));
}

#[test]
fn empty_string() {
    assert!(parse("").is_empty());
    assert_eq!(strip(""), "");
}

#[test]
fn bold_segments() {
    let blocks = parse("*first* and *second*");
    assert!(matches!(find_by_text(&blocks, "first").1, Span::Bold(_)));
    assert!(matches!(find_by_text(&blocks, "second").1, Span::Bold(_)));
}

#[test]
fn italic_and_strikethrough() {
    let blocks = parse("_italic text_ ~strikethrough~");
    assert!(matches!(find_by_text(&blocks, "italic text").1, Span::Italic(_)));
    assert!(matches!(
        find_by_text(&blocks, "strikethrough").1,
        Span::Strikethrough(_)
    ));
}

#[test]
fn nested_formatting() {
    let blocks = parse("*_bold italic_*");
    let (parents, span) = find_by_text(&blocks, "bold italic");
    assert!(matches!(span, Span::Italic(_)));
    assert!(matches!(parents.last(), Some(Span::Bold(_))));
}

#[test]
fn inline_code() {
    let blocks = parse("`inline code`");
    assert_eq!(
        blocks,
        vec![Block::Line {
            content: vec![Span::Code("inline code".to_string())],
        }]
    );
}

#[test]
fn code_block() {
    assert_eq!(
        parse("```code block```"),
        vec![Block::CodeBlock {
            content: "code block".to_string(),
        }]
    );
}

#[test]
fn multiple_quote_lines() {
    let blocks = parse("> line one\n> line two");
    let quotes: Vec<String> = blocks
        .iter()
        .filter_map(|block| match block {
            Block::Quote { content } => Some(spans_text(content)),
            _ => None,
        })
        .collect();
    assert_eq!(quotes, ["line one", "line two"]);
    assert_eq!(blocks[1], Block::LineBreak);
    assert_eq!(blocks_text(&blocks), strip("> line one\n> line two"));
}

#[test]
fn bullet_lists() {
    for text in ["* item one\n* item two", "- item one\n- item two"] {
        let blocks = parse(text);
        assert_eq!(blocks.len(), 1, "{:?}", blocks);
        let Block::List(list) = &blocks[0] else {
            panic!("expected list, got {:?}", blocks);
        };
        assert_eq!(list.kind, ListKind::Bullet);
        let items: Vec<String> = list.items.iter().map(|i| spans_text(&i.content)).collect();
        assert_eq!(items, ["item one", "item two"]);
    }
}

#[test]
fn numbered_list() {
    let blocks = parse("1. first\n2. second\n3. third");
    let Block::List(list) = &blocks[0] else {
        panic!("expected list, got {:?}", blocks);
    };
    assert_eq!(list.kind, ListKind::Numbered);
    assert_eq!(list.items.len(), 3);
    assert_eq!(spans_text(&list.items[2].content), "third");
}

#[test]
fn complex_message() {
    let text = "Hello *John*!\n\nHere's your list:\n* item _one_\n* item `two`";
    let blocks = parse(text);
    assert!(matches!(find_by_text(&blocks, "John").1, Span::Bold(_)));
    assert!(matches!(find_by_text(&blocks, "one").1, Span::Italic(_)));
    assert!(matches!(find_by_text(&blocks, "two").1, Span::Code(_)));
    assert_eq!(
        strip(text),
        "Hello John!\n\nHere's your list:\nitem one\nitem two"
    );
}

#[test]
fn unmatched_formatting_characters() {
    let blocks = parse("single * asterisk");
    assert!(blocks_text(&blocks).contains("single * asterisk"));
}

#[test]
fn multiline_text() {
    let blocks = parse("line one\nline two\nline three");
    assert_eq!(blocks.len(), 3);
    assert_eq!(
        blocks[2],
        Block::Line {
            content: vec![Span::Text("line three".to_string())],
        }
    );
    assert_eq!(
        strip("line one\nline two\nline three"),
        "line one\nline two\nline three"
    );
}

#[test]
fn special_characters() {
    assert_eq!(strip("Price: R$ 100,00 & more"), "Price: R$ 100,00 & more");
    let html = to_html("Price: R$ 100,00 & more");
    assert!(html.contains("Price: R$ 100,00 &amp; more"));
}

#[test]
fn chat_transcript_html() {
    let html = to_html("Hi *there*\n> _quoted_\n1. one\n```\nlet x;\n```");
    assert!(html.contains("<span>Hi <strong>there</strong><br></span>"));
    assert!(html.contains("><em>quoted</em></blockquote>"));
    assert!(html.contains("><li>one</li></ol>"));
    assert!(html.contains(">let x;</pre>"));
}

#[test]
fn flattened_blocks_match_strip() {
    let texts = [
        "> a\n> b",
        "```\nx\n```\ny",
        "a\n",
        "* a\n> b",
        "1. a\n\n2. b\n",
    ];
    for text in texts {
        assert_eq!(blocks_text(&parse(text)), strip(text), "{:?}", text);
    }
    assert_eq!(strip("* a\n> b"), "a\nb");
    assert_eq!(strip("```\nx\n```\ny"), "x\ny");
}
