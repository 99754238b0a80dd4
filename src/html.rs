use crate::block::{Block, List, ListKind, Span};
use crate::config::HtmlConfig;

/// Convert blocks to HTML for a chat bubble
pub fn blocks_to_html(blocks: &[Block], config: &HtmlConfig) -> String {
    let mut out = String::new();

    open_tag("div", &config.wrapper_class, &mut out);
    let mut after_standalone = false;
    for block in blocks {
        // Block elements already end the visual line
        if !(after_standalone && *block == Block::LineBreak) {
            emit_block(block, config, &mut out);
        }
        after_standalone = block.is_standalone();
    }
    out.push_str("</div>");

    out
}

fn emit_block(block: &Block, config: &HtmlConfig, out: &mut String) {
    match block {
        Block::Line { content } => {
            out.push_str("<span>");
            spans_to_html(content, config, out);
            out.push_str("</span>");
        }
        Block::LineBreak => {
            out.push_str("<br>");
        }
        Block::CodeBlock { content } => {
            open_tag("pre", &config.code_block_class, out);
            escape_into(content, out);
            out.push_str("</pre>");
        }
        Block::Quote { content } => {
            open_tag("blockquote", &config.quote_class, out);
            spans_to_html(content, config, out);
            out.push_str("</blockquote>");
        }
        Block::List(list) => {
            list_to_html(list, config, out);
        }
    }
}

fn list_to_html(list: &List, config: &HtmlConfig, out: &mut String) {
    let (tag, class) = match list.kind {
        ListKind::Bullet => ("ul", &config.bullet_list_class),
        ListKind::Numbered => ("ol", &config.numbered_list_class),
    };

    open_tag(tag, class, out);
    for item in &list.items {
        out.push_str("<li>");
        spans_to_html(&item.content, config, out);
        out.push_str("</li>");
    }
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn spans_to_html(spans: &[Span], config: &HtmlConfig, out: &mut String) {
    for span in spans {
        span_to_html(span, config, out);
    }
}

fn span_to_html(span: &Span, config: &HtmlConfig, out: &mut String) {
    match span {
        Span::Text(text) => escape_into(text, out),
        Span::Bold(inner) => {
            out.push_str("<strong>");
            spans_to_html(inner, config, out);
            out.push_str("</strong>");
        }
        Span::Italic(inner) => {
            out.push_str("<em>");
            spans_to_html(inner, config, out);
            out.push_str("</em>");
        }
        Span::Strikethrough(inner) => {
            out.push_str("<del>");
            spans_to_html(inner, config, out);
            out.push_str("</del>");
        }
        Span::Code(text) => {
            open_tag("code", &config.code_class, out);
            escape_into(text, out);
            out.push_str("</code>");
        }
        Span::LineBreak => out.push_str("<br>"),
    }
}

fn open_tag(tag: &str, class: &str, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    if !class.is_empty() {
        out.push_str(" class=\"");
        escape_into(class, out);
        out.push('"');
    }
    out.push('>');
}

fn escape_into(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}
