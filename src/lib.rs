//! WhatsApp-style message formatting.
//!
//! Messages use a small markup dialect: `*bold*`, `_italic_`, `~strike~`,
//! `` `code` ``, fenced ```` ``` ```` blocks, `> ` quotes, and `* `/`- `/`1. `
//! list lines. [`parse`] turns a message into a [`Block`] tree for display,
//! [`strip`] removes the markup for previews and search. Neither ever fails:
//! malformed markup degrades to literal text.

mod block;
mod config;
mod error;
mod html;
mod parser;
mod patterns;
mod phone;
mod plain;
mod preview;

pub use block::{Block, List, ListItem, ListKind, Span, spans_text};
pub use config::{Config, HtmlConfig, ParserConfig, PreviewConfig};
pub use error::{Error, Result};
pub use html::blocks_to_html;
pub use phone::{format_brazilian_phone, phone_digits};
pub use plain::blocks_to_plain;

/// Parse a message into a vector of blocks.
pub fn parse(text: &str) -> Vec<Block> {
    parse_with_config(text, Config::bundled())
}

/// Parse a message into a vector of blocks with custom config.
pub fn parse_with_config(text: &str, config: &Config) -> Vec<Block> {
    parser::parse(text, &config.parser)
}

/// Remove all formatting markers, keeping the text and its line breaks.
pub fn strip(text: &str) -> String {
    strip_with_config(text, Config::bundled())
}

/// Remove all formatting markers with custom config.
pub fn strip_with_config(text: &str, config: &Config) -> String {
    let blocks = parse_with_config(text, config);
    plain::blocks_to_plain(&blocks)
}

/// Convert a message to HTML using default config.
pub fn to_html(text: &str) -> String {
    to_html_with_config(text, Config::bundled())
}

/// Convert a message to HTML with custom config.
pub fn to_html_with_config(text: &str, config: &Config) -> String {
    let blocks = parse_with_config(text, config);
    html::blocks_to_html(&blocks, &config.html)
}

/// Single-line, truncated plain-text preview of a message.
pub fn preview(text: &str) -> String {
    preview_with_config(text, Config::bundled())
}

/// Single-line preview with custom config.
pub fn preview_with_config(text: &str, config: &Config) -> String {
    let plain = strip_with_config(text, config);
    preview::make_preview(&plain, &config.preview)
}
