use crate::block::Block;

/// Convert blocks to plain text with all markup removed.
///
/// The parser already places every source line break in the tree, so this is
/// the concatenation of each block's text.
pub fn blocks_to_plain(blocks: &[Block]) -> String {
    let mut out = String::new();
    for block in blocks {
        out.push_str(&block.text_content());
    }
    out
}
