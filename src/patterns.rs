//! Cached regex patterns.
//!
//! Compiled once on first use and shared by every call.

use regex::Regex;
use std::sync::LazyLock;

// === Line patterns ===

/// `* item` or `- item`
pub static BULLET_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[*-](\s)").unwrap());

/// `12. item`, capturing the item text up to the end of the line. Like the
/// dashboard, `\r`, U+2028 and U+2029 count as line terminators here.
pub static NUMBERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.\s([^\r\x{2028}\x{2029}]*)$").unwrap());

// === Phone patterns ===

/// JID suffix such as `@lid` or `@s.whatsapp.net`
pub static JID_SUFFIX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@.*$").unwrap());

pub static NON_DIGIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^0-9]").unwrap());
