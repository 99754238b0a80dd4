use crate::config::PreviewConfig;

/// Collapse stripped message text into a single truncated line.
pub fn make_preview(plain: &str, config: &PreviewConfig) -> String {
    let collapsed = plain.split_whitespace().collect::<Vec<_>>().join(" ");

    if config.max_chars == 0 || collapsed.chars().count() <= config.max_chars {
        return collapsed;
    }

    let mut out: String = collapsed.chars().take(config.max_chars).collect();
    let kept = out.trim_end().len();
    out.truncate(kept);
    out.push_str(&config.ellipsis);
    out
}
