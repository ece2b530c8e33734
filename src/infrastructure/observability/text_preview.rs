const MAX_VISIBLE_CHARS: usize = 80;

/// Shortens user-derived text (transcripts, translations) for log lines.
pub fn preview_text(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total = trimmed.chars().count();
    if total <= MAX_VISIBLE_CHARS {
        return trimmed.to_string();
    }

    let visible: String = trimmed.chars().take(MAX_VISIBLE_CHARS).collect();
    format!("{}... ({} chars total)", visible, total)
}
