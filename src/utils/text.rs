pub fn truncate_utf8_prefix(value: &str, max_bytes: usize) -> String {
    if max_bytes == 0 {
        return String::new();
    }
    if value.len() <= max_bytes {
        return value.to_string();
    }
    let mut end = max_bytes;
    while end > 0 && !value.is_char_boundary(end) {
        end -= 1;
    }
    value[..end].to_string()
}

/// Last `max_lines` lines of `text`, in order, joined with `\n`.
/// A trailing line ending does not produce an extra empty line.
pub fn tail_lines(text: &str, max_lines: usize) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let start = lines.len().saturating_sub(max_lines);
    lines[start..].join("\n")
}

/// Command preview for log lines.
pub fn preview_args(args: &[String], max_bytes: usize) -> String {
    let joined = args.join(" ");
    let preview = truncate_utf8_prefix(&joined, max_bytes);
    if preview.len() < joined.len() {
        format!("{}...", preview)
    } else {
        preview
    }
}
