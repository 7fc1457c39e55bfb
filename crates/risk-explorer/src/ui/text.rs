/// Word wrap; words longer than `width` are split.
pub(crate) fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    for raw in text.split('\n') {
        let mut line = String::new();
        let mut line_width = 0usize;
        for word in raw.split_whitespace() {
            let mut word = word.to_string();
            loop {
                let word_width = display_width(&word);
                let needed = if line.is_empty() {
                    word_width
                } else {
                    line_width + 1 + word_width
                };
                if needed <= width {
                    if !line.is_empty() {
                        line.push(' ');
                        line_width += 1;
                    }
                    line.push_str(&word);
                    line_width += word_width;
                    break;
                }
                if !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                    line_width = 0;
                    continue;
                }
                let head: String = word.chars().take(width).collect();
                let tail: String = word.chars().skip(width).collect();
                lines.push(head);
                word = tail;
                if word.is_empty() {
                    break;
                }
            }
        }
        lines.push(line);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

const TAB_WIDTH: usize = 4;

/// Dataset text goes straight to the terminal, so control characters are
/// replaced and tabs expanded.
pub(crate) fn sanitize_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut col = 0usize;
    for ch in text.chars() {
        match ch {
            '\n' => {
                out.push('\n');
                col = 0;
            }
            '\r' => {}
            '\t' => {
                let spaces = TAB_WIDTH - col % TAB_WIDTH;
                out.extend(std::iter::repeat(' ').take(spaces));
                col += spaces;
            }
            _ if ch.is_control() => {
                out.push(' ');
                col += 1;
            }
            _ => {
                out.push(ch);
                col += 1;
            }
        }
    }
    out
}

pub(crate) fn display_width(text: &str) -> usize {
    text.chars().count()
}

pub(crate) fn truncate_with_ellipsis(text: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }
    let count = display_width(text);
    if count <= max_len {
        return text.to_string();
    }
    if max_len <= 3 {
        return text.chars().take(max_len).collect();
    }
    let mut out: String = text.chars().take(max_len - 3).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_on_word_boundaries() {
        assert_eq!(
            wrap_words("model bias leads to unfair outcomes", 12),
            vec!["model bias", "leads to", "unfair", "outcomes"]
        );
    }

    #[test]
    fn splits_long_words_and_keeps_blank_lines() {
        assert_eq!(wrap_words("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert_eq!(wrap_words("a\n\nb", 10), vec!["a", "", "b"]);
        assert_eq!(wrap_words("", 10), vec![""]);
    }

    #[test]
    fn sanitize_expands_tabs_and_drops_controls() {
        assert_eq!(sanitize_text("a\tb"), "a   b");
        assert_eq!(sanitize_text("x\r\ny\u{7}"), "x\ny ");
    }

    #[test]
    fn truncates_with_ellipsis() {
        assert_eq!(truncate_with_ellipsis("governance", 7), "gove...");
        assert_eq!(truncate_with_ellipsis("short", 10), "short");
        assert_eq!(truncate_with_ellipsis("abc", 2), "ab");
    }
}
