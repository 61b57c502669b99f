/// Split text into lines, keeping each line's terminator.
///
/// A line ends after `\r\n` or after any single line-break character:
/// `\n`, `\r`, vertical tab, form feed, the file/group/record separators
/// (`\x1c`..`\x1e`), NEL (`\u{85}`), and the Unicode line and paragraph
/// separators. A trailing fragment without terminator is still a line.
/// Concatenating the result reproduces `text` exactly; empty text has no
/// lines.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if !is_line_break(ch) {
            continue;
        }
        let mut end = idx + ch.len_utf8();
        if ch == '\r' {
            if let Some(&(next, '\n')) = chars.peek() {
                end = next + 1;
                chars.next();
            }
        }
        lines.push(&text[start..end]);
        start = end;
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }

    lines
}

const fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c'..='\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// True if the line holds nothing but whitespace
pub(crate) fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
