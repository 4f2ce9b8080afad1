//! Text helpers for comparing and displaying card answers.
//!
//! Card fields can carry markup from the host application, so answer
//! equality goes through [`normalize`] rather than raw string comparison.

/// Drop HTML tags, turning `<br>` variants into newlines.
pub fn strip_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        match rest[start..].find('>') {
            Some(offset) => {
                let tag = &rest[start + 1..start + offset];
                if is_line_break(tag) {
                    out.push('\n');
                }
                rest = &rest[start + offset + 1..];
            }
            None => {
                // Unterminated tag, keep the text as-is.
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);

    out.trim().to_string()
}

fn is_line_break(tag: &str) -> bool {
    tag.trim().trim_end_matches('/').trim().eq_ignore_ascii_case("br")
}

/// Normalize for equality checks: drop tags, collapse whitespace, lowercase.
pub fn normalize(text: &str) -> String {
    strip_html(text)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
