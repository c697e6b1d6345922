/// Flatten a description into a single-line notification body.
///
/// Each run of `\r`/`\n` becomes one space and `"` becomes `'`, then the
/// result is cut to at most `max_chars` characters.
pub fn sanitize(text: &str, max_chars: usize) -> String {
    let mut out = String::with_capacity(text.len().min(max_chars.saturating_mul(4)));
    let mut in_break = false;
    for c in text.chars() {
        match c {
            '\r' | '\n' => {
                if !in_break {
                    out.push(' ');
                    in_break = true;
                }
                continue;
            }
            '"' => out.push('\''),
            _ => out.push(c),
        }
        in_break = false;
    }
    truncate_chars(&out, max_chars)
}

fn truncate_chars(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}
