//! Lua literal helpers shared by both generators.

/// Single-quoted Lua string literal.
pub fn quote(s: &str) -> String {
    quote_with(s, '\'')
}

/// Double-quoted Lua string literal.
pub fn quote_double(s: &str) -> String {
    quote_with(s, '"')
}

fn quote_with(s: &str, delim: char) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push(delim);
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == delim => {
                out.push('\\');
                out.push(c);
            }
            // Always three digits, so a following digit is not absorbed.
            c if c.is_ascii_control() => out.push_str(&format!("\\{:03}", c as u32)),
            c => out.push(c),
        }
    }
    out.push(delim);
    out
}

/// Natural decimal form: `10` for whole values, `0.5` otherwise.
pub fn number(n: f64) -> String {
    if !n.is_finite() || n == 0.0 {
        // also folds -0 into 0
        return "0".to_string();
    }
    if n.fract() == 0.0 && n.abs() < 1e15 {
        return format!("{}", n as i64);
    }
    format!("{}", n)
}

/// Whether `s` can be used as a bare table key.
pub fn is_identifier(s: &str) -> bool {
    const LUA_KEYWORDS: &[&str] = &[
        "and", "break", "do", "else", "elseif", "end", "false", "for", "function", "if", "in", "local", "nil", "not",
        "or", "repeat", "return", "then", "true", "until", "while", "continue",
    ];

    if LUA_KEYWORDS.contains(&s) {
        return false;
    }

    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_ascii_alphabetic() && first != '_' {
        return false;
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoting_escapes_delimiters() {
        assert_eq!(quote("Water Bottle"), "'Water Bottle'");
        assert_eq!(quote("Jimmy's Burger"), r"'Jimmy\'s Burger'");
        assert_eq!(quote_double(r#"say "hi""#), r#""say \"hi\"""#);
        assert_eq!(quote("a\\b\nc"), r"'a\\b\nc'");
        assert_eq!(quote("a\u{0}1b"), r"'a\0001b'");
        assert_eq!(quote("\u{1b}[0m\u{7f}"), r"'\027[0m\127'");
        // the other quote style passes through
        assert_eq!(quote(r#"a "b""#), r#"'a "b"'"#);
    }

    #[test]
    fn numbers_render_naturally() {
        assert_eq!(number(10.0), "10");
        assert_eq!(number(0.5), "0.5");
        assert_eq!(number(-180.5), "-180.5");
        assert_eq!(number(-0.0), "0");
        assert_eq!(number(f64::NAN), "0");
        assert_eq!(number(200000.0), "200000");
    }

    #[test]
    fn identifiers() {
        assert!(is_identifier("water_bottle"));
        assert!(is_identifier("_x1"));
        assert!(!is_identifier("water-bottle"));
        assert!(!is_identifier("1up"));
        assert!(!is_identifier("end"));
        assert!(!is_identifier(""));
    }
}
