//! Escaping for Lucene reserved characters.
//!
//! The Lucene classic query parser reserves `+ - ! ( ) { } [ ] ^ " ~ * ? :
//! \ /` plus the two-character operators `&&` and `||`. Matching any of
//! them literally requires a backslash prefix; the two-character operators
//! take a single backslash before the pair. A lone `&` or `|` has no
//! special meaning and passes through, as does whitespace (phrase quoting
//! handles that).

/// Characters escaped with a single backslash prefix.
const RESERVED: &[char] = &[
    '+', '-', '!', '(', ')', '{', '}', '[', ']', '^', '"', '~', '*', '?', ':', '\\', '/',
];

/// Escapes all Lucene reserved characters in `text`.
///
/// Pure and total: every character either passes through or gains a
/// backslash prefix. Escaping an already-escaped string escapes its
/// backslashes again, so apply it exactly once.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_into(&mut out, text);
    out
}

/// Appends the escaped form of `text` to `out`.
pub(crate) fn escape_into(out: &mut String, text: &str) {
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '&' | '|' if chars.peek() == Some(&ch) => {
                chars.next();
                out.push('\\');
                out.push(ch);
                out.push(ch);
            }
            _ if RESERVED.contains(&ch) => {
                out.push('\\');
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(escape("Jethro Tull"), "Jethro Tull");
        assert_eq!(escape(""), "");
    }

    #[test]
    fn reserved_characters_gain_backslash() {
        assert_eq!(escape("ter?m"), r"ter\?m");
        assert_eq!(escape("a+b"), r"a\+b");
        assert_eq!(escape("a-b"), r"a\-b");
        assert_eq!(escape("a:b"), r"a\:b");
        assert_eq!(escape("(x)"), r"\(x\)");
        assert_eq!(escape("[x]"), r"\[x\]");
        assert_eq!(escape("{x}"), r"\{x\}");
        assert_eq!(escape("x~2"), r"x\~2");
        assert_eq!(escape("x^2"), r"x\^2");
        assert_eq!(escape("x*"), r"x\*");
        assert_eq!(escape("x!"), r"x\!");
        assert_eq!(escape("a/b"), r"a\/b");
        assert_eq!(escape("say \"hi\""), "say \\\"hi\\\"");
    }

    #[test]
    fn backslash_is_itself_escaped() {
        assert_eq!(escape(r"a\b"), r"a\\b");
        assert_eq!(escape(r"a\?b"), r"a\\\?b");
    }

    #[test]
    fn double_ampersand_escapes_as_pair() {
        assert_eq!(escape("a&&b"), r"a\&&b");
        assert_eq!(escape("&&ter?m*^"), r"\&&ter\?m\*\^");
    }

    #[test]
    fn double_pipe_escapes_as_pair() {
        assert_eq!(escape("a||b"), r"a\||b");
    }

    #[test]
    fn lone_ampersand_and_pipe_pass_through() {
        assert_eq!(escape("tom & jerry"), "tom & jerry");
        assert_eq!(escape("a|b"), "a|b");
    }

    #[test]
    fn triple_ampersand_escapes_pair_then_passes_single() {
        assert_eq!(escape("a&&&b"), r"a\&&&b");
    }

    #[test]
    fn whitespace_passes_through() {
        assert_eq!(escape(" a+phrase else"), r" a\+phrase else");
    }

    #[test]
    fn every_reserved_single_is_escaped() {
        for &ch in RESERVED {
            let escaped = escape(&ch.to_string());
            assert_eq!(escaped, format!("\\{ch}"), "failed for {ch:?}");
        }
    }
}
