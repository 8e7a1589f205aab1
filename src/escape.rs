//! Shell quoting utilities
//!
//! Provides the quoting used when a wrapped command is handed to a remote
//! shell for re-parsing.

use std::borrow::Cow;

/// Characters that never need quoting in a POSIX shell word
fn is_safe_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '_' | '@' | '%' | '+' | '=' | ':' | ',' | '.' | '/' | '-'
        )
}

/// Quote a string so a POSIX shell treats it as a single literal word.
///
/// Tokens made entirely of safe characters pass through unchanged. Anything
/// else (spaces, quotes, metacharacters, the empty string) is wrapped in
/// single quotes, with embedded single quotes rewritten as `'\''`:
/// end the quoted span, emit an escaped quote, reopen the span.
///
/// # Examples
/// ```
/// use ssh_wrap::escape::quote;
///
/// assert_eq!(quote("kubectl"), "kubectl");
/// assert_eq!(quote("hello world"), "'hello world'");
/// assert_eq!(quote("it's"), "'it'\\''s'");
/// assert_eq!(quote(""), "''");
/// ```
pub fn quote(s: &str) -> Cow<'_, str> {
    if !s.is_empty() && s.chars().all(is_safe_char) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(format!("'{}'", s.replace('\'', "'\\''")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_bare_word() {
        assert_eq!(quote("ls"), "ls");
        assert_eq!(quote("kubectl"), "kubectl");
        assert_eq!(quote("/usr/local/bin/helm"), "/usr/local/bin/helm");
        assert_eq!(quote("user@host:22"), "user@host:22");
    }

    #[test]
    fn test_quote_empty() {
        assert_eq!(quote(""), "''");
    }

    #[test]
    fn test_quote_spaces() {
        assert_eq!(quote("hello world"), "'hello world'");
    }

    #[test]
    fn test_quote_single_quote() {
        assert_eq!(quote("it's"), "'it'\\''s'");
    }

    #[test]
    fn test_quote_multiple_quotes() {
        assert_eq!(quote("'a' 'b'"), "''\\''a'\\'' '\\''b'\\'''");
    }

    #[test]
    fn test_quote_metacharacters() {
        assert_eq!(quote("a|b"), "'a|b'");
        assert_eq!(quote("$HOME"), "'$HOME'");
        assert_eq!(quote("a;rm -rf x"), "'a;rm -rf x'");
        assert_eq!(quote("tab\there"), "'tab\there'");
    }
}
