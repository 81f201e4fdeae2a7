// src/ignore/glob.rs

//! Translation of ignore patterns into anchored regular expressions.
//!
//! The dialect is deliberately small:
//!
//! | glob            | meaning                                              |
//! |-----------------|------------------------------------------------------|
//! | `/**/`          | anything, including `/`, possibly nothing            |
//! | trailing `/*`   | at least one more character below the prefix, any depth |
//! | trailing `/**`  | same as trailing `/*`                                |
//! | other `*`       | anything within a single path segment                |
//!
//! Every other character matches itself. Note the asymmetry between a
//! trailing `/*` (recursive) and an inner `*` (one segment): `/dir/*` ignores
//! everything below `dir`, while `/dir/*/x` only looks one level deep.

/// One lexical unit of a normalized pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    /// Literal text, matched exactly.
    Literal(String),
    /// `/**/`: zero or more of anything. Both separators are absorbed.
    AnyDepth,
    /// Trailing `/*` (or `/**`): one or more of anything below the prefix.
    Descendants,
    /// `*` anywhere else: zero or more non-separator characters.
    Star,
}

/// Split a normalized pattern into tokens.
///
/// `/**/` is recognized first, left to right and without overlap, so the
/// trailing-wildcard rule only sees what is left after it.
pub(crate) fn tokenize(pattern: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut rest = pattern;

    while let Some(ch) = rest.chars().next() {
        let special = if rest.starts_with("/**/") {
            Some((Token::AnyDepth, 4))
        } else if rest == "/*" || rest == "/**" {
            Some((Token::Descendants, rest.len()))
        } else if ch == '*' {
            Some((Token::Star, 1))
        } else {
            None
        };

        match special {
            Some((token, consumed)) => {
                if !literal.is_empty() {
                    tokens.push(Token::Literal(std::mem::take(&mut literal)));
                }
                tokens.push(token);
                rest = &rest[consumed..];
            }
            None => {
                literal.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
        }
    }

    if !literal.is_empty() {
        tokens.push(Token::Literal(literal));
    }
    tokens
}

/// Translate a normalized pattern into anchored regex source.
///
/// `(?s)` lets "anything" also cover newlines, which are legal in file names.
pub fn to_regex_source(pattern: &str) -> String {
    let mut out = String::from("(?s)^");
    for token in tokenize(pattern) {
        match token {
            Token::Literal(text) => out.push_str(&regex::escape(&text)),
            Token::AnyDepth => out.push_str(".*"),
            Token::Descendants => out.push_str("/.+"),
            Token::Star => out.push_str("[^/]*"),
        }
    }
    out.push('$');
    out
}

/// True if the pattern contains no wildcard and can be compared verbatim.
pub fn is_literal(pattern: &str) -> bool {
    !pattern.contains('*')
}
