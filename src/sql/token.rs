// Tokens of the WHERE clause language

use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals
    Identifier(String),
    QuotedIdentifier(String),
    Number(String),
    String(String),

    // Keywords
    Where,
    And,
    Or,
    Not,

    // Comparators
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,

    // Punctuation
    LeftParen,
    RightParen,

    Eof,
}

impl Token {
    /// Resolve a keyword, ignoring case
    pub fn keyword_from_str(s: &str) -> Option<Token> {
        match s.to_uppercase().as_str() {
            "WHERE" => Some(Token::Where),
            "AND" => Some(Token::And),
            "OR" => Some(Token::Or),
            "NOT" => Some(Token::Not),
            _ => None,
        }
    }
}

pub fn is_identifier_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_'
}

pub fn is_identifier_part(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Whether `name` lexes back as a single `Token::Identifier`
pub fn is_bare_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(is_identifier_start)
        && chars.all(is_identifier_part)
        && Token::keyword_from_str(name).is_none()
}

/// Render a column name so the lexer reads it back unchanged.
///
/// Names that are not bare identifiers are wrapped in backticks, with any
/// backtick inside doubled.
pub fn quote_identifier(name: &str) -> Cow<'_, str> {
    if is_bare_identifier(name) {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(format!("`{}`", name.replace('`', "``")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_from_str() {
        assert_eq!(Token::keyword_from_str("and"), Some(Token::And));
        assert_eq!(Token::keyword_from_str("Or"), Some(Token::Or));
        assert_eq!(Token::keyword_from_str("WHERE"), Some(Token::Where));
        assert_eq!(Token::keyword_from_str("age"), None);
    }

    #[test]
    fn test_quote_identifier() {
        assert_eq!(quote_identifier("age"), "age");
        assert_eq!(quote_identifier("_first_name2"), "_first_name2");
        assert_eq!(quote_identifier("first name"), "`first name`");
        assert_eq!(quote_identifier(" age"), "` age`");
        assert_eq!(quote_identifier("where"), "`where`");
        assert_eq!(quote_identifier("Or"), "`Or`");
        assert_eq!(quote_identifier("2021"), "`2021`");
        assert_eq!(quote_identifier("e-mail"), "`e-mail`");
        assert_eq!(quote_identifier(""), "``");
        assert_eq!(quote_identifier("a`b"), "`a``b`");
    }
}
