// WHERE clause lexer - turns clause text into tokens

use super::token::{is_identifier_part, is_identifier_start, Token};
use anyhow::{bail, Result};

pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
        }
    }

    /// Get the next token from the input
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace();

        let Some(ch) = self.current_char() else {
            return Ok(Token::Eof);
        };

        let token = match ch {
            '=' => {
                self.advance();
                // Accept `==` as a synonym
                if self.current_char() == Some('=') {
                    self.advance();
                }
                Token::Equal
            }
            '<' => {
                self.advance();
                match self.current_char() {
                    Some('=') => {
                        self.advance();
                        Token::LessEqual
                    }
                    Some('>') => {
                        self.advance();
                        Token::NotEqual
                    }
                    _ => Token::Less,
                }
            }
            '>' => {
                self.advance();
                if self.current_char() == Some('=') {
                    self.advance();
                    Token::GreaterEqual
                } else {
                    Token::Greater
                }
            }
            '!' => {
                self.advance();
                if self.current_char() != Some('=') {
                    bail!("Expected '=' after '!' at position {}", self.position);
                }
                self.advance();
                Token::NotEqual
            }
            '(' => {
                self.advance();
                Token::LeftParen
            }
            ')' => {
                self.advance();
                Token::RightParen
            }
            '\'' | '"' => Token::String(self.read_quoted(ch)?),
            '`' => Token::QuotedIdentifier(self.read_quoted(ch)?),
            '-' if self.peek().is_some_and(|c| c.is_ascii_digit()) => self.read_number(),
            c if c.is_ascii_digit() => self.read_number(),
            c if is_identifier_start(c) => self.read_identifier(),
            c => bail!("Unexpected character '{}' at position {}", c, self.position),
        };

        Ok(token)
    }

    /// Tokenize the whole input, ending with `Token::Eof`
    pub fn tokenize(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token == Token::Eof;
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position + 1).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while self.current_char().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    /// Read an identifier or keyword
    fn read_identifier(&mut self) -> Token {
        let mut identifier = String::new();

        while let Some(ch) = self.current_char() {
            if is_identifier_part(ch) {
                identifier.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        Token::keyword_from_str(&identifier).unwrap_or(Token::Identifier(identifier))
    }

    /// Read text between quotes. A doubled quote stands for one quote character.
    fn read_quoted(&mut self, quote: char) -> Result<String> {
        let start = self.position;
        self.advance(); // Skip opening quote
        let mut value = String::new();

        loop {
            match self.current_char() {
                Some(ch) if ch == quote => {
                    self.advance();
                    if self.current_char() == Some(quote) {
                        value.push(quote);
                        self.advance();
                    } else {
                        return Ok(value);
                    }
                }
                Some(ch) => {
                    value.push(ch);
                    self.advance();
                }
                None => bail!("Unterminated {} starting at position {}", quote, start),
            }
        }
    }

    /// Read an integer or decimal number, with optional sign and exponent
    fn read_number(&mut self) -> Token {
        let mut number = String::new();

        if self.current_char() == Some('-') {
            number.push('-');
            self.advance();
        }
        self.read_digits(&mut number);

        if self.current_char() == Some('.') && self.peek().is_some_and(|c| c.is_ascii_digit()) {
            number.push('.');
            self.advance();
            self.read_digits(&mut number);
        }

        if matches!(self.current_char(), Some('e' | 'E')) {
            let signed = matches!(self.peek(), Some('+' | '-'));
            let digit_at = if signed {
                self.input.get(self.position + 2)
            } else {
                self.input.get(self.position + 1)
            };
            if digit_at.is_some_and(|c| c.is_ascii_digit()) {
                number.push('e');
                self.advance();
                if signed {
                    number.extend(self.current_char());
                    self.advance();
                }
                self.read_digits(&mut number);
            }
        }

        Token::Number(number)
    }

    fn read_digits(&mut self, out: &mut String) {
        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                out.push(ch);
                self.advance();
            } else {
                break;
            }
        }
    }
}
