// WHERE clause parser - converts tokens into a Clause

use super::lexer::Lexer;
use super::token::Token;
use crate::access::Value;
use crate::expression::{Clause, ClauseBuilder, Comparator, Condition, LogicalOp};
use anyhow::{bail, Context, Result};

pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    pub fn new(input: &str) -> Result<Self> {
        let tokens = Lexer::new(input).tokenize()?;
        Ok(Parser {
            tokens,
            position: 0,
        })
    }

    /// Parse `[WHERE] condition ((AND | OR) condition)*`
    pub fn parse_clause(&mut self) -> Result<Clause> {
        if self.match_token(&Token::Where) {
            self.advance();
        }

        let mut builder = ClauseBuilder::new();
        builder.add_condition(self.parse_condition()?)?;

        loop {
            let op = match self.current_token() {
                Token::And => LogicalOp::And,
                Token::Or => LogicalOp::Or,
                Token::Eof => break,
                token => bail!("Expected AND, OR or end of clause, found {:?}", token),
            };
            self.advance();
            builder.add_operator(op)?;
            builder.add_condition(self.parse_condition()?)?;
        }

        Ok(builder.build()?)
    }

    /// Parse `column comparator literal`
    fn parse_condition(&mut self) -> Result<Condition> {
        let column = match self.current_token() {
            Token::Identifier(name) | Token::QuotedIdentifier(name) => name.clone(),
            Token::LeftParen => bail!("Parenthesized expressions are not supported"),
            Token::Not => bail!("NOT is not supported"),
            token => bail!("Expected column name, found {:?}", token),
        };
        self.advance();

        let comparator = self.parse_comparator()?;
        let literal = self
            .parse_literal()
            .with_context(|| format!("Invalid literal for column {}", column))?;

        Ok(Condition::new(column, comparator, literal))
    }

    fn parse_comparator(&mut self) -> Result<Comparator> {
        let comparator = match self.current_token() {
            Token::Equal => Comparator::Eq,
            Token::NotEqual => Comparator::Ne,
            Token::Less => Comparator::Lt,
            Token::LessEqual => Comparator::Le,
            Token::Greater => Comparator::Gt,
            Token::GreaterEqual => Comparator::Ge,
            token => bail!("Expected comparison operator, found {:?}", token),
        };
        self.advance();
        Ok(comparator)
    }

    /// Integers become INTEGER, numbers with a fraction or exponent REAL,
    /// quoted strings TEXT.
    fn parse_literal(&mut self) -> Result<Value> {
        let value = match self.current_token() {
            Token::String(s) => Value::Text(s.clone()),
            Token::Number(n) if n.contains(['.', 'e']) => Value::Real(n.parse::<f64>()?),
            Token::Number(n) => Value::Integer(
                n.parse::<i64>()
                    .with_context(|| format!("Integer literal out of range: {}", n))?,
            ),
            token => bail!("Expected literal, found {:?}", token),
        };
        self.advance();
        Ok(value)
    }

    fn current_token(&self) -> &Token {
        self.tokens.get(self.position).unwrap_or(&Token::Eof)
    }

    fn match_token(&self, token: &Token) -> bool {
        self.current_token() == token
    }

    fn advance(&mut self) {
        if self.position < self.tokens.len() {
            self.position += 1;
        }
    }
}

/// Parse WHERE clause text into a clause
pub fn parse_where(input: &str) -> Result<Clause> {
    Parser::new(input)?.parse_clause()
}
