// SQL module - parses flat WHERE clause text

pub mod lexer;
pub mod parser;
pub mod token;

pub use lexer::Lexer;
pub use parser::{parse_where, Parser};
pub use token::{quote_identifier, Token};
