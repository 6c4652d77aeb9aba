//! Error types for clause construction and evaluation.
//!
//! These are contract-level failures only. A row value that cannot be parsed
//! into a condition's type is not an error; the condition is simply false.

use thiserror::Error;

/// Errors that can occur while building or evaluating a clause
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpressionError {
    /// Condition references a column the header does not know
    #[error("Unknown column: {column}")]
    UnknownColumn { column: String },

    /// Header resolved the column to a position the row does not have
    #[error("Column {column} resolves to index {index} but row has {row_len} fields")]
    ColumnIndexOutOfBounds {
        column: String,
        index: usize,
        row_len: usize,
    },

    /// Clause has no conditions
    #[error("Clause has no conditions")]
    EmptyClause,

    /// Operator count does not match condition count
    #[error("Clause is not closed: {conditions} conditions, {operators} operators")]
    UnclosedClause { conditions: usize, operators: usize },

    /// Condition appended where an operator was expected
    #[error("Expected a logical operator before the next condition")]
    UnexpectedCondition,

    /// Real literal is NaN or infinite
    #[error("Literal for column {column} is not a finite number")]
    NonFiniteLiteral { column: String },

    /// Operator appended where a condition was expected
    #[error("Expected a condition before the next logical operator")]
    UnexpectedOperator,
}

/// Result type for expression operations
pub type ExpressionResult<T> = Result<T, ExpressionError>;
