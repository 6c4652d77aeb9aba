//! WHERE clause evaluation.
//!
//! This module provides:
//! - Comparison and logical operators
//! - Typed leaf conditions over raw row text
//! - Clauses chaining conditions with AND/OR, plus a builder
//! - Error types for contract violations

pub mod clause;
pub mod condition;
pub mod error;
pub mod operator;

pub use clause::{Clause, ClauseBuilder, EvalTrace};
pub use condition::Condition;
pub use error::{ExpressionError, ExpressionResult};
pub use operator::{Comparator, LogicalOp};
