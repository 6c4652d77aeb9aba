//! WHERE clause: conditions joined by AND/OR, evaluated as a sequential fold.
//!
//! Evaluation walks left to right carrying a single boolean:
//!
//! - `AND` with a false accumulator skips the next condition and stays false.
//! - `OR` with a true accumulator ends evaluation with true.
//! - Otherwise the next condition's result replaces the accumulator.
//!
//! Each visited condition is evaluated at most once per row.

use crate::access::{Header, Row, Value};
use crate::expression::{Condition, ExpressionError, ExpressionResult, LogicalOp};
use std::fmt;

/// A closed clause: `conditions.len() == operators.len() + 1`
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    conditions: Vec<Condition>,
    operators: Vec<LogicalOp>,
}

/// Record of which conditions an evaluation visited
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalTrace {
    /// Final clause result
    pub result: bool,
    /// `(condition index, condition result)` in visit order
    pub visited: Vec<(usize, bool)>,
}

impl EvalTrace {
    /// Whether the condition at `index` was evaluated
    pub fn was_evaluated(&self, index: usize) -> bool {
        self.visited.iter().any(|(i, _)| *i == index)
    }
}

impl Clause {
    /// Create a clause from interleaved parts.
    ///
    /// `operators[i]` joins `conditions[i]` and `conditions[i + 1]`.
    pub fn new(conditions: Vec<Condition>, operators: Vec<LogicalOp>) -> ExpressionResult<Self> {
        check_parts(&conditions, &operators)?;
        Ok(Self {
            conditions,
            operators,
        })
    }

    /// Create a clause holding one condition
    pub fn single(condition: Condition) -> ExpressionResult<Self> {
        Self::new(vec![condition], Vec::new())
    }

    pub fn builder() -> ClauseBuilder {
        ClauseBuilder::new()
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn operators(&self) -> &[LogicalOp] {
        &self.operators
    }

    /// Number of conditions
    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Evaluate the clause against a row
    pub fn evaluate(&self, header: &Header, row: &Row) -> ExpressionResult<bool> {
        self.fold(header, row, |_, _| {})
    }

    /// Evaluate the clause and record every condition visited
    pub fn trace(&self, header: &Header, row: &Row) -> ExpressionResult<EvalTrace> {
        let mut visited = Vec::with_capacity(self.conditions.len());
        let result = self.fold(header, row, |index, value| visited.push((index, value)))?;
        Ok(EvalTrace { result, visited })
    }

    fn fold<F>(&self, header: &Header, row: &Row, mut on_visit: F) -> ExpressionResult<bool>
    where
        F: FnMut(usize, bool),
    {
        let mut result = self.visit(0, header, row, &mut on_visit)?;

        for (i, op) in self.operators.iter().enumerate() {
            match op {
                LogicalOp::And => {
                    if !result {
                        log::trace!("skip #{}: AND after false", i + 1);
                        continue;
                    }
                    result = self.visit(i + 1, header, row, &mut on_visit)?;
                }
                LogicalOp::Or => {
                    if result {
                        log::trace!("stop before #{}: OR after true", i + 1);
                        return Ok(true);
                    }
                    result = self.visit(i + 1, header, row, &mut on_visit)?;
                }
            }
        }

        Ok(result)
    }

    fn visit<F>(
        &self,
        index: usize,
        header: &Header,
        row: &Row,
        on_visit: &mut F,
    ) -> ExpressionResult<bool>
    where
        F: FnMut(usize, bool),
    {
        let condition = self
            .conditions
            .get(index)
            .ok_or(ExpressionError::UnclosedClause {
                conditions: self.conditions.len(),
                operators: self.operators.len(),
            })?;
        let result = condition.eval(header, row)?;
        log::trace!("#{} {} -> {}", index, condition, result);
        on_visit(index, result);
        Ok(result)
    }
}

/// Check the closed-clause invariant and that every literal can be written back as text
fn check_parts(conditions: &[Condition], operators: &[LogicalOp]) -> ExpressionResult<()> {
    if conditions.is_empty() {
        return Err(ExpressionError::EmptyClause);
    }
    if operators.len() + 1 != conditions.len() {
        return Err(ExpressionError::UnclosedClause {
            conditions: conditions.len(),
            operators: operators.len(),
        });
    }
    conditions.iter().try_for_each(check_literal)
}

fn check_literal(condition: &Condition) -> ExpressionResult<()> {
    match condition.literal() {
        Value::Real(r) if !r.is_finite() => Err(ExpressionError::NonFiniteLiteral {
            column: condition.column().to_string(),
        }),
        _ => Ok(()),
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut conditions = self.conditions.iter();
        if let Some(first) = conditions.next() {
            write!(f, "{}", first)?;
        }
        for (op, condition) in self.operators.iter().zip(conditions) {
            write!(f, " {} {}", op, condition)?;
        }
        Ok(())
    }
}

/// Builds a clause by appending conditions and operators alternately.
///
/// ```
/// use rowfilter::expression::{ClauseBuilder, Comparator, Condition, LogicalOp};
///
/// let clause = ClauseBuilder::new()
///     .add_condition(Condition::integer("age", Comparator::Gt, 60))?
///     .add_operator(LogicalOp::Or)?
///     .add_condition(Condition::text("company", Comparator::Eq, "IBX"))?
///     .build()?;
/// assert_eq!(clause.to_string(), "age > 60 OR company = \"IBX\"");
/// # Ok::<(), rowfilter::expression::ExpressionError>(())
/// ```
#[derive(Debug, Default)]
pub struct ClauseBuilder {
    conditions: Vec<Condition>,
    operators: Vec<LogicalOp>,
}

impl ClauseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a condition. The previous part must be an operator, or nothing.
    pub fn add_condition(&mut self, condition: Condition) -> ExpressionResult<&mut Self> {
        if self.conditions.len() != self.operators.len() {
            return Err(ExpressionError::UnexpectedCondition);
        }
        check_literal(&condition)?;
        self.conditions.push(condition);
        Ok(self)
    }

    /// Append an operator. The previous part must be a condition.
    pub fn add_operator(&mut self, op: LogicalOp) -> ExpressionResult<&mut Self> {
        if self.conditions.len() != self.operators.len() + 1 {
            return Err(ExpressionError::UnexpectedOperator);
        }
        self.operators.push(op);
        Ok(self)
    }

    /// Append `AND condition`
    pub fn and(&mut self, condition: Condition) -> ExpressionResult<&mut Self> {
        self.add_operator(LogicalOp::And)?.add_condition(condition)
    }

    /// Append `OR condition`
    pub fn or(&mut self, condition: Condition) -> ExpressionResult<&mut Self> {
        self.add_operator(LogicalOp::Or)?.add_condition(condition)
    }

    /// Finish the clause. Fails if it is empty or ends on an operator.
    ///
    /// On success the builder is left empty and can be reused. On failure
    /// its parts are kept, so the missing condition can still be appended.
    pub fn build(&mut self) -> ExpressionResult<Clause> {
        check_parts(&self.conditions, &self.operators)?;
        Ok(Clause {
            conditions: std::mem::take(&mut self.conditions),
            operators: std::mem::take(&mut self.operators),
        })
    }
}
