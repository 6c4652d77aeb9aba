//! Leaf predicate: `column <comparator> literal`.

use crate::access::{Header, Row, Value};
use crate::expression::{Comparator, ExpressionError, ExpressionResult};
use crate::sql::token::quote_identifier;
use std::fmt;

/// A typed comparison between one column of a row and a literal
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    column: String,
    comparator: Comparator,
    literal: Value,
}

impl Condition {
    pub fn new(
        column: impl Into<String>,
        comparator: Comparator,
        literal: impl Into<Value>,
    ) -> Self {
        Self {
            column: column.into(),
            comparator,
            literal: literal.into(),
        }
    }

    /// Create a condition with an integer literal
    pub fn integer(column: impl Into<String>, comparator: Comparator, literal: i64) -> Self {
        Self::new(column, comparator, Value::Integer(literal))
    }

    /// Create a condition with a floating-point literal
    pub fn real(column: impl Into<String>, comparator: Comparator, literal: f64) -> Self {
        Self::new(column, comparator, Value::Real(literal))
    }

    /// Create a condition with a text literal
    pub fn text(
        column: impl Into<String>,
        comparator: Comparator,
        literal: impl Into<String>,
    ) -> Self {
        Self::new(column, comparator, Value::Text(literal.into()))
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn comparator(&self) -> Comparator {
        self.comparator
    }

    pub fn literal(&self) -> &Value {
        &self.literal
    }

    /// Evaluate this condition against a row.
    ///
    /// The column text is parsed into the literal's type first. Text that does
    /// not parse makes the condition false. An unknown column, or a header
    /// position the row does not have, is an error.
    pub fn eval(&self, header: &Header, row: &Row) -> ExpressionResult<bool> {
        let index = header
            .index_of(&self.column)
            .ok_or_else(|| ExpressionError::UnknownColumn {
                column: self.column.clone(),
            })?;
        let raw = row
            .get(index)
            .ok_or_else(|| ExpressionError::ColumnIndexOutOfBounds {
                column: self.column.clone(),
                index,
                row_len: row.len(),
            })?;

        let result = self
            .literal
            .data_type()
            .parse(raw)
            .and_then(|value| self.comparator.compare_values(&value, &self.literal))
            .unwrap_or(false);
        Ok(result)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            quote_identifier(&self.column),
            self.comparator,
            self.literal
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person() -> (Header, Row) {
        let header = Header::new(["name", "age", "gender", "score", "company"]).unwrap();
        let row = ["John Doe", "20", "male", "110.5", "IBX"]
            .into_iter()
            .collect();
        (header, row)
    }

    #[test]
    fn test_integer_condition() {
        let (header, row) = person();
        assert!(Condition::integer("age", Comparator::Eq, 20)
            .eval(&header, &row)
            .unwrap());
        assert!(Condition::integer("age", Comparator::Lt, 21)
            .eval(&header, &row)
            .unwrap());
        assert!(!Condition::integer("age", Comparator::Gt, 60)
            .eval(&header, &row)
            .unwrap());
        assert!(Condition::integer("age", Comparator::Ge, 20)
            .eval(&header, &row)
            .unwrap());
    }

    #[test]
    fn test_real_condition() {
        let (header, row) = person();
        assert!(Condition::real("score", Comparator::Gt, 110.0)
            .eval(&header, &row)
            .unwrap());
        assert!(Condition::real("score", Comparator::Eq, 110.5)
            .eval(&header, &row)
            .unwrap());
        assert!(!Condition::real("score", Comparator::Le, 100.0)
            .eval(&header, &row)
            .unwrap());
        // Integer-looking text parses as a real
        assert!(Condition::real("age", Comparator::Eq, 20.0)
            .eval(&header, &row)
            .unwrap());
    }

    #[test]
    fn test_text_condition_no_normalization() {
        let (header, row) = person();
        assert!(Condition::text("name", Comparator::Eq, "John Doe")
            .eval(&header, &row)
            .unwrap());
        assert!(!Condition::text("name", Comparator::Eq, "john doe")
            .eval(&header, &row)
            .unwrap());
        assert!(!Condition::text("name", Comparator::Eq, "John Doe ")
            .eval(&header, &row)
            .unwrap());
        assert!(Condition::text("company", Comparator::Lt, "Microsoft")
            .eval(&header, &row)
            .unwrap());
    }

    #[test]
    fn test_parse_failure_is_false() {
        let (header, row) = person();
        // "John Doe" is not a number: every comparator is false, including Ne
        for comparator in [
            Comparator::Eq,
            Comparator::Ne,
            Comparator::Lt,
            Comparator::Le,
            Comparator::Gt,
            Comparator::Ge,
        ] {
            assert!(!Condition::integer("name", comparator, 0)
                .eval(&header, &row)
                .unwrap());
            assert!(!Condition::real("name", comparator, 0.0)
                .eval(&header, &row)
                .unwrap());
        }
        // "110.5" is not an integer
        assert!(!Condition::integer("score", Comparator::Gt, 100)
            .eval(&header, &row)
            .unwrap());
    }

    #[test]
    fn test_malformed_age() {
        let header = Header::new(["name", "age"]).unwrap();
        let row: Row = ["Bad Data", "abc"].into_iter().collect();
        let cond = Condition::integer("age", Comparator::Gt, 60);
        assert_eq!(cond.eval(&header, &row), Ok(false));
    }

    #[test]
    fn test_unknown_column() {
        let (header, row) = person();
        let cond = Condition::integer("salary", Comparator::Gt, 0);
        assert_eq!(
            cond.eval(&header, &row),
            Err(ExpressionError::UnknownColumn {
                column: "salary".to_string()
            })
        );
    }

    #[test]
    fn test_short_row() {
        let (header, _) = person();
        let row: Row = ["Jenny Ho", "21"].into_iter().collect();
        let cond = Condition::text("company", Comparator::Eq, "Huawei");
        assert!(matches!(
            cond.eval(&header, &row),
            Err(ExpressionError::ColumnIndexOutOfBounds {
                index: 4,
                row_len: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_condition_display() {
        assert_eq!(
            Condition::text("name", Comparator::Ne, "Bill Gates").to_string(),
            "name != \"Bill Gates\""
        );
        assert_eq!(
            Condition::integer("age", Comparator::Gt, 60).to_string(),
            "age > 60"
        );
        assert_eq!(
            Condition::real("score", Comparator::Le, 100.0).to_string(),
            "score <= 100.0"
        );
        assert_eq!(
            Condition::text("first name", Comparator::Eq, "Jenny").to_string(),
            "`first name` = \"Jenny\""
        );
        assert_eq!(
            Condition::integer("or", Comparator::Lt, 3).to_string(),
            "`or` < 3"
        );
    }
}
