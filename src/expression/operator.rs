//! Operator definitions for conditions and clauses.

use crate::access::Value;
use std::fmt;

/// Comparison applied between a column value and a condition literal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparator {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl Comparator {
    /// Compare `left` against `right` using the type's native ordering.
    ///
    /// Unordered operands (NaN) fail every comparison except `Ne`.
    pub fn apply<T: PartialOrd + ?Sized>(&self, left: &T, right: &T) -> bool {
        match self {
            Comparator::Eq => left == right,
            Comparator::Ne => left != right,
            Comparator::Lt => left < right,
            Comparator::Le => left <= right,
            Comparator::Gt => left > right,
            Comparator::Ge => left >= right,
        }
    }

    /// Compare two values of the same type.
    ///
    /// Returns `None` when the values carry different types.
    pub fn compare_values(&self, left: &Value, right: &Value) -> Option<bool> {
        match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => Some(self.apply(a, b)),
            (Value::Real(a), Value::Real(b)) => Some(self.apply(a, b)),
            (Value::Text(a), Value::Text(b)) => Some(self.apply(a.as_str(), b.as_str())),
            _ => None,
        }
    }

    /// Get the display string for this comparator
    pub fn as_str(&self) -> &'static str {
        match self {
            Comparator::Eq => "=",
            Comparator::Ne => "!=",
            Comparator::Lt => "<",
            Comparator::Le => "<=",
            Comparator::Gt => ">",
            Comparator::Ge => ">=",
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logical operator joining two neighbouring conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalOp {
    And,
    Or,
}

impl LogicalOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalOp::And => "AND",
            LogicalOp::Or => "OR",
        }
    }
}

impl fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparator_integers() {
        assert!(Comparator::Eq.apply(&5, &5));
        assert!(!Comparator::Eq.apply(&5, &6));
        assert!(Comparator::Ne.apply(&5, &6));
        assert!(Comparator::Lt.apply(&3, &5));
        assert!(!Comparator::Lt.apply(&5, &5));
        assert!(Comparator::Le.apply(&5, &5));
        assert!(Comparator::Gt.apply(&61, &60));
        assert!(!Comparator::Gt.apply(&60, &60));
        assert!(Comparator::Ge.apply(&60, &60));
    }

    #[test]
    fn test_comparator_strings() {
        assert!(Comparator::Eq.apply("IBX", "IBX"));
        assert!(!Comparator::Eq.apply("ibx", "IBX"));
        assert!(Comparator::Lt.apply("Apple", "Banana"));
        // Byte order: uppercase sorts before lowercase
        assert!(Comparator::Lt.apply("Zebra", "apple"));
    }

    #[test]
    fn test_comparator_nan() {
        let nan = f64::NAN;
        assert!(!Comparator::Eq.apply(&nan, &nan));
        assert!(Comparator::Ne.apply(&nan, &1.0));
        assert!(!Comparator::Lt.apply(&nan, &1.0));
        assert!(!Comparator::Ge.apply(&nan, &1.0));
    }

    #[test]
    fn test_compare_values() {
        assert_eq!(
            Comparator::Gt.compare_values(&Value::Integer(61), &Value::Integer(60)),
            Some(true)
        );
        assert_eq!(
            Comparator::Le.compare_values(&Value::Real(100.0), &Value::Real(100.0)),
            Some(true)
        );
        assert_eq!(
            Comparator::Eq.compare_values(&Value::from("female"), &Value::from("male")),
            Some(false)
        );
        // No cross-type coercion
        assert_eq!(
            Comparator::Eq.compare_values(&Value::Integer(1), &Value::Real(1.0)),
            None
        );
        assert_eq!(
            Comparator::Ne.compare_values(&Value::from("1"), &Value::Integer(1)),
            None
        );
    }

    #[test]
    fn test_operator_display() {
        assert_eq!(Comparator::Eq.to_string(), "=");
        assert_eq!(Comparator::Ne.to_string(), "!=");
        assert_eq!(Comparator::Le.as_str(), "<=");
        assert_eq!(LogicalOp::And.to_string(), "AND");
        assert_eq!(LogicalOp::Or.as_str(), "OR");
    }
}
