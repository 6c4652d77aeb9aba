use std::fmt;

/// Data types a condition literal can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Integer,
    Real,
    Text,
}

impl DataType {
    /// Parse raw column text into a value of this type.
    ///
    /// Returns `None` when the text is not a valid representation of the
    /// type. Numeric parsing ignores surrounding ASCII whitespace; text is
    /// passed through untouched.
    pub fn parse(&self, raw: &str) -> Option<Value> {
        match self {
            DataType::Integer => raw.trim_ascii().parse::<i64>().ok().map(Value::Integer),
            DataType::Real => raw.trim_ascii().parse::<f64>().ok().map(Value::Real),
            DataType::Text => Some(Value::Text(raw.to_string())),
        }
    }
}

/// A typed value, either a condition literal or a parsed column value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Real(f64),
    Text(String),
}

impl Value {
    /// Get the data type of this value
    pub fn data_type(&self) -> DataType {
        match self {
            Value::Integer(_) => DataType::Integer,
            Value::Real(_) => DataType::Real,
            Value::Text(_) => DataType::Text,
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Real(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{}", i),
            // Keep a decimal point so the literal reads back as REAL
            Value::Real(r) if r.is_finite() && r.fract() == 0.0 => write!(f, "{:.1}", r),
            Value::Real(r) => write!(f, "{}", r),
            Value::Text(s) => write!(f, "\"{}\"", s.replace('"', "\"\"")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer() {
        assert_eq!(DataType::Integer.parse("42"), Some(Value::Integer(42)));
        assert_eq!(DataType::Integer.parse("-7"), Some(Value::Integer(-7)));
        assert_eq!(DataType::Integer.parse(" 20 "), Some(Value::Integer(20)));

        assert_eq!(DataType::Integer.parse("abc"), None);
        assert_eq!(DataType::Integer.parse("20abc"), None);
        assert_eq!(DataType::Integer.parse("110.5"), None);
        assert_eq!(DataType::Integer.parse(""), None);
        assert_eq!(DataType::Integer.parse("99999999999999999999"), None);
    }

    #[test]
    fn test_parse_real() {
        assert_eq!(DataType::Real.parse("110.5"), Some(Value::Real(110.5)));
        assert_eq!(DataType::Real.parse("100"), Some(Value::Real(100.0)));
        assert_eq!(DataType::Real.parse("1e3"), Some(Value::Real(1000.0)));
        assert_eq!(DataType::Real.parse("\t-0.25"), Some(Value::Real(-0.25)));

        assert_eq!(DataType::Real.parse("twelve"), None);
        assert_eq!(DataType::Real.parse("1.2.3"), None);
        assert_eq!(DataType::Real.parse(""), None);
    }

    #[test]
    fn test_parse_text_is_verbatim() {
        assert_eq!(
            DataType::Text.parse("  John Doe "),
            Some(Value::Text("  John Doe ".to_string()))
        );
        assert_eq!(DataType::Text.parse(""), Some(Value::Text(String::new())));
    }

    #[test]
    fn test_value_data_type() {
        assert_eq!(Value::from(1).data_type(), DataType::Integer);
        assert_eq!(Value::from(1.5).data_type(), DataType::Real);
        assert_eq!(Value::from("x").data_type(), DataType::Text);
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Integer(60).to_string(), "60");
        assert_eq!(Value::Real(100.0).to_string(), "100.0");
        assert_eq!(Value::Real(110.5).to_string(), "110.5");
        assert_eq!(Value::from("IBX").to_string(), "\"IBX\"");
        assert_eq!(Value::from("say \"hi\"").to_string(), "\"say \"\"hi\"\"\"");
    }
}
