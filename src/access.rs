//! Access layer for the data a clause is evaluated against.
//!
//! - **Header**: column name to field position lookup
//! - **Row**: one record as raw text fields
//! - **Value**: typed values parsed out of raw text
//! - **DataType**: the types a value can take

pub mod row;
pub mod value;

pub use row::{Header, Row};
pub use value::{DataType, Value};
