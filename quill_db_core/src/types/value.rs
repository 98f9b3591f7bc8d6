use crate::error::{DbError, DbResult};
use crate::types::datatype::DataType;
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    VarChar(String),
    Null,
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::VarChar(_) => "varchar",
            Value::Null => "null",
        }
    }

    /// Compares two values of compatible types. Ints and floats compare
    /// numerically; strings compare with strings. `Null` and mixed
    /// string/number pairs have no ordering.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
            (Value::Int(a), Value::Float(b)) => (*a as f64).partial_cmp(b),
            (Value::Float(a), Value::Int(b)) => a.partial_cmp(&(*b as f64)),
            (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
            (Value::VarChar(a), Value::VarChar(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }

    pub fn loose_eq(&self, other: &Value) -> bool {
        self.compare(other) == Some(Ordering::Equal)
    }

    /// Total order used for sorting result sets: nulls first, then numbers,
    /// then strings.
    pub fn sort_cmp(&self, other: &Value) -> Ordering {
        fn rank(v: &Value) -> u8 {
            match v {
                Value::Null => 0,
                Value::Int(_) | Value::Float(_) => 1,
                Value::VarChar(_) => 2,
            }
        }
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (Value::Int(a), Value::Float(b)) => (*a as f64).total_cmp(b),
            (Value::Float(a), Value::Int(b)) => a.total_cmp(&(*b as f64)),
            (Value::Float(a), Value::Float(b)) => a.total_cmp(b),
            (Value::VarChar(a), Value::VarChar(b)) => a.cmp(b),
            _ => rank(self).cmp(&rank(other)),
        }
    }

    /// Converts a value into the representation of `dtype`. Ints widen into
    /// FLOAT fields; nothing else converts implicitly.
    pub fn coerce(self, dtype: DataType, field: &str) -> DbResult<Value> {
        match (dtype, self) {
            (_, Value::Null) => Ok(Value::Null),
            (DataType::Int, v @ Value::Int(_)) => Ok(v),
            (DataType::Float, v @ Value::Float(_)) => Ok(v),
            (DataType::Float, Value::Int(n)) => Ok(Value::Float(n as f64)),
            (DataType::VarChar, v @ Value::VarChar(_)) => Ok(v),
            (dtype, other) => Err(DbError::Type(format!(
                "Field '{field}' expects {dtype} but got {} '{other}'",
                other.type_name()
            ))),
        }
    }

    /// Renders the value as a query literal (strings quoted and escaped).
    pub fn to_literal(&self) -> String {
        match self {
            Value::VarChar(s) => format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'")),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::VarChar(s) => f.write_str(s),
            Value::Null => f.write_str("null"),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::VarChar(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::VarChar(s)
    }
}
