use crate::types::value::Value;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// A single-field row filter. `Null` values never match any predicate.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    Equals(Value),
    NotEquals(Value),
    GreaterThan(Value),
    LessThan(Value),
    GreaterOrEqual(Value),
    LessOrEqual(Value),
    In(Vec<Value>),
    NotIn(Vec<Value>),
    Like(String),
    /// Inclusive on both ends.
    Range(Value, Value),
}

/// Field name -> predicate; every entry must match (AND).
pub type Conditions = BTreeMap<String, Predicate>;

impl Predicate {
    pub fn matches(&self, value: &Value) -> bool {
        if value.is_null() {
            return false;
        }
        match self {
            Predicate::Equals(v) => value.loose_eq(v),
            Predicate::NotEquals(v) => !value.loose_eq(v),
            Predicate::GreaterThan(v) => value.compare(v) == Some(Ordering::Greater),
            Predicate::LessThan(v) => value.compare(v) == Some(Ordering::Less),
            Predicate::GreaterOrEqual(v) => {
                matches!(value.compare(v), Some(Ordering::Greater | Ordering::Equal))
            }
            Predicate::LessOrEqual(v) => {
                matches!(value.compare(v), Some(Ordering::Less | Ordering::Equal))
            }
            Predicate::In(set) => set.iter().any(|v| value.loose_eq(v)),
            Predicate::NotIn(set) => !set.iter().any(|v| value.loose_eq(v)),
            Predicate::Like(pattern) => like_match(pattern, &value.to_string()),
            Predicate::Range(lo, hi) => {
                matches!(value.compare(lo), Some(Ordering::Greater | Ordering::Equal))
                    && matches!(value.compare(hi), Some(Ordering::Less | Ordering::Equal))
            }
        }
    }
}

/// Case-sensitive wildcard match where `%` stands for any run of characters.
/// The pattern has to cover the whole text.
fn like_match(pattern: &str, text: &str) -> bool {
    let parts: Vec<&str> = pattern.split('%').collect();
    if parts.len() == 1 {
        return pattern == text;
    }

    let first = parts[0];
    let last = parts[parts.len() - 1];
    let Some(mut rest) = text.strip_prefix(first) else {
        return false;
    };
    for mid in &parts[1..parts.len() - 1] {
        match rest.find(mid) {
            Some(pos) => rest = &rest[pos + mid.len()..],
            None => return false,
        }
    }
    rest.ends_with(last)
}

fn join_literals(values: &[Value]) -> String {
    values
        .iter()
        .map(Value::to_literal)
        .collect::<Vec<_>>()
        .join(",")
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Equals(v) => write!(f, "= {}", v.to_literal()),
            Predicate::NotEquals(v) => write!(f, "!= {}", v.to_literal()),
            Predicate::GreaterThan(v) => write!(f, "> {}", v.to_literal()),
            Predicate::LessThan(v) => write!(f, "< {}", v.to_literal()),
            Predicate::GreaterOrEqual(v) => write!(f, ">= {}", v.to_literal()),
            Predicate::LessOrEqual(v) => write!(f, "<= {}", v.to_literal()),
            Predicate::In(set) => write!(f, "IN ({})", join_literals(set)),
            Predicate::NotIn(set) => write!(f, "NOT_IN ({})", join_literals(set)),
            Predicate::Like(p) => write!(f, "LIKE {}", Value::from(p.as_str()).to_literal()),
            Predicate::Range(lo, hi) => {
                write!(f, "RANGE ({},{})", lo.to_literal(), hi.to_literal())
            }
        }
    }
}
