use super::common::{Cursor, parse_literal, parse_literal_list};
use super::tokenizer::Token;
use crate::error::{DbError, DbResult};
use crate::types::predicate::{Conditions, Predicate};
use crate::types::value::Value;

const USAGE: &str = "Bad WHERE clause. Use: where <field> <op> <value> [and <field> <op> <value> ...]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    Eq,
    NotEq,
    Gt,
    Lt,
    Gte,
    Lte,
    Like,
    In,
    NotIn,
    Range,
}

fn parse_operator(token: &Token) -> DbResult<Operator> {
    let op = match token {
        Token::Symbol("=") => Operator::Eq,
        Token::Symbol("!=") => Operator::NotEq,
        Token::Symbol(">") => Operator::Gt,
        Token::Symbol("<") => Operator::Lt,
        Token::Symbol(">=") => Operator::Gte,
        Token::Symbol("<=") => Operator::Lte,
        Token::Word(w) => match w.to_uppercase().as_str() {
            "LIKE" => Operator::Like,
            "IN" => Operator::In,
            "NOT_IN" => Operator::NotIn,
            "RANGE" => Operator::Range,
            _ => return Err(unknown_operator(token)),
        },
        _ => return Err(unknown_operator(token)),
    };
    Ok(op)
}

fn unknown_operator(token: &Token) -> DbError {
    DbError::syntax(format!(
        "Unknown WHERE operator '{}'. Use =|!=|>|<|>=|<=|like|in|not_in|range",
        token.describe()
    ))
}

/// Parses `field OP literal` triplets (AND tokens already removed). A later
/// triplet on the same field replaces the earlier one.
pub(super) fn parse_conditions(tokens: &[Token]) -> DbResult<Conditions> {
    if tokens.is_empty() {
        return Err(DbError::syntax("WHERE requires at least one condition"));
    }

    let mut cur = Cursor::new(tokens);
    let mut conditions = Conditions::new();
    while !cur.is_done() {
        let field = cur.ident(USAGE)?;
        let op = match cur.next() {
            Some(t) => parse_operator(t)?,
            None => {
                return Err(DbError::syntax(format!(
                    "Condition on '{field}' is missing an operator"
                )));
            }
        };
        if cur.is_done() {
            return Err(DbError::syntax(format!(
                "Condition on '{field}' is missing a value"
            )));
        }

        let predicate = match op {
            Operator::Eq => Predicate::Equals(parse_literal(cur.next())?),
            Operator::NotEq => Predicate::NotEquals(parse_literal(cur.next())?),
            Operator::Gt => Predicate::GreaterThan(parse_literal(cur.next())?),
            Operator::Lt => Predicate::LessThan(parse_literal(cur.next())?),
            Operator::Gte => Predicate::GreaterOrEqual(parse_literal(cur.next())?),
            Operator::Lte => Predicate::LessOrEqual(parse_literal(cur.next())?),
            Operator::Like => match cur.next() {
                Some(Token::Quoted(pattern)) => Predicate::Like(pattern.clone()),
                _ => {
                    return Err(DbError::syntax(format!(
                        "LIKE on '{field}' expects a quoted pattern"
                    )));
                }
            },
            Operator::In => Predicate::In(parse_value_set(&mut cur)?),
            Operator::NotIn => Predicate::NotIn(parse_value_set(&mut cur)?),
            Operator::Range => {
                let bounds = parse_literal_list(&mut cur, "RANGE expects (lo,hi)")?;
                let [lo, hi]: [Value; 2] = bounds
                    .try_into()
                    .map_err(|_| DbError::syntax("RANGE expects exactly two values: (lo,hi)"))?;
                Predicate::Range(lo, hi)
            }
        };
        conditions.insert(field, predicate);
    }
    Ok(conditions)
}

/// `(v1,v2,...)` with duplicates dropped, first occurrence kept.
fn parse_value_set(cur: &mut Cursor<'_>) -> DbResult<Vec<Value>> {
    let values = parse_literal_list(cur, "IN / NOT_IN expect (v1,v2,...)")?;
    let mut set: Vec<Value> = Vec::with_capacity(values.len());
    for v in values {
        if !set.contains(&v) {
            set.push(v);
        }
    }
    Ok(set)
}
