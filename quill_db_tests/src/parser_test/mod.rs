use quill_db_core::parser::{Action, DropKind, ShowKind, parse};
use quill_db_core::storage::{Assignments, Projection, Sort};
use quill_db_core::types::predicate::{Conditions, Predicate};
use quill_db_core::types::value::Value;
use quill_db_core::DbError;

fn conditions(pairs: &[(&str, Predicate)]) -> Conditions {
    pairs
        .iter()
        .map(|(field, pred)| (field.to_string(), pred.clone()))
        .collect()
}

fn data(pairs: &[(&str, Value)]) -> Assignments {
    pairs
        .iter()
        .map(|(field, value)| (field.to_string(), value.clone()))
        .collect()
}

fn syntax_err(input: &str) -> String {
    match parse(input) {
        Err(DbError::Syntax(msg)) => msg,
        other => panic!("Expected syntax error for {input:?}, got {other:?}"),
    }
}

mod admin;
mod tokenizer;
