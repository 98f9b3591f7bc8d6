mod admin;
mod common;
mod dml;
mod select;
mod tokenizer;
mod where_clause;

pub use tokenizer::{Token, tokenize};

use crate::error::{DbError, DbResult};
use crate::parser::action::Action;
use crate::types::predicate::Conditions;
use admin::{parse_drop, parse_exit, parse_show, parse_use};
use dml::{parse_delete, parse_insert, parse_update};
use select::parse_select;
use where_clause::parse_conditions;

/// Parses one statement into an [`Action`].
pub fn parse(input: &str) -> DbResult<Action> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(DbError::syntax("Empty command"));
    }

    let (base, where_tokens) = split_where(tokens);
    let base = without_and(base);
    let keyword = match base.first() {
        Some(Token::Word(w)) => w.to_uppercase(),
        Some(other) => {
            return Err(DbError::syntax(format!(
                "Unknown command '{}'",
                other.describe()
            )));
        }
        None => return Err(DbError::syntax("Missing command before WHERE")),
    };
    if base.len() < 2 && keyword != "EXIT" && keyword != "QUIT" {
        return Err(DbError::syntax(format!("Incomplete command '{input}'")));
    }

    let conditions = match where_tokens {
        Some(tokens) => Some(parse_conditions(&without_and(tokens))?),
        None => None,
    };

    match keyword.as_str() {
        "SELECT" => parse_select(&base, conditions.unwrap_or_default()),
        "UPDATE" => parse_update(&base, conditions.unwrap_or_default()),
        "DELETE" => parse_delete(&base, conditions.unwrap_or_default()),
        "INSERT" => no_where(&keyword, conditions).and_then(|_| parse_insert(&base)),
        "USE" => no_where(&keyword, conditions).and_then(|_| parse_use(&base)),
        "SHOW" => no_where(&keyword, conditions).and_then(|_| parse_show(&base)),
        "DROP" => no_where(&keyword, conditions).and_then(|_| parse_drop(&base)),
        "EXIT" | "QUIT" => no_where(&keyword, conditions).and_then(|_| parse_exit(&base)),
        _ => Err(DbError::syntax(format!("Unknown command '{}'", base[0].describe()))),
    }
}

/// Splits at the first bare `WHERE` word. Quoted text never splits.
fn split_where(mut tokens: Vec<Token>) -> (Vec<Token>, Option<Vec<Token>>) {
    match tokens.iter().position(|t| t.is_word("where")) {
        Some(idx) => {
            let rest = tokens.split_off(idx + 1);
            tokens.pop();
            (tokens, Some(rest))
        }
        None => (tokens, None),
    }
}

fn without_and(tokens: Vec<Token>) -> Vec<Token> {
    tokens.into_iter().filter(|t| !t.is_word("and")).collect()
}

fn no_where(keyword: &str, conditions: Option<Conditions>) -> DbResult<()> {
    match conditions {
        Some(_) => Err(DbError::syntax(format!(
            "{keyword} does not take a WHERE clause"
        ))),
        None => Ok(()),
    }
}
