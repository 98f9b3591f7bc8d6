use super::common::Cursor;
use super::tokenizer::Token;
use crate::error::{DbError, DbResult};
use crate::parser::action::{Action, DropKind, ShowKind};

pub(super) fn parse_use(tokens: &[Token]) -> DbResult<Action> {
    const USAGE: &str = "Usage: use <database>";
    let mut cur = Cursor::new(tokens);
    cur.expect_word("use", USAGE)?;
    let database = cur.ident(USAGE)?;
    cur.finish(USAGE)?;
    Ok(Action::Use { database })
}

pub(super) fn parse_show(tokens: &[Token]) -> DbResult<Action> {
    const USAGE: &str = "Usage: show databases|tables";
    let mut cur = Cursor::new(tokens);
    cur.expect_word("show", USAGE)?;
    let kind = match cur.next() {
        Some(t) if t.is_word("databases") => ShowKind::Databases,
        Some(t) if t.is_word("tables") => ShowKind::Tables,
        _ => return Err(DbError::syntax(USAGE)),
    };
    cur.finish(USAGE)?;
    Ok(Action::Show { kind })
}

pub(super) fn parse_drop(tokens: &[Token]) -> DbResult<Action> {
    const USAGE: &str = "Usage: drop database|table <name>";
    let mut cur = Cursor::new(tokens);
    cur.expect_word("drop", USAGE)?;
    let kind = match cur.next() {
        Some(t) if t.is_word("database") => DropKind::Database,
        Some(t) if t.is_word("table") => DropKind::Table,
        _ => return Err(DbError::syntax(USAGE)),
    };
    let name = cur.ident(USAGE)?;
    cur.finish(USAGE)?;
    Ok(Action::Drop { kind, name })
}

pub(super) fn parse_exit(tokens: &[Token]) -> DbResult<Action> {
    let cur = Cursor::new(&tokens[1..]);
    cur.finish("Usage: exit|quit")?;
    Ok(Action::Exit)
}
