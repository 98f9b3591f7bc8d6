use super::common::{Cursor, parse_literal, parse_literal_list, parse_name_list};
use super::tokenizer::Token;
use crate::error::{DbError, DbResult};
use crate::parser::action::Action;
use crate::storage::table::Assignments;
use crate::types::predicate::Conditions;

pub(super) fn parse_insert(tokens: &[Token]) -> DbResult<Action> {
    // insert into <table>(<f1>, <f2>, ...) values(<v1>, <v2>, ...)
    const USAGE: &str = "Usage: insert into <table>(<field1>, ...) values(<value1>, ...)";
    let mut cur = Cursor::new(tokens);
    cur.expect_word("insert", USAGE)?;
    cur.expect_word("into", USAGE)?;
    let table = cur.ident(USAGE)?;
    cur.expect_symbol("(", USAGE)?;
    let fields = parse_name_list(&mut cur, USAGE)?;
    cur.expect_symbol(")", USAGE)?;
    cur.expect_word("values", USAGE)?;
    let values = parse_literal_list(&mut cur, USAGE)?;
    cur.finish(USAGE)?;

    if fields.len() != values.len() {
        return Err(DbError::syntax(format!(
            "INSERT lists {} field(s) but {} value(s)",
            fields.len(),
            values.len()
        )));
    }

    let mut data = Assignments::new();
    for (field, value) in fields.into_iter().zip(values) {
        if data.contains_key(&field) {
            return Err(DbError::syntax(format!("Field '{field}' is listed twice in INSERT")));
        }
        data.insert(field, value);
    }

    Ok(Action::Insert { table, data })
}

pub(super) fn parse_update(tokens: &[Token], conditions: Conditions) -> DbResult<Action> {
    // update <table> set <f> = <v> [, <f> = <v> ...]
    const USAGE: &str = "Usage: update <table> set <field> = <value> [, <field> = <value> ...] [where ...]";
    let mut cur = Cursor::new(tokens);
    cur.expect_word("update", USAGE)?;
    let table = cur.ident(USAGE)?;
    cur.expect_word("set", USAGE)?;

    let mut data = Assignments::new();
    loop {
        let field = cur.ident(USAGE)?;
        cur.expect_symbol("=", USAGE)?;
        let value = parse_literal(cur.next())?;
        data.insert(field, value);
        if !cur.eat_symbol(",") {
            break;
        }
    }
    cur.finish(USAGE)?;

    Ok(Action::Update {
        table,
        data,
        conditions,
    })
}

pub(super) fn parse_delete(tokens: &[Token], conditions: Conditions) -> DbResult<Action> {
    // delete from <table>
    const USAGE: &str = "Usage: delete from <table> [where ...]";
    let mut cur = Cursor::new(tokens);
    cur.expect_word("delete", USAGE)?;
    cur.expect_word("from", USAGE)?;
    let table = cur.ident(USAGE)?;
    cur.finish(USAGE)?;

    Ok(Action::Delete { table, conditions })
}
