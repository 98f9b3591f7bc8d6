use super::common::{Cursor, parse_name_list};
use super::tokenizer::Token;
use crate::error::DbResult;
use crate::parser::action::Action;
use crate::storage::table::{Projection, Sort};
use crate::types::predicate::Conditions;

const USAGE: &str = "Usage: select <*|field1,field2,...> from <table> [where ...]";

pub(super) fn parse_select(tokens: &[Token], conditions: Conditions) -> DbResult<Action> {
    let mut cur = Cursor::new(tokens);
    cur.expect_word("select", USAGE)?;

    let fields = if cur.eat_symbol("*") {
        Projection::All
    } else {
        Projection::Fields(parse_name_list(&mut cur, USAGE)?)
    };
    cur.expect_word("from", USAGE)?;
    let table = cur.ident(USAGE)?;
    cur.finish(USAGE)?;

    Ok(Action::Search {
        table,
        fields,
        conditions,
        sort: Sort::default(),
    })
}
