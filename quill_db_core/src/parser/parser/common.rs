use super::tokenizer::Token;
use crate::error::{DbError, DbResult};
use crate::types::value::Value;

/// Forward-only position in a token slice.
pub(super) struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(super) fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    pub(super) fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    pub(super) fn next(&mut self) -> Option<&'a Token> {
        let tok = self.tokens.get(self.pos);
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    pub(super) fn is_done(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Consumes the symbol if it is next.
    pub(super) fn eat_symbol(&mut self, symbol: &str) -> bool {
        if self.peek().is_some_and(|t| t.is_symbol(symbol)) {
            self.pos += 1;
            return true;
        }
        false
    }

    pub(super) fn expect_symbol(&mut self, symbol: &str, usage: &str) -> DbResult<()> {
        if self.eat_symbol(symbol) {
            Ok(())
        } else {
            Err(DbError::syntax(usage))
        }
    }

    pub(super) fn expect_word(&mut self, keyword: &str, usage: &str) -> DbResult<()> {
        match self.next() {
            Some(t) if t.is_word(keyword) => Ok(()),
            _ => Err(DbError::syntax(usage)),
        }
    }

    /// A table, database, or field name.
    pub(super) fn ident(&mut self, usage: &str) -> DbResult<String> {
        match self.next() {
            Some(Token::Word(w)) => Ok(w.clone()),
            _ => Err(DbError::syntax(usage)),
        }
    }

    /// Fails if any tokens are left over.
    pub(super) fn finish(&self, usage: &str) -> DbResult<()> {
        match self.peek() {
            None => Ok(()),
            Some(t) => Err(DbError::syntax(format!(
                "Unexpected '{}'. {usage}",
                t.describe()
            ))),
        }
    }
}

/// Quoted tokens are strings; unquoted tokens must be integers.
pub(super) fn parse_literal(token: Option<&Token>) -> DbResult<Value> {
    match token {
        Some(Token::Quoted(s)) => Ok(Value::VarChar(s.clone())),
        Some(Token::Word(w)) => w.parse::<i64>().map(Value::Int).map_err(|_| {
            DbError::syntax(format!(
                "Expected a quoted string or an integer but got '{w}'"
            ))
        }),
        Some(t) => Err(DbError::syntax(format!(
            "Expected a value but got '{}'",
            t.describe()
        ))),
        None => Err(DbError::syntax("Expected a value but the query ended")),
    }
}

/// `( <lit> [, <lit> ...] )`
pub(super) fn parse_literal_list(cur: &mut Cursor<'_>, usage: &str) -> DbResult<Vec<Value>> {
    cur.expect_symbol("(", usage)?;
    let mut values: Vec<Value> = Vec::new();
    loop {
        values.push(parse_literal(cur.next())?);
        if cur.eat_symbol(",") {
            continue;
        }
        cur.expect_symbol(")", usage)?;
        return Ok(values);
    }
}

/// `<name> [, <name> ...]`
pub(super) fn parse_name_list(cur: &mut Cursor<'_>, usage: &str) -> DbResult<Vec<String>> {
    let mut names = vec![cur.ident(usage)?];
    while cur.eat_symbol(",") {
        names.push(cur.ident(usage)?);
    }
    Ok(names)
}
