use crate::error::{DbError, DbResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Keyword, identifier, or unquoted literal.
    Word(String),
    /// Quoted string with the quotes and escapes removed.
    Quoted(String),
    /// One of `( ) , * = != > < >= <=`.
    Symbol(&'static str),
}

impl Token {
    pub fn is_word(&self, keyword: &str) -> bool {
        matches!(self, Token::Word(w) if w.eq_ignore_ascii_case(keyword))
    }

    pub fn is_symbol(&self, symbol: &str) -> bool {
        matches!(self, Token::Symbol(s) if *s == symbol)
    }

    /// How the token looked in the query, for error messages.
    pub fn describe(&self) -> String {
        match self {
            Token::Word(w) => w.clone(),
            Token::Quoted(s) => format!("'{s}'"),
            Token::Symbol(s) => (*s).to_string(),
        }
    }
}

fn flush(current: &mut String, tokens: &mut Vec<Token>) {
    if !current.is_empty() {
        tokens.push(Token::Word(std::mem::take(current)));
    }
}

fn ends_token(c: char) -> bool {
    c.is_whitespace() || matches!(c, '(' | ')' | ',' | '*' | '=' | '!' | '>' | '<')
}

pub fn tokenize(input: &str) -> DbResult<Vec<Token>> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut current = String::new();
    let mut it = input.chars().peekable();

    while let Some(ch) = it.next() {
        match ch {
            '\'' | '"' => {
                if !current.is_empty() {
                    return Err(DbError::syntax(
                        "Quote cannot start in the middle of a token. Add whitespace before the quote.",
                    ));
                }
                let quote = ch;
                let mut text = String::new();
                let mut closed = false;
                while let Some(c) = it.next() {
                    match c {
                        '\\' => match it.next() {
                            Some(e @ ('\'' | '"' | '\\')) => text.push(e),
                            _ => {
                                return Err(DbError::syntax(
                                    "Invalid escape sequence in quotes. Use \\' or \\\" for a quote or \\\\ for a backslash.",
                                ));
                            }
                        },
                        c if c == quote => {
                            closed = true;
                            break;
                        }
                        c => text.push(c),
                    }
                }
                if !closed {
                    return Err(DbError::syntax(format!("Unclosed quote ({quote}) in input")));
                }
                if it.peek().is_some_and(|c| !ends_token(*c)) {
                    return Err(DbError::syntax(
                        "Characters found immediately after a closing quote. Add whitespace after the quoted string.",
                    ));
                }
                tokens.push(Token::Quoted(text));
            }

            c if c.is_whitespace() => flush(&mut current, &mut tokens),

            '(' | ')' | ',' | '*' | '=' => {
                flush(&mut current, &mut tokens);
                tokens.push(Token::Symbol(match ch {
                    '(' => "(",
                    ')' => ")",
                    ',' => ",",
                    '*' => "*",
                    _ => "=",
                }));
            }

            '!' => {
                flush(&mut current, &mut tokens);
                if it.next_if_eq(&'=').is_none() {
                    return Err(DbError::syntax("Unexpected '!'. Did you mean '!='?"));
                }
                tokens.push(Token::Symbol("!="));
            }

            '>' | '<' => {
                flush(&mut current, &mut tokens);
                let with_eq = it.next_if_eq(&'=').is_some();
                tokens.push(Token::Symbol(match (ch, with_eq) {
                    ('>', true) => ">=",
                    ('>', false) => ">",
                    ('<', true) => "<=",
                    _ => "<",
                }));
            }

            _ => current.push(ch),
        }
    }

    flush(&mut current, &mut tokens);
    Ok(tokens)
}
