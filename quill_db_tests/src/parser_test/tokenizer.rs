use super::*;
use quill_db_core::parser::parser::{Token, tokenize};

#[test]
fn tokenize_splits_symbols() {
    let tokens = tokenize("t(a,b)>=1").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::Word("t".to_string()),
            Token::Symbol("("),
            Token::Word("a".to_string()),
            Token::Symbol(","),
            Token::Word("b".to_string()),
            Token::Symbol(")"),
            Token::Symbol(">="),
            Token::Word("1".to_string()),
        ]
    );
}

#[test]
fn tokenize_quoted_with_escapes() {
    let tokens = tokenize(r#"'it\'s' "say \"hi\"" 'back\\slash'"#).unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::Quoted("it's".to_string()),
            Token::Quoted("say \"hi\"".to_string()),
            Token::Quoted("back\\slash".to_string()),
        ]
    );
}

#[test]
fn tokenize_empty_quotes() {
    assert_eq!(tokenize("''").unwrap(), vec![Token::Quoted(String::new())]);
}

#[test]
fn quoted_keyword_stays_a_string() {
    let action = parse("insert into t(a) values('select')").unwrap();
    match action {
        Action::Insert { data: d, .. } => assert_eq!(d.get("a"), Some(&Value::from("select"))),
        _ => panic!("Expected Insert action"),
    }
}

#[test]
fn tokenize_errors() {
    assert!(matches!(tokenize("'open"), Err(DbError::Syntax(_))));
    assert!(matches!(tokenize("ab'c'"), Err(DbError::Syntax(_))));
    assert!(matches!(tokenize("'a'b"), Err(DbError::Syntax(_))));
    assert!(matches!(tokenize(r"'bad\n'"), Err(DbError::Syntax(_))));
    assert!(matches!(tokenize("a ! b"), Err(DbError::Syntax(_))));
}
