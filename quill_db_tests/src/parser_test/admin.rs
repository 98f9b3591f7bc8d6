use super::*;

#[test]
fn parse_use() {
    assert_eq!(
        parse("use shop").unwrap(),
        Action::Use {
            database: "shop".to_string()
        }
    );
}

#[test]
fn parse_show() {
    assert_eq!(
        parse("SHOW DATABASES").unwrap(),
        Action::Show {
            kind: ShowKind::Databases
        }
    );
    assert_eq!(
        parse("show tables").unwrap(),
        Action::Show {
            kind: ShowKind::Tables
        }
    );
    syntax_err("show columns");
}

#[test]
fn parse_drop() {
    assert_eq!(
        parse("drop database shop").unwrap(),
        Action::Drop {
            kind: DropKind::Database,
            name: "shop".to_string()
        }
    );
    assert_eq!(
        parse("DROP TABLE users").unwrap(),
        Action::Drop {
            kind: DropKind::Table,
            name: "users".to_string()
        }
    );
    syntax_err("drop index users");
    syntax_err("drop table");
}

#[test]
fn parse_exit_and_quit() {
    assert_eq!(parse("exit").unwrap(), Action::Exit);
    assert_eq!(parse("QUIT").unwrap(), Action::Exit);
    syntax_err("exit now");
}

#[test]
fn admin_statements_reject_where() {
    syntax_err("use shop where a = 1");
    syntax_err("show tables where a = 1");
    syntax_err("drop table t where a = 1");
    syntax_err("exit where a = 1");
}

#[test]
fn empty_and_incomplete_input() {
    assert!(syntax_err("").contains("Empty"));
    assert!(syntax_err("   ").contains("Empty"));
    assert!(syntax_err("select").contains("Incomplete"));
    assert!(syntax_err("use").contains("Incomplete"));
}

#[test]
fn unknown_command() {
    let msg = syntax_err("create table t");
    assert!(msg.contains("Unknown command 'create'"));
}
