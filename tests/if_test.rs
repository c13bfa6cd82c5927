mod common;
use cbsh::mach::{Config, Runtime};
use common::*;

#[test]
fn test_if_then() {
    let mut r = Basic::default();
    r.enter(r#"IF 1 THEN PRINT "ONE""#);
    assert_eq!(exec(&mut r), "ONE\n");
    r.enter(r#"IF 0 THEN PRINT "ONE""#);
    assert_eq!(exec(&mut r), "");
}

#[test]
fn test_clause_takes_rest_of_line() {
    let mut r = Basic::default();
    r.enter(r#"A = 2: IF A = 2 THEN PRINT "TWO": PRINT "MORE""#);
    assert_eq!(exec(&mut r), "TWO\nMORE\n");
    r.enter(r#"A = 3: IF A = 2 THEN PRINT "TWO": PRINT "MORE""#);
    assert_eq!(exec(&mut r), "");
}

#[test]
fn test_if_errors() {
    let mut r = Basic::default();
    r.enter("IF 1 PRINT");
    assert_eq!(exec(&mut r), "?SYNTAX ERROR; MISSING THEN\n");
    r.enter(r#"IF 1 + 2 + 3 THEN PRINT "X""#);
    assert_eq!(exec(&mut r), "?SYNTAX ERROR; INVALID EXPRESSION\n");
}

#[test]
fn test_nested_if() {
    let mut r = Basic::default();
    r.enter(r#"IF 1 THEN IF 1 THEN PRINT "IN""#);
    assert_eq!(exec(&mut r), "IN\n");
    r.enter(r#"IF 1 THEN IF 0 THEN PRINT "IN""#);
    assert_eq!(exec(&mut r), "");
}

#[test]
fn test_nesting_limit() {
    let mut r = Runtime::with_config(
        Capture::default(),
        Config {
            max_then_depth: 2,
            ..Config::default()
        },
    );
    r.enter(r#"IF 1 THEN IF 1 THEN PRINT "OK""#);
    assert_eq!(exec(&mut r), "OK\n");
    r.enter(r#"IF 1 THEN IF 1 THEN IF 1 THEN PRINT "DEEP""#);
    assert_eq!(exec(&mut r), "?OUT OF MEMORY; IF NESTED TOO DEEPLY\n");
}

#[test]
fn test_default_nesting_limit() {
    let mut r = Basic::default();
    let ok = format!("{}PRINT \"OK\"", "IF 1 THEN ".repeat(16));
    r.enter(&ok);
    assert_eq!(exec(&mut r), "OK\n");
    let deep = format!("{}PRINT \"OK\"", "IF 1 THEN ".repeat(17));
    r.enter(&deep);
    assert_eq!(exec(&mut r), "?OUT OF MEMORY; IF NESTED TOO DEEPLY\n");
}

#[test]
fn test_then_goto() {
    let mut r = Basic::default();
    program(
        &mut r,
        &["10 IF 1 THEN GOTO 30", "20 PRINT 2", "30 PRINT 3", "RUN"],
    );
    assert_eq!(exec(&mut r), "3\n");
}

#[test]
fn test_then_gosub_returns_to_next_line() {
    let mut r = Basic::default();
    program(
        &mut r,
        &[
            "10 IF 1 THEN GOSUB 100",
            r#"20 PRINT "BACK""#,
            "30 END",
            r#"100 PRINT "SUB""#,
            "110 RETURN",
            "RUN",
        ],
    );
    assert_eq!(exec(&mut r), "SUB\nBACK\n");
}
