mod common;
use cbsh::mach::Val;
use common::*;

#[test]
fn test_literals_exact() {
    let mut r = Basic::default();
    for literal in &["0", "0.1", "123.456", "65536", ".5", "3.14159265358979"] {
        r.enter(&format!("X = {}", literal));
        let expected: f64 = literal.parse().unwrap();
        assert_eq!(r.variable("X"), Some(Val::Number(expected)));
    }
    assert_eq!(exec(&mut r), "");
}

#[test]
fn test_division_by_zero_is_zero() {
    let mut r = Basic::default();
    r.enter("X = 5: X = 6 / 0: PRINT X");
    assert_eq!(exec(&mut r), "?DIVISION BY ZERO\n0\n");
}

#[test]
fn test_negation() {
    let mut r = Basic::default();
    r.enter("X = -2 * -3: PRINT X");
    assert_eq!(exec(&mut r), "6\n");
    r.enter("Y = -X: PRINT Y");
    assert_eq!(exec(&mut r), "-6\n");
}

#[test]
fn test_single_operation_only() {
    let mut r = Basic::default();
    r.enter("X = 1 + 2 * 3");
    assert_eq!(exec(&mut r), "?SYNTAX ERROR; INVALID EXPRESSION\n");
    assert_eq!(r.variable("X"), Some(Val::Number(0.0)));
}

#[test]
fn test_comparison() {
    let mut r = Basic::default();
    r.enter("X = 2 > 1: Y = 2 < 1: PRINT X, Y");
    assert_eq!(exec(&mut r), "-1\t0\n");
}

#[test]
fn test_unset_variables() {
    let mut r = Basic::default();
    r.enter(r#"PRINT Z;"|";Z$;"|""#);
    assert_eq!(exec(&mut r), "0||\n");
}

#[test]
fn test_string_assignment() {
    let mut r = Basic::default();
    r.enter(r#"A$ = "X": B$ = A$: PRINT B$"#);
    assert_eq!(exec(&mut r), "X\n");
    r.enter("B$ = A");
    assert_eq!(exec(&mut r), "?TYPE MISMATCH; A IS NOT A STRING\n");
    r.enter(r#"B$ = "X" + "Y""#);
    assert_eq!(exec(&mut r), "?SYNTAX ERROR; INVALID STRING EXPRESSION\n");
}

#[test]
fn test_names_ignore_case() {
    let mut r = Basic::default();
    r.enter("total = 3: PRINT TOTAL");
    assert_eq!(exec(&mut r), "3\n");
}
