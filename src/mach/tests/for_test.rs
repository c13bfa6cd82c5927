use super::*;

#[test]
fn test_counts_up() {
    let mut r = runtime();
    enter_all(&mut r, &["10 FOR I = 1 TO 3", "20 PRINT I", "30 NEXT I", "RUN"]);
    assert_eq!(exec(&mut r), "1\n2\n3\n");
    assert!(r.loops.is_empty());
    assert_eq!(number(&r, "I"), Some(4.0));
}

#[test]
fn test_negative_step() {
    let mut r = runtime();
    enter_all(
        &mut r,
        &["10 FOR I = 5 TO 1 STEP -1", "20 PRINT I", "30 NEXT", "RUN"],
    );
    assert_eq!(exec(&mut r), "5\n4\n3\n2\n1\n");
}

#[test]
fn test_nested_named() {
    let mut r = runtime();
    enter_all(
        &mut r,
        &[
            "10 FOR I = 1 TO 2",
            "20 FOR J = 1 TO 2",
            "30 PRINT I, J",
            "40 NEXT J",
            "50 NEXT I",
            "RUN",
        ],
    );
    assert_eq!(exec(&mut r), "1\t1\n1\t2\n2\t1\n2\t2\n");
}

#[test]
fn test_nested_unnamed_on_one_line() {
    let mut r = runtime();
    r.enter("10 FOR I = 1 TO 2: FOR J = 1 TO 3: NEXT: PRINT I;J: NEXT");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "14\n24\n");
}

#[test]
fn test_reentering_for_replaces_frame() {
    let mut r = runtime();
    enter_all(
        &mut r,
        &[
            "10 FOR I = 1 TO 3",
            "20 N = N + 1",
            "30 IF N < 3 THEN GOTO 10",
            "40 NEXT I",
            "RUN",
        ],
    );
    assert_eq!(exec(&mut r), "");
    assert_eq!(number(&r, "N"), Some(5.0));
    assert!(r.loops.is_empty());
}

#[test]
fn test_for_without_next() {
    let mut r = runtime();
    enter_all(&mut r, &["10 FOR I = 1 TO 3", "20 PRINT I", "RUN"]);
    assert_eq!(exec(&mut r), "?FOR WITHOUT NEXT IN 10\n1\n");
    assert!(r.loops.is_empty());
}

#[test]
fn test_next_without_for() {
    let mut r = runtime();
    enter_all(&mut r, &["10 NEXT I", "RUN"]);
    assert_eq!(exec(&mut r), "?NEXT WITHOUT FOR IN 10\n");
}

#[test]
fn test_compound_bound_rejected() {
    let mut r = runtime();
    enter_all(&mut r, &["10 FOR I = 1 TO N + 1", "20 NEXT", "RUN"]);
    assert_eq!(
        exec(&mut r),
        "?SYNTAX ERROR IN 10; INVALID EXPRESSION\n?NEXT WITHOUT FOR IN 20\n"
    );
}

#[test]
fn test_direct_for_is_illegal() {
    let mut r = runtime();
    r.enter("FOR I = 1 TO 2");
    assert_eq!(exec(&mut r), "?ILLEGAL DIRECT\n");
}
