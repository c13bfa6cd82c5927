use super::*;

#[test]
fn test_scanned_before_run() {
    let mut r = runtime();
    enter_all(
        &mut r,
        &["10 DATA 1, 2, 3", "20 READ A: READ B", "30 PRINT A, B", "RUN"],
    );
    assert_eq!(exec(&mut r), "1\t2\n");
    assert!(!r.data_dirty);
    assert_eq!(r.data.remaining(), 1);
    r.enter("READ C");
    assert_eq!(number(&r, "C"), Some(3.0));
    r.enter("READ D");
    assert_eq!(exec(&mut r), "?OUT OF DATA\n");
    assert_eq!(number(&r, "D"), Some(0.0));
}

#[test]
fn test_rescanned_after_edit() {
    let mut r = runtime();
    enter_all(&mut r, &["10 DATA 1", "20 READ A", "RUN"]);
    assert_eq!(r.data.len(), 1);
    r.enter("30 DATA 2");
    assert!(r.data_dirty);
    r.enter("RUN");
    assert_eq!(r.data.len(), 2);
    assert_eq!(exec(&mut r), "");
}

#[test]
fn test_executing_data_does_not_append() {
    let mut r = runtime();
    enter_all(
        &mut r,
        &[
            "10 DATA 7",
            "20 N = N + 1",
            "30 IF N < 3 THEN GOTO 10",
            "40 READ A: READ B",
            "RUN",
        ],
    );
    assert_eq!(exec(&mut r), "?OUT OF DATA IN 40\n");
    assert_eq!(number(&r, "A"), Some(7.0));
    assert_eq!(r.data.len(), 1);
}

#[test]
fn test_string_data_aborts_line() {
    let mut r = runtime();
    enter_all(
        &mut r,
        &[
            "10 DATA 1, \"X\", 2",
            "20 DATA 5",
            "30 READ A, B",
            "40 PRINT A, B",
            "RUN",
        ],
    );
    assert_eq!(
        exec(&mut r),
        "?TYPE MISMATCH IN 10; STRING DATA NOT SUPPORTED\n1\t5\n"
    );
}

#[test]
fn test_pool_capacity() {
    let mut r = runtime_with(Config {
        max_data_values: 2,
        ..Config::default()
    });
    enter_all(&mut r, &["10 DATA 1, 2, 3", "20 DATA 4", "RUN"]);
    assert_eq!(
        exec(&mut r),
        "?OUT OF MEMORY IN 10; TOO MANY DATA VALUES\n"
    );
    assert_eq!(r.data.len(), 2);
}
