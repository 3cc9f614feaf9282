mod common;
use common::*;

#[test]
fn test_goto_number() {
    assert_eq!(run("GOTO 30\n20 PRINT 2\n30 PRINT 3"), "3 \n");
}

#[test]
fn test_goto_name() {
    let src = "I% = 1\nLOOP: PRINT I%\nI% = I% + 1\nIF I% <= 3 THEN GOTO LOOP";
    assert_eq!(run(src), "1 \n2 \n3 \n");
}

#[test]
fn test_numbers_out_of_order() {
    assert_eq!(run("GOTO 5\n20 END\n5 PRINT \"FIVE\": GOTO 20"), "FIVE \n");
}

#[test]
fn test_label_only_line() {
    assert_eq!(run("GOTO 100\nPRINT 1\n100\nPRINT 2"), "2 \n");
}

#[test]
fn test_jump_abandons_line() {
    assert_eq!(run("GOTO 20: PRINT 1\n20 PRINT 2"), "2 \n");
}

#[test]
fn test_duplicate_label() {
    assert_eq!(run("10 PRINT 1\n10 PRINT 2"), "?DUPLICATE LABEL; 10\n");
    assert_eq!(run("A: PRINT 1\nA: PRINT 2"), "?DUPLICATE LABEL; A\n");
}

#[test]
fn test_undefined_label() {
    assert_eq!(run("PRINT 1\nGOTO X"), "1 \n?UNDEFINED LABEL; X\n");
    assert_eq!(run("GOSUB 99"), "?UNDEFINED LABEL; 99\n");
}

#[test]
fn test_bad_jump() {
    assert_eq!(run("GOTO"), "?SYNTAX ERROR; BAD JUMP\n");
    assert_eq!(run("GOTO \"A\""), "?SYNTAX ERROR; BAD JUMP LABEL\n");
}

#[test]
fn test_gosub_return() {
    let src = "GOSUB SUB: PRINT \"SKIPPED\"\nPRINT \"BACK\"\nEND\nSUB: PRINT \"IN\"\nRETURN";
    assert_eq!(run(src), "IN \nBACK \n");
}

#[test]
fn test_nested_gosub() {
    let src = "GOSUB 10\nEND\n10 PRINT 1: GOSUB 20\nPRINT 3: RETURN\n20 PRINT 2: RETURN";
    assert_eq!(run(src), "1 \n2 \n3 \n");
}

#[test]
fn test_return_without_gosub() {
    assert_eq!(run("RETURN"), "?RETURN WITHOUT GOSUB\n");
}

#[test]
fn test_gosub_overflow() {
    assert_eq!(
        run("10 GOSUB 10"),
        "?OUT OF MEMORY; GOSUB STACK OVERFLOW\n"
    );
}

#[test]
fn test_named_label_colon_follows_name() {
    assert_eq!(run("GOTO DONE\nPRINT 1\nDONE: PRINT 2"), "2 \n");
    assert_eq!(run("DONE : PRINT 2"), "?SYNTAX ERROR; BAD ASSIGNMENT\n");
    assert_eq!(run("DONE!: PRINT 2"), "?SYNTAX ERROR; BAD ASSIGNMENT\n");
}
