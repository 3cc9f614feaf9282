mod common;
use common::*;

#[test]
fn test_print() {
    assert_eq!(run("PRINT"), "\n");
    assert_eq!(run("PRINT \"A\"; 1; 2.5"), "A 1 2.5 \n");
    assert_eq!(run("PRINT \"NO NEWLINE\";\nPRINT 1"), "NO NEWLINE \n1 \n");
    assert_eq!(run("? 42"), "42 \n");
    assert_eq!(run("PRINT 1;; 2"), "1 ?SYNTAX ERROR; EMPTY PRINT EXPRESSION\n");
}

#[test]
fn test_let() {
    assert_eq!(run("LET A = 2: PRINT A"), "2 \n");
    assert_eq!(run("LET"), "?SYNTAX ERROR; EMPTY LET\n");
    assert_eq!(run("A ="), "?SYNTAX ERROR; BAD ASSIGNMENT\n");
}

#[test]
fn test_uninitialized() {
    assert_eq!(run("PRINT A; A%; A$ + \"|\""), "0 0 | \n");
}

#[test]
fn test_separator() {
    assert_eq!(run("A = 1 : B = 2 : PRINT A + B"), "3 \n");
}

#[test]
fn test_rem() {
    assert_eq!(run("PRINT 1 ' COMMENT\nREM PRINT 2\nPRINT 3: REM"), "1 \n3 \n");
}

#[test]
fn test_continuation() {
    assert_eq!(run("PRINT \"A\" + &\n\"B\""), "AB \n");
    assert_eq!(run("PRINT 1 + &\n2 + &\n3"), "6 \n");
}

#[test]
fn test_end() {
    assert_eq!(run("PRINT 1\nEND\nPRINT 2"), "1 \n");
}

#[test]
fn test_stop() {
    assert_eq!(run("PRINT 1\nSTOP\nPRINT 2"), "1 \n?BREAK\n");
}

#[test]
fn test_unexpected_statement() {
    assert_eq!(run("PRINT 1\nTHEN"), "1 \n?SYNTAX ERROR; UNEXPECTED THEN\n");
}

#[test]
fn test_invalid_token_fails_load() {
    assert_eq!(run("PRINT 1\nPRINT @"), "?SYNTAX ERROR (6..7); INVALID TOKEN\n");
}
