mod common;
use common::*;

#[test]
fn test_abs_sgn() {
    assert_eq!(run("PRINT ABS(-3); ABS(-0.5)"), "3 0.5 \n");
    assert_eq!(run("PRINT SGN(-7); SGN(0); SGN(2.5)"), "-1 0 1 \n");
}

#[test]
fn test_int_fix() {
    assert_eq!(run("PRINT INT(-2.5); INT(2.5)"), "-3 2 \n");
    assert_eq!(run("PRINT FIX(-2.5); FIX(2.5)"), "-3 2 \n");
    assert_eq!(run("A% = INT(7.9)\nPRINT A%"), "7 \n");
}

#[test]
fn test_exp_is_binary_exponent() {
    assert_eq!(run("PRINT EXP(8); EXP(1); EXP(0.5); EXP(0)"), "4 1 0 0 \n");
}

#[test]
fn test_math() {
    assert_eq!(run("PRINT SQR(16); SQR 16 * 2"), "4 8 \n");
    assert_eq!(run("PRINT SIN(0); COS(0); TAN(0); LOG(1)"), "0 1 0 0 \n");
    assert_eq!(run("PRINT ATN(1) * 4"), "3.14159 \n");
}

#[test]
fn test_function_binds_looser_than_caret() {
    assert_eq!(run("PRINT SQR 3 ^ 2"), "3 \n");
}

#[test]
fn test_val() {
    assert_eq!(run("PRINT VAL(\" 12.5 METERS\")"), "12.5 \n");
    assert_eq!(run("PRINT VAL(\"-3\") + 1"), "-2 \n");
    assert_eq!(run("PRINT VAL(\"NONE\")"), "0 \n");
}

#[test]
fn test_rnd() {
    let out = run("R% = RND(5)\nIF R% >= 0 AND R% <= 5 THEN PRINT \"OK\"");
    assert_eq!(out, "OK \n");
    let out = run("X = RND(1.0)\nIF X >= 0 AND X < 1 THEN PRINT \"OK\"");
    assert_eq!(out, "OK \n");
    assert_eq!(run("PRINT RND(-1)"), "?ILLEGAL FUNCTION CALL; RND OF NEGATIVE\n");
}

#[test]
fn test_rnd_seeded() {
    let src = "PRINT RND(1000000); RND(1000000); RND(1.0)";
    assert_eq!(run(src), run(src));
}

#[test]
fn test_function_type_mismatch() {
    assert_eq!(run("PRINT SQR(\"4\")"), "?TYPE MISMATCH\n");
    assert_eq!(run("PRINT VAL(4)"), "?TYPE MISMATCH\n");
}

#[cfg(unix)]
#[test]
fn test_shell() {
    assert_eq!(run("PRINT SHELL(\"exit 3\")"), "3 \n");
}
