mod common;
use common::*;

#[test]
fn test_input_numbers() {
    assert_eq!(exec("INPUT N%\nPRINT N% * N%", "5\n"), "25 \n");
    assert_eq!(exec("INPUT A, B\nPRINT A + B", "1.5 2\n"), "3.5 \n");
    assert_eq!(exec("INPUT A B\nPRINT A + B", "1\n2\n"), "3 \n");
}

#[test]
fn test_input_prompt() {
    assert_eq!(exec("INPUT \"AGE?\", A%\nPRINT A%", "42\n"), "AGE? 42 \n");
}

#[test]
fn test_input_string_takes_rest_of_line() {
    let src = "INPUT N$\nPRINT \"HELLO \" + N$";
    assert_eq!(exec(src, "JOHN SMITH\n"), "HELLO JOHN SMITH \n");
}

#[test]
fn test_input_string_word() {
    let src = "INPUT A$, B%\nPRINT A$; B%";
    assert_eq!(exec(src, "X 7\n"), "X 7 \n");
}

#[test]
fn test_inappropriate_value() {
    let src = "A% = 3\nINPUT A%\nPRINT A%";
    assert_eq!(
        exec(src, "ABC\n"),
        "?[ ABC ] INAPPROPRIATE INPUT VALUE\n3 \n"
    );
}

#[test]
fn test_input_past_end() {
    assert_eq!(exec("INPUT A", ""), "?INPUT PAST END\n");
}

#[test]
fn test_malformed_input() {
    assert_eq!(run("INPUT"), "?SYNTAX ERROR; INCOMPLETE INPUT\n");
    assert_eq!(run("INPUT A,"), "?SYNTAX ERROR; EXTRA COMMA\n");
    assert_eq!(run("INPUT 1"), "?SYNTAX ERROR; UNSUITABLE INPUT PARAMETER\n");
}
