use super::Link;
use crate::error;
use crate::lang::{token::*, Error};
use std::ops::Range;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// Index of the `:` ending the statement that starts at `begin`, or `end`.
pub fn statement_end(tokens: &[Token], begin: usize, end: usize) -> usize {
    tokens[begin..end]
        .iter()
        .position(|t| *t == Token::Colon)
        .map_or(end, |p| begin + p)
}

/// The pieces of an IF statement.
#[derive(Debug, PartialEq)]
pub struct IfParts {
    pub condition: Range<usize>,
    pub then: Range<usize>,
    pub otherwise: Option<Range<usize>>,
}

/// Split the IF whose keyword sits at `begin`. The statement runs to `end`.
///
/// The condition stops at the first THEN, GOTO or GOSUB. A GOTO or GOSUB
/// stays part of the branch, a THEN does not. An ELSE belongs to this IF
/// unless a nested IF to its left claims it first.
pub fn if_parts(tokens: &[Token], begin: usize, end: usize) -> Result<IfParts> {
    let keyword = match tokens[begin + 1..end].iter().position(|t| {
        t.is_word(Word::Then) || t.is_word(Word::Goto) || t.is_word(Word::Gosub)
    }) {
        Some(p) => begin + 1 + p,
        None => return Err(error!(SyntaxError; "IF WITHOUT THEN")),
    };
    let mut unmatched: Vec<usize> = vec![];
    for index in (keyword + 1..end).rev() {
        if tokens[index].is_word(Word::Else) {
            unmatched.push(index);
        } else if tokens[index].is_word(Word::If) {
            unmatched.pop();
        }
    }
    if unmatched.len() > 1 {
        return Err(error!(SyntaxError; "TOO MANY ELSE"));
    }
    let else_index = unmatched.pop();
    let then_begin = if tokens[keyword].is_word(Word::Then) {
        keyword + 1
    } else {
        keyword
    };
    if else_index == Some(then_begin) {
        return Err(error!(SyntaxError; "MISPLACED ELSE"));
    }
    Ok(IfParts {
        condition: begin + 1..keyword,
        then: then_begin..else_index.unwrap_or(end),
        otherwise: else_index.map(|e| e + 1..end),
    })
}

/// A THEN or ELSE branch that is a bare line number is an implied GOTO.
pub fn implied_goto(tokens: &[Token]) -> Option<&Token> {
    match tokens {
        [label @ Token::Literal(Literal::Integer(_))] => Some(label),
        _ => None,
    }
}

/// Label key of a GOTO or GOSUB operand list.
pub fn jump_key(operands: &[Token]) -> Result<String> {
    match operands {
        [label] => match Link::key_for(label) {
            Some(key) => Ok(key),
            None => Err(error!(SyntaxError; "BAD JUMP LABEL")),
        },
        _ => Err(error!(SyntaxError; "BAD JUMP")),
    }
}

#[derive(Debug, PartialEq)]
pub enum InputItem<'a> {
    Prompt(&'a Rc<str>),
    Target(&'a Ident),
}

/// The prompts and targets of an INPUT statement, keyword excluded.
/// Commas between items are optional; a comma with nothing after it is not.
pub fn input_items(operands: &[Token]) -> Result<Vec<InputItem>> {
    let mut items = vec![];
    let mut index = 0;
    while index < operands.len() {
        items.push(match &operands[index] {
            Token::Literal(Literal::String(s)) => InputItem::Prompt(s),
            Token::Ident(ident) => InputItem::Target(ident),
            _ => return Err(error!(SyntaxError; "UNSUITABLE INPUT PARAMETER")),
        });
        index += 1;
        if let Some(Token::Comma) = operands.get(index) {
            index += 1;
            if index == operands.len() {
                return Err(error!(SyntaxError; "EXTRA COMMA"));
            }
        }
    }
    if items.is_empty() {
        return Err(error!(SyntaxError; "INCOMPLETE INPUT"));
    }
    Ok(items)
}

/// Check the shape of every statement in `begin..end` without evaluating
/// anything. Unknown statements are left for the dispatcher to reject.
pub fn check(tokens: &[Token], begin: usize, end: usize) -> Result<()> {
    let mut pos = begin;
    while pos < end {
        let stmt_end = match &tokens[pos] {
            Token::Colon => {
                pos += 1;
                continue;
            }
            Token::Word(Word::If) => end,
            _ => statement_end(tokens, pos, end),
        };
        check_statement(tokens, pos, stmt_end)?;
        pos = stmt_end;
    }
    Ok(())
}

fn check_statement(tokens: &[Token], begin: usize, end: usize) -> Result<()> {
    match &tokens[begin] {
        Token::Ident(_) => {
            if end - begin < 3 || tokens[begin + 1] != Token::Operator(Operator::Equal) {
                return Err(error!(SyntaxError; "BAD ASSIGNMENT"));
            }
        }
        Token::Word(Word::Let) => {
            if begin + 1 == end {
                return Err(error!(SyntaxError; "EMPTY LET"));
            }
            check_statement(tokens, begin + 1, end)?;
        }
        Token::Word(Word::Goto) | Token::Word(Word::Gosub) => {
            jump_key(&tokens[begin + 1..end])?;
        }
        Token::Word(Word::Input) => {
            input_items(&tokens[begin + 1..end])?;
        }
        Token::Word(Word::If) => {
            let parts = if_parts(tokens, begin, end)?;
            check_branch(tokens, parts.then)?;
            if let Some(otherwise) = parts.otherwise {
                check_branch(tokens, otherwise)?;
            }
        }
        _ => {}
    }
    Ok(())
}

fn check_branch(tokens: &[Token], range: Range<usize>) -> Result<()> {
    if implied_goto(&tokens[range.clone()]).is_some() {
        return Ok(());
    }
    check(tokens, range.start, range.end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::lex;

    fn tokens(s: &str) -> Vec<Token> {
        lex(s).map(|(_, t)| t).collect()
    }

    #[test]
    fn test_statement_end() {
        let t = tokens("A=1:B=2");
        assert_eq!(statement_end(&t, 0, t.len()), 3);
        assert_eq!(statement_end(&t, 4, t.len()), 7);
    }

    #[test]
    fn test_if_parts_simple() {
        let t = tokens("IF A>0 THEN PRINT 1 ELSE PRINT 2");
        let parts = if_parts(&t, 0, t.len()).unwrap();
        assert_eq!(parts.condition, 1..4);
        assert_eq!(parts.then, 5..7);
        assert_eq!(parts.otherwise, Some(8..10));
    }

    #[test]
    fn test_if_parts_nested() {
        let t = tokens("IF A>0 THEN IF B>0 THEN PRINT 1 ELSE PRINT 2 ELSE PRINT 3");
        let parts = if_parts(&t, 0, t.len()).unwrap();
        assert_eq!(parts.then, 5..15);
        assert_eq!(parts.otherwise, Some(16..18));
        let inner = if_parts(&t, 5, 15).unwrap();
        assert_eq!(inner.then, 10..12);
        assert_eq!(inner.otherwise, Some(13..15));
    }

    #[test]
    fn test_if_parts_nested_else_belongs_inside() {
        let t = tokens("IF A THEN IF B THEN 10 ELSE 20");
        let parts = if_parts(&t, 0, t.len()).unwrap();
        assert_eq!(parts.otherwise, None);
        assert_eq!(parts.then, 3..t.len());
    }

    #[test]
    fn test_if_parts_goto() {
        let t = tokens("IF A GOTO 10");
        let parts = if_parts(&t, 0, t.len()).unwrap();
        assert_eq!(parts.condition, 1..2);
        assert_eq!(parts.then, 2..4);
    }

    #[test]
    fn test_if_errors() {
        let t = tokens("IF A PRINT 1");
        assert!(if_parts(&t, 0, t.len()).is_err());
        let t = tokens("IF A THEN 1 ELSE 2 ELSE 3");
        assert!(if_parts(&t, 0, t.len()).is_err());
        let t = tokens("IF A THEN ELSE PRINT 1");
        assert_eq!(
            if_parts(&t, 0, t.len()).unwrap_err().to_string(),
            "SYNTAX ERROR; MISPLACED ELSE"
        );
    }

    #[test]
    fn test_jump_key() {
        assert_eq!(jump_key(&tokens("10")).unwrap(), "10");
        assert_eq!(jump_key(&tokens("loop")).unwrap(), "LOOP");
        assert!(jump_key(&tokens("")).is_err());
        assert!(jump_key(&tokens("10 20")).is_err());
        assert!(jump_key(&tokens("A$")).is_err());
    }

    #[test]
    fn test_input_items() {
        let t = tokens(r#""AGE?", A%, N$"#);
        let items = input_items(&t).unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0], InputItem::Prompt(&"AGE?".into()));
        assert!(input_items(&tokens("")).is_err());
        assert!(input_items(&tokens("A,")).is_err());
        assert!(input_items(&tokens(",A")).is_err());
        assert!(input_items(&tokens("A,,B")).is_err());
        assert!(input_items(&tokens("1")).is_err());
        assert_eq!(input_items(&tokens("A B")).unwrap().len(), 2);
    }

    #[test]
    fn test_check() {
        let ok = |s: &str| {
            let t = tokens(s);
            check(&t, 0, t.len()).is_ok()
        };
        assert!(ok("A=1:PRINT A::GOTO 10"));
        assert!(ok("IF A>1 THEN 100 ELSE B=2:GOSUB X"));
        assert!(ok("LET A$=\"X\""));
        assert!(ok("FOR"));
        assert!(!ok("A"));
        assert!(!ok("A+1"));
        assert!(!ok("LET"));
        assert!(!ok("GOTO"));
        assert!(!ok("IF A THEN B"));
        assert!(!ok("IF A THEN 1 ELSE GOTO 1 2"));
        assert!(!ok("A=1:INPUT"));
    }
}
