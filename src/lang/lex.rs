use super::{token::*, Column};
use std::rc::Rc;

/// Tokenize a logical line. Each item carries the column it came from.
pub fn lex(s: &str) -> BasicLexer {
    BasicLexer { text: s, cursor: 0 }
}

fn is_basic_whitespace(c: u8) -> bool {
    c == b' ' || c == b'\t'
}

fn is_basic_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

fn is_basic_alphabetic(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}

fn is_basic_alphanumeric(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_'
}

fn is_basic_control(c: u8) -> bool {
    c < b' ' || c == 0x7f
}

enum State {
    Initial,
    String,
    Integer,
    Real,
    Ident,
}

/// Scan one token of `s` starting at byte `begin`.
///
/// Returns the token and the cursor to resume from, or `None` once only
/// whitespace remains. An invalid character yields `Token::Invalid` with
/// the cursor at `begin + 1` so repeated scanning always makes progress.
/// Reserved words and untyped identifiers leave the cursor on the character
/// that ended them.
pub fn scan(s: &str, begin: usize) -> Option<(Token, usize)> {
    let bytes = s.as_bytes();
    let end = bytes.len();
    let mut state = State::Initial;
    let mut start = begin;
    let mut current = begin;
    loop {
        if let State::Initial = state {
            if current >= end {
                return None;
            }
        }
        let ch = bytes.get(current).copied().unwrap_or(0);
        let next = current + 1;
        match state {
            State::Initial => {
                let token = match ch {
                    b' ' | b'\t' => {
                        current = next;
                        continue;
                    }
                    b':' => Token::Colon,
                    b',' => Token::Comma,
                    b'(' => Token::LParen,
                    b')' => Token::RParen,
                    b';' => Token::Semicolon,
                    b'+' => Token::Operator(Operator::Plus),
                    b'-' => Token::Operator(Operator::Minus),
                    b'*' => Token::Operator(Operator::Multiply),
                    b'/' => Token::Operator(Operator::Divide),
                    b'\\' => Token::Operator(Operator::DivideInt),
                    b'^' => Token::Operator(Operator::Caret),
                    b'=' => Token::Operator(Operator::Equal),
                    b'>' => match bytes.get(next) {
                        Some(b'=') => return Some((Token::Operator(Operator::GreaterEqual), next + 1)),
                        _ => Token::Operator(Operator::Greater),
                    },
                    b'<' => match bytes.get(next) {
                        Some(b'>') => return Some((Token::Operator(Operator::NotEqual), next + 1)),
                        Some(b'=') => return Some((Token::Operator(Operator::LessEqual), next + 1)),
                        _ => Token::Operator(Operator::Less),
                    },
                    b'?' => Token::Word(Word::Print),
                    b'\'' => Token::Word(Word::Rem),
                    b'"' => {
                        start = next;
                        state = State::String;
                        current = next;
                        continue;
                    }
                    b'.' => {
                        start = current;
                        state = State::Real;
                        current = next;
                        continue;
                    }
                    c if is_basic_alphabetic(c) => {
                        start = current;
                        state = State::Ident;
                        current = next;
                        continue;
                    }
                    c if is_basic_digit(c) => {
                        start = current;
                        state = State::Integer;
                        current = next;
                        continue;
                    }
                    _ => return Some((Token::Invalid, begin + 1)),
                };
                return Some((token, next));
            }
            State::String => {
                if is_basic_control(ch) {
                    return Some((Token::Invalid, begin + 1));
                }
                if ch == b'"' {
                    let text: Rc<str> = s[start..current].into();
                    return Some((Token::Literal(Literal::String(text)), next));
                }
            }
            State::Ident => {
                if !is_basic_alphanumeric(ch) {
                    let id = &s[start..current];
                    if let Some(token) = Token::from_string(id) {
                        return Some((token, current));
                    }
                    let name: Rc<str> = id.to_ascii_uppercase().into();
                    return Some(match ch {
                        b'!' | b'#' | b' ' | b'\t' => (Token::Ident(Ident::Real(name)), next),
                        b'%' => (Token::Ident(Ident::Integer(name)), next),
                        b'$' => (Token::Ident(Ident::String(name)), next),
                        _ => (Token::Ident(Ident::Real(name)), current),
                    });
                }
            }
            State::Integer => {
                if ch == b'.' {
                    state = State::Real;
                } else if !is_basic_digit(ch) {
                    let token = match s[start..current].parse::<i64>() {
                        Ok(n) => Token::Literal(Literal::Integer(n)),
                        Err(_) => Token::Invalid,
                    };
                    return Some((token, current));
                }
            }
            State::Real => {
                if !is_basic_digit(ch) {
                    let token = match s[start..current].parse::<f64>() {
                        Ok(n) => Token::Literal(Literal::Real(n)),
                        Err(_) => Token::Invalid,
                    };
                    return Some((token, current));
                }
            }
        }
        current = next;
    }
}

pub struct BasicLexer<'a> {
    text: &'a str,
    cursor: usize,
}

impl<'a> BasicLexer<'a> {
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl<'a> Iterator for BasicLexer<'a> {
    type Item = (Column, Token);

    fn next(&mut self) -> Option<Self::Item> {
        let begin = self.cursor;
        let (token, cursor) = scan(self.text, begin)?;
        let start = begin
            + self.text.as_bytes()[begin..]
                .iter()
                .take_while(|c| is_basic_whitespace(**c))
                .count();
        self.cursor = cursor;
        let column = if cursor > start {
            start..cursor
        } else {
            start..start + 1
        };
        Some((column, token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(s: &str) -> Vec<Token> {
        lex(s).map(|(_, t)| t).collect()
    }

    fn real(s: &str) -> Token {
        Token::Ident(Ident::Real(s.into()))
    }

    #[test]
    fn test_longest_operator_match() {
        assert_eq!(
            tokens("<><=>=< >"),
            vec![
                Token::Operator(Operator::NotEqual),
                Token::Operator(Operator::LessEqual),
                Token::Operator(Operator::GreaterEqual),
                Token::Operator(Operator::Less),
                Token::Operator(Operator::Greater),
            ]
        );
    }

    #[test]
    fn test_identifier_suffixes() {
        assert_eq!(
            tokens("a b! c# d% e$ f_1"),
            vec![
                real("A"),
                real("B"),
                real("C"),
                Token::Ident(Ident::Integer("D".into())),
                Token::Ident(Ident::String("E".into())),
                real("F_1"),
            ]
        );
    }

    #[test]
    fn test_untyped_identifier_leaves_terminator() {
        assert_eq!(scan("loop:", 0), Some((real("LOOP"), 4)));
        assert_eq!(scan("x=1", 0), Some((real("X"), 1)));
        assert_eq!(scan("x", 0), Some((real("X"), 1)));
    }

    #[test]
    fn test_reserved_word_leaves_terminator() {
        assert_eq!(scan("print x", 0), Some((Token::Word(Word::Print), 5)));
        assert_eq!(scan("goto10", 0), Some((real("GOTO10"), 6)));
    }

    #[test]
    fn test_numbers() {
        assert_eq!(
            tokens("12 3.25 .5 7."),
            vec![
                Token::Literal(Literal::Integer(12)),
                Token::Literal(Literal::Real(3.25)),
                Token::Literal(Literal::Real(0.5)),
                Token::Literal(Literal::Real(7.0)),
            ]
        );
        assert_eq!(tokens("1e5")[1], real("E5"));
        assert_eq!(tokens("99999999999999999999"), vec![Token::Invalid]);
    }

    #[test]
    fn test_strings() {
        assert_eq!(
            tokens(r#""Hello, World" """#),
            vec![
                Token::Literal(Literal::String("Hello, World".into())),
                Token::Literal(Literal::String("".into())),
            ]
        );
    }

    #[test]
    fn test_unterminated_string() {
        assert_eq!(scan("  \"oops", 0), Some((Token::Invalid, 1)));
    }

    #[test]
    fn test_invalid_makes_progress() {
        assert_eq!(scan("@", 0), Some((Token::Invalid, 1)));
        let mut lexer = lex("a @ b");
        assert_eq!(lexer.next(), Some((0..2, real("A"))));
        assert_eq!(lexer.next(), Some((2..3, Token::Invalid)));
        assert_eq!(lexer.cursor(), 3);
    }

    #[test]
    fn test_aliases() {
        assert_eq!(
            tokens("?'"),
            vec![Token::Word(Word::Print), Token::Word(Word::Rem)]
        );
    }

    #[test]
    fn test_end() {
        assert_eq!(scan("   \t", 0), None);
        assert_eq!(scan("", 0), None);
    }
}
