use super::token::*;
use std::rc::Rc;

/// One logical line: its source text, kept for diagnostics, and the
/// tokens that remain once labels and comments are removed.
#[derive(Debug, PartialEq, Clone)]
pub struct Line {
    source: Rc<str>,
    tokens: Vec<Token>,
}

impl Line {
    pub fn new(source: Rc<str>, tokens: Vec<Token>) -> Line {
        Line { source, tokens }
    }

    pub fn source(&self) -> &Rc<str> {
        &self.source
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s: Vec<String> = self.tokens.iter().map(|t| t.to_string()).collect();
        write!(f, "{}", s.join(" "))
    }
}
