use super::input::read_text;
use super::{shape, Link};
use crate::error;
use crate::lang::{lex, token::*, Column, Error, Line};
use std::io::BufRead;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Loaded program
///
/// Logical lines in source order plus the labels that point into them.
/// Built once by `load` and only read while running.

#[derive(Debug, Default)]
pub struct Program {
    lines: Vec<Line>,
    link: Link,
}

impl Program {
    pub fn new() -> Program {
        Program::default()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn line(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    pub fn link(&self) -> &Link {
        &self.link
    }

    /// Read a whole program.
    ///
    /// Lines that are not UTF-8 are read as Windows-1251.
    /// A physical line ending in `&` continues on the next one. Blank
    /// logical lines are dropped. Any lexical, label or statement shape
    /// problem fails the load.
    pub fn load<S: BufRead>(mut source: S) -> Result<Program> {
        let mut program = Program::new();
        let mut logical = String::new();
        while let Some(physical) = read_text(&mut source)? {
            let text = physical.trim_end_matches(|c: char| c.is_whitespace() || c.is_control());
            if let Some(head) = text.strip_suffix('&') {
                logical.push_str(head);
                logical.push(' ');
                continue;
            }
            logical.push_str(text);
            program.push(std::mem::take(&mut logical))?;
        }
        if !logical.is_empty() {
            program.push(logical)?;
        }
        tracing::info!(
            lines = program.lines.len(),
            labels = program.link.len(),
            "program loaded"
        );
        Ok(program)
    }

    fn push(&mut self, text: String) -> Result<()> {
        if text.trim().is_empty() {
            return Ok(());
        }
        let index = self.lines.len();
        let source: Rc<str> = text.into();
        let tokens = self
            .tokenize(&source, index)
            .map_err(|e| e.in_line(index, &source))?;
        tracing::trace!(line = index, tokens = tokens.len(), "line loaded");
        self.lines.push(Line::new(source, tokens));
        Ok(())
    }

    fn tokenize(&mut self, source: &str, index: usize) -> Result<Vec<Token>> {
        let mut tokens: Vec<Token> = vec![];
        let mut first: Option<Column> = None;
        for (column, token) in lex(source) {
            match token {
                Token::Invalid => return Err(error!(SyntaxError, ..&column; "INVALID TOKEN")),
                Token::Word(Word::Rem) => break,
                _ => {
                    if first.is_none() {
                        first = Some(column);
                    }
                    tokens.push(token);
                }
            }
        }
        let label_len = match (tokens.as_slice(), first) {
            ([Token::Literal(Literal::Integer(_)), ..], _) => 1,
            // A named label is the bare name with the colon right after it.
            ([Token::Ident(Ident::Real(name)), Token::Colon, ..], Some(column))
                if column.len() == name.len() =>
            {
                2
            }
            _ => 0,
        };
        if label_len > 0 {
            self.link.register(&tokens[0], index)?;
            tokens.drain(..label_len);
        }
        shape::check(&tokens, 0, tokens.len())?;
        Ok(tokens)
    }
}
