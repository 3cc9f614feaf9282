use super::shape::{self, InputItem};
use super::{evaluate, InputStream, Program, Stack, Type, Val, Var};
use crate::error;
use crate::lang::{token::*, Error};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{BufRead, Write};
use std::ops::Range;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

type Result<T> = std::result::Result<T, Error>;

/// Where the program counter goes after a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Next,
    Goto(usize),
    Halt,
}

/// ## Interpreter
///
/// Owns the loaded program and every piece of run state: the variable
/// stores, the GOSUB stack and the random generator. Statements read
/// from `input` and write to `output`.
///
/// ```
/// use basic::mach::Runtime;
/// let mut runtime = Runtime::new(&b""[..], Vec::new());
/// runtime.load(&b"A% = 6 * 7\nPRINT \"ANSWER\"; A%"[..]).unwrap();
/// runtime.run().unwrap();
/// assert_eq!(runtime.output(), b"ANSWER 42 \n");
/// ```
pub struct Runtime<R, W> {
    program: Rc<Program>,
    vars: Var,
    calls: Stack<usize>,
    rng: StdRng,
    seed: Option<u64>,
    input: InputStream<R>,
    output: W,
    interrupted: Arc<AtomicBool>,
}

impl<R: BufRead, W: Write> Runtime<R, W> {
    pub fn new(input: R, output: W) -> Runtime<R, W> {
        Runtime {
            program: Rc::new(Program::new()),
            vars: Var::new(),
            calls: Stack::new("GOSUB STACK OVERFLOW"),
            rng: StdRng::seed_from_u64(0),
            seed: None,
            input: InputStream::new(input),
            output,
            interrupted: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Use a fixed seed instead of the clock for every following run.
    pub fn set_seed(&mut self, seed: u64) {
        self.seed = Some(seed);
    }

    /// Setting the flag stops a run with BREAK at the next line.
    pub fn interrupt_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.interrupted)
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Replace the program. A failed load leaves an empty program.
    pub fn load<S: BufRead>(&mut self, source: S) -> Result<()> {
        self.program = Rc::new(Program::new());
        self.program = Rc::new(Program::load(source)?);
        Ok(())
    }

    /// Run from the first line until END, the last line, or an error.
    pub fn run(&mut self) -> Result<()> {
        self.vars.clear();
        self.calls.clear();
        let seed = match self.seed {
            Some(seed) => seed,
            None => Utc::now().timestamp() as u64,
        };
        self.rng = StdRng::seed_from_u64(seed);
        self.interrupted.store(false, Ordering::SeqCst);
        tracing::info!(seed, lines = self.program.len(), "run started");

        let program = Rc::clone(&self.program);
        let mut pc = 0;
        let result = loop {
            let line = match program.line(pc) {
                Some(line) => line,
                None => break Ok(()),
            };
            if self.interrupted.swap(false, Ordering::SeqCst) {
                break Err(error!(Break).in_line(pc, line.source()));
            }
            tracing::trace!(line = pc, "{}", line);
            match self.execute(line.tokens(), pc, 0, line.len()) {
                Ok(Flow::Next) => pc += 1,
                Ok(Flow::Goto(target)) => pc = target,
                Ok(Flow::Halt) => break Ok(()),
                Err(e) => break Err(e.in_line(pc, line.source())),
            }
        };
        self.output.flush()?;
        match &result {
            Ok(()) => tracing::info!("run finished"),
            Err(e) => tracing::info!(error = %e, "run failed"),
        }
        result
    }

    /// Run the `:` separated statements in `begin..end` of one line.
    fn execute(&mut self, tokens: &[Token], index: usize, begin: usize, end: usize) -> Result<Flow> {
        let mut pos = begin;
        while pos < end {
            let stmt_end = match &tokens[pos] {
                Token::Colon => {
                    pos += 1;
                    continue;
                }
                Token::Word(Word::If) => end,
                _ => shape::statement_end(tokens, pos, end),
            };
            match self.statement(tokens, index, pos, stmt_end)? {
                Flow::Next => pos = stmt_end,
                flow => return Ok(flow),
            }
        }
        Ok(Flow::Next)
    }

    fn statement(&mut self, tokens: &[Token], index: usize, begin: usize, end: usize) -> Result<Flow> {
        let operands = &tokens[begin + 1..end];
        match &tokens[begin] {
            Token::Ident(ident) => self.r#let(ident, operands),
            Token::Word(word) => match word {
                Word::Let => {
                    if operands.is_empty() {
                        return Err(error!(SyntaxError; "EMPTY LET"));
                    }
                    self.statement(tokens, index, begin + 1, end)
                }
                Word::Print => self.r#print(operands),
                Word::Input => self.r#input(operands),
                Word::Goto => self.r#goto(operands),
                Word::Gosub => self.r#gosub(index, operands),
                Word::Return => self.r#return(operands),
                Word::End => no_operands(operands).map(|_| Flow::Halt),
                Word::Stop => no_operands(operands).and(Err(error!(Break))),
                Word::If => self.r#if(tokens, index, begin, end),
                _ => Err(error!(SyntaxError; format!("UNEXPECTED {}", word))),
            },
            token => Err(error!(SyntaxError; format!("UNEXPECTED {}", token))),
        }
    }

    fn evaluate(&mut self, tokens: &[Token], target: Type) -> Result<Val> {
        evaluate(tokens, &self.vars, &mut self.rng, &mut self.output, target)
    }

    fn r#let(&mut self, ident: &Ident, operands: &[Token]) -> Result<Flow> {
        let expression = match operands {
            [Token::Operator(Operator::Equal), expression @ ..] if !expression.is_empty() => {
                expression
            }
            _ => return Err(error!(SyntaxError; "BAD ASSIGNMENT")),
        };
        let value = self.evaluate(expression, ident.kind())?;
        self.vars.store(ident, value)?;
        Ok(Flow::Next)
    }

    fn r#print(&mut self, operands: &[Token]) -> Result<Flow> {
        if !operands.is_empty() {
            let scratch = Ident::String(Var::SCRATCH.into());
            let parts: Vec<&[Token]> = operands.split(|t| *t == Token::Semicolon).collect();
            for (i, part) in parts.iter().enumerate() {
                if part.is_empty() {
                    if i > 0 && i + 1 == parts.len() {
                        break;
                    }
                    return Err(error!(SyntaxError; "EMPTY PRINT EXPRESSION"));
                }
                let value = self.evaluate(part, Type::String)?;
                self.vars.store(&scratch, value)?;
                write!(self.output, "{} ", self.vars.scratch())?;
            }
        }
        writeln!(self.output)?;
        Ok(Flow::Next)
    }

    fn r#input(&mut self, operands: &[Token]) -> Result<Flow> {
        let items = shape::input_items(operands)?;
        let count = items.len();
        for (i, item) in items.into_iter().enumerate() {
            match item {
                InputItem::Prompt(prompt) => write!(self.output, "{} ", prompt)?,
                InputItem::Target(ident) => {
                    self.output.flush()?;
                    self.read_into(ident, i + 1 == count)?;
                }
            }
        }
        self.output.flush()?;
        Ok(Flow::Next)
    }

    /// A value that does not convert is reported and skipped; the
    /// variable keeps what it had.
    fn read_into(&mut self, ident: &Ident, last: bool) -> Result<()> {
        let value = match ident {
            Ident::String(_) => Val::String(if last {
                self.input.read_rest_of_line()?.into()
            } else {
                self.input.read_word()?.into()
            }),
            Ident::Integer(_) => {
                let word = self.input.read_word()?;
                match word.parse::<i64>() {
                    Ok(n) => Val::Integer(n),
                    Err(_) => return self.inappropriate(&word),
                }
            }
            Ident::Real(_) => {
                let word = self.input.read_word()?;
                match word.parse::<f64>() {
                    Ok(n) => Val::Real(n),
                    Err(_) => return self.inappropriate(&word),
                }
            }
        };
        self.vars.store(ident, value)
    }

    fn inappropriate(&mut self, word: &str) -> Result<()> {
        tracing::warn!(word, "inappropriate input value");
        writeln!(self.output, "?[ {} ] INAPPROPRIATE INPUT VALUE", word)?;
        Ok(())
    }

    fn target(&self, operands: &[Token]) -> Result<usize> {
        let key = shape::jump_key(operands)?;
        self.program.link().lookup(&key)
    }

    fn r#goto(&mut self, operands: &[Token]) -> Result<Flow> {
        let target = self.target(operands)?;
        tracing::debug!(target, "goto");
        Ok(Flow::Goto(target))
    }

    fn r#gosub(&mut self, index: usize, operands: &[Token]) -> Result<Flow> {
        let target = self.target(operands)?;
        self.calls.push(index + 1)?;
        tracing::debug!(target, depth = self.calls.len(), "gosub");
        Ok(Flow::Goto(target))
    }

    fn r#return(&mut self, operands: &[Token]) -> Result<Flow> {
        no_operands(operands)?;
        if self.calls.is_empty() {
            return Err(error!(ReturnWithoutGosub));
        }
        let target = self.calls.pop()?;
        tracing::debug!(target, depth = self.calls.len(), "return");
        Ok(Flow::Goto(target))
    }

    fn r#if(&mut self, tokens: &[Token], index: usize, begin: usize, end: usize) -> Result<Flow> {
        let parts = shape::if_parts(tokens, begin, end)?;
        let condition = self.evaluate(&tokens[parts.condition], Type::Boolean)?;
        let branch = match (condition, parts.otherwise) {
            (Val::Boolean(true), _) => parts.then,
            (_, Some(otherwise)) => otherwise,
            _ => return Ok(Flow::Next),
        };
        self.branch(tokens, index, branch)
    }

    fn branch(&mut self, tokens: &[Token], index: usize, range: Range<usize>) -> Result<Flow> {
        if let Some(label) = shape::implied_goto(&tokens[range.clone()]) {
            return self.r#goto(std::slice::from_ref(label));
        }
        self.execute(tokens, index, range.start, range.end)
    }
}

/// Raise an interrupt flag from a signal handler. Returns true when the
/// flag was still up, meaning the run has not reached a line boundary
/// since the last request (it is blocked in INPUT).
pub fn raise_interrupt(flag: &AtomicBool) -> bool {
    flag.swap(true, Ordering::SeqCst)
}

fn no_operands(operands: &[Token]) -> Result<()> {
    match operands.first() {
        None => Ok(()),
        Some(token) => Err(error!(SyntaxError; format!("UNEXPECTED {}", token))),
    }
}
