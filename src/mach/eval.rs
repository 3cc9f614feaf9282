use super::{Operation, Stack, Type, Val, Var};
use crate::error;
use crate::lang::{token::*, Error};
use rand::rngs::StdRng;
use std::io::Write;

type Result<T> = std::result::Result<T, Error>;

/// Opening a parenthesis lifts every operator inside above those outside.
const PRIORITY_STEP: usize = 10;

#[derive(Debug, Clone, Copy)]
enum Op {
    Unary(Operator),
    Binary(Operator),
    Function(Function),
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    op: Op,
    priority: usize,
}

impl Pending {
    fn arity(&self) -> usize {
        match self.op {
            Op::Binary(_) => 2,
            _ => 1,
        }
    }
}

enum State {
    ExpectOperand,
    ExpectOperator,
}

fn bad_expression() -> Error {
    error!(SyntaxError; "BAD EXPRESSION")
}

fn binary_priority(op: Operator) -> Result<usize> {
    use Operator::*;
    Ok(match op {
        And | Or => 1,
        Equal | NotEqual | Less | LessEqual | Greater | GreaterEqual => 3,
        Plus | Minus => 4,
        Multiply | Divide | DivideInt | Modulus => 5,
        Caret => 7,
        Not => return Err(error!(SyntaxError; "UNEXPECTED OPERATOR")),
    })
}

/// Evaluate an expression and convert the result to `target`.
///
/// Operators are applied as soon as a following operator of equal or
/// lower priority shows up, so equal priorities (`^` included) group
/// left to right.
pub fn evaluate(
    tokens: &[Token],
    vars: &Var,
    rng: &mut StdRng,
    output: &mut dyn Write,
    target: Type,
) -> Result<Val> {
    let mut values: Stack<Val> = Stack::new("EXPRESSION TOO COMPLEX");
    let mut pending: Stack<Pending> = Stack::new("EXPRESSION TOO COMPLEX");
    let mut base = 0;
    let mut state = State::ExpectOperand;

    for token in tokens {
        match state {
            State::ExpectOperand => match token {
                Token::Literal(literal) => {
                    values.push(match literal {
                        Literal::Real(n) => Val::Real(*n),
                        Literal::Integer(n) => Val::Integer(*n),
                        Literal::String(s) => Val::String(s.clone()),
                    })?;
                    state = State::ExpectOperator;
                }
                Token::Ident(ident) => {
                    values.push(vars.fetch(ident))?;
                    state = State::ExpectOperator;
                }
                Token::Operator(op @ Operator::Plus) | Token::Operator(op @ Operator::Minus) => {
                    pending.push(Pending {
                        op: Op::Unary(*op),
                        priority: base + 8,
                    })?;
                }
                Token::Operator(Operator::Not) => {
                    pending.push(Pending {
                        op: Op::Unary(Operator::Not),
                        priority: base + 2,
                    })?;
                }
                Token::Operator(_) => return Err(error!(SyntaxError; "UNEXPECTED OPERATOR")),
                Token::Function(func) => {
                    pending.push(Pending {
                        op: Op::Function(*func),
                        priority: base + 6,
                    })?;
                }
                Token::LParen => base += PRIORITY_STEP,
                Token::RParen => {
                    return Err(error!(SyntaxError; "UNEXPECTED CLOSING PARENTHESIS"))
                }
                _ => return Err(bad_expression()),
            },
            State::ExpectOperator => match token {
                Token::Operator(op) => {
                    let priority = base + binary_priority(*op)?;
                    while let Some(top) = pending.last() {
                        if top.priority < priority {
                            break;
                        }
                        let top = pending.pop()?;
                        apply(top, &mut values, rng, output)?;
                    }
                    pending.push(Pending {
                        op: Op::Binary(*op),
                        priority,
                    })?;
                    state = State::ExpectOperand;
                }
                Token::LParen => {
                    return Err(error!(SyntaxError; "UNEXPECTED OPENING PARENTHESIS"))
                }
                Token::RParen => {
                    if base == 0 {
                        return Err(error!(SyntaxError; "UNMATCHED CLOSING PARENTHESIS"));
                    }
                    base -= PRIORITY_STEP;
                }
                _ => return Err(bad_expression()),
            },
        }
    }

    if base != 0 {
        return Err(error!(SyntaxError; "UNMATCHED OPENING PARENTHESIS"));
    }
    while !pending.is_empty() {
        let top = pending.pop()?;
        apply(top, &mut values, rng, output)?;
    }
    if values.len() != 1 {
        return Err(bad_expression());
    }
    Operation::coerce(values.pop()?, target)
}

fn apply(
    pending: Pending,
    values: &mut Stack<Val>,
    rng: &mut StdRng,
    output: &mut dyn Write,
) -> Result<()> {
    if values.len() < pending.arity() {
        return Err(error!(SyntaxError; "TOO FEW OPERANDS"));
    }
    let result = match pending.op {
        Op::Unary(op) => Operation::unary(op, values.pop()?)?,
        Op::Binary(op) => {
            let (lhs, rhs) = values.pop_2()?;
            Operation::binary(op, lhs, rhs)?
        }
        Op::Function(func) => super::Function::call(func, values.pop()?, rng, output)?,
    };
    values.push(result)
}
