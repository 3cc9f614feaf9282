use super::Val;
use crate::error;
use crate::lang::token::Function as Func;
use crate::lang::Error;
use rand::rngs::StdRng;
use rand::Rng;
use std::io::Write;
use std::process::Command;

type Result<T> = std::result::Result<T, Error>;

pub struct Function {}

impl Function {
    /// Apply a one-argument library function.
    ///
    /// Strings are only taken by SHELL and VAL. ABS, RND and SGN have
    /// integer forms; every other function works on reals.
    pub fn call(
        func: Func,
        arg: Val,
        rng: &mut StdRng,
        output: &mut dyn Write,
    ) -> Result<Val> {
        match arg {
            Val::String(s) => match func {
                Func::Shell => Function::shell(&s, output),
                Func::Val => Ok(Val::Real(Function::val(&s))),
                _ => Err(error!(TypeMismatch)),
            },
            Val::Boolean(_) => Err(error!(TypeMismatch)),
            Val::Integer(n) => match func {
                Func::Abs => match n.checked_abs() {
                    Some(n) => Ok(Val::Integer(n)),
                    None => Err(error!(Overflow)),
                },
                Func::Rnd => {
                    if n < 0 {
                        return Err(error!(IllegalFunctionCall; "RND OF NEGATIVE"));
                    }
                    Ok(Val::Integer(rng.gen_range(0..=n)))
                }
                Func::Sgn => Ok(Val::Integer(n.signum())),
                _ => Function::real(func, n as f64, rng),
            },
            Val::Real(x) => Function::real(func, x, rng),
        }
    }

    fn real(func: Func, x: f64, rng: &mut StdRng) -> Result<Val> {
        Ok(match func {
            Func::Abs => Val::Real(x.abs()),
            Func::Atn => Val::Real(x.atan()),
            Func::Cos => Val::Real(x.cos()),
            Func::Exp => Val::Integer(exponent(x)),
            Func::Fix => Val::Real(x.floor()),
            Func::Int => Val::Integer(x.floor() as i64),
            Func::Log => Val::Real(x.ln()),
            Func::Rnd => Val::Real(rng.gen::<f64>() * x),
            Func::Sgn => Val::Real(if x == 0.0 { 0.0 } else { x.signum() }),
            Func::Sin => Val::Real(x.sin()),
            Func::Sqr => Val::Real(x.sqrt()),
            Func::Tan => Val::Real(x.tan()),
            Func::Shell | Func::Val => return Err(error!(TypeMismatch)),
        })
    }

    fn shell(command: &str, output: &mut dyn Write) -> Result<Val> {
        output.flush()?;
        let status = if cfg!(windows) {
            Command::new("cmd").arg("/C").arg(command).status()?
        } else {
            Command::new("sh").arg("-c").arg(command).status()?
        };
        tracing::debug!(command, code = ?status.code(), "shell");
        Ok(Val::Integer(status.code().map_or(-1, i64::from)))
    }

    /// Longest numeric prefix after leading blanks, or zero.
    fn val(s: &str) -> f64 {
        let s = s.trim_start();
        let bytes = s.as_bytes();
        let digits = |mut i: usize| {
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            i
        };
        let mut i = 0;
        if let Some(b'+') | Some(b'-') = bytes.first() {
            i += 1;
        }
        let whole = digits(i);
        let mut mantissa = whole - i;
        i = whole;
        if bytes.get(i) == Some(&b'.') {
            let fraction = digits(i + 1);
            mantissa += fraction - i - 1;
            i = fraction;
        }
        if mantissa == 0 {
            return 0.0;
        }
        if let Some(b'e') | Some(b'E') = bytes.get(i) {
            let mut j = i + 1;
            if let Some(b'+') | Some(b'-') = bytes.get(j) {
                j += 1;
            }
            let exp = digits(j);
            if exp > j {
                i = exp;
            }
        }
        s[..i].parse().unwrap_or(0.0)
    }
}

/// Binary exponent `e` with `x = m * 2^e` and `0.5 <= |m| < 1`.
fn exponent(x: f64) -> i64 {
    if x == 0.0 || !x.is_finite() {
        return 0;
    }
    let biased = ((x.to_bits() >> 52) & 0x7ff) as i64;
    if biased == 0 {
        return exponent(x * 2f64.powi(54)) - 54;
    }
    biased - 1022
}
