use super::{Type, Val};
use crate::error;
use crate::lang::{token::Operator, Error};
use std::cmp::Ordering;

type Result<T> = std::result::Result<T, Error>;

pub struct Operation {}

impl Operation {
    /// Apply a binary operator.
    ///
    /// Booleans only combine with booleans. Two integers stay integer,
    /// except `/` which is always real. A string on either side turns the
    /// other side into its default text form. Any other mix is real.
    pub fn binary(op: Operator, lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Boolean(l), Boolean(r)) => Operation::boolean(op, l, r),
            (Boolean(_), _) | (_, Boolean(_)) => Err(error!(TypeMismatch)),
            (Integer(l), Integer(r)) => Operation::integer(op, l, r),
            (String(l), String(r)) => Operation::string(op, &l, &r),
            (String(l), r) => Operation::string(op, &l, &r.to_string()),
            (l, String(r)) => Operation::string(op, &l.to_string(), &r),
            (l, r) => Operation::real(op, Operation::real_of(&l)?, Operation::real_of(&r)?),
        }
    }

    pub fn unary(op: Operator, val: Val) -> Result<Val> {
        use Val::*;
        match (op, val) {
            (Operator::Plus, Real(n)) => Ok(Real(n)),
            (Operator::Plus, Integer(n)) => Ok(Integer(n)),
            (Operator::Minus, Real(n)) => Ok(Real(-n)),
            (Operator::Minus, Integer(n)) => match n.checked_neg() {
                Some(n) => Ok(Integer(n)),
                None => Err(error!(Overflow)),
            },
            (Operator::Not, Boolean(b)) => Ok(Boolean(!b)),
            (Operator::Plus, _) | (Operator::Minus, _) | (Operator::Not, _) => {
                Err(error!(TypeMismatch))
            }
            _ => Err(error!(InternalError; "NOT A UNARY OPERATOR")),
        }
    }

    /// Convert an expression result for storage in a `to` typed slot.
    pub fn coerce(val: Val, to: Type) -> Result<Val> {
        use Val::*;
        if val.kind() == to {
            return Ok(val);
        }
        match (val, to) {
            (Real(n), Type::Integer) => Ok(Integer(n as i64)),
            (Integer(n), Type::Real) => Ok(Real(n as f64)),
            (val @ Real(_), Type::String) | (val @ Integer(_), Type::String) => {
                Ok(String(val.to_string().into()))
            }
            _ => Err(error!(TypeMismatch)),
        }
    }

    fn real_of(val: &Val) -> Result<f64> {
        match val {
            Val::Real(n) => Ok(*n),
            Val::Integer(n) => Ok(*n as f64),
            _ => Err(error!(TypeMismatch)),
        }
    }

    fn compare(op: Operator, ordering: Option<Ordering>) -> Option<bool> {
        use Operator::*;
        // Unordered (nan) compares unequal to everything.
        let result = match (op, ordering) {
            (Equal, o) => o == Some(Ordering::Equal),
            (NotEqual, o) => o != Some(Ordering::Equal),
            (_, None) => false,
            (Less, Some(o)) => o == Ordering::Less,
            (LessEqual, Some(o)) => o != Ordering::Greater,
            (Greater, Some(o)) => o == Ordering::Greater,
            (GreaterEqual, Some(o)) => o != Ordering::Less,
            _ => return None,
        };
        Some(result)
    }

    fn boolean(op: Operator, l: bool, r: bool) -> Result<Val> {
        match op {
            Operator::And => Ok(Val::Boolean(l && r)),
            Operator::Or => Ok(Val::Boolean(l || r)),
            _ => Err(error!(TypeMismatch)),
        }
    }

    fn integer(op: Operator, l: i64, r: i64) -> Result<Val> {
        use Operator::*;
        if let Some(b) = Operation::compare(op, l.partial_cmp(&r)) {
            return Ok(Val::Boolean(b));
        }
        let checked = match op {
            Plus => l.checked_add(r),
            Minus => l.checked_sub(r),
            Multiply => l.checked_mul(r),
            Divide => {
                if r == 0 {
                    return Err(error!(DivisionByZero));
                }
                return Ok(Val::Real(l as f64 / r as f64));
            }
            DivideInt | Modulus => return Operation::integer_division(op, l, r),
            Caret => return Ok(Val::Integer((l as f64).powi(r as i32) as i64)),
            And | Or => return Err(error!(TypeMismatch)),
            _ => return Err(error!(InternalError; "NOT A BINARY OPERATOR")),
        };
        match checked {
            Some(n) => Ok(Val::Integer(n)),
            None => Err(error!(Overflow)),
        }
    }

    fn integer_division(op: Operator, l: i64, r: i64) -> Result<Val> {
        if r == 0 {
            return Err(error!(DivisionByZero));
        }
        let checked = if op == Operator::Modulus {
            l.checked_rem(r)
        } else {
            l.checked_div(r)
        };
        match checked {
            Some(n) => Ok(Val::Integer(n)),
            None => Err(error!(Overflow)),
        }
    }

    fn real(op: Operator, l: f64, r: f64) -> Result<Val> {
        use Operator::*;
        if let Some(b) = Operation::compare(op, l.partial_cmp(&r)) {
            return Ok(Val::Boolean(b));
        }
        match op {
            Plus => Ok(Val::Real(l + r)),
            Minus => Ok(Val::Real(l - r)),
            Multiply => Ok(Val::Real(l * r)),
            Divide => {
                if r == 0.0 {
                    return Err(error!(DivisionByZero));
                }
                Ok(Val::Real(l / r))
            }
            DivideInt | Modulus => Operation::integer_division(op, l as i64, r as i64),
            Caret => Ok(Val::Real(l.powf(r))),
            And | Or => Err(error!(TypeMismatch)),
            _ => Err(error!(InternalError; "NOT A BINARY OPERATOR")),
        }
    }

    fn string(op: Operator, l: &str, r: &str) -> Result<Val> {
        if let Some(b) = Operation::compare(op, Some(l.cmp(r))) {
            return Ok(Val::Boolean(b));
        }
        match op {
            Operator::Plus => Ok(Val::String(format!("{}{}", l, r).into())),
            _ => Err(error!(TypeMismatch)),
        }
    }
}
