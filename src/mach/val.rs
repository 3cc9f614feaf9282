use std::rc::Rc;

/// ## Operand values
///
/// Every operand of an expression is one of four kinds. Booleans only
/// come out of comparisons and `NOT`; they never live in a variable.

#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    Real(f64),
    Integer(i64),
    String(Rc<str>),
    Boolean(bool),
}

/// The kind of value a variable or expression result holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    Real,
    Integer,
    String,
    Boolean,
}

impl Val {
    pub fn kind(&self) -> Type {
        match self {
            Val::Real(_) => Type::Real,
            Val::Integer(_) => Type::Integer,
            Val::String(_) => Type::String,
            Val::Boolean(_) => Type::Boolean,
        }
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::Real(n) => write!(f, "{}", format_real(*n)),
            Val::Integer(n) => write!(f, "{}", n),
            Val::String(s) => write!(f, "{}", s),
            Val::Boolean(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
        }
    }
}

const PRECISION: usize = 6;

/// Default text form of a real: shortest of fixed or exponent notation
/// with six significant digits and trailing zeros removed.
pub fn format_real(n: f64) -> String {
    if n.is_nan() {
        return if n.is_sign_negative() { "-nan" } else { "nan" }.to_string();
    }
    if n.is_infinite() {
        return if n < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    if n == 0.0 {
        return if n.is_sign_negative() { "-0" } else { "0" }.to_string();
    }
    let sci = format!("{:.*e}", PRECISION - 1, n);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };
    if exp < -4 || exp >= PRECISION as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_zeros(mantissa), sign, exp.abs())
    } else {
        let decimals = (PRECISION as i32 - 1 - exp) as usize;
        trim_zeros(&format!("{:.*}", decimals, n)).to_string()
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_fixed() {
        assert_eq!(format_real(3.5), "3.5");
        assert_eq!(format_real(14.0), "14");
        assert_eq!(format_real(-2.25), "-2.25");
        assert_eq!(format_real(1.0 / 3.0), "0.333333");
        assert_eq!(format_real(123456.0), "123456");
        assert_eq!(format_real(0.0001), "0.0001");
        assert_eq!(format_real(0.1 + 0.2), "0.3");
    }

    #[test]
    fn test_format_exponent() {
        assert_eq!(format_real(1234567.0), "1.23457e+06");
        assert_eq!(format_real(1e6), "1e+06");
        assert_eq!(format_real(0.000015), "1.5e-05");
        assert_eq!(format_real(1e100), "1e+100");
        assert_eq!(format_real(999999.5), "1e+06");
    }

    #[test]
    fn test_format_special() {
        assert_eq!(format_real(0.0), "0");
        assert_eq!(format_real(-0.0), "-0");
        assert_eq!(format_real(f64::INFINITY), "inf");
        assert_eq!(format_real(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_real(f64::NAN), "nan");
    }

    #[test]
    fn test_display() {
        assert_eq!(Val::Integer(-7).to_string(), "-7");
        assert_eq!(Val::Real(7.0).to_string(), "7");
        assert_eq!(Val::String("X".into()).to_string(), "X");
    }
}
