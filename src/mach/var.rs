use super::{Type, Val};
use crate::error;
use crate::lang::{Error, Ident};
use std::collections::HashMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory
///
/// Three independent stores. `A`, `A!` and `A#` are the same real
/// variable; `A%` and `A$` live elsewhere. Unset variables read as
/// zero or the empty string.

#[derive(Debug, Default)]
pub struct Var {
    reals: HashMap<Rc<str>, f64>,
    integers: HashMap<Rc<str>, i64>,
    strings: HashMap<Rc<str>, Rc<str>>,
}

impl Var {
    /// Name of the string slot PRINT evaluates into. No identifier can
    /// spell it.
    pub const SCRATCH: &'static str = "$";

    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.reals.clear();
        self.integers.clear();
        self.strings.clear();
    }

    pub fn fetch(&self, ident: &Ident) -> Val {
        match ident {
            Ident::Real(name) => Val::Real(self.reals.get(name).copied().unwrap_or(0.0)),
            Ident::Integer(name) => Val::Integer(self.integers.get(name).copied().unwrap_or(0)),
            Ident::String(name) => Val::String(match self.strings.get(name) {
                Some(s) => s.clone(),
                None => "".into(),
            }),
        }
    }

    /// Store a value already coerced to the identifier's type.
    pub fn store(&mut self, ident: &Ident, value: Val) -> Result<()> {
        match (ident, value) {
            (Ident::Real(name), Val::Real(n)) => {
                self.reals.insert(name.clone(), n);
            }
            (Ident::Integer(name), Val::Integer(n)) => {
                self.integers.insert(name.clone(), n);
            }
            (Ident::String(name), Val::String(s)) => {
                self.strings.insert(name.clone(), s);
            }
            _ => return Err(error!(TypeMismatch)),
        }
        Ok(())
    }

    pub fn scratch(&self) -> Rc<str> {
        match self.strings.get(Var::SCRATCH) {
            Some(s) => s.clone(),
            None => "".into(),
        }
    }
}

impl Ident {
    pub fn kind(&self) -> Type {
        match self {
            Ident::Real(_) => Type::Real,
            Ident::Integer(_) => Type::Integer,
            Ident::String(_) => Type::String,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let v = Var::new();
        assert_eq!(v.fetch(&Ident::Real("A".into())), Val::Real(0.0));
        assert_eq!(v.fetch(&Ident::Integer("A".into())), Val::Integer(0));
        assert_eq!(v.fetch(&Ident::String("A".into())), Val::String("".into()));
    }

    #[test]
    fn test_stores_are_independent() {
        let mut v = Var::new();
        v.store(&Ident::Real("A".into()), Val::Real(1.5)).unwrap();
        v.store(&Ident::Integer("A".into()), Val::Integer(2)).unwrap();
        v.store(&Ident::String("A".into()), Val::String("three".into()))
            .unwrap();
        assert_eq!(v.fetch(&Ident::Real("A".into())), Val::Real(1.5));
        assert_eq!(v.fetch(&Ident::Integer("A".into())), Val::Integer(2));
        assert_eq!(
            v.fetch(&Ident::String("A".into())),
            Val::String("three".into())
        );
    }

    #[test]
    fn test_store_checks_type() {
        let mut v = Var::new();
        assert!(v.store(&Ident::Integer("A".into()), Val::Real(1.0)).is_err());
    }
}
