use std::rc::Rc;

/// A variable name, upper-cased and without its type suffix.
/// The variant is the store the suffix selects.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum Ident {
    Real(Rc<str>),
    Integer(Rc<str>),
    String(Rc<str>),
}

impl Ident {
    pub fn name(&self) -> &Rc<str> {
        use Ident::*;
        match self {
            Real(s) | Integer(s) | String(s) => s,
        }
    }
}

impl std::fmt::Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Ident::*;
        match self {
            Real(s) => write!(f, "{}", s),
            Integer(s) => write!(f, "{}%", s),
            String(s) => write!(f, "{}$", s),
        }
    }
}
