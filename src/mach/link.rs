use crate::error;
use crate::lang::{token::*, Error};
use std::collections::HashMap;

type Result<T> = std::result::Result<T, Error>;

/// ## Label table
///
/// Maps a label key to the index of the logical line it names. Numeric
/// labels use their decimal form, named labels their upper-cased name.

#[derive(Debug, Default)]
pub struct Link {
    labels: HashMap<String, usize>,
}

impl Link {
    pub fn new() -> Link {
        Link::default()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// The key a label token registers under, if it can be a label at all.
    pub fn key_for(token: &Token) -> Option<String> {
        match token {
            Token::Literal(Literal::Integer(n)) => Some(n.to_string()),
            Token::Ident(Ident::Real(name)) => Some(name.to_string()),
            _ => None,
        }
    }

    pub fn register(&mut self, token: &Token, index: usize) -> Result<()> {
        let key = match Link::key_for(token) {
            Some(key) => key,
            None => return Err(error!(InternalError; "NOT A LABEL")),
        };
        if self.labels.contains_key(&key) {
            return Err(error!(DuplicateLabel; key));
        }
        tracing::debug!(label = %key, line = index, "label registered");
        self.labels.insert(key, index);
        Ok(())
    }

    pub fn lookup(&self, key: &str) -> Result<usize> {
        match self.labels.get(key) {
            Some(index) => Ok(*index),
            None => Err(error!(UndefinedLabel; key.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_register_and_lookup() {
        let mut link = Link::new();
        link.register(&Token::Literal(Literal::Integer(10)), 0)
            .unwrap();
        link.register(&Token::Ident(Ident::Real("LOOP".into())), 3)
            .unwrap();
        assert_eq!(link.lookup("10").unwrap(), 0);
        assert_eq!(link.lookup("LOOP").unwrap(), 3);
        assert_eq!(link.len(), 2);
    }

    #[test]
    fn test_duplicate() {
        let mut link = Link::new();
        let ten = Token::Literal(Literal::Integer(10));
        link.register(&ten, 0).unwrap();
        let e = link.register(&ten, 1).unwrap_err();
        assert_eq!(e.code(), ErrorCode::DuplicateLabel);
        assert_eq!(e.to_string(), "DUPLICATE LABEL; 10");
    }

    #[test]
    fn test_undefined() {
        let link = Link::new();
        let e = link.lookup("NOWHERE").unwrap_err();
        assert_eq!(e.code(), ErrorCode::UndefinedLabel);
        assert_eq!(e.to_string(), "UNDEFINED LABEL; NOWHERE");
    }

    #[test]
    fn test_not_a_label() {
        let mut link = Link::new();
        assert!(link.register(&Token::Comma, 0).is_err());
        assert_eq!(Link::key_for(&Token::Ident(Ident::Integer("A".into()))), None);
    }
}
