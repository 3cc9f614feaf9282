use super::Column;
use std::borrow::Cow;
use std::rc::Rc;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    line: Option<usize>,
    source: Option<Rc<str>>,
    column: Column,
    message: Cow<'static, str>,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_column($col)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, ..$col:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_column($col)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line: None,
            source: None,
            column: 0..0,
            message: Cow::Borrowed(""),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Logical line index the error was raised on, if known.
    pub fn line(&self) -> Option<usize> {
        self.line
    }

    /// Source text of the offending logical line, for echoing.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn is_break(&self) -> bool {
        self.code == ErrorCode::Break
    }

    pub fn in_line(self, index: usize, source: &Rc<str>) -> Error {
        if self.line.is_some() {
            return self;
        }
        Error {
            line: Some(index),
            source: Some(source.clone()),
            ..self
        }
    }

    pub fn in_column(self, column: &Column) -> Error {
        debug_assert_eq!(self.column, 0..0);
        Error {
            column: column.clone(),
            ..self
        }
    }

    pub fn message<S: Into<Cow<'static, str>>>(self, message: S) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            message: message.into(),
            ..self
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::new(ErrorCode::IoError).message(error.to_string().to_ascii_uppercase())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Break = 1,
    SyntaxError = 2,
    ReturnWithoutGosub = 3,
    IllegalFunctionCall = 5,
    Overflow = 6,
    OutOfMemory = 7,
    UndefinedLabel = 8,
    DivisionByZero = 11,
    TypeMismatch = 13,
    DuplicateLabel = 24,
    InternalError = 51,
    IoError = 57,
    InputPastEnd = 62,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let code_str = match self.code {
            Break => "BREAK",
            SyntaxError => "SYNTAX ERROR",
            ReturnWithoutGosub => "RETURN WITHOUT GOSUB",
            IllegalFunctionCall => "ILLEGAL FUNCTION CALL",
            Overflow => "OVERFLOW",
            OutOfMemory => "OUT OF MEMORY",
            UndefinedLabel => "UNDEFINED LABEL",
            DivisionByZero => "DIVISION BY ZERO",
            TypeMismatch => "TYPE MISMATCH",
            DuplicateLabel => "DUPLICATE LABEL",
            InternalError => "INTERNAL ERROR",
            IoError => "I/O ERROR",
            InputPastEnd => "INPUT PAST END",
        };
        write!(f, "{}", code_str)?;
        if (0..0) != self.column {
            write!(f, " ({}..{})", self.column.start, self.column.end)?;
        }
        if !self.message.is_empty() {
            write!(f, "; {}", self.message)?;
        }
        Ok(())
    }
}
