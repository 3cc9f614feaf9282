pub use super::ident::Ident;
use std::rc::Rc;

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Invalid,
    Literal(Literal),
    Word(Word),
    Operator(Operator),
    Function(Function),
    Ident(Ident),
    LParen,
    RParen,
    Comma,
    Colon,
    Semicolon,
}

#[derive(Debug, Clone, Copy)]
enum Reserved {
    Function(Function),
    Operator(Operator),
    Word(Word),
}

// Must stay sorted; lookups are a binary search.
const RESERVED: [(&str, Reserved); 34] = [
    ("ABS", Reserved::Function(Function::Abs)),
    ("AND", Reserved::Operator(Operator::And)),
    ("ATN", Reserved::Function(Function::Atn)),
    ("COS", Reserved::Function(Function::Cos)),
    ("ELSE", Reserved::Word(Word::Else)),
    ("END", Reserved::Word(Word::End)),
    ("EXP", Reserved::Function(Function::Exp)),
    ("FIX", Reserved::Function(Function::Fix)),
    ("FOR", Reserved::Word(Word::For)),
    ("GOSUB", Reserved::Word(Word::Gosub)),
    ("GOTO", Reserved::Word(Word::Goto)),
    ("IF", Reserved::Word(Word::If)),
    ("INPUT", Reserved::Word(Word::Input)),
    ("INT", Reserved::Function(Function::Int)),
    ("LET", Reserved::Word(Word::Let)),
    ("LOG", Reserved::Function(Function::Log)),
    ("MOD", Reserved::Operator(Operator::Modulus)),
    ("NEXT", Reserved::Word(Word::Next)),
    ("NOT", Reserved::Operator(Operator::Not)),
    ("OR", Reserved::Operator(Operator::Or)),
    ("PRINT", Reserved::Word(Word::Print)),
    ("REM", Reserved::Word(Word::Rem)),
    ("RETURN", Reserved::Word(Word::Return)),
    ("RND", Reserved::Function(Function::Rnd)),
    ("SGN", Reserved::Function(Function::Sgn)),
    ("SHELL", Reserved::Function(Function::Shell)),
    ("SIN", Reserved::Function(Function::Sin)),
    ("SQR", Reserved::Function(Function::Sqr)),
    ("STEP", Reserved::Word(Word::Step)),
    ("STOP", Reserved::Word(Word::Stop)),
    ("TAN", Reserved::Function(Function::Tan)),
    ("THEN", Reserved::Word(Word::Then)),
    ("TO", Reserved::Word(Word::To)),
    ("VAL", Reserved::Function(Function::Val)),
];

impl From<Reserved> for Token {
    fn from(reserved: Reserved) -> Token {
        match reserved {
            Reserved::Function(f) => Token::Function(f),
            Reserved::Operator(o) => Token::Operator(o),
            Reserved::Word(w) => Token::Word(w),
        }
    }
}

impl Token {
    /// Case-insensitive reserved word lookup. A match needs the whole
    /// word, a shared prefix is not enough.
    pub fn from_string(s: &str) -> Option<Token> {
        RESERVED
            .binary_search_by(|(word, _)| {
                word.bytes()
                    .cmp(s.bytes().map(|b| b.to_ascii_uppercase()))
            })
            .ok()
            .map(|index| Token::from(RESERVED[index].1))
    }

    pub fn is_word(&self, word: Word) -> bool {
        matches!(self, Token::Word(w) if *w == word)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Invalid => write!(f, "?"),
            Literal(s) => write!(f, "{}", s),
            Word(s) => write!(f, "{}", s),
            Operator(s) => write!(f, "{}", s),
            Function(s) => write!(f, "{}", s),
            Ident(s) => write!(f, "{}", s),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
            Comma => write!(f, ","),
            Colon => write!(f, ":"),
            Semicolon => write!(f, ";"),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Literal {
    Real(f64),
    Integer(i64),
    String(Rc<str>),
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Literal::*;
        match self {
            Real(n) => write!(f, "{}", n),
            Integer(n) => write!(f, "{}", n),
            String(s) => write!(f, "\"{}\"", s),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Word {
    Else,
    End,
    For,
    Gosub,
    Goto,
    If,
    Input,
    Let,
    Next,
    Print,
    Rem,
    Return,
    Step,
    Stop,
    Then,
    To,
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        match self {
            Else => write!(f, "ELSE"),
            End => write!(f, "END"),
            For => write!(f, "FOR"),
            Gosub => write!(f, "GOSUB"),
            Goto => write!(f, "GOTO"),
            If => write!(f, "IF"),
            Input => write!(f, "INPUT"),
            Let => write!(f, "LET"),
            Next => write!(f, "NEXT"),
            Print => write!(f, "PRINT"),
            Rem => write!(f, "REM"),
            Return => write!(f, "RETURN"),
            Step => write!(f, "STEP"),
            Stop => write!(f, "STOP"),
            Then => write!(f, "THEN"),
            To => write!(f, "TO"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    Caret,
    Multiply,
    Divide,
    DivideInt,
    Modulus,
    Plus,
    Minus,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Not,
    And,
    Or,
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Caret => write!(f, "^"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            DivideInt => write!(f, "\\"),
            Modulus => write!(f, "MOD"),
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Equal => write!(f, "="),
            NotEqual => write!(f, "<>"),
            Less => write!(f, "<"),
            LessEqual => write!(f, "<="),
            Greater => write!(f, ">"),
            GreaterEqual => write!(f, ">="),
            Not => write!(f, "NOT"),
            And => write!(f, "AND"),
            Or => write!(f, "OR"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Function {
    Abs,
    Atn,
    Cos,
    Exp,
    Fix,
    Int,
    Log,
    Rnd,
    Sgn,
    Shell,
    Sin,
    Sqr,
    Tan,
    Val,
}

impl std::fmt::Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Function::*;
        match self {
            Abs => write!(f, "ABS"),
            Atn => write!(f, "ATN"),
            Cos => write!(f, "COS"),
            Exp => write!(f, "EXP"),
            Fix => write!(f, "FIX"),
            Int => write!(f, "INT"),
            Log => write!(f, "LOG"),
            Rnd => write!(f, "RND"),
            Sgn => write!(f, "SGN"),
            Shell => write!(f, "SHELL"),
            Sin => write!(f, "SIN"),
            Sqr => write!(f, "SQR"),
            Tan => write!(f, "TAN"),
            Val => write!(f, "VAL"),
        }
    }
}
