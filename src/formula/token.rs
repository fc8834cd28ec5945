use crate::suggest::Suggestion;
use std::fmt;

/// Kind of a formula element, as decided by [`classify`](super::classify).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Tag,
    Operand,
    Number,
}

impl TokenKind {
    /// Tags and numbers occupy value positions in the sequence.
    pub fn is_value(self) -> bool {
        matches!(self, TokenKind::Tag | TokenKind::Number)
    }
}

/// Arithmetic and grouping symbols accepted as operand tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Open,
    Close,
}

impl Operator {
    pub const SYMBOLS: [&'static str; 7] = ["+", "-", "*", "/", "^", "(", ")"];

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Sub),
            "*" => Some(Operator::Mul),
            "/" => Some(Operator::Div),
            "^" => Some(Operator::Pow),
            "(" => Some(Operator::Open),
            ")" => Some(Operator::Close),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Pow => "^",
            Operator::Open => "(",
            Operator::Close => ")",
        }
    }

    /// Parentheses are accepted into a formula but never evaluated.
    pub fn is_grouping(self) -> bool {
        matches!(self, Operator::Open | Operator::Close)
    }
}

/// Store-assigned token identity. Only used for addressing, never ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenId(pub u64);

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One element of a formula.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub id: TokenId,
    /// Operand symbol, number literal as typed, or tag display name.
    pub value: String,
    pub kind: TokenKind,
    /// Only set on tags whose name matched a known suggestion.
    pub suggestion: Option<Suggestion>,
}

impl Token {
    pub fn operator(&self) -> Option<Operator> {
        match self.kind {
            TokenKind::Operand => Operator::from_symbol(&self.value),
            _ => None,
        }
    }
}
