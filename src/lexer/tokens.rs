use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("let", TokenKind::Let);
        map.insert("fn", TokenKind::Function);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("return", TokenKind::Return);
        map
    };
}

/// Returns the keyword kind for a reserved spelling, or `Identifier`.
pub fn lookup_ident(ident: &str) -> TokenKind {
    RESERVED_LOOKUP
        .get(ident)
        .copied()
        .unwrap_or(TokenKind::Identifier)
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Illegal,

    Identifier,
    Int,

    Assign,    // =
    Equals,    // ==
    Bang,      // !
    NotEquals, // !=

    Plus,
    Minus,
    Slash,
    Asterisk,

    LessThan,
    GreaterThan,

    Semicolon,
    Comma,

    LParen,
    RParen,
    LBrace,
    RBrace,

    // Reserved
    Let,
    Function,
    True,
    False,
    If,
    Else,
    Return,
}

impl TokenKind {
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Let
                | TokenKind::Function
                | TokenKind::True
                | TokenKind::False
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::Return
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A classified lexical unit.
///
/// `literal` is the exact source text that produced the token. Two-character
/// operators carry both bytes (`"=="`, `"!="`), end-of-input carries `""`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.carries_value() {
            write!(f, "{}({})", self.kind, self.literal)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}

impl Token {
    fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    /// Whether the literal is information beyond the kind itself.
    pub fn carries_value(&self) -> bool {
        self.is_one_of_many(&[TokenKind::Identifier, TokenKind::Int, TokenKind::Illegal])
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EOF
    }
}
