use std::iter::FusedIterator;

use crate::{
    errors::errors::{Error, ErrorImpl},
    MK_TOKEN,
};

use super::tokens::{lookup_ident, Token, TokenKind};

/// Cursor-based tokenizer over a borrowed input buffer.
///
/// The input is read one byte at a time and every byte is treated as a
/// character; multi-byte UTF-8 sequences are not recognised and each of
/// their bytes becomes its own `Illegal` token.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a [u8],
    /// Index of `ch`.
    position: usize,
    /// Index of the byte after `ch`.
    read_position: usize,
    /// `None` once the cursor has run off the end of the input.
    ch: Option<u8>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer::from_bytes(source.as_bytes())
    }

    pub fn from_bytes(input: &'a [u8]) -> Lexer<'a> {
        let mut lexer = Lexer {
            input,
            position: 0,
            read_position: 0,
            ch: None,
        };
        lexer.read_char();
        lexer
    }

    /// Produces the next token. Never fails: unknown bytes come back as
    /// `Illegal` tokens and once the input is exhausted every call returns
    /// an `EOF` token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let ch = match self.ch {
            Some(ch) => ch,
            None => return MK_TOKEN!(TokenKind::EOF, String::new()),
        };

        let token = match ch {
            b'=' => self.read_pair(b'=', TokenKind::Equals, TokenKind::Assign),
            b'!' => self.read_pair(b'=', TokenKind::NotEquals, TokenKind::Bang),
            b'+' => new_token(TokenKind::Plus, ch),
            b'-' => new_token(TokenKind::Minus, ch),
            b'/' => new_token(TokenKind::Slash, ch),
            b'*' => new_token(TokenKind::Asterisk, ch),
            b'<' => new_token(TokenKind::LessThan, ch),
            b'>' => new_token(TokenKind::GreaterThan, ch),
            b';' => new_token(TokenKind::Semicolon, ch),
            b',' => new_token(TokenKind::Comma, ch),
            b'(' => new_token(TokenKind::LParen, ch),
            b')' => new_token(TokenKind::RParen, ch),
            b'{' => new_token(TokenKind::LBrace, ch),
            b'}' => new_token(TokenKind::RBrace, ch),
            _ if is_letter(ch) => {
                // read_identifier leaves the cursor on the byte after the run
                let literal = self.read_identifier();
                let token = MK_TOKEN!(lookup_ident(&literal), literal);
                tracing::trace!("token {}", token);
                return token;
            }
            _ if is_digit(ch) => {
                let token = MK_TOKEN!(TokenKind::Int, self.read_number());
                tracing::trace!("token {}", token);
                return token;
            }
            _ => {
                tracing::debug!("illegal byte {:#04x} at offset {}", ch, self.position);
                new_token(TokenKind::Illegal, ch)
            }
        };

        self.read_char();
        tracing::trace!("token {}", token);
        token
    }

    /// Looks at the byte after the current one without consuming it.
    pub fn peek_char(&self) -> Option<u8> {
        self.input.get(self.read_position).copied()
    }

    /// Byte offset of the cursor.
    pub fn position(&self) -> usize {
        self.position
    }

    fn read_char(&mut self) {
        self.ch = self.input.get(self.read_position).copied();
        self.position = self.read_position;
        self.read_position += 1;
    }

    fn skip_whitespace(&mut self) {
        while self.ch.is_some_and(is_whitespace) {
            self.read_char();
        }
    }

    /// Emits `pair` when the next byte is `second`, consuming both bytes,
    /// otherwise emits `single` for the current byte alone.
    fn read_pair(&mut self, second: u8, pair: TokenKind, single: TokenKind) -> Token {
        if self.peek_char() == Some(second) {
            let start = self.position;
            self.read_char();
            MK_TOKEN!(pair, self.literal(start, self.read_position))
        } else {
            new_token(single, self.input[self.position])
        }
    }

    fn read_identifier(&mut self) -> String {
        let start = self.position;
        while self.ch.is_some_and(is_letter) {
            self.read_char();
        }
        self.literal(start, self.position)
    }

    fn read_number(&mut self) -> String {
        let start = self.position;
        while self.ch.is_some_and(is_digit) {
            self.read_char();
        }
        self.literal(start, self.position)
    }

    fn literal(&self, start: usize, end: usize) -> String {
        self.input[start..end].iter().map(|&b| b as char).collect()
    }
}

/// Yields every token up to, but not including, the first `EOF`.
impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

impl FusedIterator for Lexer<'_> {}

fn new_token(kind: TokenKind, ch: u8) -> Token {
    MK_TOKEN!(kind, (ch as char).to_string())
}

pub fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

pub fn is_digit(ch: u8) -> bool {
    ch.is_ascii_digit()
}

pub fn is_whitespace(ch: u8) -> bool {
    matches!(ch, b' ' | b'\t' | b'\n' | b'\r')
}

/// Lexes the whole input. The result always ends with exactly one `EOF` token.
pub fn tokenize(source: &(impl AsRef<[u8]> + ?Sized)) -> Vec<Token> {
    let mut lex = Lexer::from_bytes(source.as_ref());
    let mut tokens: Vec<Token> = lex.by_ref().collect();
    tokens.push(lex.next_token());
    tokens
}

/// Like [`tokenize`], but the first `Illegal` token aborts with an error
/// pointing at the offending byte.
pub fn tokenize_strict(source: &(impl AsRef<[u8]> + ?Sized)) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::from_bytes(source.as_ref());
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();

        match token.kind {
            TokenKind::Illegal => {
                // the cursor has already stepped over the illegal byte
                return Err(Error::new(
                    ErrorImpl::IllegalCharacter {
                        character: token.literal,
                    },
                    lex.position() - 1,
                ));
            }
            TokenKind::EOF => {
                tokens.push(token);
                return Ok(tokens);
            }
            _ => tokens.push(token),
        }
    }
}
