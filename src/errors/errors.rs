use std::fmt::Display;

use thiserror::Error;

/// An error raised by a caller of the lexer, tied to a byte offset in the
/// source text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{internal_error} at byte {position}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: usize,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: usize) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> usize {
        self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { .. } => "IllegalCharacter",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { character } if character.is_ascii() => {
                ErrorTip::Suggestion(format!("`{}` is not part of the language", character.escape_default()))
            }
            ErrorImpl::IllegalCharacter { .. } => {
                ErrorTip::Suggestion(String::from("only ASCII source text is supported"))
            }
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("illegal character: {character:?}")]
    IllegalCharacter { character: String },
}
