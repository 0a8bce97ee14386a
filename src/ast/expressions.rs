use std::any::Any;

use crate::lexer::tokens::Token;

use super::ast::{Expr, ExprType, ExprWrapper, Node};

/// Identifier Expression
/// A name bound by `let` or referenced in an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    /// The `Identifier` token.
    pub token: Token,
    pub value: String,
}

impl Identifier {
    pub fn from_token(token: Token) -> Self {
        let value = token.literal.clone();
        Identifier { token, value }
    }
}

impl Node for Identifier {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Expr for Identifier {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Identifier
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
}
