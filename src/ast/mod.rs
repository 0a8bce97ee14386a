/// AST (Abstract Syntax Tree) module
/// Node records handed from the parser to later stages. The lexer never
/// builds these; they only hold the tokens a parser consumed.
///
/// Submodules:
/// - ast: Core AST traits, wrappers and the `Program` root
/// - expressions: Definitions for expression types
/// - statements: Definitions for statement types
pub mod ast;
pub mod expressions;
pub mod statements;
