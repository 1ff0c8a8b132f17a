// syntax (like BNF)
//
// pattern     = 'ε' | '∅' | expression        (the sentinels only as the whole input)
// expression  = concat ( '|' concat ) *
// concat      = kleene +
// kleene      = base '*' ?
// base        = literal | '(' expression ')' | '[' class ']'
// class       = '^' ? class-item +
// class-item  = member ( '-' literal ) ?
// member      = literal | '(' | ')' | '[' | '-' | '|'
// literal     = any char except '(' ')' '[' ']' '|' '*' '^'
//
// Every binary operator folds to the left: `abc` is `((ab)c)`.

pub mod ast;
mod error;
mod parser;

pub use ast::Ast;
pub use error::ParseError;
pub use parser::{Parser, DEFAULT_RECURSION_FUEL};
