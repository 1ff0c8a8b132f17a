mod parser;
mod symbol;

pub use parser::{Ast, ParseError, Parser, DEFAULT_RECURSION_FUEL};
pub use symbol::{
    CodePointRange, RangeSymbol, RangeSymbolBuilder, RangeSymbolFactory, SymbolBuilder,
    SymbolFactory,
};

/// Parses `pattern` with the default [`RangeSymbolFactory`].
pub fn parse(pattern: &str) -> Result<Ast<RangeSymbol>, ParseError> {
    Parser::new(RangeSymbolFactory).parse(pattern)
}
