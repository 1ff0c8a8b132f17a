// A symbol is the matchable unit held by a literal node. The parser only
// knows the builder contract below; how ranges are merged or complemented
// is up to the factory.

use std::fmt;

mod range_set;


pub use range_set::{RangeSymbol, RangeSymbolBuilder, RangeSymbolFactory};

/// Inclusive interval `[first, last]` over Unicode code points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CodePointRange {
    first: u32,
    last: u32,
}

impl CodePointRange {
    pub fn single(c: char) -> Self {
        CodePointRange {
            first: c as u32,
            last: c as u32,
        }
    }

    /// Builds `[first, last]` as written; a reversed pair is kept as is.
    pub fn range(first: char, last: char) -> Self {
        CodePointRange {
            first: first as u32,
            last: last as u32,
        }
    }

    pub fn first(&self) -> u32 {
        self.first
    }

    pub fn last(&self) -> u32 {
        self.last
    }

    pub fn is_empty(&self) -> bool {
        self.first > self.last
    }

    pub fn contains(&self, c: char) -> bool {
        self.first <= c as u32 && c as u32 <= self.last
    }
}

impl fmt::Display for CodePointRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.first == self.last {
            write!(f, "\\u{:04X}", self.first)
        } else {
            write!(f, "\\u{:04X}-\\u{:04X}", self.first, self.last)
        }
    }
}

/// Hands out fresh builders, one per symbol.
pub trait SymbolFactory {
    type Symbol;
    type Builder: SymbolBuilder<Symbol = Self::Symbol>;

    fn new_symbol(&self) -> Self::Builder;
}

/// Accumulates included and excluded ranges. `finish` consumes the builder.
pub trait SymbolBuilder: Sized {
    type Symbol;

    fn include(self, ranges: &[CodePointRange]) -> Self;
    fn exclude(self, ranges: &[CodePointRange]) -> Self;
    fn finish(self) -> Self::Symbol;
}
