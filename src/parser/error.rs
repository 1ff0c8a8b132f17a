/// Reasons a pattern fails to parse. Positions are 1-based; a position one
/// past the last character means the input ran out.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The lookahead fits no rule of the grammar.
    #[error("Unexpected symbol '{found}' at position {position}.")]
    UnexpectedSymbol { found: char, position: usize },

    /// A `)` or `]` was required to close a group.
    #[error("Input ended unexpectedly, expected symbol '{expected}' at position {position}.")]
    UnterminatedGroup { expected: char, position: usize },

    /// The `-` of a class range was not followed by a literal.
    #[error("Input ended unexpectedly, expected literal at position {position}.")]
    UnterminatedRange { position: usize },

    /// Groups nested deeper than the parser's recursion fuel allows.
    #[error("Recursion limit exceeded at position {position}.")]
    RecursionLimitExceeded { position: usize },
}

impl ParseError {
    pub fn position(&self) -> usize {
        match self {
            ParseError::UnexpectedSymbol { position, .. }
            | ParseError::UnterminatedGroup { position, .. }
            | ParseError::UnterminatedRange { position }
            | ParseError::RecursionLimitExceeded { position } => *position,
        }
    }
}
