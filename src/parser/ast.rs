use std::fmt;

/// Regular expression tree, generic over the symbol held by literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ast<S> {
    EmptyWord,                                 // 'ε'
    EmptySet,                                  // '∅'
    Literal(S),                                // a, [a-z]
    Concatenation(Box<Ast<S>>, Box<Ast<S>>),   // ab
    Alternation(Box<Ast<S>>, Box<Ast<S>>),     // a|b
    Star(Box<Ast<S>>),                         // a*
}

impl<S> Ast<S> {
    pub fn literal(symbol: S) -> Self {
        Ast::Literal(symbol)
    }

    pub fn concatenation(left: Ast<S>, right: Ast<S>) -> Self {
        Ast::Concatenation(Box::new(left), Box::new(right))
    }

    pub fn alternation(left: Ast<S>, right: Ast<S>) -> Self {
        Ast::Alternation(Box::new(left), Box::new(right))
    }

    pub fn star(inner: Ast<S>) -> Self {
        Ast::Star(Box::new(inner))
    }
}

/// Fully parenthesized form: `(ab)`, `(a|b)`, `(a)*`.
impl<S: fmt::Display> fmt::Display for Ast<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ast::EmptyWord => write!(f, "ε"),
            Ast::EmptySet => write!(f, "∅"),
            Ast::Literal(symbol) => write!(f, "{}", symbol),
            Ast::Concatenation(left, right) => write!(f, "({}{})", left, right),
            Ast::Alternation(left, right) => write!(f, "({}|{})", left, right),
            Ast::Star(inner) => write!(f, "({})*", inner),
        }
    }
}
