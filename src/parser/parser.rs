use std::iter::Peekable;
use std::str::Chars;

use super::ast::Ast;
use super::error::ParseError;
use crate::symbol::{CodePointRange, SymbolBuilder, SymbolFactory};

type Result<T> = std::result::Result<T, ParseError>;

/// Reported as the found symbol when the input runs out.
pub(crate) const END_OF_INPUT: char = '\u{3}';

const EMPTY_WORD: char = 'ε';
const EMPTY_SET: char = '∅';

/// Group nesting allowed by [`Parser::new`].
pub const DEFAULT_RECURSION_FUEL: u32 = 256;

const SPECIAL_CHARS: [char; 8] = [
    '(', ')', // group brackets
    '[', ']', // class brackets
    '|', // union
    '*', // star
    '^', // class negation
    END_OF_INPUT,
];

// plain members inside a class, on top of the literals
const CLASS_CHARS: [char; 5] = ['(', ')', '[', '-', '|'];

fn is_literal(c: char) -> bool {
    !SPECIAL_CHARS.contains(&c)
}

fn is_class_member(c: char) -> bool {
    is_literal(c) || CLASS_CHARS.contains(&c)
}

fn starts_kleene(c: char) -> bool {
    is_literal(c) || c == '(' || c == '['
}

/// Recursive-descent parser over a [`SymbolFactory`].
///
/// The parser itself holds no per-call state, so one instance can serve
/// any number of `parse` calls, concurrently too if the factory allows it.
#[derive(Debug, Clone)]
pub struct Parser<F> {
    factory: F,
    recursion_fuel: Option<u32>,
}

impl<F: SymbolFactory> Parser<F> {
    pub fn new(factory: F) -> Self {
        Parser {
            factory,
            recursion_fuel: Some(DEFAULT_RECURSION_FUEL),
        }
    }

    /// Caps how deep groups may nest; `None` lifts the cap.
    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.recursion_fuel = limit;
        self
    }

    pub fn parse(&self, pattern: &str) -> Result<Ast<F::Symbol>> {
        let mut chars = pattern.chars();
        match (chars.next(), chars.next()) {
            (Some(EMPTY_WORD), None) => return Ok(Ast::EmptyWord),
            (Some(EMPTY_SET), None) => return Ok(Ast::EmptySet),
            _ => {}
        }

        let mut cursor = Cursor {
            factory: &self.factory,
            recursion_fuel: self.recursion_fuel,
            stream: pattern.chars().peekable(),
            position: 1,
            depth: 0,
        };

        let ast = cursor.parse_expression()?;
        match cursor.peek() {
            None => Ok(ast),
            Some(_) => Err(cursor.unexpected()),
        }
    }
}

impl<F: SymbolFactory + Default> Default for Parser<F> {
    fn default() -> Self {
        Parser::new(F::default())
    }
}

/// State of a single `parse` call.
struct Cursor<'a, F> {
    factory: &'a F,
    recursion_fuel: Option<u32>,
    stream: Peekable<Chars<'a>>,
    position: usize,
    depth: u32,
}

impl<'a, F: SymbolFactory> Cursor<'a, F> {
    fn peek(&mut self) -> Option<char> {
        self.stream.peek().copied()
    }

    fn next(&mut self) -> Option<char> {
        let c = self.stream.next();
        if c.is_some() {
            self.position += 1;
        }
        c
    }

    fn next_if_eq(&mut self, expected: char) -> bool {
        match self.stream.next_if_eq(&expected) {
            Some(_) => {
                self.position += 1;
                true
            }
            None => false,
        }
    }

    fn unexpected(&mut self) -> ParseError {
        ParseError::UnexpectedSymbol {
            found: self.peek().unwrap_or(END_OF_INPUT),
            position: self.position,
        }
    }

    fn expect(&mut self, expected: char) -> Result<()> {
        match self.peek() {
            Some(c) if c == expected => {
                self.next();
                Ok(())
            }
            None => Err(ParseError::UnterminatedGroup {
                expected,
                position: self.position,
            }),
            Some(_) => Err(self.unexpected()),
        }
    }

    fn enter_recursion(&mut self) -> Result<()> {
        if let Some(limit) = self.recursion_fuel {
            if self.depth >= limit {
                return Err(ParseError::RecursionLimitExceeded {
                    position: self.position,
                });
            }
        }
        self.depth += 1;
        Ok(())
    }

    fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn parse_expression(&mut self) -> Result<Ast<F::Symbol>> {
        let mut ast = self.parse_concatenation()?;
        loop {
            match self.peek() {
                Some('|') => {
                    self.next();

                    let rhs = self.parse_concatenation()?;
                    ast = Ast::alternation(ast, rhs);
                }
                None | Some(')') => return Ok(ast),
                _ => return Err(self.unexpected()),
            }
        }
    }

    fn parse_concatenation(&mut self) -> Result<Ast<F::Symbol>> {
        let mut ast = self.parse_kleene()?;
        loop {
            match self.peek() {
                Some(c) if starts_kleene(c) => {
                    let rhs = self.parse_kleene()?;
                    ast = Ast::concatenation(ast, rhs);
                }
                None | Some(')') | Some('|') => return Ok(ast),
                _ => return Err(self.unexpected()),
            }
        }
    }

    fn parse_kleene(&mut self) -> Result<Ast<F::Symbol>> {
        let ast = self.parse_base()?;

        match self.peek() {
            Some('*') => {
                self.next();
                Ok(Ast::star(ast))
            }
            None | Some(')') | Some('|') => Ok(ast),
            Some(c) if starts_kleene(c) => Ok(ast),
            _ => Err(self.unexpected()),
        }
    }

    fn parse_base(&mut self) -> Result<Ast<F::Symbol>> {
        match self.peek() {
            Some('(') => self.parse_group(),
            Some('[') => self.parse_class(),
            Some(c) if is_literal(c) => {
                self.next();

                let symbol = self
                    .factory
                    .new_symbol()
                    .include(&[CodePointRange::single(c)])
                    .finish();
                Ok(Ast::literal(symbol))
            }
            _ => Err(self.unexpected()),
        }
    }

    fn parse_group(&mut self) -> Result<Ast<F::Symbol>> {
        self.enter_recursion()?;
        self.next(); // consume '('

        let ast = self.parse_expression()?;
        self.expect(')')?;

        self.exit_recursion();
        Ok(ast)
    }

    fn parse_class(&mut self) -> Result<Ast<F::Symbol>> {
        self.next(); // consume '['

        let is_negated = self.next_if_eq('^');
        let mut builder = self.factory.new_symbol();
        loop {
            let range = self.parse_class_item()?;
            builder = match is_negated {
                true => builder.exclude(&[range]),
                false => builder.include(&[range]),
            };

            if !matches!(self.peek(), Some(c) if is_class_member(c)) {
                break;
            }
        }

        self.expect(']')?;
        Ok(Ast::literal(builder.finish()))
    }

    fn parse_class_item(&mut self) -> Result<CodePointRange> {
        let start = match self.peek() {
            Some(c) if is_class_member(c) => {
                self.next();
                c
            }
            _ => return Err(self.unexpected()),
        };

        if !self.next_if_eq('-') {
            return Ok(CodePointRange::single(start));
        }

        match self.peek() {
            Some(end) if is_literal(end) => {
                self.next();
                Ok(CodePointRange::range(start, end))
            }
            _ => Err(ParseError::UnterminatedRange {
                position: self.position,
            }),
        }
    }
}
