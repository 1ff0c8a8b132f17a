use std::cmp::Ordering;
use std::fmt;

use super::{CodePointRange, SymbolBuilder, SymbolFactory};

const MAX_CODE_POINT: u32 = 0x10FFFF;

/// Builds [`RangeSymbol`]s.
///
/// A builder that only saw `exclude` calls complements against the whole
/// code-point space `[0, 0x10FFFF]`, so `[^a-z]` matches every other code
/// point. Reversed ranges such as `z-a` contribute nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct RangeSymbolFactory;

impl SymbolFactory for RangeSymbolFactory {
    type Symbol = RangeSymbol;
    type Builder = RangeSymbolBuilder;

    fn new_symbol(&self) -> RangeSymbolBuilder {
        RangeSymbolBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct RangeSymbolBuilder {
    included: Vec<CodePointRange>,
    excluded: Vec<CodePointRange>,
}

impl SymbolBuilder for RangeSymbolBuilder {
    type Symbol = RangeSymbol;

    fn include(mut self, ranges: &[CodePointRange]) -> Self {
        self.included.extend_from_slice(ranges);
        self
    }

    fn exclude(mut self, ranges: &[CodePointRange]) -> Self {
        self.excluded.extend_from_slice(ranges);
        self
    }

    fn finish(self) -> RangeSymbol {
        let base = if self.included.is_empty() && !self.excluded.is_empty() {
            vec![CodePointRange {
                first: 0,
                last: MAX_CODE_POINT,
            }]
        } else {
            normalize(self.included)
        };

        RangeSymbol {
            ranges: subtract(&base, &normalize(self.excluded)),
        }
    }
}

/// Sorted, disjoint, non-adjacent code-point ranges.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RangeSymbol {
    ranges: Vec<CodePointRange>,
}

impl RangeSymbol {
    pub fn sorted_code_point_ranges(&self) -> &[CodePointRange] {
        &self.ranges
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        let cp = c as u32;
        self.ranges
            .binary_search_by(|range| {
                if range.last < cp {
                    Ordering::Less
                } else if range.first > cp {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                }
            })
            .is_ok()
    }
}

impl fmt::Display for RangeSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for range in self.ranges.iter() {
            write!(f, "{}", range)?;
        }
        write!(f, "]")
    }
}

fn normalize(mut ranges: Vec<CodePointRange>) -> Vec<CodePointRange> {
    ranges.retain(|range| !range.is_empty());
    ranges.sort();

    let mut merged: Vec<CodePointRange> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some(last) if range.first <= last.last.saturating_add(1) => {
                last.last = last.last.max(range.last);
            }
            _ => merged.push(range),
        }
    }
    merged
}

// both inputs must already be normalized
fn subtract(base: &[CodePointRange], excluded: &[CodePointRange]) -> Vec<CodePointRange> {
    let mut result = vec![];

    for range in base.iter() {
        let mut next = Some(range.first);

        let overlapping = excluded
            .iter()
            .filter(|cut| cut.last >= range.first && cut.first <= range.last);
        for cut in overlapping {
            let Some(first) = next else {
                break;
            };

            if cut.first > first {
                result.push(CodePointRange {
                    first,
                    last: cut.first - 1,
                });
            }

            next = if cut.last < range.last {
                Some(first.max(cut.last + 1))
            } else {
                None
            };
        }

        if let Some(first) = next {
            result.push(CodePointRange {
                first,
                last: range.last,
            });
        }
    }

    result
}
