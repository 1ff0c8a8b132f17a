//! Structural properties of parsed trees over randomly drawn literals.

use proptest::prelude::*;

use redeggs::{
    parse, Ast, CodePointRange, RangeSymbol, RangeSymbolFactory, SymbolBuilder, SymbolFactory,
};

fn is_literal(c: char) -> bool {
    !"()[]|*^\u{3}".contains(c)
}

/// Literal chars, minus the two sentinels so a lone char stays a literal.
fn arb_literal() -> impl Strategy<Value = char> {
    any::<char>().prop_filter("literal", |c| is_literal(*c) && *c != 'ε' && *c != '∅')
}

/// Literals that can sit next to each other inside a class without
/// forming a range.
fn arb_member() -> impl Strategy<Value = char> {
    arb_literal().prop_filter("member", |c| *c != '-')
}

/// Well-formed patterns up to a given depth.
fn arb_pattern(max_depth: u32) -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        arb_literal().prop_map(|c| c.to_string()),
        (arb_literal(), arb_literal()).prop_map(|(a, b)| format!("[{}-{}]", a, b)),
        (arb_member(), arb_member()).prop_map(|(a, b)| format!("[^{}{}]", a, b)),
    ];

    leaf.prop_recursive(max_depth, 32, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(l, r)| format!("{}{}", l, r)),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| format!("{}|{}", l, r)),
            inner.clone().prop_map(|x| format!("({})*", x)),
            inner.prop_map(|x| format!("({})", x)),
        ]
    })
}

fn lit(c: char) -> Ast<RangeSymbol> {
    Ast::literal(
        RangeSymbolFactory
            .new_symbol()
            .include(&[CodePointRange::single(c)])
            .finish(),
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn concatenation_is_left_associative(a in arb_literal(), b in arb_literal(), c in arb_literal()) {
        let ast = parse(&format!("{}{}{}", a, b, c)).unwrap();
        let expect = Ast::concatenation(Ast::concatenation(lit(a), lit(b)), lit(c));

        prop_assert_eq!(ast, expect);
    }

    #[test]
    fn alternation_is_left_associative(a in arb_literal(), b in arb_literal(), c in arb_literal()) {
        let ast = parse(&format!("{}|{}|{}", a, b, c)).unwrap();
        let expect = Ast::alternation(Ast::alternation(lit(a), lit(b)), lit(c));

        prop_assert_eq!(ast, expect);
    }

    #[test]
    fn concatenation_binds_tighter_than_alternation(a in arb_literal(), b in arb_literal(), c in arb_literal()) {
        let ast = parse(&format!("{}|{}{}", a, b, c)).unwrap();
        let expect = Ast::alternation(lit(a), Ast::concatenation(lit(b), lit(c)));

        prop_assert_eq!(ast, expect);
    }

    #[test]
    fn star_binds_tighter_than_concatenation(a in arb_literal(), b in arb_literal()) {
        let ast = parse(&format!("{}{}*", a, b)).unwrap();
        let expect = Ast::concatenation(lit(a), Ast::star(lit(b)));

        prop_assert_eq!(ast, expect);
    }

    #[test]
    fn class_holds_every_member(a in arb_member(), b in arb_member(), c in arb_member()) {
        let ast = parse(&format!("[{}{}{}]", a, b, c)).unwrap();
        let Ast::Literal(symbol) = &ast else {
            panic!("expected a literal, got {:?}", ast);
        };

        prop_assert!(symbol.contains(a) && symbol.contains(b) && symbol.contains(c));

        let ranges = symbol.sorted_code_point_ranges();
        prop_assert!(ranges.len() <= 3);
        prop_assert!(ranges.windows(2).all(|w| w[0].last() + 1 < w[1].first()));
    }

    #[test]
    fn negated_class_holds_no_member(a in arb_member(), b in arb_member(), other in any::<char>()) {
        let ast = parse(&format!("[^{}{}]", a, b)).unwrap();
        let Ast::Literal(symbol) = &ast else {
            panic!("expected a literal, got {:?}", ast);
        };

        prop_assert!(!symbol.contains(a) && !symbol.contains(b));
        prop_assert_eq!(symbol.contains(other), other != a && other != b);
    }

    #[test]
    fn parse_is_idempotent(src in arb_pattern(4)) {
        let first = parse(&src);
        prop_assert!(first.is_ok(), "failed to parse {:?}: {:?}", src, first);
        prop_assert_eq!(first, parse(&src));
    }

    #[test]
    fn error_position_is_within_input(src in "[a-c()\\[\\]|*^-]{0,12}") {
        if let Err(err) = parse(&src) {
            let len = src.chars().count();
            prop_assert!(err.position() >= 1 && err.position() <= len + 1, "{} for {:?}", err, src);
        }
    }
}
