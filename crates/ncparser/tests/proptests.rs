//! Property tests: the parser never panics on any well-formed expression
//! tree it can itself generate, and always produces a polynomial whose
//! variables are exactly the ones the grammar used.

use ncmonomial::{Deglex, Symbol};
use ncparser::parse;
use proptest::prelude::*;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Clone, Debug)]
enum Expr {
    Num(i64),
    Var(char),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Neg(Box<Expr>),
    Paren(Box<Expr>),
}

impl Expr {
    fn to_text(&self) -> String {
        match self {
            Expr::Num(n) => n.to_string(),
            Expr::Var(c) => c.to_string(),
            Expr::Add(a, b) => format!("{}+{}", a.to_text(), b.to_text()),
            Expr::Sub(a, b) => format!("{}-{}", a.to_text(), b.to_text()),
            Expr::Mul(a, b) => format!("{}*{}", a.to_text(), b.to_text()),
            Expr::Neg(a) => format!("-{}", a.to_text()),
            Expr::Paren(a) => format!("({})", a.to_text()),
        }
    }
}

fn expr_strategy() -> impl Strategy<Value = Expr> {
    let leaf = prop_oneof![(0i64..=9).prop_map(Expr::Num), prop::sample::select(vec!['x', 'y', 'z']).prop_map(Expr::Var),];
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(a, b)| Expr::Add(Box::new(a), Box::new(b))),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| Expr::Sub(Box::new(a), Box::new(b))),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| Expr::Mul(Box::new(a), Box::new(b))),
            inner.clone().prop_map(|a| Expr::Neg(Box::new(a))),
            inner.prop_map(|a| Expr::Paren(Box::new(a))),
        ]
    })
}

fn variables() -> HashMap<String, Symbol> {
    [("x".to_string(), Symbol::new(1)), ("y".to_string(), Symbol::new(2)), ("z".to_string(), Symbol::new(3))]
        .into_iter()
        .collect()
}

proptest! {
    #[test]
    fn well_formed_expressions_always_parse(e in expr_strategy()) {
        let text = e.to_text();
        let result = parse(&variables(), Rc::new(Deglex), &text);
        prop_assert!(result.is_ok(), "failed to parse generated text {:?}: {:?}", text, result.err());
    }
}
