#![no_main]

use libfuzzer_sys::fuzz_target;
use ncmonomial::{Deglex, Symbol};
use ncparser::parse;
use std::collections::HashMap;
use std::rc::Rc;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else { return };

    let mut variables = HashMap::new();
    for (name, id) in [("x", 1), ("y", 2), ("z", 3), ("a", 4), ("b", 5), ("alpha", 6)] {
        variables.insert(name.to_string(), Symbol::new(id));
    }

    // The parser must never panic on arbitrary input: either it returns a
    // polynomial, or a ParseError. If it succeeds, the result must round
    // through the basic Polynomial invariants (no zero coefficients, no
    // out-of-order terms) without panicking.
    if let Ok(p) = parse(&variables, Rc::new(Deglex), text) {
        let _ = p.num_terms();
        let _ = p.leading_term();
        let _ = p.to_string();
    }
});
