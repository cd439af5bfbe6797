use ncgrobner::buchberger;
use ncmonomial::{Deglex, Symbol};
use ncparser::parse;
use ncpoly::division::divide;
use std::collections::HashMap;
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

/// Hand-parsed process arguments: `--scenario <mora|division>` (default:
/// run both) and `--max-iter <n>` (default: 10). No argument-parsing crate
/// is pulled in for a demo binary with two flags.
struct Args {
    scenario: Option<String>,
    max_iter: usize,
}

fn parse_args() -> Args {
    let mut scenario = None;
    let mut max_iter = 10;
    let mut raw = std::env::args().skip(1);
    while let Some(flag) = raw.next() {
        match flag.as_str() {
            "--scenario" => scenario = raw.next(),
            "--max-iter" => {
                if let Some(n) = raw.next() {
                    max_iter = n.parse().unwrap_or(max_iter);
                }
            }
            other => eprintln!("ignoring unrecognized argument: {other}"),
        }
    }
    Args { scenario, max_iter }
}

fn run_mora_example(max_iter: usize) {
    let order: Rc<dyn ncmonomial::Order> = Rc::new(Deglex);
    let variables: HashMap<String, Symbol> = [("a".to_string(), Symbol::new(1)), ("b".to_string(), Symbol::new(2))].into_iter().collect();

    let f1 = parse(&variables, order.clone(), "aba - b").expect("f1 parses");
    let f2 = parse(&variables, order.clone(), "bab - b").expect("f2 parses");
    println!("Input generators: {f1}, {f2}");

    let (basis, complete) = buchberger(&[f1, f2], max_iter);
    println!("Gröbner basis (complete = {complete}):");
    for g in &basis {
        println!("  {g}");
    }
}

fn run_division_example() {
    let x = Symbol::new(3);
    let y = Symbol::new(2);
    let z = Symbol::new(1);
    let div_order: Rc<dyn ncmonomial::Order> = Rc::new(Deglex);
    let div_vars: HashMap<String, Symbol> = [("x".to_string(), x), ("y".to_string(), y), ("z".to_string(), z)].into_iter().collect();
    let f = parse(&div_vars, div_order.clone(), "zxxyx").expect("f parses");
    let g1 = parse(&div_vars, div_order.clone(), "xy+x").expect("g1 parses");
    let g2 = parse(&div_vars, div_order, "xx+xz").expect("g2 parses");
    let (_, remainder) = divide(&f, &[g1, g2]);
    println!("Division remainder of zx^2yx by {{xy+x, x^2+xz}}: {remainder}");
}

fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = parse_args();
    match args.scenario.as_deref() {
        Some("mora") => run_mora_example(args.max_iter),
        Some("division") => run_division_example(),
        Some(other) => eprintln!("unknown scenario '{other}'; expected 'mora' or 'division'"),
        None => {
            run_mora_example(args.max_iter);
            run_division_example();
        }
    }
}
