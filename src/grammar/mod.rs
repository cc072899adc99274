pub mod binarize;
pub mod cnf;
pub mod epsilon;
pub mod error;
mod fixpoint;
pub mod grammar;
pub mod pretty_print;
pub mod productive;
pub mod reachable;
pub mod recognize;
pub mod unit;


pub use cnf::CnfOptions;
pub use error::GrammarError;
pub use grammar::{Grammar, GrammarSpec, Symbol};

pub const EPSILON: &str = "ε";

#[cfg(test)]
pub(crate) fn names(names: &[&str]) -> std::collections::BTreeSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}

/// Builds a grammar from rules like `("S", "a S b | ε")`. The first rule's
/// left-hand side is the start symbol.
#[cfg(test)]
pub(crate) fn test_grammar(terminals: &str, rules: &[(&str, &str)]) -> Grammar {
    let terminals: std::collections::BTreeSet<String> =
        terminals.split_whitespace().map(str::to_string).collect();
    let mut spec = GrammarSpec {
        variables: rules.iter().map(|(left, _)| left.to_string()).collect(),
        terminals,
        start: rules[0].0.to_string(),
        ..Default::default()
    };
    for (left, rights) in rules {
        let alternatives = spec.productions.entry(left.to_string()).or_default();
        for right in rights.split('|') {
            alternatives.insert(right.split_whitespace().map(str::to_string).collect());
        }
    }
    Grammar::from_spec(spec).unwrap()
}
