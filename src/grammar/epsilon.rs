use std::collections::{BTreeMap, BTreeSet};

use super::{fixpoint::saturate, grammar::Symbol, Grammar};

impl Grammar {
    /// Variables that derive the empty string.
    pub fn nullable(&self) -> BTreeSet<String> {
        saturate(self, false)
    }

    /// Removes every epsilon alternative except a single one on the start
    /// symbol, which survives only when the start symbol is nullable.
    ///
    /// Each alternative is replaced by all of its variants with any subset of
    /// its nullable occurrences deleted.
    pub fn eliminate_epsilon(&mut self) {
        let nullable = self.nullable();

        let old_productions = std::mem::take(&mut self.productions);
        let mut productions: BTreeMap<String, BTreeSet<Vec<Symbol>>> = BTreeMap::new();
        for (left, alternatives) in old_productions {
            let keep_empty = left == self.start;
            let mut new_alternatives = BTreeSet::new();
            for alternative in &alternatives {
                for variant in drop_nullable(alternative, &nullable) {
                    if !variant.is_empty() || keep_empty {
                        new_alternatives.insert(variant);
                    }
                }
            }
            productions.insert(left, new_alternatives);
        }
        self.productions = productions;
    }
}

/// Every sequence obtained from `alternative` by independently keeping or
/// dropping each nullable occurrence.
fn drop_nullable(alternative: &[Symbol], nullable: &BTreeSet<String>) -> Vec<Vec<Symbol>> {
    alternative.iter().fold(vec![Vec::new()], |prefixes, symbol| {
        let optional = symbol.non_terminal().map_or(false, |v| nullable.contains(v));
        let mut next = Vec::with_capacity(prefixes.len() * if optional { 2 } else { 1 });
        for prefix in prefixes {
            if optional {
                next.push(prefix.clone());
            }
            let mut kept = prefix;
            kept.push(symbol.clone());
            next.push(kept);
        }
        next
    })
}
