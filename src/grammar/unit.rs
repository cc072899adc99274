use std::collections::{BTreeMap, BTreeSet, VecDeque};

use super::{grammar::Symbol, Grammar};

fn is_unit(alternative: &[Symbol]) -> Option<&str> {
    match alternative {
        [symbol] => symbol.non_terminal(),
        _ => None,
    }
}

impl Grammar {
    /// For each variable `A`, every `B` with `A =>* B` through unit
    /// alternatives only, `A` itself included.
    pub fn unit_pairs(&self) -> BTreeMap<String, BTreeSet<String>> {
        let mut edges: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for (left, alternatives) in &self.productions {
            for target in alternatives.iter().filter_map(|alt| is_unit(alt)) {
                edges.entry(left.as_str()).or_default().push(target);
            }
        }

        let mut pairs: BTreeMap<String, BTreeSet<String>> = self
            .variables
            .iter()
            .map(|v| (v.clone(), std::iter::once(v.clone()).collect()))
            .collect();
        let mut worklist: VecDeque<(&str, &str)> =
            self.variables.iter().map(|v| (v.as_str(), v.as_str())).collect();

        while let Some((from, via)) = worklist.pop_front() {
            for &to in edges.get(via).into_iter().flatten() {
                let reached = pairs.entry(from.to_string()).or_default();
                if reached.insert(to.to_string()) {
                    worklist.push_back((from, to));
                }
            }
        }

        pairs
    }

    /// Replaces every unit alternative `A -> B` by the non-unit alternatives
    /// of all variables reachable from `A` through unit alternatives.
    ///
    /// The epsilon alternative of the start symbol stands for the empty word
    /// of the whole language and is not inherited by other variables.
    pub fn eliminate_unit_productions(&mut self) {
        let pairs = self.unit_pairs();

        let mut productions: BTreeMap<String, BTreeSet<Vec<Symbol>>> = BTreeMap::new();
        for (left, reached) in &pairs {
            let inherits_start = *left == self.start;
            let alternatives: BTreeSet<Vec<Symbol>> = reached
                .iter()
                .flat_map(|v| self.alternatives(v).map(move |alt| (v, alt)))
                .filter(|(_, alt)| is_unit(alt).is_none())
                .filter(|(v, alt)| !alt.is_empty() || inherits_start || **v != self.start)
                .map(|(_, alt)| alt.clone())
                .collect();
            productions.insert(left.clone(), alternatives);
        }
        self.productions = productions;
    }
}
