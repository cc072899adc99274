use std::collections::{BTreeMap, BTreeSet};

use super::{grammar::Symbol, CnfOptions, Grammar};

/// Generator of variable names that collide with nothing in the grammar.
///
/// Every prefix counts up on its own from `first_index`; candidates already
/// used as a variable or terminal are skipped. When a counter runs out the
/// prefix gets a prime and counting starts over.
#[derive(Debug, Clone)]
pub struct FreshNames {
    used: BTreeSet<String>,
    next: BTreeMap<String, (String, usize)>,
    first_index: usize,
}

impl FreshNames {
    pub fn new(grammar: &Grammar, first_index: usize) -> Self {
        Self {
            used: grammar
                .variables
                .iter()
                .chain(grammar.terminals.iter())
                .cloned()
                .collect(),
            next: BTreeMap::new(),
            first_index,
        }
    }

    pub fn fresh(&mut self, prefix: &str) -> String {
        let first_index = self.first_index;
        let (stem, counter) = self
            .next
            .entry(prefix.to_string())
            .or_insert_with(|| (prefix.to_string(), first_index));
        loop {
            let name = format!("{}{}", stem, counter);
            match counter.checked_add(1) {
                Some(next) => *counter = next,
                None => {
                    stem.push('\'');
                    *counter = first_index;
                }
            }
            if self.used.insert(name.clone()) {
                return name;
            }
        }
    }
}

/// State of one binarization pass.
struct Binarizer<'a> {
    options: &'a CnfOptions,
    names: FreshNames,
    isolated: BTreeMap<String, String>,
    productions: BTreeMap<String, BTreeSet<Vec<Symbol>>>,
}

impl Binarizer<'_> {
    fn add(&mut self, left: &str, right: Vec<Symbol>) {
        self.productions
            .entry(left.to_string())
            .or_default()
            .insert(right);
    }

    fn isolate(&mut self, terminal: &str) -> Symbol {
        if let Some(variable) = self.isolated.get(terminal) {
            return Symbol::NonTerminal(variable.clone());
        }
        let variable = self.names.fresh(&self.options.terminal_prefix);
        self.add(&variable, vec![Symbol::Terminal(terminal.to_string())]);
        self.isolated.insert(terminal.to_string(), variable.clone());
        Symbol::NonTerminal(variable)
    }

    fn rewrite(&mut self, left: &str, alternative: &[Symbol]) {
        if alternative.len() < 2 {
            self.add(left, alternative.to_vec());
            return;
        }

        let mut right: Vec<Symbol> = alternative
            .iter()
            .map(|symbol| match symbol {
                Symbol::Terminal(t) => self.isolate(t),
                other => other.clone(),
            })
            .collect();

        while right.len() > 2 {
            let variable = self.names.fresh(&self.options.chain_prefix);
            let pair: Vec<Symbol> = right.drain(..2).collect();
            self.add(&variable, pair);
            right.insert(0, Symbol::NonTerminal(variable));
        }
        self.add(left, right);
    }
}

impl Grammar {
    /// Brings every alternative of length two or more down to exactly two
    /// variables.
    ///
    /// Terminals inside such alternatives are replaced by one dedicated
    /// variable per terminal, then longer alternatives are folded from the
    /// left: `A -> B C D` becomes `X1 -> B C`, `A -> X1 D`.
    pub fn binarize(&mut self, options: &CnfOptions) {
        let mut binarizer = Binarizer {
            options,
            names: FreshNames::new(self, options.first_index),
            isolated: BTreeMap::new(),
            productions: BTreeMap::new(),
        };

        for (left, alternatives) in &self.productions {
            binarizer.productions.entry(left.clone()).or_default();
            for alternative in alternatives {
                binarizer.rewrite(left, alternative);
            }
        }

        self.variables.extend(binarizer.productions.keys().cloned());
        self.productions = binarizer.productions;
    }
}
