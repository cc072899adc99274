use std::collections::{BTreeSet, HashSet};

use super::{grammar::Symbol, Grammar};

/// An Earley item: rule index, dot position and origin.
type Item = (usize, usize, usize);

fn push(chart: &mut [Vec<Item>], seen: &mut [HashSet<Item>], k: usize, item: Item) {
    if seen[k].insert(item) {
        chart[k].push(item);
    }
}

impl Grammar {
    /// Earley recognition of `word` for any grammar, epsilon alternatives
    /// included.
    ///
    /// Predicting a nullable variable also moves the dot past it, which
    /// covers completions inside the same chart column.
    pub fn derives(&self, word: &[&str]) -> bool {
        let nullable = self.nullable();
        let rules: Vec<(&str, &[Symbol])> = self
            .productions
            .iter()
            .flat_map(|(left, alts)| alts.iter().map(move |alt| (left.as_str(), alt.as_slice())))
            .collect();

        let mut chart: Vec<Vec<Item>> = vec![Vec::new(); word.len() + 1];
        let mut seen: Vec<HashSet<Item>> = vec![HashSet::new(); word.len() + 1];
        for (i, (left, _)) in rules.iter().enumerate() {
            if *left == self.start {
                push(&mut chart, &mut seen, 0, (i, 0, 0));
            }
        }

        for k in 0..=word.len() {
            let mut j = 0;
            while j < chart[k].len() {
                let (rule, dot, origin) = chart[k][j];
                j += 1;
                let (left, right) = rules[rule];
                match right.get(dot) {
                    None => {
                        let parents: Vec<Item> = chart[origin]
                            .iter()
                            .filter(|(r, d, _)| {
                                rules[*r].1.get(*d).and_then(Symbol::non_terminal) == Some(left)
                            })
                            .map(|&(r, d, o)| (r, d + 1, o))
                            .collect();
                        for parent in parents {
                            push(&mut chart, &mut seen, k, parent);
                        }
                    }
                    Some(Symbol::NonTerminal(next)) => {
                        for (i, (l, _)) in rules.iter().enumerate() {
                            if *l == next.as_str() {
                                push(&mut chart, &mut seen, k, (i, 0, k));
                            }
                        }
                        if nullable.contains(next) {
                            push(&mut chart, &mut seen, k, (rule, dot + 1, origin));
                        }
                    }
                    Some(Symbol::Terminal(t)) => {
                        if k < word.len() && word[k] == t.as_str() {
                            push(&mut chart, &mut seen, k + 1, (rule, dot + 1, origin));
                        }
                    }
                    Some(Symbol::Epsilon) => {
                        push(&mut chart, &mut seen, k, (rule, dot + 1, origin))
                    }
                }
            }
        }

        chart[word.len()].iter().any(|&(rule, dot, origin)| {
            let (left, right) = rules[rule];
            origin == 0 && dot == right.len() && left == self.start
        })
    }

    /// CYK recognition of `word`. `None` if the grammar is not in CNF.
    pub fn cyk_accepts(&self, word: &[&str]) -> Option<bool> {
        if !self.is_cnf() {
            return None;
        }
        let n = word.len();
        if n == 0 {
            return Some(self.alternatives(&self.start).any(|alt| alt.is_empty()));
        }

        // table[len - 1][i]: variables deriving word[i..i + len]
        let mut table: Vec<Vec<BTreeSet<&str>>> = vec![vec![BTreeSet::new(); n]; n];
        for (i, w) in word.iter().enumerate() {
            for (left, alts) in &self.productions {
                let derived = alts
                    .iter()
                    .any(|alt| matches!(alt.as_slice(), [Symbol::Terminal(t)] if t.as_str() == *w));
                if derived {
                    table[0][i].insert(left.as_str());
                }
            }
        }

        for len in 2..=n {
            for i in 0..=n - len {
                let mut found: BTreeSet<&str> = BTreeSet::new();
                for split in 1..len {
                    let first = &table[split - 1][i];
                    let second = &table[len - split - 1][i + split];
                    for (left, alts) in &self.productions {
                        let derived = alts.iter().any(|alt| match alt.as_slice() {
                            [Symbol::NonTerminal(b), Symbol::NonTerminal(c)] => {
                                first.contains(b.as_str()) && second.contains(c.as_str())
                            }
                            _ => false,
                        });
                        if derived {
                            found.insert(left.as_str());
                        }
                    }
                }
                table[len - 1][i] = found;
            }
        }

        Some(table[n - 1][0].contains(self.start.as_str()))
    }
}
