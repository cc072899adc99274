use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::{GrammarError, EPSILON};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    Terminal(String),
    NonTerminal(String),
    Epsilon,
}

impl Symbol {
    pub fn name(&self) -> &str {
        match self {
            Symbol::Terminal(name) | Symbol::NonTerminal(name) => name.as_str(),
            Symbol::Epsilon => EPSILON,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Symbol::Terminal(_))
    }

    pub fn non_terminal(&self) -> Option<&str> {
        match self {
            Symbol::NonTerminal(name) => Some(name.as_str()),
            _ => None,
        }
    }
}

/// The structured form a grammar is supplied in and handed back as.
///
/// Every element of a right-hand side is a terminal name, a variable name or
/// [`EPSILON`]. An empty right-hand side also denotes epsilon.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarSpec {
    pub variables: BTreeSet<String>,
    pub terminals: BTreeSet<String>,
    pub start: String,
    pub productions: BTreeMap<String, BTreeSet<Vec<String>>>,
}

/// A validated context-free grammar.
///
/// Epsilon alternatives are stored as empty sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grammar {
    pub(super) variables: BTreeSet<String>,
    pub(super) terminals: BTreeSet<String>,
    pub(super) start: String,
    pub(super) productions: BTreeMap<String, BTreeSet<Vec<Symbol>>>,
}

impl Grammar {
    pub fn from_spec(spec: GrammarSpec) -> Result<Self, GrammarError> {
        let GrammarSpec {
            variables,
            terminals,
            start,
            productions: raw_productions,
        } = spec;

        if let Some(name) = variables
            .iter()
            .chain(terminals.iter())
            .find(|name| name.as_str() == EPSILON)
        {
            return Err(GrammarError::ReservedName(name.clone()));
        }
        if let Some(name) = variables.intersection(&terminals).next() {
            return Err(GrammarError::OverlappingName(name.clone()));
        }
        if !variables.contains(&start) {
            return Err(GrammarError::UnknownStart(start));
        }
        if let Some(left) = raw_productions.keys().find(|l| !variables.contains(*l)) {
            return Err(GrammarError::UndeclaredVariable(left.clone()));
        }

        let mut productions: BTreeMap<String, BTreeSet<Vec<Symbol>>> = BTreeMap::new();
        for (left, rights) in raw_productions {
            let mut alternatives = BTreeSet::new();
            for right in rights {
                let mut production = Vec::with_capacity(right.len());
                for name in right {
                    let symbol = if name == EPSILON {
                        Symbol::Epsilon
                    } else if variables.contains(&name) {
                        Symbol::NonTerminal(name)
                    } else if terminals.contains(&name) {
                        Symbol::Terminal(name)
                    } else {
                        return Err(GrammarError::UndeclaredSymbol {
                            variable: left,
                            symbol: name,
                        });
                    };
                    if symbol != Symbol::Epsilon {
                        production.push(symbol);
                    }
                }
                alternatives.insert(production);
            }
            productions.insert(left, alternatives);
        }

        if let Some(empty) = variables
            .iter()
            .find(|v| productions.get(*v).map_or(true, |alts| alts.is_empty()))
        {
            return Err(GrammarError::EmptyProductionSet(empty.clone()));
        }

        Ok(Self {
            variables,
            terminals,
            start,
            productions,
        })
    }

    pub fn to_spec(&self) -> GrammarSpec {
        GrammarSpec {
            variables: self.variables.clone(),
            terminals: self.terminals.clone(),
            start: self.start.clone(),
            productions: self
                .productions
                .iter()
                .map(|(left, rights)| {
                    let rights: BTreeSet<Vec<String>> = rights
                        .iter()
                        .map(|right| self.production_to_vec_str(right))
                        .map(|right| right.into_iter().map(str::to_string).collect())
                        .collect();
                    (left.clone(), rights)
                })
                .collect(),
        }
    }

    pub fn variables(&self) -> &BTreeSet<String> {
        &self.variables
    }

    pub fn terminals(&self) -> &BTreeSet<String> {
        &self.terminals
    }

    pub fn start(&self) -> &str {
        self.start.as_str()
    }

    pub fn productions(&self) -> &BTreeMap<String, BTreeSet<Vec<Symbol>>> {
        &self.productions
    }

    /// Alternatives of `variable`, empty if it has none or is unknown.
    pub fn alternatives<'a>(&'a self, variable: &str) -> impl Iterator<Item = &'a Vec<Symbol>> {
        self.productions.get(variable).into_iter().flatten()
    }

    pub fn production_count(&self) -> usize {
        self.productions.values().map(|alts| alts.len()).sum()
    }

    /// Names of a right-hand side, with the epsilon alternative spelled out.
    pub fn production_to_vec_str<'a>(&self, production: &'a [Symbol]) -> Vec<&'a str> {
        if production.is_empty() {
            vec![EPSILON]
        } else {
            production.iter().map(|s| s.name()).collect()
        }
    }

    /// Drops every variable outside `keep` together with its productions and
    /// every alternative that still mentions one of them.
    pub(super) fn retain_variables(&mut self, keep: &BTreeSet<String>) {
        let start = self.start.clone();
        self.variables.retain(|v| keep.contains(v) || *v == start);
        self.productions.retain(|left, _| keep.contains(left));
        for alternatives in self.productions.values_mut() {
            alternatives.retain(|alt| {
                alt.iter()
                    .all(|s| s.non_terminal().map_or(true, |v| keep.contains(v)))
            });
        }
    }
}

impl TryFrom<GrammarSpec> for Grammar {
    type Error = GrammarError;

    fn try_from(spec: GrammarSpec) -> Result<Self, Self::Error> {
        Self::from_spec(spec)
    }
}
