use serde::{Deserialize, Serialize};

use super::{grammar::Symbol, Grammar};

/// How fresh variables introduced by [`Grammar::binarize`] are named.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CnfOptions {
    /// Prefix of variables standing in for a single terminal.
    pub terminal_prefix: String,
    /// Prefix of variables introduced when splitting long alternatives.
    pub chain_prefix: String,
    pub first_index: usize,
}

impl Default for CnfOptions {
    fn default() -> Self {
        Self {
            terminal_prefix: "T".to_string(),
            chain_prefix: "X".to_string(),
            first_index: 1,
        }
    }
}

impl Grammar {
    pub fn normalize(&mut self) {
        self.normalize_with(&CnfOptions::default());
    }

    /// Rewrites the grammar into Chomsky normal form.
    ///
    /// The stages must run in this order: epsilon removal can create unit
    /// alternatives, and pruning unproductive alternatives can disconnect
    /// variables from the start symbol.
    pub fn normalize_with(&mut self, options: &CnfOptions) {
        self.eliminate_epsilon();
        self.eliminate_unit_productions();
        self.prune_unreachable();
        self.prune_unproductive();
        self.prune_unreachable();
        self.binarize(options);
    }

    pub fn into_cnf(mut self) -> Self {
        self.normalize();
        self
    }

    /// Whether every alternative is a single terminal or two variables, with
    /// an epsilon alternative allowed on the start symbol only.
    pub fn is_cnf(&self) -> bool {
        self.productions.iter().all(|(left, alternatives)| {
            alternatives.iter().all(|alt| match alt.as_slice() {
                [] => *left == self.start,
                [Symbol::Terminal(_)] => true,
                [Symbol::NonTerminal(_), Symbol::NonTerminal(_)] => true,
                _ => false,
            })
        })
    }
}
