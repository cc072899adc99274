use std::collections::{BTreeSet, VecDeque};

use super::{grammar::Symbol, Grammar};

impl Grammar {
    /// Variables occurring in some sentential form derived from the start
    /// symbol.
    pub fn reachable(&self) -> BTreeSet<String> {
        let mut reachable: BTreeSet<String> = BTreeSet::new();
        let mut worklist: VecDeque<&str> = VecDeque::new();
        reachable.insert(self.start.clone());
        worklist.push_back(self.start.as_str());

        while let Some(v) = worklist.pop_front() {
            for next in self.alternatives(v).flatten().filter_map(Symbol::non_terminal) {
                if reachable.insert(next.to_string()) {
                    worklist.push_back(next);
                }
            }
        }

        reachable
    }

    /// Drops variables the start symbol never reaches. Terminals are left
    /// alone.
    pub fn prune_unreachable(&mut self) {
        let reachable = self.reachable();
        self.retain_variables(&reachable);
    }
}
