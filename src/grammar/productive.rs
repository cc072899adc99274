use std::collections::BTreeSet;

use super::{fixpoint::saturate, Grammar};

impl Grammar {
    /// Variables that derive at least one string of terminals.
    pub fn productive(&self) -> BTreeSet<String> {
        saturate(self, true)
    }

    /// Drops unproductive variables and every alternative mentioning one.
    ///
    /// An unproductive start symbol stays declared, with no alternatives left.
    pub fn prune_unproductive(&mut self) {
        let productive = self.productive();
        self.retain_variables(&productive);
    }
}

#[cfg(test)]
mod tests {
    use crate::grammar::{names, test_grammar as grammar};

    #[test]
    fn drops_unproductive_variables_and_their_uses() {
        let mut g = grammar(
            "a b",
            &[("S", "A B | a C"), ("A", "a"), ("B", "b B"), ("C", "A A")],
        );
        assert_eq!(g.productive(), names(&["S", "A", "C"]));

        g.prune_unproductive();
        assert_eq!(g.variables(), &names(&["S", "A", "C"]));
        assert_eq!(g.alternatives("S").count(), 1);
        assert!(g.productions().get("B").is_none());
    }

    #[test]
    fn empty_alternative_is_productive() {
        let g = grammar("a", &[("S", "ε | A"), ("A", "A a")]);
        assert_eq!(g.productive(), names(&["S"]));
    }

    #[test]
    fn unproductive_start_keeps_declaration() {
        let mut g = grammar("a", &[("S", "a S")]);
        g.prune_unproductive();
        assert_eq!(g.variables(), &names(&["S"]));
        assert_eq!(g.alternatives("S").count(), 0);
    }
}
