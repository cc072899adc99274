use std::collections::{BTreeMap, BTreeSet, VecDeque};

use super::{grammar::Symbol, Grammar};

/// Least set of variables closed under "has an alternative whose variables
/// all belong to the set".
///
/// Alternatives containing a terminal only count when `admit_terminals` is
/// set: without terminals this is nullability, with them productivity.
/// Every alternative keeps a count of variable occurrences not yet known to
/// be in the set; a variable joins once one of its counts drops to zero, so
/// each occurrence is visited at most once.
pub(super) fn saturate(grammar: &Grammar, admit_terminals: bool) -> BTreeSet<String> {
    let mut owners: Vec<&str> = Vec::new();
    let mut pending: Vec<usize> = Vec::new();
    let mut occurrences: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    let mut found: BTreeSet<String> = BTreeSet::new();
    let mut worklist: VecDeque<&str> = VecDeque::new();

    for (left, alternatives) in &grammar.productions {
        for alternative in alternatives {
            if !admit_terminals && alternative.iter().any(Symbol::is_terminal) {
                continue;
            }
            let id = pending.len();
            owners.push(left.as_str());
            let mut count = 0;
            for v in alternative.iter().filter_map(Symbol::non_terminal) {
                occurrences.entry(v).or_default().push(id);
                count += 1;
            }
            pending.push(count);
            if count == 0 && found.insert(left.clone()) {
                worklist.push_back(left.as_str());
            }
        }
    }

    while let Some(v) = worklist.pop_front() {
        for &id in occurrences.get(v).into_iter().flatten() {
            pending[id] -= 1;
            if pending[id] == 0 && found.insert(owners[id].to_string()) {
                worklist.push_back(owners[id]);
            }
        }
    }

    found
}
