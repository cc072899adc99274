extern crate wasm_bindgen;

use wasm_bindgen::prelude::*;

pub mod grammar;
pub use grammar::{CnfOptions, Grammar, GrammarError, GrammarSpec, Symbol};

fn error_to_json(message: &str) -> String {
    serde_json::json!({ "error": message }).to_string()
}

/// Takes a grammar as JSON and returns its Chomsky normal form as JSON, or
/// `{"error": ...}` when the input is malformed or invalid.
#[wasm_bindgen]
pub fn cnf_to_json(grammar: &str) -> String {
    let g = serde_json::from_str::<GrammarSpec>(grammar)
        .map_err(|e| e.to_string())
        .and_then(|spec| Grammar::from_spec(spec).map_err(|e| e.to_string()));
    match g {
        Ok(g) => serde_json::to_string(&g.into_cnf().to_spec())
            .unwrap_or_else(|e| error_to_json(&e.to_string())),
        Err(e) => error_to_json(&e),
    }
}

#[cfg(test)]
mod validate_tests {
    use crate::{Grammar, GrammarError, GrammarSpec};

    fn spec(json: &str) -> GrammarSpec {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn accepts_epsilon_spellings() {
        let g = Grammar::from_spec(spec(
            r#"{"variables": ["S"], "terminals": ["a"], "start": "S",
                "productions": {"S": [["a", "S"], [], ["ε"], ["a", "ε"]]}}"#,
        ))
        .unwrap();
        assert_eq!(g.alternatives("S").count(), 3);
        assert!(g.alternatives("S").any(|alt| alt.is_empty()));
    }

    #[test]
    fn undeclared_symbol() {
        let e = Grammar::from_spec(spec(
            r#"{"variables": ["S"], "terminals": ["a"], "start": "S",
                "productions": {"S": [["a", "B"]]}}"#,
        ))
        .unwrap_err();
        assert_eq!(
            e,
            GrammarError::UndeclaredSymbol {
                variable: "S".to_string(),
                symbol: "B".to_string()
            }
        );
    }

    #[test]
    fn unknown_start() {
        let e = Grammar::from_spec(spec(
            r#"{"variables": ["S"], "terminals": ["a"], "start": "a",
                "productions": {"S": [["a"]]}}"#,
        ))
        .unwrap_err();
        assert_eq!(e, GrammarError::UnknownStart("a".to_string()));
    }

    #[test]
    fn empty_production_set() {
        let e = Grammar::from_spec(spec(
            r#"{"variables": ["S", "A"], "terminals": ["a"], "start": "S",
                "productions": {"S": [["a"]], "A": []}}"#,
        ))
        .unwrap_err();
        assert_eq!(e, GrammarError::EmptyProductionSet("A".to_string()));

        let e = Grammar::from_spec(spec(
            r#"{"variables": ["S"], "terminals": [], "start": "S", "productions": {}}"#,
        ))
        .unwrap_err();
        assert_eq!(e, GrammarError::EmptyProductionSet("S".to_string()));
    }

    #[test]
    fn undeclared_variable() {
        let e = Grammar::from_spec(spec(
            r#"{"variables": ["S"], "terminals": ["a"], "start": "S",
                "productions": {"S": [["a"]], "B": [["a"]]}}"#,
        ))
        .unwrap_err();
        assert_eq!(e, GrammarError::UndeclaredVariable("B".to_string()));
    }

    #[test]
    fn reserved_and_overlapping_names() {
        let e = Grammar::from_spec(spec(
            r#"{"variables": ["S"], "terminals": ["ε"], "start": "S",
                "productions": {"S": [["ε"]]}}"#,
        ))
        .unwrap_err();
        assert_eq!(e, GrammarError::ReservedName("ε".to_string()));

        let e = Grammar::from_spec(spec(
            r#"{"variables": ["S", "a"], "terminals": ["a"], "start": "S",
                "productions": {"S": [["a"]], "a": [["a"]]}}"#,
        ))
        .unwrap_err();
        assert_eq!(e, GrammarError::OverlappingName("a".to_string()));
    }

    #[test]
    fn empty_terminal_name_is_not_epsilon() {
        let g = Grammar::from_spec(spec(
            r#"{"variables": ["S"], "terminals": [""], "start": "S",
                "productions": {"S": [[""]]}}"#,
        ))
        .unwrap();
        assert!(g.derives(&[""]));
        assert!(!g.derives(&[]));
    }

    #[test]
    fn error_messages_name_the_symbol() {
        let e = GrammarError::UndeclaredSymbol {
            variable: "S".to_string(),
            symbol: "B".to_string(),
        };
        assert_eq!(e.to_string(), "production of \"S\" uses undeclared symbol \"B\"");
    }
}

#[cfg(test)]
mod cnf_tests {
    use crate::grammar::{test_grammar as grammar, EPSILON};
    use crate::{Grammar, Symbol};

    fn rights(g: &Grammar, left: &str) -> Vec<String> {
        g.alternatives(left)
            .map(|alt| g.production_to_vec_str(alt).join(" "))
            .collect()
    }

    #[test]
    fn nullable_operand_is_dropped() {
        let g = grammar("a b", &[("S", "A B"), ("A", "a | ε"), ("B", "b")]).into_cnf();

        assert_eq!(rights(&g, "S"), vec!["b", "A B"]);
        assert_eq!(rights(&g, "A"), vec!["a"]);
        assert_eq!(rights(&g, "B"), vec!["b"]);
        assert_eq!(g.variables().len(), 3);
        assert!(g.is_cnf());
    }

    #[test]
    fn long_alternative_with_terminals() {
        let g = grammar("a b", &[("S", "a A b B"), ("A", "a"), ("B", "b")]).into_cnf();

        assert_eq!(rights(&g, "T1"), vec!["a"]);
        assert_eq!(rights(&g, "T2"), vec!["b"]);
        assert_eq!(rights(&g, "X1"), vec!["T1 A"]);
        assert_eq!(rights(&g, "X2"), vec!["X1 T2"]);
        assert_eq!(rights(&g, "S"), vec!["X2 B"]);
        assert!(g.is_cnf());
    }

    #[test]
    fn same_input_same_names() {
        let build = || {
            grammar(
                "a b c",
                &[("S", "a S b S c | A A A A"), ("A", "c A | b")],
            )
            .into_cnf()
        };
        assert_eq!(build(), build());
    }

    #[test]
    fn keeps_empty_word_on_start_only() {
        let g = grammar("a b", &[("S", "a S b | S S | ε")]).into_cnf();

        assert!(g.is_cnf());
        assert!(rights(&g, "S").contains(&EPSILON.to_string()));
        for (left, alternatives) in g.productions() {
            if left != g.start() {
                assert!(alternatives.iter().all(|alt| !alt.is_empty()));
            }
        }
        for word in [vec![], vec!["a", "b"], vec!["a", "a", "b", "b", "a", "b"]] {
            assert_eq!(g.cyk_accepts(&word), Some(true));
        }
        for word in [vec!["a"], vec!["b", "a"], vec!["a", "b", "b"]] {
            assert_eq!(g.cyk_accepts(&word), Some(false));
        }
    }

    #[test]
    fn mixed_grammar() {
        let original = grammar(
            "a b",
            &[
                ("S", "a b A B"),
                ("A", "a S a b | B S | a A | b"),
                ("B", "B A | a b a b B | b | ε"),
                ("C", "A S"),
            ],
        );
        let g = original.clone().into_cnf();

        assert!(g.is_cnf());
        assert!(!g.variables().contains("C"));
        assert_eq!(&g.reachable(), g.variables());
        assert_eq!(&g.productive(), g.variables());
        assert!(g
            .productions()
            .values()
            .flatten()
            .flatten()
            .all(|s| *s != Symbol::Epsilon));

        let words: Vec<Vec<&str>> = vec![
            vec!["a", "b", "b"],
            vec!["a", "b", "b", "b"],
            vec!["a", "b", "a", "b"],
            vec!["a", "b", "b", "b", "b"],
            vec!["a", "b", "a", "b", "b"],
            vec!["b", "a", "b"],
        ];
        for word in &words {
            assert_eq!(
                g.cyk_accepts(word),
                Some(original.derives(word)),
                "{:?}",
                word
            );
        }
    }

    #[test]
    fn renormalizing_keeps_shape_and_language() {
        let once = grammar("a b", &[("S", "a S b | a b")]).into_cnf();
        let twice = once.clone().into_cnf();
        assert!(twice.is_cnf());
        for word in [vec!["a", "b"], vec!["a", "a", "b", "b"], vec!["a", "b", "a", "b"]] {
            assert_eq!(once.cyk_accepts(&word), twice.cyk_accepts(&word));
        }
    }

    #[test]
    fn json_round_trip() {
        let output = crate::cnf_to_json(
            r#"{"variables": ["S", "A"], "terminals": ["a"], "start": "S",
                "productions": {"S": [["A", "A", "A"]], "A": [["a"]]}}"#,
        );
        let spec: crate::GrammarSpec = serde_json::from_str(&output).unwrap();
        assert_eq!(spec.productions["X1"].len(), 1);
        assert!(spec.productions["S"].contains(&vec!["X1".to_string(), "A".to_string()]));
        assert!(spec.variables.contains("X1"));

        let error = crate::cnf_to_json(r#"{"variables": []}"#);
        assert!(error.starts_with("{\"error\":"));
        let error = crate::cnf_to_json(
            r#"{"variables": ["S"], "terminals": [], "start": "A", "productions": {}}"#,
        );
        assert!(error.contains("start symbol"));
    }
}
