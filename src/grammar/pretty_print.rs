use crowbook_text_processing::escape;
use serde::Serialize;

use super::{Grammar, EPSILON};

#[derive(Debug, Clone)]
pub struct ProductionOutput<'a> {
    pub left: &'a str,
    pub rights: Vec<Vec<&'a str>>,
}

impl ProductionOutput<'_> {
    /// `A -> x | y`, with alternatives on separate lines when `multiline`.
    /// Empty when there are no alternatives.
    pub fn to_plaintext(&self, left_width: usize, multiline: bool) -> String {
        let mut rights = self.rights.iter().map(|right| right.join(" "));
        let first = match rights.next() {
            Some(first) => first,
            None => return String::new(),
        };
        let separator = if multiline {
            format!("\n{:>width$}  | ", "", width = left_width)
        } else {
            " | ".to_string()
        };

        let mut output = format!("{:>width$} -> {}", self.left, first, width = left_width);
        for right in rights {
            output.push_str(&separator);
            output.push_str(&right);
        }
        output
    }

    pub fn to_latex(&self, and_sign: bool) -> String {
        if self.rights.is_empty() {
            return String::new();
        }

        let arrow = if and_sign {
            " & \\rightarrow &"
        } else {
            " \\rightarrow "
        };
        let rights = self
            .rights
            .iter()
            .map(|right| {
                right
                    .iter()
                    .map(|s| escape::tex(*s))
                    .collect::<Vec<_>>()
                    .join(" \\ ")
            })
            .collect::<Vec<_>>()
            .join(" \\mid ");

        format!("{}{}{}", escape::tex(self.left), arrow, rights).replace(EPSILON, "\\epsilon")
    }
}

/// Productions of every variable that still has alternatives.
pub struct ProductionOutputVec<'a> {
    productions: Vec<ProductionOutput<'a>>,
}

impl ProductionOutputVec<'_> {
    pub fn to_plaintext(&self) -> String {
        let left_width = self
            .productions
            .iter()
            .map(|p| p.left.chars().count())
            .max()
            .unwrap_or(0);
        self.productions
            .iter()
            .map(|p| p.to_plaintext(left_width, true))
            .collect::<Vec<String>>()
            .join("\n")
    }

    pub fn to_latex(&self) -> String {
        std::iter::once("\\[\\begin{array}{cll}".to_string())
            .chain(self.productions.iter().map(|p| p.to_latex(true)))
            .chain(std::iter::once("\\end{array}\\]".to_string()))
            .collect::<Vec<String>>()
            .join("\\\\\n")
    }
}

impl Grammar {
    /// Productions grouped by left-hand side, start symbol first.
    pub fn to_production_output_vec(&self) -> ProductionOutputVec {
        let start = std::iter::once(self.start.as_str());
        let others = self
            .variables
            .iter()
            .map(String::as_str)
            .filter(|v| *v != self.start);
        let productions = start
            .chain(others)
            .map(|left| ProductionOutput {
                left,
                rights: self
                    .alternatives(left)
                    .map(|right| self.production_to_vec_str(right))
                    .collect(),
            })
            .filter(|p| !p.rights.is_empty())
            .collect();
        ProductionOutputVec { productions }
    }
}

#[derive(Serialize)]
struct VariableOutput<'a> {
    name: &'a str,
    nullable: bool,
    reachable: bool,
    productive: bool,
    unit: Vec<String>,
}

impl VariableOutput<'_> {
    fn to_plaintext(&self) -> String {
        format!(
            "{} | {} | {} | {} | {}",
            self.name,
            self.nullable,
            self.reachable,
            self.productive,
            self.unit.join(", ")
        )
    }

    fn to_latex(&self) -> String {
        format!(
            "{} & {} & {} & {} & {}",
            escape::tex(self.name),
            self.nullable,
            self.reachable,
            self.productive,
            self.unit
                .iter()
                .map(|s| escape::tex(s.as_str()))
                .collect::<Vec<_>>()
                .join(r"\ ")
        )
    }
}

#[derive(Serialize)]
pub struct VariableOutputVec<'a> {
    data: Vec<VariableOutput<'a>>,
}

impl VariableOutputVec<'_> {
    pub fn to_plaintext(&self) -> String {
        self.data
            .iter()
            .map(|s| s.to_plaintext())
            .collect::<Vec<String>>()
            .join("\n")
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_latex(&self) -> String {
        let content = self
            .data
            .iter()
            .map(|e| e.to_latex())
            .collect::<Vec<_>>()
            .join("\\\\\n ");

        "\\begin{tabular}{c|c|c|c|c}\n".to_string()
            + "Symbol & Nullable & Reachable & Productive & Unit\\\\\\hline\n"
            + &content
            + "\\\\\n\\end{tabular}"
    }
}

impl Grammar {
    /// Per-variable results of the analyses the normal form is built from.
    pub fn to_variable_output_vec(&self) -> VariableOutputVec {
        let nullable = self.nullable();
        let reachable = self.reachable();
        let productive = self.productive();
        let mut unit_pairs = self.unit_pairs();

        let data = self
            .variables
            .iter()
            .map(|v| VariableOutput {
                name: v.as_str(),
                nullable: nullable.contains(v),
                reachable: reachable.contains(v),
                productive: productive.contains(v),
                unit: unit_pairs
                    .remove(v)
                    .into_iter()
                    .flatten()
                    .filter(|u| u != v)
                    .collect(),
            })
            .collect();
        VariableOutputVec { data }
    }
}
