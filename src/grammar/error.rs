use std::fmt;

/// Reasons a grammar is rejected before any transformation runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    /// A right-hand side of `variable` mentions `symbol`, which is neither a
    /// declared variable nor a declared terminal.
    UndeclaredSymbol { variable: String, symbol: String },
    /// A production is given for a left-hand side that is not a variable.
    UndeclaredVariable(String),
    UnknownStart(String),
    /// The variable has no alternatives at all.
    EmptyProductionSet(String),
    /// The name collides with the epsilon marker.
    ReservedName(String),
    /// The name is declared both as a variable and as a terminal.
    OverlappingName(String),
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarError::UndeclaredSymbol { variable, symbol } => write!(
                f,
                "production of \"{}\" uses undeclared symbol \"{}\"",
                variable, symbol
            ),
            GrammarError::UndeclaredVariable(name) => {
                write!(f, "productions given for undeclared variable \"{}\"", name)
            }
            GrammarError::UnknownStart(name) => {
                write!(f, "start symbol \"{}\" is not a declared variable", name)
            }
            GrammarError::EmptyProductionSet(name) => {
                write!(f, "variable \"{}\" has no productions", name)
            }
            GrammarError::ReservedName(name) => {
                write!(f, "\"{}\" is reserved for the epsilon marker", name)
            }
            GrammarError::OverlappingName(name) => write!(
                f,
                "\"{}\" is declared both as a variable and as a terminal",
                name
            ),
        }
    }
}

impl std::error::Error for GrammarError {}
