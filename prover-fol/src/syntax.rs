/*! Defines an abstract syntax tree (AST) for first-order terms, formulae and the declarations
of a problem. */

mod declaration;
mod formula;
mod macros;
mod problem;
mod symbol;
mod term;

pub use declaration::{Declaration, Dialect, Role};
pub use formula::{
    And, Equals, Exists, Forall, Formula, FormulaKind, Iff, Implies, Not, NotEquals, Or,
    Predicate,
};
pub use problem::Problem;
pub use symbol::{Pred, C, F, V};
pub use term::{Term, TermKind};

use thiserror::Error;

/// Is the type of errors raised when a syntactic object is built from invalid parts.
#[derive(Error, PartialEq, Debug)]
pub enum Error {
    /// Is returned when a declaration names a dialect outside [`Dialect`].
    #[error("the dialect is not known: `{dialect}`")]
    InvalidDialect { dialect: String },

    /// Is returned when a declaration names a role outside [`Role`].
    #[error("the role is not known: `{role}`")]
    InvalidRole { role: String },

    /// Is returned when a connective receives the wrong number of operands.
    #[error("`{connective}` expects {expected} operands, found {found}")]
    Arity {
        connective: &'static str,
        expected: &'static str,
        found: usize,
    },

    /// Is returned when a quantifier is given no variables to bind.
    #[error("`{quantifier}` must bind at least one variable")]
    EmptyBinder { quantifier: &'static str },
}
