/*! Defines the syntax for first-order terms. */

use super::{Equals, Formula, NotEquals, C, F, V};
use itertools::Itertools;
use std::fmt;

/// Is the tag of a [`Term`] variant.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum TermKind {
    Variable,
    Constant,
    Function,
}

/// Represents a first-order term and consists of variables, constants and function applications.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Term {
    /// Is a variable term, wrapping a [variable symbol].
    ///
    /// [variable symbol]: crate::syntax::V
    Var { variable: V },

    /// Is a constant term, wrapping a [constant symbol].
    ///
    /// [constant symbol]: crate::syntax::C
    Const { constant: C },

    /// Is a composite term, made by applying a `function` on a list of `terms`.
    App { function: F, terms: Vec<Term> },
}

impl Term {
    /// Returns the tag of the receiver's variant.
    pub fn kind(&self) -> TermKind {
        match self {
            Self::Var { .. } => TermKind::Variable,
            Self::Const { .. } => TermKind::Constant,
            Self::App { .. } => TermKind::Function,
        }
    }

    /// Returns the variable symbol of the receiver if it is a variable term.
    pub fn as_var(&self) -> Option<&V> {
        match self {
            Self::Var { variable } => Some(variable),
            _ => None,
        }
    }

    /// Returns a list of all free variable symbols in the term.
    ///
    /// **Note**: In the list of free variables, each variable symbol appears only once even if it
    /// is present at multiple positions of the receiver term.
    ///
    /// **Example**:
    /// ```rust
    /// # use prover_fol::syntax::{V, C, F, Term};
    /// let x = Term::from(V::from("X"));
    /// let y = Term::from(V::from("Y"));
    /// let a = Term::from(C::from("a"));
    ///
    /// // f(X, g(Y, a, X)):
    /// let t = F::from("f").app(vec![x.clone(), F::from("g").app(vec![y, a, x])]);
    /// assert_eq!(vec![&V::from("X"), &V::from("Y")], t.free_vars());
    /// ```
    pub fn free_vars(&self) -> Vec<&V> {
        match self {
            Self::Var { variable } => vec![variable],
            Self::Const { .. } => vec![],
            Self::App { terms, .. } => terms.iter().flat_map(|t| t.free_vars()).unique().collect(),
        }
    }

    /// Returns an [equation] between the receiver and `term`.
    ///
    /// [equation]: crate::syntax::Formula::Equals
    pub fn equals(self, term: Term) -> Formula {
        Equals::new(self, term).into()
    }

    /// Returns an [inequation] between the receiver and `term`.
    ///
    /// [inequation]: crate::syntax::Formula::NotEquals
    pub fn not_equals(self, term: Term) -> Formula {
        NotEquals::new(self, term).into()
    }
}

impl From<V> for Term {
    fn from(variable: V) -> Self {
        Self::Var { variable }
    }
}

impl From<C> for Term {
    fn from(constant: C) -> Self {
        Self::Const { constant }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Var { variable } => write!(f, "{}", variable),
            Self::Const { constant } => write!(f, "{}", constant),
            Self::App { function, terms } => {
                write!(f, "{}({})", function, terms.iter().join(", "))
            }
        }
    }
}

// renders problem-file syntax
impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Var { variable } => write!(f, "{:?}", variable),
            Self::Const { constant } => write!(f, "{:?}", constant),
            Self::App { function, terms } => {
                let ts = terms.iter().map(|t| format!("{:?}", t)).join(", ");
                write!(f, "{:?}({})", function, ts)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{term, test_prelude::*};

    #[test]
    fn term_kind() {
        assert_eq!(TermKind::Variable, x().kind());
        assert_eq!(TermKind::Constant, a().kind());
        assert_eq!(TermKind::Function, f().app(vec![x()]).kind());
        assert_eq!(TermKind::Function, f().app(vec![]).kind());
    }

    #[test]
    fn term_to_string() {
        assert_eq!("X", x().to_string());
        assert_eq!("a", a().to_string());
        assert_eq!("f()", f().app(vec![]).to_string());
        assert_eq!("f(X, Y)", f().app(vec![x(), y()]).to_string());
        assert_eq!("f(g(X), a)", term!(f(g(X), @a)).to_string());
        assert_eq!(
            "f(f(f(f(X))))",
            f().app(vec![f().app(vec![f().app(vec![f().app(vec![x()])])])])
                .to_string()
        );
    }

    #[test]
    fn term_debug() {
        let term = f().app(vec![x(), C::from("New York").into()]);
        assert_eq!("f(X, 'New York')", format!("{:?}", term));
    }

    #[test]
    fn term_free_vars() {
        {
            let expected: Vec<&V> = vec![];
            assert_eq!(expected, a().free_vars());
            assert_eq!(expected, f().app(vec![g().app(vec![a(), b()])]).free_vars());
        }
        {
            let vars = vec![_x()];
            let expected: Vec<&V> = vars.iter().collect();
            assert_eq!(expected, f().app(vec![x()]).free_vars());
        }
        {
            let vars = vec![_x(), _y(), _z()];
            let expected: Vec<&V> = vars.iter().collect();
            assert_eq!(expected, term!(f(X, g(Y, X), h(Z))).free_vars());
        }
    }

    #[test]
    fn term_as_var() {
        assert_eq!(Some(&_x()), x().as_var());
        assert_eq!(None, a().as_var());
    }
}
