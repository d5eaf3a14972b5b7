/*! Defines problems as ordered collections of declarations. */

use super::{Declaration, Formula};
use std::{fmt, iter::FromIterator, ops::Deref};

/// Is a first-order problem: the declarations of a problem file, in the order they appear.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Problem(Vec<Declaration>);

impl Problem {
    /// Returns the declarations of this problem.
    pub fn declarations(&self) -> &[Declaration] {
        &self.0
    }

    /// Returns the formulae that may be assumed, that is, those of declarations whose role is
    /// not a goal.
    pub fn background(&self) -> Vec<&Formula> {
        self.iter()
            .filter(|d| !d.role().is_goal())
            .map(Declaration::formula)
            .collect()
    }

    /// Returns the formulae to prove, that is, those of conjectures and negated conjectures.
    pub fn goals(&self) -> Vec<&Formula> {
        self.iter()
            .filter(|d| d.role().is_goal())
            .map(Declaration::formula)
            .collect()
    }

    /// Returns the background and the goal formulae of this problem. See [`Problem::background`]
    /// and [`Problem::goals`].
    pub fn split(&self) -> (Vec<&Formula>, Vec<&Formula>) {
        (self.background(), self.goals())
    }
}

impl From<Vec<Declaration>> for Problem {
    fn from(declarations: Vec<Declaration>) -> Self {
        Self(declarations)
    }
}

impl FromIterator<Declaration> for Problem {
    fn from_iter<I: IntoIterator<Item = Declaration>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Deref for Problem {
    type Target = [Declaration];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl IntoIterator for Problem {
    type Item = Declaration;

    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let ds: Vec<String> = self.iter().map(|d| d.to_string()).collect();
        write!(f, "{}", ds.join("\n"))
    }
}
