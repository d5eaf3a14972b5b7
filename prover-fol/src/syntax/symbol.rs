/*! Defines the symbols [`V`], [`C`], [`F`] and [`Pred`] for making terms and formulae.

[`V`]: crate::syntax::V
[`C`]: crate::syntax::C
[`F`]: crate::syntax::F
[`Pred`]: crate::syntax::Pred
*/

use super::{Formula, Predicate, Term};
use std::fmt;

/// Returns true if `name` can be written back into a problem file without quotes.
pub(crate) fn is_plain_word(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() => chars.all(|c| c.is_ascii_alphanumeric() || c == '_'),
        _ => false,
    }
}

/// Returns true if `name` is written the way the parser prints a number it has read.
pub(crate) fn is_plain_number(name: &str) -> bool {
    match name.as_bytes() {
        [b'0'] => true,
        [first, rest @ ..] => (b'1'..=b'9').contains(first) && rest.iter().all(u8::is_ascii_digit),
        [] => false,
    }
}

// writes `name` the way the parser reads it back
pub(crate) fn write_word(f: &mut fmt::Formatter, name: &str) -> fmt::Result {
    if is_plain_word(name) {
        write!(f, "{}", name)
    } else {
        write!(f, "'{}'", name.replace('\\', "\\\\").replace('\'', "\\'"))
    }
}

// like `write_word` but for constants and declaration names, which may also be numbers
pub(crate) fn write_name(f: &mut fmt::Formatter, name: &str) -> fmt::Result {
    if is_plain_number(name) {
        write!(f, "{}", name)
    } else {
        write_word(f, name)
    }
}

/// Represents an uninterpreted function symbol with a given name.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct F(pub String);

impl F {
    /// Applies the receiver on a list of terms. The arity of the function is implied by the
    /// length of `terms`.
    pub fn app(self, terms: Vec<Term>) -> Term {
        Term::App {
            function: self,
            terms,
        }
    }
}

impl<S: Into<String>> From<S> for F {
    fn from(name: S) -> Self {
        Self(name.into())
    }
}

impl fmt::Display for F {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for F {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_word(f, &self.0)
    }
}

/// Represents a variable symbol with a given name.
///
/// **Note**: Variables of a problem file start with an uppercase letter.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct V(pub String);

impl<S: Into<String>> From<S> for V {
    fn from(name: S) -> Self {
        Self(name.into())
    }
}

impl fmt::Display for V {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for V {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents a constant symbol: a word, a quoted word or a number literal.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct C(pub String);

impl<S: Into<String>> From<S> for C {
    fn from(name: S) -> Self {
        Self(name.into())
    }
}

impl fmt::Display for C {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for C {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_name(f, &self.0)
    }
}

/// Represents a predicate symbol with a given name.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct Pred(pub String);

impl Pred {
    /// Applies the receiver on a list of terms. An empty list makes a proposition.
    pub fn app(self, terms: Vec<Term>) -> Formula {
        Predicate::new(self, terms).into()
    }
}

impl<S: Into<String>> From<S> for Pred {
    fn from(name: S) -> Self {
        Self(name.into())
    }
}

impl fmt::Display for Pred {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Pred {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_word(f, &self.0)
    }
}
