/*! Defines the inference rules of natural deduction.

Every rule is a pure function from an ordered list of premises to a conclusion. A rule that
does not match its premises returns `None`: an inapplicable rule is not an error.

**Example**:
```rust
use prover_fol::syntax::Formula;
use prover_nd::rule::{AndElimLeft, AndIntro, Rule, RuleKind};

let p: Formula = "p".parse().unwrap();
let q: Formula = "q".parse().unwrap();

let conjunction = AndIntro.apply(&[p.clone(), q], None).unwrap();
assert_eq!("(<p> & <q>)", conjunction[0].to_string());

assert_eq!(RuleKind::Elimination, AndElimLeft.kind());
assert_eq!(Some(vec![p.clone()]), AndElimLeft.apply(&conjunction, None));
assert_eq!(None, AndElimLeft.apply(&[p], None));
```
*/
use prover_fol::syntax::{And, Formula};
use std::fmt;

/// Classifies rules by whether they build or take apart a connective.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum RuleKind {
    /// Builds a connective out of simpler premises.
    Introduction,

    /// Takes a connective apart into simpler conclusions.
    Elimination,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Introduction => write!(f, "I"),
            Self::Elimination => write!(f, "E"),
        }
    }
}

/// Is the trait of inference rules.
pub trait Rule {
    /// Returns the name of the rule, as it is shown in derivations.
    fn name(&self) -> &'static str;

    /// Returns whether the rule is an introduction or an elimination rule.
    fn kind(&self) -> RuleKind;

    /// Returns true if the rule selects one of the operands of its premise by an index.
    fn is_indexed(&self) -> bool {
        false
    }

    /// Applies the rule to `premises` and returns its conclusions, or `None` if the rule does
    /// not apply. `index` selects an operand for rules that are indexed and is ignored by the
    /// others.
    fn apply(&self, premises: &[Formula], index: Option<usize>) -> Option<Vec<Formula>>;
}

// the conjunction of a single premise
fn single_conjunction(premises: &[Formula]) -> Option<&And> {
    match premises {
        [Formula::And(and)] => Some(and),
        _ => None,
    }
}

/// Conjunction introduction: from two or more premises, infers their conjunction.
#[derive(Clone, Copy, Default, Debug)]
pub struct AndIntro;

impl Rule for AndIntro {
    fn name(&self) -> &'static str {
        "AndI"
    }

    fn kind(&self) -> RuleKind {
        RuleKind::Introduction
    }

    fn apply(&self, premises: &[Formula], _: Option<usize>) -> Option<Vec<Formula>> {
        And::new(premises.to_vec())
            .ok()
            .map(|and| vec![and.into()])
    }
}

/// Left conjunction elimination: from a conjunction, infers its first operand.
#[derive(Clone, Copy, Default, Debug)]
pub struct AndElimLeft;

impl Rule for AndElimLeft {
    fn name(&self) -> &'static str {
        "AndEL"
    }

    fn kind(&self) -> RuleKind {
        RuleKind::Elimination
    }

    fn apply(&self, premises: &[Formula], _: Option<usize>) -> Option<Vec<Formula>> {
        let and = single_conjunction(premises)?;
        and.formulae().first().map(|f| vec![f.clone()])
    }
}

/// Right conjunction elimination: from a conjunction, infers its second operand.
///
/// **Note**: For a conjunction of more than two operands, the remaining operands are not
/// inferred; see [`AndElim`].
#[derive(Clone, Copy, Default, Debug)]
pub struct AndElimRight;

impl Rule for AndElimRight {
    fn name(&self) -> &'static str {
        "AndER"
    }

    fn kind(&self) -> RuleKind {
        RuleKind::Elimination
    }

    fn apply(&self, premises: &[Formula], _: Option<usize>) -> Option<Vec<Formula>> {
        let and = single_conjunction(premises)?;
        and.formulae().get(1).map(|f| vec![f.clone()])
    }
}

/// General conjunction elimination: from a conjunction, infers its operand at a given index,
/// the first operand when no index is given. The rule does not apply when the index is out of
/// range.
#[derive(Clone, Copy, Default, Debug)]
pub struct AndElim;

impl Rule for AndElim {
    fn name(&self) -> &'static str {
        "AndE"
    }

    fn kind(&self) -> RuleKind {
        RuleKind::Elimination
    }

    fn is_indexed(&self) -> bool {
        true
    }

    fn apply(&self, premises: &[Formula], index: Option<usize>) -> Option<Vec<Formula>> {
        let and = single_conjunction(premises)?;
        and.formulae()
            .get(index.unwrap_or(0))
            .map(|f| vec![f.clone()])
    }
}

/// Returns every rule implemented by this module.
pub fn all() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(AndIntro),
        Box::new(AndElimLeft),
        Box::new(AndElimRight),
        Box::new(AndElim),
    ]
}

/// Returns the elimination rules implemented by this module.
pub fn eliminations() -> Vec<Box<dyn Rule>> {
    all()
        .into_iter()
        .filter(|r| r.kind() == RuleKind::Elimination)
        .collect()
}
