/*! Closes a set of formulae under elimination rules.

[`Deriver`] applies every elimination rule it is given to every formula it knows, starting
from the background formulae of a problem, until no rule derives a formula that is not
already known. Elimination rules only take formulae apart, so the closure of a finite set of
formulae is finite. Introduction rules are ignored: their closure is infinite.

**Example**:
```rust
use prover_fol::syntax::Formula;
use prover_nd::derive::Deriver;

let background: Formula = "p & (q & r)".parse().unwrap();
let derivation = Deriver::default().derive(vec![&background]);

assert!(derivation.is_saturated());
assert!(derivation.proves(&"r".parse().unwrap()));
assert!(!derivation.proves(&"p & r".parse().unwrap()));
```
*/
use crate::{
    rule::{self, Rule, RuleKind},
    trace::{APPLY, DERIVED, GOAL, LIMIT},
};
use itertools::Itertools;
use prover_fol::syntax::Formula;
use std::{collections::HashSet, fmt};
use tracing::{debug, info};

/// Records the derivation of a formula by a rule.
#[derive(Clone, PartialEq, Debug)]
pub struct Step {
    rule: &'static str,
    premises: Vec<Formula>,
    conclusion: Formula,
}

impl Step {
    /// Returns the name of the rule that derived the conclusion.
    #[inline(always)]
    pub fn rule(&self) -> &'static str {
        self.rule
    }

    #[inline(always)]
    pub fn premises(&self) -> &[Formula] {
        &self.premises
    }

    #[inline(always)]
    pub fn conclusion(&self) -> &Formula {
        &self.conclusion
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}    [{}: {}]",
            self.conclusion,
            self.rule,
            self.premises.iter().join(", ")
        )
    }
}

/// Is the result of closing a set of formulae under elimination rules.
#[derive(Clone, Debug)]
pub struct Derivation {
    known: Vec<Formula>,
    index: HashSet<Formula>,
    steps: Vec<Step>,
    saturated: bool,
}

impl Derivation {
    /// Returns the known formulae: the background followed by the derived formulae, in the
    /// order they were derived.
    #[inline(always)]
    pub fn known(&self) -> &[Formula] {
        &self.known
    }

    /// Returns the steps of the derivation.
    #[inline(always)]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Returns false if the derivation stopped at its step limit before every rule was
    /// exhausted.
    #[inline(always)]
    pub fn is_saturated(&self) -> bool {
        self.saturated
    }

    /// Returns true if `goal` is among the known formulae.
    pub fn proves(&self, goal: &Formula) -> bool {
        let proved = self.index.contains(goal);
        info!(event = GOAL, goal = %goal, proved = proved);
        proved
    }

    fn add(&mut self, formula: Formula) -> bool {
        if self.index.insert(formula.clone()) {
            self.known.push(formula);
            true
        } else {
            false
        }
    }
}

/// Derives the closure of a set of formulae under a list of elimination rules, optionally
/// bounded by a number of steps.
pub struct Deriver {
    rules: Vec<Box<dyn Rule>>,
    limit: Option<usize>,
}

impl Deriver {
    /// Creates a new deriver that applies the elimination rules among `rules`.
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Self {
        Self {
            rules: rules
                .into_iter()
                .filter(|r| r.kind() == RuleKind::Elimination)
                .collect(),
            limit: None,
        }
    }

    /// Stops derivations after `limit` steps.
    pub fn with_limit(self, limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..self
        }
    }

    /// Returns the names of the rules that the receiver applies.
    pub fn rules(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Closes `background` under the rules of the receiver.
    pub fn derive<'a, I>(&self, background: I) -> Derivation
    where
        I: IntoIterator<Item = &'a Formula>,
    {
        let mut derivation = Derivation {
            known: Vec::new(),
            index: HashSet::new(),
            steps: Vec::new(),
            saturated: true,
        };
        background.into_iter().for_each(|f| {
            derivation.add(f.clone());
        });

        let mut next = 0;
        while next < derivation.known.len() {
            let premises = [derivation.known[next].clone()];
            next += 1;

            for rule in &self.rules {
                for conclusion in conclusions(rule.as_ref(), &premises) {
                    if derivation.index.contains(&conclusion) {
                        continue;
                    }
                    if self.limit == Some(derivation.steps.len()) {
                        info!(event = LIMIT, step = derivation.steps.len() as u64);
                        derivation.saturated = false;
                        return derivation;
                    }

                    info!(
                        event = DERIVED,
                        step = derivation.steps.len() as u64 + 1,
                        rule = rule.name(),
                        premise = %premises[0],
                        conclusion = %conclusion,
                    );
                    derivation.add(conclusion.clone());
                    derivation.steps.push(Step {
                        rule: rule.name(),
                        premises: premises.to_vec(),
                        conclusion,
                    });
                }
            }
        }
        derivation
    }
}

impl Default for Deriver {
    fn default() -> Self {
        Self::new(rule::eliminations())
    }
}

// an indexed rule is applied at every index until it no longer applies
fn conclusions(rule: &dyn Rule, premises: &[Formula]) -> Vec<Formula> {
    let conclusions = if rule.is_indexed() {
        (0..)
            .map(|i| rule.apply(premises, Some(i)))
            .while_some()
            .flatten()
            .collect()
    } else {
        rule.apply(premises, None).unwrap_or_default()
    };
    if !conclusions.is_empty() {
        debug!(event = APPLY, rule = rule.name(), premise = %premises.iter().join(", "));
    }
    conclusions
}
