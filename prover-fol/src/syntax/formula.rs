/*! Defines the syntax of first-order formulae with equality, together with the connectives
they are made of. */
use super::{symbol::write_word, Error, Pred, Term, V};
use itertools::Itertools;
use std::fmt;

/// Is the tag of a [`Formula`] variant.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum FormulaKind {
    Top,
    Bottom,
    Predicate,
    Equality,
    Inequality,
    Negation,
    Conjunction,
    Disjunction,
    Implication,
    Biconditional,
    Universal,
    Existential,
}

/// Represents an atomic formula, obtained by applying a predicate on a list of terms.
///
/// **Note**: An empty list of terms makes a proposition.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Predicate {
    predicate: Pred,
    terms: Vec<Term>,
}

impl Predicate {
    /// Creates a new atomic formula.
    pub fn new(predicate: Pred, terms: Vec<Term>) -> Self {
        Self { predicate, terms }
    }

    /// Returns the predicate symbol of the receiver.
    #[inline(always)]
    pub fn predicate(&self) -> &Pred {
        &self.predicate
    }

    /// Returns the terms of the receiver.
    #[inline(always)]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<{}>", self.predicate)?;
        if !self.terms.is_empty() {
            write!(f, "({})", self.terms.iter().join(", "))?;
        }
        Ok(())
    }
}

/// Represents an equation between two terms.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Equals {
    left: Term,
    right: Term,
}

impl Equals {
    /// Creates a new equation.
    pub fn new(left: Term, right: Term) -> Self {
        Self { left, right }
    }

    /// Returns the term on the left of the equation.
    #[inline(always)]
    pub fn left(&self) -> &Term {
        &self.left
    }

    /// Returns the term on the right of the equation.
    #[inline(always)]
    pub fn right(&self) -> &Term {
        &self.right
    }
}

/// Represents an inequation between two terms.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct NotEquals {
    left: Term,
    right: Term,
}

impl NotEquals {
    /// Creates a new inequation.
    pub fn new(left: Term, right: Term) -> Self {
        Self { left, right }
    }

    /// Returns the term on the left of the inequation.
    #[inline(always)]
    pub fn left(&self) -> &Term {
        &self.left
    }

    /// Returns the term on the right of the inequation.
    #[inline(always)]
    pub fn right(&self) -> &Term {
        &self.right
    }
}

/// Represents the negation of a formula.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Not {
    formula: Formula,
}

impl Not {
    /// Wraps `formula` in a new instance of [`Not`].
    pub fn new(formula: Formula) -> Self {
        Self { formula }
    }

    /// Returns the formula wrapped in the receiver.
    #[inline(always)]
    pub fn formula(&self) -> &Formula {
        &self.formula
    }
}

/// Represents the conjunction of two or more formulae.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct And {
    formulae: Vec<Formula>,
}

impl And {
    /// Returns the conjunction of `formulae`. It fails if fewer than two formulae are given.
    pub fn new(formulae: Vec<Formula>) -> Result<Self, Error> {
        if formulae.len() < 2 {
            return Err(Error::Arity {
                connective: "&",
                expected: "at least 2",
                found: formulae.len(),
            });
        }
        Ok(Self { formulae })
    }

    /// Returns the operands of the receiver, in order.
    #[inline(always)]
    pub fn formulae(&self) -> &[Formula] {
        &self.formulae
    }
}

/// Represents the disjunction of two or more formulae.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Or {
    formulae: Vec<Formula>,
}

impl Or {
    /// Returns the disjunction of `formulae`. It fails if fewer than two formulae are given.
    pub fn new(formulae: Vec<Formula>) -> Result<Self, Error> {
        if formulae.len() < 2 {
            return Err(Error::Arity {
                connective: "|",
                expected: "at least 2",
                found: formulae.len(),
            });
        }
        Ok(Self { formulae })
    }

    /// Returns the operands of the receiver, in order.
    #[inline(always)]
    pub fn formulae(&self) -> &[Formula] {
        &self.formulae
    }
}

// splits exactly two operands off `operands`
fn binary(connective: &'static str, operands: Vec<Formula>) -> Result<(Formula, Formula), Error> {
    let found = operands.len();
    operands
        .into_iter()
        .collect_tuple()
        .ok_or(Error::Arity {
            connective,
            expected: "exactly 2",
            found,
        })
}

/// Represents an implication between two formulae.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Implies {
    premise: Formula,
    consequence: Formula,
}

impl Implies {
    /// Returns an implication with a `premise` and a `consequence`.
    pub fn new(premise: Formula, consequence: Formula) -> Self {
        Self {
            premise,
            consequence,
        }
    }

    /// Builds an implication from an operand list, read as `[premise, consequence]`.
    pub fn from_operands(operands: Vec<Formula>) -> Result<Self, Error> {
        let (premise, consequence) = binary("=>", operands)?;
        Ok(Self::new(premise, consequence))
    }

    /// Returns the premise of the receiver.
    #[inline(always)]
    pub fn premise(&self) -> &Formula {
        &self.premise
    }

    /// Returns the consequence of the receiver.
    #[inline(always)]
    pub fn consequence(&self) -> &Formula {
        &self.consequence
    }
}

/// Represents a bi-implication between two formulae.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Iff {
    left: Formula,
    right: Formula,
}

impl Iff {
    /// Returns a bi-implication between `left` and `right`.
    pub fn new(left: Formula, right: Formula) -> Self {
        Self { left, right }
    }

    /// Builds a bi-implication from an operand list of length two.
    pub fn from_operands(operands: Vec<Formula>) -> Result<Self, Error> {
        let (left, right) = binary("<=>", operands)?;
        Ok(Self::new(left, right))
    }

    /// Returns the formula on the left of the receiver.
    #[inline(always)]
    pub fn left(&self) -> &Formula {
        &self.left
    }

    /// Returns the formula on the right of the receiver.
    #[inline(always)]
    pub fn right(&self) -> &Formula {
        &self.right
    }
}

// keeps the first occurrence of every bound variable
fn binder(quantifier: &'static str, variables: Vec<V>) -> Result<Vec<V>, Error> {
    if variables.is_empty() {
        return Err(Error::EmptyBinder { quantifier });
    }
    Ok(variables.into_iter().unique().collect())
}

/// Represents an existentially quantified formula.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Exists {
    variables: Vec<V>,
    formula: Formula,
}

impl Exists {
    /// Returns an existentially quantified formula with bound `variables` and `formula`.
    /// It fails if `variables` is empty.
    pub fn new(variables: Vec<V>, formula: Formula) -> Result<Self, Error> {
        Ok(Self {
            variables: binder("?", variables)?,
            formula,
        })
    }

    /// Returns the bound variables of the receiver.
    #[inline(always)]
    pub fn variables(&self) -> &[V] {
        &self.variables
    }

    /// Returns the body of the receiver.
    #[inline(always)]
    pub fn formula(&self) -> &Formula {
        &self.formula
    }
}

/// Represents a universally quantified formula.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Forall {
    variables: Vec<V>,
    formula: Formula,
}

impl Forall {
    /// Returns a universally quantified formula with bound `variables` and `formula`.
    /// It fails if `variables` is empty.
    pub fn new(variables: Vec<V>, formula: Formula) -> Result<Self, Error> {
        Ok(Self {
            variables: binder("!", variables)?,
            formula,
        })
    }

    /// Returns the bound variables of the receiver.
    #[inline(always)]
    pub fn variables(&self) -> &[V] {
        &self.variables
    }

    /// Returns the body of the receiver.
    #[inline(always)]
    pub fn formula(&self) -> &Formula {
        &self.formula
    }
}

/// Is an abstract syntax tree (AST) for first-order formulae.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Formula {
    /// Is logical top (⊤) or truth.
    Top,

    /// Is logical bottom (⊥) or falsehood.
    Bottom,

    /// Is an atomic formula, wrapping a [`Predicate`].
    Atom(Predicate),

    /// Is an equation, wrapping an [`Equals`].
    Equals(Equals),

    /// Is an inequation, wrapping a [`NotEquals`].
    NotEquals(NotEquals),

    /// Is the negation of a formula, wrapping a [`Not`].
    Not(Box<Not>),

    /// Is a conjunction of two or more formulae, wrapping an [`And`].
    And(And),

    /// Is a disjunction of two or more formulae, wrapping an [`Or`].
    Or(Or),

    /// Is an implication between two formulae, wrapping an [`Implies`].
    Implies(Box<Implies>),

    /// Is a bi-implication between two formulae, wrapping an [`Iff`].
    Iff(Box<Iff>),

    /// Is a universally quantified formula, wrapping a [`Forall`].
    Forall(Box<Forall>),

    /// Is an existentially quantified formula, wrapping an [`Exists`].
    Exists(Box<Exists>),
}

impl From<Predicate> for Formula {
    fn from(value: Predicate) -> Self {
        Self::Atom(value)
    }
}

impl From<Equals> for Formula {
    fn from(value: Equals) -> Self {
        Self::Equals(value)
    }
}

impl From<NotEquals> for Formula {
    fn from(value: NotEquals) -> Self {
        Self::NotEquals(value)
    }
}

impl From<Not> for Formula {
    fn from(value: Not) -> Self {
        Self::Not(Box::new(value))
    }
}

impl From<And> for Formula {
    fn from(value: And) -> Self {
        Self::And(value)
    }
}

impl From<Or> for Formula {
    fn from(value: Or) -> Self {
        Self::Or(value)
    }
}

impl From<Implies> for Formula {
    fn from(value: Implies) -> Self {
        Self::Implies(Box::new(value))
    }
}

impl From<Iff> for Formula {
    fn from(value: Iff) -> Self {
        Self::Iff(Box::new(value))
    }
}

impl From<Forall> for Formula {
    fn from(value: Forall) -> Self {
        Self::Forall(Box::new(value))
    }
}

impl From<Exists> for Formula {
    fn from(value: Exists) -> Self {
        Self::Exists(Box::new(value))
    }
}

impl Formula {
    /// Returns the negation of `formula`.
    #[allow(clippy::should_implement_trait)]
    #[inline(always)]
    pub fn not(formula: Self) -> Self {
        Not::new(formula).into()
    }

    /// Returns a binary conjunction of the receiver and `formula`.
    #[inline(always)]
    pub fn and(self, formula: Self) -> Self {
        Self::And(And {
            formulae: vec![self, formula],
        })
    }

    /// Returns a binary disjunction of the receiver and `formula`.
    #[inline(always)]
    pub fn or(self, formula: Self) -> Self {
        Self::Or(Or {
            formulae: vec![self, formula],
        })
    }

    /// Returns an implication between the receiver and `formula`.
    #[inline(always)]
    pub fn implies(self, formula: Self) -> Self {
        Implies::new(self, formula).into()
    }

    /// Returns a bi-implication between the receiver and `formula`.
    #[inline(always)]
    pub fn iff(self, formula: Self) -> Self {
        Iff::new(self, formula).into()
    }

    /// Returns a universally quantified formula with the given `variables` and `formula`.
    pub fn forall(variables: Vec<V>, formula: Self) -> Result<Self, Error> {
        Forall::new(variables, formula).map(Into::into)
    }

    /// Returns an existentially quantified formula with the given `variables` and `formula`.
    pub fn exists(variables: Vec<V>, formula: Self) -> Result<Self, Error> {
        Exists::new(variables, formula).map(Into::into)
    }

    /// Returns the tag of the receiver's variant.
    pub fn kind(&self) -> FormulaKind {
        match self {
            Self::Top => FormulaKind::Top,
            Self::Bottom => FormulaKind::Bottom,
            Self::Atom(_) => FormulaKind::Predicate,
            Self::Equals(_) => FormulaKind::Equality,
            Self::NotEquals(_) => FormulaKind::Inequality,
            Self::Not(_) => FormulaKind::Negation,
            Self::And(_) => FormulaKind::Conjunction,
            Self::Or(_) => FormulaKind::Disjunction,
            Self::Implies(_) => FormulaKind::Implication,
            Self::Iff(_) => FormulaKind::Biconditional,
            Self::Forall(_) => FormulaKind::Universal,
            Self::Exists(_) => FormulaKind::Existential,
        }
    }

    /// Returns true if the receiver is a quantified formula that binds `term`, which must be a
    /// variable term. Only the binder of the receiver itself is consulted.
    ///
    /// **Example**:
    /// ```rust
    /// # use prover_fol::syntax::{Formula, Term, V};
    /// let formula: Formula = "! [X]: p(X, Y)".parse().unwrap();
    ///
    /// assert!(formula.var_is_bound(&Term::from(V::from("X"))));
    /// assert!(!formula.var_is_bound(&Term::from(V::from("Y"))));
    /// ```
    pub fn var_is_bound(&self, term: &Term) -> bool {
        let variable = match term.as_var() {
            Some(variable) => variable,
            None => return false,
        };
        match self {
            Self::Forall(this) => this.variables.contains(variable),
            Self::Exists(this) => this.variables.contains(variable),
            _ => false,
        }
    }

    /// Returns a list of free variable symbols in the receiver formula.
    ///
    /// **Note**: In the list of free variables, each variable symbol appears only once
    /// even if it is present at multiple positions of the receiver formula.
    pub fn free_vars(&self) -> Vec<&V> {
        match self {
            Self::Top | Self::Bottom => Vec::new(),
            Self::Atom(this) => this
                .terms
                .iter()
                .flat_map(|t| t.free_vars())
                .unique()
                .collect(),
            Self::Equals(this) => this
                .left
                .free_vars()
                .into_iter()
                .chain(this.right.free_vars())
                .unique()
                .collect(),
            Self::NotEquals(this) => this
                .left
                .free_vars()
                .into_iter()
                .chain(this.right.free_vars())
                .unique()
                .collect(),
            Self::Not(this) => this.formula.free_vars(),
            Self::And(this) => this
                .formulae
                .iter()
                .flat_map(|f| f.free_vars())
                .unique()
                .collect(),
            Self::Or(this) => this
                .formulae
                .iter()
                .flat_map(|f| f.free_vars())
                .unique()
                .collect(),
            Self::Implies(this) => this
                .premise
                .free_vars()
                .into_iter()
                .chain(this.consequence.free_vars())
                .unique()
                .collect(),
            Self::Iff(this) => this
                .left
                .free_vars()
                .into_iter()
                .chain(this.right.free_vars())
                .unique()
                .collect(),
            Self::Forall(this) => this
                .formula
                .free_vars()
                .into_iter()
                .filter(|v| !this.variables.contains(v))
                .collect(),
            Self::Exists(this) => this
                .formula
                .free_vars()
                .into_iter()
                .filter(|v| !this.variables.contains(v))
                .collect(),
        }
    }
}

// used for pretty printing a formula
impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Top => write!(f, "T"),
            Self::Bottom => write!(f, "⊥"),
            Self::Atom(this) => fmt::Display::fmt(this, f),
            Self::Equals(this) => write!(f, "{} = {}", this.left, this.right),
            Self::NotEquals(this) => write!(f, "{} != {}", this.left, this.right),
            Self::Not(this) => write!(f, "~ ({})", this.formula),
            Self::And(this) => write!(f, "({})", this.formulae.iter().join(" & ")),
            Self::Or(this) => write!(f, "({})", this.formulae.iter().join(" | ")),
            Self::Implies(this) => write!(f, "{} ⇒ {}", this.premise, this.consequence),
            Self::Iff(this) => write!(f, "{} ⇔ {}", this.left, this.right),
            Self::Forall(this) => {
                write!(f, "∀ [{}]: {}", this.variables.iter().join(", "), this.formula)
            }
            Self::Exists(this) => {
                write!(f, "∃ [{}]: {}", this.variables.iter().join(", "), this.formula)
            }
        }
    }
}

// renders problem-file syntax; every binary formula is parenthesized so the output
// parses back into the same tree
impl fmt::Debug for Formula {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn operands(formulae: &[Formula], symbol: &str) -> String {
            formulae
                .iter()
                .map(|formula| format!("{:?}", formula))
                .join(symbol)
        }

        match self {
            Self::Top => write!(f, "$true"),
            Self::Bottom => write!(f, "$false"),
            Self::Atom(this) => {
                write_word(f, &this.predicate.0)?;
                if !this.terms.is_empty() {
                    let ts = this.terms.iter().map(|t| format!("{:?}", t)).join(", ");
                    write!(f, "({})", ts)?;
                }
                Ok(())
            }
            Self::Equals(this) => write!(f, "{:?} = {:?}", this.left, this.right),
            Self::NotEquals(this) => write!(f, "{:?} != {:?}", this.left, this.right),
            Self::Not(this) => write!(f, "~({:?})", this.formula),
            Self::And(this) => write!(f, "({})", operands(&this.formulae, " & ")),
            Self::Or(this) => write!(f, "({})", operands(&this.formulae, " | ")),
            Self::Implies(this) => write!(f, "({:?} => {:?})", this.premise, this.consequence),
            Self::Iff(this) => write!(f, "({:?} <=> {:?})", this.left, this.right),
            Self::Forall(this) => {
                write!(f, "! [{}] : {:?}", this.variables.iter().join(", "), this.formula)
            }
            Self::Exists(this) => {
                write!(f, "? [{}] : {:?}", this.variables.iter().join(", "), this.formula)
            }
        }
    }
}
