/*! Defines the annotated declarations of a problem file. */

use super::{symbol::write_name, Error, Formula};
use std::{fmt, str::FromStr};

/// Is the logical sub-language a declaration is written in.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Dialect {
    Fof,
    Cnf,
    Thf,
    Tff,
    Tcf,
    Tpi,
}

const DIALECTS: [(&str, Dialect); 6] = [
    ("fof", Dialect::Fof),
    ("cnf", Dialect::Cnf),
    ("thf", Dialect::Thf),
    ("tff", Dialect::Tff),
    ("tcf", Dialect::Tcf),
    ("tpi", Dialect::Tpi),
];

impl Dialect {
    /// Returns the token of the receiver in a problem file.
    pub fn name(&self) -> &'static str {
        DIALECTS
            .iter()
            .find(|(_, dialect)| dialect == self)
            .map(|(name, _)| *name)
            .unwrap_or_default()
    }
}

impl FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DIALECTS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|(_, dialect)| *dialect)
            .ok_or_else(|| Error::InvalidDialect {
                dialect: s.to_owned(),
            })
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Is the logical status of a declaration in its problem.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Role {
    Axiom,
    Conjecture,
    NegatedConjecture,
    Theorem,
    Lemma,
    Hypothesis,
    Definition,
    Assumption,
    Corollary,
    Plain,
    Type,
    Interpretation,
}

const ROLES: [(&str, Role); 12] = [
    ("axiom", Role::Axiom),
    ("conjecture", Role::Conjecture),
    ("negated_conjecture", Role::NegatedConjecture),
    ("theorem", Role::Theorem),
    ("lemma", Role::Lemma),
    ("hypothesis", Role::Hypothesis),
    ("definition", Role::Definition),
    ("assumption", Role::Assumption),
    ("corollary", Role::Corollary),
    ("plain", Role::Plain),
    ("type", Role::Type),
    ("interpretation", Role::Interpretation),
];

impl Role {
    /// Returns the token of the receiver in a problem file.
    pub fn name(&self) -> &'static str {
        ROLES
            .iter()
            .find(|(_, role)| role == self)
            .map(|(name, _)| *name)
            .unwrap_or_default()
    }

    /// Returns true if a declaration with the receiver role states something to prove rather
    /// than something to assume.
    pub fn is_goal(&self) -> bool {
        matches!(self, Self::Conjecture | Self::NegatedConjecture)
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ROLES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|(_, role)| *role)
            .ok_or_else(|| Error::InvalidRole { role: s.to_owned() })
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Is a named formula of a problem, annotated with its [`Dialect`] and [`Role`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Declaration {
    name: String,
    dialect: Dialect,
    role: Role,
    formula: Formula,
}

impl Declaration {
    /// Creates a new declaration. `dialect` and `role` are matched case-insensitively against
    /// [`Dialect`] and [`Role`]; an unknown token fails the construction.
    ///
    /// **Example**:
    /// ```rust
    /// # use prover_fol::syntax::{Declaration, Dialect, Formula, Role};
    /// let declaration = Declaration::new("FOF", "ax1", "Axiom", Formula::Top).unwrap();
    /// assert_eq!(Dialect::Fof, declaration.dialect());
    /// assert_eq!(Role::Axiom, declaration.role());
    ///
    /// assert!(Declaration::new("fof", "ax1", "rumour", Formula::Top).is_err());
    /// ```
    pub fn new<S: Into<String>>(
        dialect: &str,
        name: S,
        role: &str,
        formula: Formula,
    ) -> Result<Self, Error> {
        Ok(Self {
            dialect: dialect.parse()?,
            name: name.into(),
            role: role.parse()?,
            formula,
        })
    }

    /// Returns the name of the receiver.
    #[inline(always)]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the dialect of the receiver.
    #[inline(always)]
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Returns the role of the receiver.
    #[inline(always)]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the formula of the receiver.
    #[inline(always)]
    pub fn formula(&self) -> &Formula {
        &self.formula
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}(", self.dialect)?;
        write_name(f, &self.name)?;
        write!(f, ", {}, {:?}).", self.role, self.formula)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[test]
    fn dialect_from_str() {
        for (name, dialect) in DIALECTS.iter() {
            assert_eq!(Ok(*dialect), name.parse());
            assert_eq!(Ok(*dialect), name.to_uppercase().parse());
        }
        assert_eq!(Ok(Dialect::Fof), "FoF".parse());
        assert_eq!(
            Err(Error::InvalidDialect {
                dialect: "xyz".into()
            }),
            "xyz".parse::<Dialect>()
        );
        assert!("fof ".parse::<Dialect>().is_err());
        assert!("".parse::<Dialect>().is_err());
    }

    #[test]
    fn role_from_str() {
        for (name, role) in ROLES.iter() {
            assert_eq!(Ok(*role), name.parse());
            assert_eq!(Ok(*role), name.to_uppercase().parse());
        }
        assert_eq!(Ok(Role::NegatedConjecture), "Negated_conjecture".parse());
        assert_eq!(
            Err(Error::InvalidRole {
                role: "negatedconjecture".into()
            }),
            "negatedconjecture".parse::<Role>()
        );
        assert!("axioms".parse::<Role>().is_err());
    }

    #[test]
    fn role_is_goal() {
        assert!(Role::Conjecture.is_goal());
        assert!(Role::NegatedConjecture.is_goal());
        for (_, role) in ROLES.iter().filter(|(name, _)| !name.contains("conjecture")) {
            assert!(!role.is_goal());
        }
    }

    #[test]
    fn names_round_trip() {
        for (name, dialect) in DIALECTS.iter() {
            assert_eq!(*name, dialect.to_string());
        }
        for (name, role) in ROLES.iter() {
            assert_eq!(*name, role.to_string());
        }
    }

    #[test]
    fn declaration_new() {
        let declaration = Declaration::new("Cnf", "c_1", "NEGATED_CONJECTURE", prop("p")).unwrap();
        assert_eq!("c_1", declaration.name());
        assert_eq!(Dialect::Cnf, declaration.dialect());
        assert_eq!(Role::NegatedConjecture, declaration.role());
        assert_eq!(&prop("p"), declaration.formula());

        assert_eq!(
            Err(Error::InvalidDialect {
                dialect: "fol".into()
            }),
            Declaration::new("fol", "ax", "axiom", prop("p"))
        );
        assert_eq!(
            Err(Error::InvalidRole {
                role: "guess".into()
            }),
            Declaration::new("fof", "ax", "guess", prop("p"))
        );
    }

    #[test]
    fn declaration_to_string() {
        let formula = p().app(vec![x()]).implies(q().app(vec![x()]));
        let declaration = Declaration::new("fof", "ax1", "axiom", formula).unwrap();
        assert_eq!("fof(ax1, axiom, (p(X) => q(X))).", declaration.to_string());

        let declaration = Declaration::new("fof", "My goal", "conjecture", prop("p")).unwrap();
        assert_eq!("fof('My goal', conjecture, p).", declaration.to_string());
    }
}
