/*! Transforms the concrete syntax tree (CST) of a problem into typed [`Declaration`]s.

[`Transformer`] is a stateless [`Visitor`]: each node is folded into a [`Value`] once its
children are folded. Wrapper nodes ([`Rule::FofF`], [`Rule::Term`] and [`Rule::Functor`])
are kept as [`Value::Tree`] and stripped by the node that consumes them. Along the way the
transformer

* folds chains of `&` and `|` into n-ary conjunctions and disjunctions,
* swaps the operands of a backward implication `B <= A` so that it is stored as `A => B`,
* splits the children of a quantifier at `:` into its bound variables and its body.

[`Declaration`]: crate::syntax::Declaration
*/
use crate::{
    cst::{Node, Rule, Token, Visitor},
    syntax::{
        self, And, Declaration, Exists, Forall, Formula, Iff, Implies, Or, Pred, Term, C, F, V,
    },
};
use std::convert::TryFrom;
use thiserror::Error;

/// Is the deepest stack of [`Rule::FofF`] wrappers the grammar puts around a formula that
/// reaches its consumer.
pub const MAX_WRAPPER_DEPTH: usize = 1;

/// Separates the bound variables of a quantifier from its body.
const BINDER_SEPARATOR: &str = ":";

/// Is the type of errors raised by the transformer.
#[derive(Error, PartialEq, Debug)]
pub enum Error {
    /// Is returned when a node does not have the shape its label promises.
    #[error("malformed `{rule}` at offset {location}: {message}")]
    Structural {
        rule: Rule,
        location: usize,
        message: String,
    },

    /// Is returned when a declaration names an unknown dialect or role.
    #[error("{source}")]
    Syntax {
        #[from]
        source: syntax::Error,
    },
}

/// Is the result of transforming a node of the CST.
#[derive(Clone, PartialEq, Debug)]
pub enum Value {
    /// Is a token that no rule has folded yet.
    Token(Token),

    /// Is an identifier or a quoted word.
    Word(String),

    /// Is a number literal.
    Integer(u64),

    Term(Term),

    Formula(Formula),

    Declaration(Declaration),

    Declarations(Vec<Declaration>),

    /// Is a wrapper node, kept with its transformed children.
    Tree {
        rule: Rule,
        children: Vec<Value>,
        location: usize,
    },
}

impl Value {
    // names the receiver in error messages
    fn describe(&self) -> String {
        match self {
            Self::Token(token) => format!("token `{}`", token.value()),
            Self::Word(word) => format!("word `{}`", word),
            Self::Integer(number) => format!("number `{}`", number),
            Self::Term(term) => format!("term `{}`", term),
            Self::Formula(formula) => format!("formula `{}`", formula),
            Self::Declaration(declaration) => format!("declaration `{}`", declaration.name()),
            Self::Declarations(_) => "a list of declarations".into(),
            Self::Tree { rule, .. } => format!("`{}` node", rule),
        }
    }
}

// the node being transformed, for error reporting
#[derive(Clone, Copy)]
struct At {
    rule: Rule,
    location: usize,
}

impl At {
    fn error<S: Into<String>>(self, message: S) -> Error {
        Error::Structural {
            rule: self.rule,
            location: self.location,
            message: message.into(),
        }
    }

    fn unexpected(self, expected: &str, found: &Value) -> Error {
        self.error(format!("expected {}, found {}", expected, found.describe()))
    }

    // takes exactly `N` children
    fn children<const N: usize>(self, children: Vec<Value>) -> Result<[Value; N], Error> {
        <[Value; N]>::try_from(children)
            .map_err(|c| self.error(format!("expected {} children, found {}", N, c.len())))
    }

    fn single(self, children: Vec<Value>) -> Result<Value, Error> {
        let [child] = self.children::<1>(children)?;
        Ok(child)
    }

    // strips one layer of any wrapper
    fn unwrap(self, value: Value) -> Result<Value, Error> {
        match value {
            Value::Tree { children, .. } => self.single(children),
            other => Ok(other),
        }
    }

    // strips the `fof_f` wrappers around a formula, at most `MAX_WRAPPER_DEPTH` of them
    fn descend(self, value: Value) -> Result<Value, Error> {
        let mut value = value;
        let mut depth = 0;
        loop {
            match value {
                Value::Tree {
                    rule: Rule::FofF,
                    children,
                    ..
                } if depth < MAX_WRAPPER_DEPTH => {
                    value = self.single(children)?;
                    depth += 1;
                }
                Value::Tree { rule: Rule::FofF, .. } => {
                    return Err(self.error(format!(
                        "formula wrappers nested deeper than {}",
                        MAX_WRAPPER_DEPTH
                    )))
                }
                other => return Ok(other),
            }
        }
    }

    fn formula(self, value: Value) -> Result<Formula, Error> {
        match self.descend(value)? {
            Value::Formula(formula) => Ok(formula),
            other => Err(self.unexpected("a formula", &other)),
        }
    }

    fn formulae(self, children: Vec<Value>) -> Result<Vec<Formula>, Error> {
        children.into_iter().map(|c| self.formula(c)).collect()
    }

    fn term(self, value: Value) -> Result<Term, Error> {
        match self.unwrap(value)? {
            Value::Term(term) => Ok(term),
            other => Err(self.unexpected("a term", &other)),
        }
    }

    fn word(self, value: Value) -> Result<String, Error> {
        match self.unwrap(value)? {
            Value::Word(word) => Ok(word),
            other => Err(self.unexpected("a word", &other)),
        }
    }

    // concatenates the text of token children
    fn text(self, children: Vec<Value>) -> Result<String, Error> {
        children
            .into_iter()
            .map(|c| match c {
                Value::Token(token) => Ok(token.value().to_owned()),
                other => Err(self.unexpected("a token", &other)),
            })
            .collect()
    }

    // splits the functor of an application off its arguments
    fn application(self, children: Vec<Value>) -> Result<(String, Vec<Term>), Error> {
        let mut children = children.into_iter();
        let name = match children.next() {
            Some(functor) => self.word(functor)?,
            None => return Err(self.error("missing functor")),
        };
        let terms = children
            .map(|c| self.term(c))
            .collect::<Result<Vec<_>, _>>()?;
        Ok((name, terms))
    }

    fn quantified(self, children: Vec<Value>) -> Result<(Vec<V>, Formula), Error> {
        let mut children = children;
        let separator = children
            .iter()
            .position(|c| matches!(c, Value::Token(t) if t.value() == BINDER_SEPARATOR))
            .ok_or_else(|| {
                self.error(format!(
                    "missing `{}` between the bound variables and the body",
                    BINDER_SEPARATOR
                ))
            })?;
        let body = children.split_off(separator + 1);
        children.truncate(separator);

        let variables = children
            .into_iter()
            .map(|c| match c {
                Value::Term(Term::Var { variable }) => Ok(variable),
                other => Err(self.unexpected("a bound variable", &other)),
            })
            .collect::<Result<Vec<_>, _>>()?;
        let mut body = self.formulae(body)?;
        if body.len() != 1 {
            return Err(self.error(format!("expected one body, found {}", body.len())));
        }
        Ok((variables, body.remove(0)))
    }

    // reports a connective built with the wrong shape as a malformed node
    fn build<T>(self, result: Result<T, syntax::Error>) -> Result<T, Error> {
        result.map_err(|e| self.error(e.to_string()))
    }
}

/// Folds a CST into declarations and formulae.
///
/// **Example**:
/// ```rust
/// use prover_fol::{cst::Visitor, parser, transformer::{Transformer, Value}};
///
/// let tree = parser::parse_tree("fof(ax1, axiom, p(X) <= q(X)).").unwrap();
/// if let Ok(Value::Declarations(declarations)) = Transformer.visit(&tree) {
///     assert_eq!("<q>(X) ⇒ <p>(X)", declarations[0].formula().to_string());
/// }
/// ```
#[derive(Clone, Copy, Default, Debug)]
pub struct Transformer;

impl Visitor for Transformer {
    type Output = Value;
    type Error = Error;

    fn token(&self, token: &Token) -> Result<Value, Error> {
        Ok(Value::Token(token.clone()))
    }

    fn tree(&self, rule: Rule, children: Vec<Value>, location: usize) -> Result<Value, Error> {
        let at = At { rule, location };
        match rule {
            Rule::ValidStart => children
                .into_iter()
                .map(|c| match c {
                    Value::Declaration(declaration) => Ok(declaration),
                    other => Err(at.unexpected("a declaration", &other)),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Declarations),
            Rule::Declaration => {
                let [dialect, name, role, formula] = at.children::<4>(children)?;
                let declaration = Declaration::new(
                    &at.word(dialect)?,
                    at.word(name)?,
                    &at.word(role)?,
                    at.formula(formula)?,
                )?;
                Ok(Value::Declaration(declaration))
            }
            Rule::Dialect | Rule::Role => at.word(at.single(children)?).map(Value::Word),
            Rule::Name => match at.single(children)? {
                Value::Integer(number) => Ok(Value::Word(number.to_string())),
                other => at.word(other).map(Value::Word),
            },
            Rule::Formula => at.formula(at.single(children)?).map(Value::Formula),
            Rule::FofF | Rule::Functor | Rule::Term => Ok(Value::Tree {
                rule,
                children,
                location,
            }),
            Rule::LowercaseWord => at.text(children).map(Value::Word),
            Rule::SingleQuotedWord => {
                let text = at.text(children)?;
                text.strip_prefix('\'')
                    .and_then(|t| t.strip_suffix('\''))
                    .map(|t| Value::Word(unescape(t)))
                    .ok_or_else(|| at.error(format!("`{}` is not quoted", text)))
            }
            Rule::Number => {
                let digits = at.text(children)?;
                digits
                    .parse()
                    .map(Value::Integer)
                    .map_err(|e| at.error(format!("invalid number `{}`: {}", digits, e)))
            }
            Rule::Variable => at
                .text(children)
                .map(|name| Value::Term(V::from(name).into())),
            Rule::Literal => match at.single(children)? {
                Value::Word(word) => Ok(Value::Term(C::from(word).into())),
                Value::Integer(number) => Ok(Value::Term(C::from(number.to_string()).into())),
                other => Err(at.unexpected("a constant", &other)),
            },
            Rule::FunAppl => {
                let (name, terms) = at.application(children)?;
                Ok(Value::Term(F::from(name).app(terms)))
            }
            Rule::Predicate => {
                let (name, terms) = at.application(children)?;
                Ok(Value::Formula(Pred::from(name).app(terms)))
            }
            Rule::FofEquality => {
                let [left, right] = at.children::<2>(children)?;
                Ok(Value::Formula(at.term(left)?.equals(at.term(right)?)))
            }
            Rule::FofInequality => {
                let [left, right] = at.children::<2>(children)?;
                Ok(Value::Formula(at.term(left)?.not_equals(at.term(right)?)))
            }
            Rule::DefinedTrue => {
                at.children::<0>(children)?;
                Ok(Value::Formula(Formula::Top))
            }
            Rule::DefinedFalse => {
                at.children::<0>(children)?;
                Ok(Value::Formula(Formula::Bottom))
            }
            Rule::FofNotF => {
                let formula = at.formula(at.single(children)?)?;
                Ok(Value::Formula(Formula::not(formula)))
            }
            Rule::FofAndF => {
                let and = at.build(And::new(at.formulae(children)?))?;
                Ok(Value::Formula(and.into()))
            }
            Rule::FofOrF => {
                let or = at.build(Or::new(at.formulae(children)?))?;
                Ok(Value::Formula(or.into()))
            }
            Rule::FofImpliesF => {
                let implies = at.build(Implies::from_operands(at.formulae(children)?))?;
                Ok(Value::Formula(implies.into()))
            }
            Rule::FofImpliesBackwardF => {
                // `B <= A` is stored as `A => B`
                let mut operands = at.formulae(children)?;
                operands.reverse();
                let implies = at.build(Implies::from_operands(operands))?;
                Ok(Value::Formula(implies.into()))
            }
            Rule::FofEquivalentF => {
                let iff = at.build(Iff::from_operands(at.formulae(children)?))?;
                Ok(Value::Formula(iff.into()))
            }
            Rule::FofAllF => {
                let (variables, body) = at.quantified(children)?;
                let forall = at.build(Forall::new(variables, body))?;
                Ok(Value::Formula(forall.into()))
            }
            Rule::FofExistsF => {
                let (variables, body) = at.quantified(children)?;
                let exists = at.build(Exists::new(variables, body))?;
                Ok(Value::Formula(exists.into()))
            }
        }
    }
}

// `\'` and `\\` inside a quoted word stand for `'` and `\`
fn unescape(quoted: &str) -> String {
    let mut word = String::with_capacity(quoted.len());
    let mut chars = quoted.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => word.extend(chars.next()),
            c => word.push(c),
        }
    }
    word
}

/// Transforms the CST of a problem file, rooted at a [`Rule::ValidStart`] node.
pub fn transform(node: &Node) -> Result<Vec<Declaration>, Error> {
    match Transformer.visit(node)? {
        Value::Declarations(declarations) => Ok(declarations),
        other => Err(At {
            rule: Rule::ValidStart,
            location: node.location(),
        }
        .unexpected("a list of declarations", &other)),
    }
}

/// Transforms the CST of a single formula, rooted at a [`Rule::Formula`] node.
pub fn transform_formula(node: &Node) -> Result<Formula, Error> {
    let at = At {
        rule: Rule::Formula,
        location: node.location(),
    };
    at.formula(Transformer.visit(node)?)
}
