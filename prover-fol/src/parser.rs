//! Implements a parser for problems in the first-order form (FOF) of the TPTP syntax.
//!
//! Parsing runs in two passes: the grammar builds a concrete syntax tree (see [`cst`]) and the
//! [`transformer`] folds that tree into the types of [`syntax`]. Both passes report their
//! errors as [`Error`], with byte offsets converted to line and column positions.
//!
//! The parser is often used implicitly through [`FromStr`] for [`Problem`] and [`Formula`].
//!
//! **Example**:
//! ```rust
//! use prover_fol::syntax::{Problem, Role};
//!
//! let problem: Problem = r#"
//!     % every man is mortal
//!     fof(mortal, axiom, ! [X]: (man(X) => mortal(X))).
//!     fof(socrates, axiom, man(socrates)).
//!     fof(goal, conjecture, mortal(socrates)).
//! "#.parse().unwrap();
//!
//! assert_eq!(3, problem.declarations().len());
//! assert_eq!(Role::Conjecture, problem.declarations()[2].role());
//! assert_eq!("∀ [X]: <man>(X) ⇒ <mortal>(X)", problem.declarations()[0].formula().to_string());
//! ```
//!
//! [`cst`]: crate::cst
//! [`transformer`]: crate::transformer
//! [`syntax`]: crate::syntax
//! [`Problem`]: crate::syntax::Problem
//! [`Formula`]: crate::syntax::Formula
//! [`FromStr`]: std::str::FromStr
use crate::{
    cst::{Node, Rule},
    syntax::{Formula, Problem},
    transformer,
};
use lalrpop_util::ParseError;
use std::str::FromStr;
use thiserror::Error;

lalrpop_mod!(pub grammar); // synthesized by LALRPOP

#[derive(PartialEq, Debug)]
pub enum TokenType {
    Comma,
    Dot,
    Colon,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Equal,
    NotEqual,
    True,
    False,
    Not,
    And,
    Or,
    Implies,
    ImpliesBackward,
    Iff,
    Forall,
    Exists,
    Lower,
    Upper,
    Quoted,
    Integer,
    Unknown,
}

impl<S: AsRef<str>> From<S> for TokenType {
    fn from(s: S) -> Self {
        // expected tokens are reported with the quotes of the grammar
        match s.as_ref().trim_matches('"') {
            "," => Self::Comma,
            "." => Self::Dot,
            ":" => Self::Colon,
            "(" => Self::LParen,
            ")" => Self::RParen,
            "[" => Self::LBracket,
            "]" => Self::RBracket,
            "=" => Self::Equal,
            "!=" => Self::NotEqual,
            "$true" => Self::True,
            "$false" => Self::False,
            "~" => Self::Not,
            "&" => Self::And,
            "|" => Self::Or,
            "=>" => Self::Implies,
            "<=" => Self::ImpliesBackward,
            "<=>" => Self::Iff,
            "!" => Self::Forall,
            "?" => Self::Exists,
            "LOWER_WORD" => Self::Lower,
            "UPPER_WORD" => Self::Upper,
            "SINGLE_QUOTED" => Self::Quoted,
            "INTEGER" => Self::Integer,
            _ => Self::Unknown,
        }
    }
}

impl ToString for TokenType {
    fn to_string(&self) -> String {
        match self {
            Self::Comma => "`,`",
            Self::Dot => "`.`",
            Self::Colon => "`:`",
            Self::LParen => "`(`",
            Self::RParen => "`)`",
            Self::LBracket => "`[`",
            Self::RBracket => "`]`",
            Self::Equal => "`=`",
            Self::NotEqual => "`!=`",
            Self::True => "`$true`",
            Self::False => "`$false`",
            Self::Not => "`~`",
            Self::And => "`&`",
            Self::Or => "`|`",
            Self::Implies => "`=>`",
            Self::ImpliesBackward => "`<=`",
            Self::Iff => "`<=>`",
            Self::Forall => "`!`",
            Self::Exists => "`?`",
            Self::Lower => "`lowercase word`",
            Self::Upper => "`uppercase word`",
            Self::Quoted => "`single-quoted word`",
            Self::Integer => "`integer`",
            Self::Unknown => "`unknown token`",
        }
        .into()
    }
}

/// Is the type of errors returned by the parser.
#[derive(Error, PartialEq, Debug)]
pub enum Error {
    #[error("found `{found:?}` at line {}, column {}; expecting {}",
            (*.position).line,
            (*.position).column,
            Error::pretty_expected_tokens(&*.expected),
    )]
    UnrecognizedToken {
        position: Position,
        expected: Vec<TokenType>,
        found: String,
    },
    #[error("invalid token at line {}, column {}", (*.position).line, (*.position).column)]
    InvalidToken { position: Position },
    #[error("unexpected end of input at line {}, column {}; expecting {}",
            (*.position).line,
            (*.position).column,
            Error::pretty_expected_tokens(&*.expected)
    )]
    UnrecognizedEOF {
        position: Position,
        expected: Vec<TokenType>,
    },
    #[error("unexpected token `{found:?}` at line {}, column {}", (*.position).line, (*.position).column)]
    ExtraToken { position: Position, found: String },
    #[error("malformed `{rule}` at line {}, column {}: {message}", (*.position).line, (*.position).column)]
    Structural {
        rule: Rule,
        position: Position,
        message: String,
    },
    #[error("{message}")]
    User { message: String },
    #[error("{}", .source.to_string())]
    Syntax {
        #[from]
        source: crate::syntax::Error,
    },
}

impl Error {
    fn pretty_expected_tokens(items: &[TokenType]) -> String {
        let strs = items.iter().map(ToString::to_string).collect::<Vec<_>>();
        match items.len() {
            0 => "".into(),
            1 => strs[0].to_string(),
            2 => format!("{} or {}", strs[0], strs[1]),
            n => format!("{}, or {}", strs[0..n - 1].join(", "), strs[n - 1]),
        }
    }
}

/// Is a position in the source, counting lines and columns from 1.
#[derive(PartialEq, Debug)]
pub struct Position {
    line: usize,
    column: usize,
}

impl Position {
    #[inline(always)]
    pub fn line(&self) -> usize {
        self.line
    }

    #[inline(always)]
    pub fn column(&self) -> usize {
        self.column
    }
}

// Stores source information to retrieve token positions in the source.
struct SourceInfo<'s> {
    lines: Vec<usize>,
    source: &'s str,
}

impl<'s> SourceInfo<'s> {
    fn new(source: &'s str) -> Self {
        let lines = source
            .bytes()
            .enumerate()
            .filter(|&(_, ch)| ch == b'\n')
            .map(|(i, _)| i + 1);
        Self {
            lines: std::iter::once(0).chain(lines).collect(),
            source,
        }
    }

    fn position(&self, location: usize) -> Position {
        let index = self
            .lines
            .iter()
            .enumerate()
            .find(|&(_, l)| location < *l)
            .map(|(i, _)| i);
        let line = index.unwrap_or_else(|| self.lines.len());
        let column = self.source[self.lines[line - 1]..location].chars().count() + 1;

        Position { line, column }
    }

    fn convert_error<T: ToString, E: ToString>(&self, error: ParseError<usize, T, E>) -> Error {
        match error {
            ParseError::InvalidToken { location } => Error::InvalidToken {
                position: self.position(location),
            },
            ParseError::UnrecognizedEOF { location, expected } => Error::UnrecognizedEOF {
                position: self.position(location),
                expected: expected.into_iter().map(From::from).collect(),
            },
            ParseError::UnrecognizedToken { token, expected } => Error::UnrecognizedToken {
                position: self.position(token.0),
                expected: expected.into_iter().map(From::from).collect(),
                found: token.1.to_string(),
            },
            ParseError::ExtraToken { token } => Error::ExtraToken {
                position: self.position(token.0),
                found: token.1.to_string(),
            },
            ParseError::User { error } => Error::User {
                message: error.to_string(),
            },
        }
    }

    fn convert_transform_error(&self, error: transformer::Error) -> Error {
        match error {
            transformer::Error::Structural {
                rule,
                location,
                message,
            } => Error::Structural {
                rule,
                position: self.position(location),
                message,
            },
            transformer::Error::Syntax { source } => Error::Syntax { source },
        }
    }
}

/// Parses `source` into the concrete syntax tree of a problem, rooted at a
/// [`Rule::ValidStart`] node.
pub fn parse_tree(source: &str) -> Result<Node, Error> {
    let info = SourceInfo::new(source);
    grammar::ValidStartParser::new()
        .parse(source)
        .map_err(|e| info.convert_error(e))
}

/// Parses `source` into the concrete syntax tree of a single formula, rooted at a
/// [`Rule::Formula`] node.
pub fn parse_formula_tree(source: &str) -> Result<Node, Error> {
    let info = SourceInfo::new(source);
    grammar::FormulaParser::new()
        .parse(source)
        .map_err(|e| info.convert_error(e))
}

impl FromStr for Formula {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let info = SourceInfo::new(s);
        let tree = parse_formula_tree(s)?;
        transformer::transform_formula(&tree).map_err(|e| info.convert_transform_error(e))
    }
}

impl FromStr for Problem {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let info = SourceInfo::new(s);
        let tree = parse_tree(s)?;
        transformer::transform(&tree)
            .map(Problem::from)
            .map_err(|e| info.convert_transform_error(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        syntax::{Dialect, Role},
        test_prelude::*,
    };

    fn formula(source: &str) -> String {
        source.parse::<Formula>().unwrap().to_string()
    }

    #[test]
    fn words() {
        assert_eq!("<p>", formula("p"));
        assert_eq!("<p_1Q>", formula("p_1Q"));
        assert_eq!("<New York>", formula("'New York'"));
        assert_eq!("<p>(X, Y_1)", formula("p(X, Y_1)"));
        assert_eq!("<p>(a, 42)", formula("p(a, 42)"));
        assert_eq!("<p>(f(X, g(a)))", formula("p(f(X, g(a)))"));
        assert_eq!("<p>(a b)", formula("p('a b')"));

        assert!("P".parse::<Formula>().is_err());
        assert!("p(".parse::<Formula>().is_err());
        assert!("''".parse::<Formula>().is_err());
        assert!("p(X,)".parse::<Formula>().is_err());
    }

    #[test]
    fn atoms() {
        assert_eq!("T", formula("$true"));
        assert_eq!("⊥", formula("$false"));
        assert_eq!("X = Y", formula("X = Y"));
        assert_eq!("f(X) = a", formula("f(X) = a"));
        assert_eq!("X != a", formula("X != a"));
        assert_eq!(
            Formula::from(x().equals(a())),
            "X = a".parse::<Formula>().unwrap()
        );

        assert!("X".parse::<Formula>().is_err());
        assert!("X = ".parse::<Formula>().is_err());
    }

    #[test]
    fn connectives() {
        assert_eq!("~ (<p>)", formula("~ p"));
        assert_eq!("~ (~ (<p>))", formula("~~p"));
        assert_eq!("(<a> & <b>)", formula("a & b"));
        assert_eq!("(<a> & <b> & <c>)", formula("a & b & c"));
        assert_eq!("(<a> | <b> | <c>)", formula("a | b | c"));
        assert_eq!("<a> ⇒ <b>", formula("a => b"));
        assert_eq!("<a> ⇔ <b>", formula("a <=> b"));
        assert_eq!("(<a> & (<b> | <c>))", formula("a & (b | c)"));
        assert_eq!("(<a> & <b>) ⇒ <c>", formula("(a & b) => c"));
        assert_eq!("(~ (<a>) | <b>)", formula("~a | b"));

        // mixing connectives without parentheses
        assert!("a & b | c".parse::<Formula>().is_err());
        assert!("a => b => c".parse::<Formula>().is_err());
        assert!("a <=> b & c".parse::<Formula>().is_err());
    }

    #[test]
    fn backward_implication() {
        let backward: Formula = "a <= b".parse().unwrap();
        let forward: Formula = "b => a".parse().unwrap();
        assert_eq!(forward, backward);
        assert_eq!("<b> ⇒ <a>", backward.to_string());
    }

    #[test]
    fn quantifiers() {
        assert_eq!("∀ [X]: <p>(X)", formula("! [X]: p(X)"));
        assert_eq!("∃ [X, Y]: <p>(X, Y)", formula("?[X,Y]:p(X,Y)"));
        assert_eq!("∀ [X]: ∃ [Y]: <p>(X, Y)", formula("! [X]: ? [Y]: p(X, Y)"));
        assert_eq!(
            "∀ [X]: (<p>(X) & <q>(X))",
            formula("! [X]: (p(X) & q(X))")
        );
        assert_eq!("(∀ [X]: <p>(X) & <q>(X))", formula("! [X]: p(X) & q(X)"));
        assert_eq!("∀ [X]: <p>(X, X)", formula("! [X, X]: p(X, X)"));

        assert!("! []: p".parse::<Formula>().is_err());
        assert!("! [a]: p".parse::<Formula>().is_err());
        assert!("! [X] p(X)".parse::<Formula>().is_err());
    }

    #[test]
    fn debug_round_trip() {
        let formula: Formula = "! [X]: (p(X) => ? [Y]: (q(X, Y) & 'a b'(Y) & ~ X = Y))"
            .parse()
            .unwrap();
        assert_eq!(formula, format!("{:?}", formula).parse::<Formula>().unwrap());
    }

    #[test]
    fn quoted_words() {
        let problem: Problem = r"fof('it\'s', axiom, p('a\\b', 'q\'r'(X))).".parse().unwrap();
        let declaration = &problem.declarations()[0];
        assert_eq!("it's", declaration.name());
        assert_eq!(r"<p>(a\b, q'r(X))", declaration.formula().to_string());
        assert_eq!(
            r"fof('it\'s', axiom, p('a\\b', 'q\'r'(X))).",
            problem.to_string()
        );
        assert_eq!(problem, problem.to_string().parse::<Problem>().unwrap());
    }

    #[test]
    fn numeric_words() {
        let problem: Problem = "fof('007', axiom, p('007', 7, '0', 0)).".parse().unwrap();
        assert_eq!("007", problem.declarations()[0].name());
        assert_eq!(
            "fof('007', axiom, p('007', 7, 0, 0)).",
            problem.to_string()
        );
        assert_eq!(problem, problem.to_string().parse::<Problem>().unwrap());

        // a quoted number names a predicate or a function, a bare one cannot
        let formula: Formula = "'42'('7'(X)) & 42 = '42'".parse().unwrap();
        assert_eq!("('42'('7'(X)) & 42 = 42)", format!("{:?}", formula));
        assert_eq!(formula, format!("{:?}", formula).parse::<Formula>().unwrap());
        assert!("42(X)".parse::<Formula>().is_err());
    }

    #[test]
    fn equality_operands() {
        assert_eq!("a = b", formula("a = b"));
        assert_eq!("f(a) != g(X, 1)", formula("f(a) != g(X, 1)"));
        assert_eq!("1 = X", formula("1 = X"));
        assert_eq!("(<p> & a = b)", formula("p & a = b"));
        assert_eq!("<p>(a) ⇒ a = b", formula("p(a) => a = b"));
        assert!("a = b = c".parse::<Formula>().is_err());
        assert!("1".parse::<Formula>().is_err());
    }

    #[test]
    fn problem() {
        let problem: Problem = "fof(ax1, axiom, p(X) => q(X)).".parse().unwrap();
        let declaration = &problem.declarations()[0];
        assert_eq!("ax1", declaration.name());
        assert_eq!(Dialect::Fof, declaration.dialect());
        assert_eq!(Role::Axiom, declaration.role());
        assert_eq!("<p>(X) ⇒ <q>(X)", declaration.formula().to_string());
        assert_eq!(1, problem.background().len());
        assert_eq!(0, problem.goals().len());

        let problem: Problem = "fof(goal, conjecture, ? [X]: p(X)).".parse().unwrap();
        let declaration = &problem.declarations()[0];
        assert_eq!(Role::Conjecture, declaration.role());
        assert_eq!("∃ [X]: <p>(X)", declaration.formula().to_string());
        assert_eq!(1, problem.goals().len());
    }

    #[test]
    fn problem_names() {
        let problem: Problem = r#"
            fof(1, axiom, p).
            fof('the goal', conjecture, p).
        "#
        .parse()
        .unwrap();
        assert_eq!("1", problem.declarations()[0].name());
        assert_eq!("the goal", problem.declarations()[1].name());
    }

    #[test]
    fn comments() {
        let problem: Problem = r#"
            % a line comment
            fof(a1, axiom, p). % trailing
            /* a block
               comment * with stars */
            fof(a2, hypothesis, /* inline */ q).
        "#
        .parse()
        .unwrap();
        assert_eq!(2, problem.declarations().len());
        assert_eq!(Role::Hypothesis, problem.declarations()[1].role());
    }

    #[test]
    fn empty_problem() {
        assert_eq!(Problem::default(), "".parse::<Problem>().unwrap());
        assert_eq!(Problem::default(), "% nothing here\n".parse::<Problem>().unwrap());
    }

    #[test]
    fn problem_file() {
        let problem = read_problem_from_file("../problems/socrates.p");
        assert_eq!(3, problem.declarations().len());
        assert_eq!(2, problem.background().len());
        assert_eq!(1, problem.goals().len());

        let problem = read_problem_from_file("../problems/connectives.p");
        let (background, goals) = problem.split();
        assert_eq!(9, background.len());
        assert_eq!("<p> ⇔ ~ (~ (<p>))", background[7].to_string());
        assert_eq!(
            "∀ [X, Y]: ∃ [Z]: (f(X, Y) = Z & <is defined>(Z))",
            background[8].to_string()
        );
        assert_eq!(
            vec!["~ ((<p> & <q>))"],
            goals.iter().map(|g| g.to_string()).collect::<Vec<_>>()
        );
        assert_eq!(problem, problem.to_string().parse::<Problem>().unwrap());
    }

    #[test]
    fn failure() {
        {
            let parsed: Result<Problem, Error> = "fof(ax1, axiom, p(X))".parse();
            assert!(matches!(
                parsed,
                Err(Error::UnrecognizedEOF {
                    position: Position { line: 1, column: 22 },
                    ref expected,
                }) if expected.contains(&TokenType::Dot)
            ));
        }
        {
            let parsed: Result<Problem, Error> = "fof(ax1, axiom, p(X) => ).".parse();
            assert!(matches!(
                parsed,
                Err(Error::UnrecognizedToken {
                    position: Position { line: 1, column: 25 },
                    ref found,
                    ..
                }) if found == ")"
            ));
        }
        {
            let parsed: Result<Problem, Error> = "fof(ax1, axiom, p(X) # q).".parse();
            assert_eq!(
                Err(Error::InvalidToken {
                    position: Position { line: 1, column: 22 }
                }),
                parsed
            );
        }
        {
            let parsed: Result<Problem, Error> =
                "fof(ax1, axiom, p).\nfof(ax2, axiom, p q).".parse();
            assert!(matches!(
                parsed,
                Err(Error::UnrecognizedToken {
                    position: Position { line: 2, column: 19 },
                    ..
                })
            ));
        }
        {
            let parsed: Result<Problem, Error> = "fol(ax1, axiom, p).".parse();
            assert_eq!(
                Err(Error::Syntax {
                    source: crate::syntax::Error::InvalidDialect {
                        dialect: "fol".into()
                    }
                }),
                parsed
            );
        }
        {
            let parsed: Result<Problem, Error> = "fof(ax1, lemma_like, p).".parse();
            assert_eq!(
                Err(Error::Syntax {
                    source: crate::syntax::Error::InvalidRole {
                        role: "lemma_like".into()
                    }
                }),
                parsed
            );
        }
        {
            let parsed: Result<Problem, Error> =
                "fof(ax1, axiom,\n  p(123456789012345678901234567890)).".parse();
            assert!(matches!(
                parsed,
                Err(Error::Structural {
                    rule: Rule::Number,
                    position: Position { line: 2, column: 5 },
                    ..
                })
            ));
        }
    }

    #[test]
    fn parse_trees() {
        let tree = parse_tree("fof(a, axiom, p).").unwrap();
        assert_eq!(Some(Rule::ValidStart), tree.rule());
        let tree = parse_formula_tree("p & q").unwrap();
        assert_eq!(Some(Rule::Formula), tree.rule());
        assert!(parse_formula_tree("fof(a, axiom, p).").is_err());
    }

    #[test]
    fn token_type_from_str() {
        assert_eq!(TokenType::from("\",\""), TokenType::Comma);
        assert_eq!(TokenType::from("\"<=>\""), TokenType::Iff);
        assert_eq!(TokenType::from("\"<=\""), TokenType::ImpliesBackward);
        assert_eq!(TokenType::from("\"$true\""), TokenType::True);
        assert_eq!(TokenType::from("\"LOWER_WORD\""), TokenType::Lower);
        assert_eq!(TokenType::from("UPPER_WORD"), TokenType::Upper);
        assert_eq!(TokenType::from("\"INTEGER\""), TokenType::Integer);
        assert_eq!(TokenType::from("Bad"), TokenType::Unknown);
    }

    #[test]
    fn error_message() {
        assert_eq!(
            Error::UnrecognizedToken {
                position: Position {
                    line: 42,
                    column: 11
                },
                expected: vec![TokenType::Dot],
                found: "q".into()
            }
            .to_string(),
            "found `\"q\"` at line 42, column 11; expecting `.`"
        );
        assert_eq!(
            Error::UnrecognizedEOF {
                position: Position {
                    line: 42,
                    column: 11
                },
                expected: vec![TokenType::Upper, TokenType::Lower, TokenType::Implies],
            }
            .to_string(),
            "unexpected end of input at line 42, column 11; \
             expecting `uppercase word`, `lowercase word`, or `=>`"
        );
        assert_eq!(
            Error::InvalidToken {
                position: Position {
                    line: 42,
                    column: 11
                }
            }
            .to_string(),
            "invalid token at line 42, column 11"
        );
        assert_eq!(
            Error::Structural {
                rule: Rule::Number,
                position: Position { line: 2, column: 5 },
                message: "too large".into(),
            }
            .to_string(),
            "malformed `number` at line 2, column 5: too large"
        );
        assert_eq!(
            Error::Syntax {
                source: crate::syntax::Error::InvalidRole {
                    role: "rumour".into()
                }
            }
            .to_string(),
            "the role is not known: `rumour`"
        );
    }
}
