/*! Defines the concrete syntax tree (CST) built by the grammar and a bottom-up [`Visitor`]
over it.

The grammar does no semantic work: every production yields a [`Tree`] labeled with a
[`Rule`], whose children are the trees of its sub-productions and the [`Token`]s it keeps.
Two kinds of wrapper nodes carry no meaning of their own:

* every formula production is wrapped in a single-child [`Rule::FofF`] node;
* every term argument is wrapped in a [`Rule::Term`] node and the name of every predicate
  or function in a [`Rule::Functor`] node.

The separator `:` of a quantifier is kept as a token between the bound variables and the
body.
*/
use std::fmt;

/// Is the label of an interior node of the CST.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Rule {
    ValidStart,
    Declaration,
    Dialect,
    Name,
    Role,
    Formula,
    FofF,
    FofAndF,
    FofOrF,
    FofImpliesF,
    FofImpliesBackwardF,
    FofEquivalentF,
    FofNotF,
    FofAllF,
    FofExistsF,
    FofEquality,
    FofInequality,
    DefinedTrue,
    DefinedFalse,
    Predicate,
    FunAppl,
    Functor,
    Term,
    Variable,
    Literal,
    LowercaseWord,
    SingleQuotedWord,
    Number,
}

impl Rule {
    /// Returns the name of the grammar production labeled by the receiver.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ValidStart => "valid_start",
            Self::Declaration => "declaration",
            Self::Dialect => "dialect",
            Self::Name => "name",
            Self::Role => "role",
            Self::Formula => "formula",
            Self::FofF => "fof_f",
            Self::FofAndF => "fof_and_f",
            Self::FofOrF => "fof_or_f",
            Self::FofImpliesF => "fof_implies_f",
            Self::FofImpliesBackwardF => "fof_implies_backward_f",
            Self::FofEquivalentF => "fof_equivalent_f",
            Self::FofNotF => "fof_not_f",
            Self::FofAllF => "fof_all_f",
            Self::FofExistsF => "fof_exists_f",
            Self::FofEquality => "fof_equality",
            Self::FofInequality => "fof_inequality",
            Self::DefinedTrue => "defined_true",
            Self::DefinedFalse => "defined_false",
            Self::Predicate => "predicate",
            Self::FunAppl => "fun_appl",
            Self::Functor => "functor",
            Self::Term => "term",
            Self::Variable => "variable",
            Self::Literal => "literal",
            Self::LowercaseWord => "lowercase_word",
            Self::SingleQuotedWord => "single_quoted_word",
            Self::Number => "number",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Is a leaf of the CST.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Token {
    value: String,
    location: usize,
}

impl Token {
    /// Returns the text of the receiver.
    #[inline(always)]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the byte offset of the receiver in the source.
    #[inline(always)]
    pub fn location(&self) -> usize {
        self.location
    }
}

/// Is an interior node of the CST.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Tree {
    rule: Rule,
    children: Vec<Node>,
    location: usize,
}

impl Tree {
    /// Returns the label of the receiver.
    #[inline(always)]
    pub fn rule(&self) -> Rule {
        self.rule
    }

    /// Returns the children of the receiver, in source order.
    #[inline(always)]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Returns the byte offset where the receiver starts in the source.
    #[inline(always)]
    pub fn location(&self) -> usize {
        self.location
    }
}

/// Is a node of the CST: either a [`Token`] or a [`Tree`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Node {
    Token(Token),
    Tree(Tree),
}

impl Node {
    /// Creates a leaf with the text `value` found at `location`.
    pub fn token<S: Into<String>>(value: S, location: usize) -> Self {
        Self::Token(Token {
            value: value.into(),
            location,
        })
    }

    /// Creates an interior node.
    pub fn tree(rule: Rule, children: Vec<Node>, location: usize) -> Self {
        Self::Tree(Tree {
            rule,
            children,
            location,
        })
    }

    /// Creates a formula node, wrapped in [`Rule::FofF`].
    pub fn formula(rule: Rule, children: Vec<Node>, location: usize) -> Self {
        Self::tree(
            Rule::FofF,
            vec![Self::tree(rule, children, location)],
            location,
        )
    }

    /// Creates a quantified formula node: the bound `variables`, the `:` separator found at
    /// `separator` and the `body`.
    pub fn quantified(
        rule: Rule,
        mut variables: Vec<Node>,
        separator: usize,
        body: Node,
        location: usize,
    ) -> Self {
        variables.push(Self::token(":", separator));
        variables.push(body);
        Self::formula(rule, variables, location)
    }

    /// Returns the children of a predicate or function application: its `functor` followed
    /// by its `arguments`.
    pub fn application(functor: Node, arguments: Vec<Node>) -> Vec<Node> {
        std::iter::once(functor).chain(arguments).collect()
    }

    /// Creates an atomic formula node from a `word` and its `arguments`, if any.
    pub fn predicate((word, arguments): (Node, Option<Vec<Node>>), location: usize) -> Self {
        let functor = Self::tree(Rule::Functor, vec![word], location);
        Self::formula(
            Rule::Predicate,
            Self::application(functor, arguments.unwrap_or_default()),
            location,
        )
    }

    /// Creates a [`Rule::Term`] node from a `word` and its `arguments`: a constant if there
    /// are no arguments, a function application otherwise.
    pub fn plain_term((word, arguments): (Node, Option<Vec<Node>>), location: usize) -> Self {
        let term = match arguments {
            Some(arguments) => {
                let functor = Self::tree(Rule::Functor, vec![word], location);
                Self::tree(
                    Rule::FunAppl,
                    Self::application(functor, arguments),
                    location,
                )
            }
            None => Self::tree(Rule::Literal, vec![word], location),
        };
        Self::tree(Rule::Term, vec![term], location)
    }

    /// Returns the label of the receiver if it is an interior node.
    pub fn rule(&self) -> Option<Rule> {
        match self {
            Self::Token(_) => None,
            Self::Tree(tree) => Some(tree.rule),
        }
    }

    /// Returns the byte offset where the receiver starts in the source.
    pub fn location(&self) -> usize {
        match self {
            Self::Token(token) => token.location,
            Self::Tree(tree) => tree.location,
        }
    }
}

/// Is the trait of bottom-up transformations over the CST, dispatched on node labels.
pub trait Visitor {
    /// Is the value a node is transformed into.
    type Output;

    /// Is the error that aborts the transformation.
    type Error;

    /// Transforms a leaf.
    fn token(&self, token: &Token) -> Result<Self::Output, Self::Error>;

    /// Transforms an interior node labeled `rule`, once all of its `children` are transformed.
    fn tree(
        &self,
        rule: Rule,
        children: Vec<Self::Output>,
        location: usize,
    ) -> Result<Self::Output, Self::Error>;

    /// Transforms `node` and all of its descendants, children before their parents. The first
    /// error aborts the walk.
    ///
    /// **Note**: The walk itself keeps its own stack instead of recursing. Dropping, cloning or
    /// comparing a deep [`Node`] still recurses on the call stack.
    fn visit(&self, node: &Node) -> Result<Self::Output, Self::Error> {
        let root = match node {
            Node::Token(token) => return self.token(token),
            Node::Tree(tree) => tree,
        };

        // every frame holds a tree and the outputs of its children transformed so far
        let mut stack = vec![(root, Vec::with_capacity(root.children.len()))];
        while let Some((tree, mut outputs)) = stack.pop() {
            match tree.children.get(outputs.len()) {
                Some(Node::Token(token)) => {
                    outputs.push(self.token(token)?);
                    stack.push((tree, outputs));
                }
                Some(Node::Tree(child)) => {
                    stack.push((tree, outputs));
                    stack.push((child, Vec::with_capacity(child.children.len())));
                }
                None => {
                    let output = self.tree(tree.rule, outputs, tree.location)?;
                    match stack.last_mut() {
                        Some((_, siblings)) => siblings.push(output),
                        None => return Ok(output),
                    }
                }
            }
        }
        unreachable!("the root frame returns before the stack empties")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // renders a CST as an s-expression
    struct Printer;

    impl Visitor for Printer {
        type Output = String;
        type Error = ();

        fn token(&self, token: &Token) -> Result<String, ()> {
            Ok(format!("{:?}", token.value()))
        }

        fn tree(&self, rule: Rule, children: Vec<String>, _: usize) -> Result<String, ()> {
            Ok(format!("({} {})", rule, children.join(" ")))
        }
    }

    // fails on the first number it meets and counts the nodes it has visited
    struct Failing(std::cell::Cell<usize>);

    impl Visitor for Failing {
        type Output = ();
        type Error = usize;

        fn token(&self, _: &Token) -> Result<(), usize> {
            self.0.set(self.0.get() + 1);
            Ok(())
        }

        fn tree(&self, rule: Rule, _: Vec<()>, location: usize) -> Result<(), usize> {
            self.0.set(self.0.get() + 1);
            if rule == Rule::Number {
                Err(location)
            } else {
                Ok(())
            }
        }
    }

    fn word(value: &str, location: usize) -> Node {
        Node::tree(
            Rule::LowercaseWord,
            vec![Node::token(value, location)],
            location,
        )
    }

    #[test]
    fn visit_bottom_up() {
        let functor = Node::tree(Rule::Functor, vec![word("p", 0)], 0);
        let argument = Node::tree(
            Rule::Term,
            vec![Node::tree(Rule::Variable, vec![Node::token("X", 2)], 2)],
            2,
        );
        let atom = Node::formula(Rule::Predicate, Node::application(functor, vec![argument]), 0);
        assert_eq!(
            r#"(fof_f (predicate (functor (lowercase_word "p")) (term (variable "X"))))"#,
            Printer.visit(&atom).unwrap()
        );
    }

    #[test]
    fn plain_atoms() {
        let atom = (word("p", 0), None);
        assert_eq!(
            r#"(fof_f (predicate (functor (lowercase_word "p"))))"#,
            Printer.visit(&Node::predicate(atom.clone(), 0)).unwrap()
        );
        assert_eq!(
            r#"(term (literal (lowercase_word "p")))"#,
            Printer.visit(&Node::plain_term(atom, 0)).unwrap()
        );

        let argument = Node::tree(
            Rule::Term,
            vec![Node::tree(Rule::Variable, vec![Node::token("X", 2)], 2)],
            2,
        );
        let application = (word("f", 0), Some(vec![argument]));
        assert_eq!(
            r#"(term (fun_appl (functor (lowercase_word "f")) (term (variable "X"))))"#,
            Printer.visit(&Node::plain_term(application, 0)).unwrap()
        );
    }

    #[test]
    fn visit_token() {
        assert_eq!(r#"":""#, Printer.visit(&Node::token(":", 3)).unwrap());
    }

    #[test]
    fn visit_quantified() {
        let variable = Node::tree(Rule::Variable, vec![Node::token("X", 3)], 3);
        let body = Node::formula(Rule::DefinedTrue, vec![], 7);
        let node = Node::quantified(Rule::FofAllF, vec![variable], 5, body, 0);
        assert_eq!(
            r#"(fof_f (fof_all_f (variable "X") ":" (fof_f (defined_true ))))"#,
            Printer.visit(&node).unwrap()
        );
    }

    #[test]
    fn visit_stops_at_first_error() {
        let node = Node::tree(
            Rule::Literal,
            vec![
                Node::tree(Rule::Number, vec![Node::token("1", 4)], 4),
                word("a", 6),
            ],
            4,
        );
        let failing = Failing(std::cell::Cell::new(0));
        assert_eq!(Err(4), failing.visit(&node));
        // the token and the number itself, but not the word after it:
        assert_eq!(2, failing.0.get());
    }

    #[test]
    fn visit_deep_tree() {
        let mut node = Node::formula(Rule::DefinedFalse, vec![], 0);
        for _ in 0..100_000 {
            node = Node::formula(Rule::FofNotF, vec![node], 0);
        }
        let failing = Failing(std::cell::Cell::new(0));
        assert_eq!(Ok(()), failing.visit(&node));
        assert_eq!(200_002, failing.0.get());
        // dropping a deep tree recurses
        std::mem::forget(node);
    }

    #[test]
    fn node_accessors() {
        let node = word("a", 6);
        assert_eq!(Some(Rule::LowercaseWord), node.rule());
        assert_eq!(6, node.location());
        assert_eq!(None, Node::token("a", 6).rule());
        if let Node::Tree(tree) = node {
            assert_eq!(1, tree.children().len());
        }
    }
}
