use crate::syntax::*;
use std::{fs::File, io::Read};

// Variables
pub fn _x() -> V {
    V::from("X")
}

pub fn _y() -> V {
    V::from("Y")
}

pub fn _z() -> V {
    V::from("Z")
}

pub fn x() -> Term {
    _x().into()
}

pub fn y() -> Term {
    _y().into()
}

pub fn z() -> Term {
    _z().into()
}

// Constants
pub fn a() -> Term {
    C::from("a").into()
}

pub fn b() -> Term {
    C::from("b").into()
}

// Functions
pub fn f() -> F {
    F::from("f")
}

pub fn g() -> F {
    F::from("g")
}

// Predicates
pub fn p() -> Pred {
    Pred::from("p")
}

pub fn q() -> Pred {
    Pred::from("q")
}

/// Returns the proposition (nullary predicate) `name`.
pub fn prop(name: &str) -> Formula {
    Pred::from(name).app(vec![])
}

pub fn read_problem_from_file(filename: &str) -> Problem {
    let mut f = File::open(filename).expect("file not found");

    let mut contents = String::new();
    f.read_to_string(&mut contents)
        .expect("something went wrong reading the file");

    contents.parse().unwrap()
}
