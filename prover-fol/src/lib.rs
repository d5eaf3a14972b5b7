/*! Provides the syntax of first-order problems in a TPTP-style dialect, together with a parser
that turns problem files into typed declarations and formulae. */
#[macro_use]
extern crate lalrpop_util;

pub mod cst;
pub mod parser;
pub mod syntax;
#[cfg(test)]
mod test_prelude;
pub mod transformer;
