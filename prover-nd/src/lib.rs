//! Implements inference rules of natural deduction over the formulae of [`prover_fol`] and a
//! driver that closes a set of formulae under the elimination rules.
//!
//! [`prover_fol`]: ../prover_fol/index.html
pub mod derive;
pub mod rule;
pub mod trace;

#[cfg(test)]
mod test_prelude;
