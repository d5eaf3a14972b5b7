use prover_fol::syntax::{Formula, Problem};
use std::{fs::File, io::Read};

/// Parses `source` into a formula.
pub fn fof(source: &str) -> Formula {
    source.parse().unwrap()
}

pub fn fofs(sources: &[&str]) -> Vec<Formula> {
    sources.iter().map(|s| fof(s)).collect()
}

pub fn read_problem_from_file(filename: &str) -> Problem {
    let mut f = File::open(filename).expect("file not found");

    let mut contents = String::new();
    f.read_to_string(&mut contents)
        .expect("something went wrong reading the file");

    contents.parse().unwrap()
}
