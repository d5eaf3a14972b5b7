use crate::{
    constants::*,
    terminal::{Style, StyleId, Stylus},
};
use anyhow::{Context, Error};
use itertools::Itertools;
use prover_fol::syntax::{Formula, Problem};
use prover_nd::derive::Derivation;
use std::{
    fs,
    io::{stdin, Read},
    path::Path,
};

pub(crate) fn stylus(color: bool) -> Stylus {
    let mut stylus = Stylus::new();
    if color {
        stylus.insert_style(
            STYLE_LOGO,
            Style::new().foreground(59).attribute(term::Attr::Dim),
        );
        stylus.insert_style(
            STYLE_INFO,
            Style::new().foreground(59).attribute(term::Attr::Bold),
        );
        stylus.insert_style(STYLE_BACKGROUND, Style::new().foreground(252));
        stylus.insert_style(
            STYLE_GOAL,
            Style::new().foreground(252).attribute(term::Attr::Bold),
        );
        stylus.insert_style(STYLE_STEP, Style::new().foreground(110));
        stylus.insert_style(
            STYLE_PROVED,
            Style::new().foreground(70).attribute(term::Attr::Bold),
        );
        stylus.insert_style(
            STYLE_UNPROVED,
            Style::new().foreground(167).attribute(term::Attr::Bold),
        );
    }

    stylus
}

pub(crate) fn read_problem_from_file(filename: &Path) -> Result<Problem, Error> {
    let mut f = fs::File::open(filename)
        .with_context(|| format!("failed to find the input file `{}`", filename.display()))?;

    let mut contents = String::new();
    f.read_to_string(&mut contents)
        .context("failed to read the input file")?;

    contents
        .parse()
        .context("failed to parse the input problem")
}

pub(crate) fn read_problem_from_stdin() -> Result<Problem, Error> {
    let mut buf: Vec<u8> = Vec::new();
    stdin().read_to_end(&mut buf)?;
    let s = String::from_utf8(buf)?;
    let problem = s.parse().context("failed to parse the input problem")?;
    Ok(problem)
}

pub(crate) fn read_problem(input: Option<&Path>) -> Result<Problem, Error> {
    match input {
        Some(input) => read_problem_from_file(input),
        None => read_problem_from_stdin(),
    }
}

pub(crate) fn print_formulae(formulae: &[&Formula], style: StyleId, stylus: &Stylus) {
    stylus.set(style);
    formulae.iter().for_each(|f| println!("{}", f));
}

pub(crate) fn print_split(background: &[&Formula], goals: &[&Formula], stylus: &Stylus) {
    print_formulae(background, STYLE_BACKGROUND, stylus);
    stylus.set(STYLE_INFO);
    println!("{}", SEPARATOR);
    print_formulae(goals, STYLE_GOAL, stylus);
}

pub(crate) fn print_derivation(derivation: &Derivation, goals: &[&Formula], stylus: &Stylus) {
    stylus.set(STYLE_INFO);
    println!("Derivation:");
    stylus.set(STYLE_STEP);
    let width = derivation.steps().len().to_string().len();
    println!(
        "{}",
        derivation
            .steps()
            .iter()
            .enumerate()
            .map(|(i, step)| format!("{:>width$}. {}", i + 1, step, width = width))
            .join("\n")
    );
    println!();

    let mut proved = 0;
    for goal in goals {
        if derivation.proves(goal) {
            proved += 1;
            stylus.set(STYLE_PROVED);
            print!("proved     ");
        } else {
            stylus.set(STYLE_UNPROVED);
            print!("not proved ");
        }
        stylus.set(STYLE_GOAL);
        println!("{}", goal);
    }
    println!();

    stylus.set(STYLE_INFO);
    println!(
        "{} steps, {} known formulae, {} of {} goals proved.",
        derivation.steps().len(),
        derivation.known().len(),
        proved,
        goals.len()
    );
    if !derivation.is_saturated() {
        println!("The step limit was reached before the derivation was saturated.");
    }
}

pub(crate) fn print_declarations(problem: &Problem, stylus: &Stylus) {
    for declaration in problem.iter() {
        let style = if declaration.role().is_goal() {
            STYLE_GOAL
        } else {
            STYLE_BACKGROUND
        };
        stylus.set(style);
        println!("{}", declaration);
    }
}
