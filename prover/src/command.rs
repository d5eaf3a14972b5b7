use crate::terminal::Stylus;
use crate::{constants::*, utils::*};
use anyhow::{Context, Error};
use prover_nd::{
    derive::Deriver,
    trace::{subscriber::JsonLogger, DEFAULT_JSON_LOG_FILE},
};
use std::{fs, path::PathBuf};
use structopt::StructOpt;

#[derive(StructOpt)]
enum ProcessCommand {
    #[structopt(
        name = "parse",
        about = "Print the background and the goal formulae of the input problem"
    )]
    Parse {
        #[structopt(
            short = "i",
            long = "input",
            parse(from_os_str),
            help = "Path to the input problem file"
        )]
        input: Option<PathBuf>,
        #[structopt(
            long = "declarations",
            help = "Print the declarations in problem-file syntax."
        )]
        declarations: bool,
    },
    #[structopt(
        name = "derive",
        about = "Close the background formulae under elimination rules and check the goals"
    )]
    Derive {
        #[structopt(
            short = "i",
            long = "input",
            parse(from_os_str),
            help = "Path to the input problem file"
        )]
        input: Option<PathBuf>,
        #[structopt(long = "limit", help = "Maximum number of derivation steps")]
        limit: Option<usize>,
    },
}

impl ProcessCommand {
    fn run(self, stylus: &Stylus) -> Result<(), Error> {
        match self {
            ProcessCommand::Parse {
                input,
                declarations,
            } => {
                let problem = read_problem(input.as_deref())?;
                if declarations {
                    print_declarations(&problem, stylus);
                } else {
                    let (background, goals) = problem.split();
                    print_split(&background, &goals, stylus);
                }
                Ok(())
            }
            ProcessCommand::Derive { input, limit } => {
                let problem = read_problem(input.as_deref())?;
                let (background, goals) = problem.split();

                stylus.set(STYLE_INFO);
                println!("Deriving the consequences of:");
                print_split(&background, &goals, stylus);
                println!();

                let deriver = match limit {
                    Some(limit) => Deriver::default().with_limit(limit),
                    None => Deriver::default(),
                };
                let derivation = deriver.derive(background);
                print_derivation(&derivation, &goals, stylus);
                println!();
                Ok(())
            }
        }
    }
}

#[derive(StructOpt)]
#[structopt(
    name = "prover",
    about = "A tool for reading first-order TPTP problems and deriving their consequences"
)]
#[structopt(setting = structopt::clap::AppSettings::ColoredHelp)]
pub(super) struct Command {
    #[structopt(subcommand)]
    command: ProcessCommand,
    #[structopt(long = "no-color", help = "Disable colored output.")]
    no_color: bool,
    #[structopt(
        short = "l",
        long = "log",
        parse(from_os_str),
        help = "Path to the log file."
    )]
    log: Option<PathBuf>,
}

impl Command {
    pub fn run(self) -> Result<(), Error> {
        let process = self.command;
        let stylus = stylus(!self.no_color);

        if !self.no_color {
            stylus.set(STYLE_LOGO);
            println!("{}", BANNER);
        }

        let run = || process.run(&stylus);

        if let Some(log) = self.log {
            let log = if log.as_os_str().is_empty() {
                PathBuf::from(DEFAULT_JSON_LOG_FILE)
            } else {
                log
            };
            let file = fs::File::create(&log)
                .with_context(|| format!("cannot create the log file `{}`", log.display()))?;
            let logger = JsonLogger::new(file);
            tracing::subscriber::with_default(logger, run)
        } else {
            run()
        }
    }
}
