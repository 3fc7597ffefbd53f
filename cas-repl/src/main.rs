mod command;
mod error;
mod session;

use env_logger::Env;
use log::error;
use rustyline::{error::ReadlineError, DefaultEditor};
use session::Session;
use std::io::{self, IsTerminal, Read};

/// Runs a line of input, printing the result or the error.
fn run_line(session: &mut Session, line: &str) {
    match session.run(line) {
        Ok(output) => println!("{}", output),
        Err(err) => {
            if let Err(io_err) = err.report_to_stderr("input", line) {
                error!("could not report error: {}", io_err);
            }
        },
    }
}

/// Runs every non-empty line of the input in order, in a single session.
fn run_script(input: &str) {
    let mut session = Session::new();
    for line in input.lines().filter(|line| !line.trim().is_empty()) {
        run_line(&mut session, line);
    }
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let mut args = std::env::args();
    args.next();

    if let Some(filename) = args.next() {
        // run source file
        match std::fs::read_to_string(&filename) {
            Ok(input) => run_script(&input),
            Err(err) => {
                eprintln!("could not read `{}`: {}", filename, err);
                std::process::exit(1);
            },
        }
    } else if !io::stdin().is_terminal() {
        // read source from stdin
        let mut input = String::new();
        if let Err(err) = io::stdin().read_to_string(&mut input) {
            eprintln!("could not read stdin: {}", err);
            std::process::exit(1);
        }

        run_script(&input);
    } else {
        // run the repl / interactive mode
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(err) => {
                eprintln!("could not start the editor: {}", err);
                std::process::exit(1);
            },
        };
        let mut session = Session::new();

        fn process_line(rl: &mut DefaultEditor, session: &mut Session) -> Result<(), ReadlineError> {
            let input = rl.readline("> ")?;
            if input.trim().is_empty() {
                return Ok(());
            }

            rl.add_history_entry(&input)?;

            run_line(session, &input);
            Ok(())
        }

        loop {
            if let Err(err) = process_line(&mut rl, &mut session) {
                match err {
                    ReadlineError::Eof | ReadlineError::Interrupted => (),
                    _ => eprintln!("{}", err),
                }
                break;
            }
        }
    }
}
