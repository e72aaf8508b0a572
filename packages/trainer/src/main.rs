use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use chrono::{Local, NaiveDate};

use mnemo_algo::SchedulerError;
use mnemo_trainer::config::Config;
use mnemo_trainer::logging;
use mnemo_trainer::{SessionController, SessionEvent, TrainerError};

enum Command {
    Event(SessionEvent),
    Quit,
    Unknown,
}

fn parse_command(line: &str) -> Command {
    match line.trim().to_lowercase().as_str() {
        "" | "space" | "r" | "reveal" => Command::Event(SessionEvent::Reveal),
        "1" | "c" | "correct" => Command::Event(SessionEvent::Correct),
        "2" | "w" | "wrong" => Command::Event(SessionEvent::Wrong),
        "q" | "quit" | "exit" => Command::Quit,
        _ => Command::Unknown,
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let config = Config::from_env();
    let _log_guard = logging::init_tracing(&config);

    let mut session = match SessionController::start(&config, today()) {
        Ok(session) => session,
        Err(TrainerError::Scheduler(SchedulerError::EmptyCatalog)) => {
            println!("No words available!");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            tracing::error!(error = %err, "cannot start session");
            return ExitCode::FAILURE;
        }
    };

    println!("Enter: reveal | 1: correct | 2: wrong | q: quit");
    if let Err(err) = run(&mut session) {
        tracing::error!(error = %err, "terminal i/o failed");
    }

    if let Err(err) = session.flush() {
        eprintln!("Failed to save progress: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(session: &mut SessionController) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        match session.view() {
            Some(view) => writeln!(stdout, "\n{}", view.render())?,
            None => {
                writeln!(stdout, "No words available!")?;
                return Ok(());
            }
        }
        write!(stdout, "> ")?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };

        match parse_command(&line?) {
            Command::Event(event) => {
                let update = session.handle(event, today());
                if let Some(err) = update.save_error {
                    writeln!(stdout, "Failed to save progress: {err}")?;
                }
            }
            Command::Quit => return Ok(()),
            Command::Unknown => writeln!(stdout, "Unknown command")?,
        }
    }
}
