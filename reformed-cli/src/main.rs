mod cli;
mod error;
mod scenario;

use std::fs::{self, File};
use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};
use serde::Serialize;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode, WriteLogger};

use reformed_lib::FormProps;
use reformed_lib::state::InputEvent;

use cli::Cli;
use error::CliError;
use scenario::Scenario;

#[derive(Serialize)]
struct Cycle<'a> {
    cycle: usize,
    event: Option<&'a InputEvent>,
    props: &'a FormProps,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logger(&cli).and_then(|()| run(&cli)) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn init_logger(cli: &Cli) -> Result<(), CliError> {
    let level = cli.log_level();

    match &cli.log_file {
        Some(path) => {
            let file = File::create(path).map_err(|source| CliError::Io {
                path: path.clone(),
                source,
            })?;
            WriteLogger::init(level, Config::default(), file)?;
        }
        None => {
            TermLogger::init(
                level,
                Config::default(),
                TerminalMode::Stderr,
                ColorChoice::Auto,
            )?;
        }
    }

    Ok(())
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let text = fs::read_to_string(&cli.scenario).map_err(|source| CliError::Io {
        path: cli.scenario.clone(),
        source,
    })?;
    let scenario = Scenario::from_json_str(&text)?;
    info!(
        "Loaded scenario {} ({} events)",
        cli.scenario.display(),
        scenario.events.len()
    );

    let (mut form, events) = scenario.into_form();

    let props = form
        .render()
        .map_err(|source| CliError::Validation { cycle: 0, source })?;
    emit(cli, &Cycle {
        cycle: 0,
        event: None,
        props: &props,
    })?;

    for (index, event) in events.into_iter().enumerate() {
        let cycle = index + 1;
        debug!("Dispatching {} on '{}'", event.event_type, event.name());

        let props = form
            .dispatch(event.clone())
            .map_err(|source| CliError::Validation { cycle, source })?;
        emit(cli, &Cycle {
            cycle,
            event: Some(&event),
            props: &props,
        })?;
    }

    info!(
        "Replay finished, form is {}",
        if form.results().is_valid { "valid" } else { "invalid" }
    );
    Ok(())
}

fn emit(cli: &Cli, cycle: &Cycle<'_>) -> Result<(), CliError> {
    let line = if cli.pretty {
        serde_json::to_string_pretty(cycle)?
    } else {
        serde_json::to_string(cycle)?
    };
    println!("{line}");
    Ok(())
}
