//! Inflammation analysis CLI.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::{ColorChoice, Parser};
use inflammation_cli::commands::{
    error_report, run_analyse, run_normalise, run_patients_add, run_patients_from_csv,
    run_patients_show,
};
use inflammation_cli::logging::{LogConfig, LogFormat, init_logging};
use inflammation_cli::summary::{print_daily_summary, print_patients, print_readings};
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg, PatientsCommand};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(cli.command) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {}", error_report(&error));
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Analyse(args) => {
            for summary in run_analyse(&args.files)? {
                print_daily_summary(&summary);
            }
        }
        Command::Normalise(args) => {
            let normalised = run_normalise(&args.file)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&normalised)?);
            } else {
                print_readings(&normalised);
            }
        }
        Command::Patients(PatientsCommand::FromCsv(args)) => {
            let patients = run_patients_from_csv(&args.file, &args.output, &args.prefix)?;
            println!(
                "Saved {} patients to {}",
                patients.len(),
                args.output.display()
            );
        }
        Command::Patients(PatientsCommand::Show(args)) => {
            print_patients(&run_patients_show(&args.file)?);
        }
        Command::Patients(PatientsCommand::Add(args)) => {
            let observation = run_patients_add(&args.file, &args.name, args.value, args.day)?;
            println!(
                "Recorded {} for {} on day {}",
                observation, args.name, observation.day
            );
        }
    }
    Ok(())
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    LogConfig::default()
        .with_level_filter(level_filter)
        .with_format(format)
        .with_log_file(cli.log_file.clone())
        .with_log_data(cli.log_data)
        .with_env_override(!(cli.verbosity.is_present() || cli.log_level.is_some()))
        .with_ansi(with_ansi)
}
