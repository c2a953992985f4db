use std::path::Path;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use devtrack_core::config::DevtrackConfig;
use devtrack_core::{DeviceStore, MemoryDeviceStorage};
use devtrack_infrastructure::{ConfigService, DevtrackPaths, FileDeviceStorage};

mod app;
mod cli;
mod command;
mod helper;
mod render;

use app::{Output, TrackerApp};
use cli::Cli;
use helper::CliHelper;

/// The main entry point for the devtrack REPL.
///
/// Loads configuration, sets up logging, hydrates the device store from its
/// storage slot, and then processes one line of input at a time.
fn main() -> Result<()> {
    let cli = Cli::parse();

    // ===== Configuration =====
    let config_service = match &cli.config {
        Some(path) => ConfigService::with_path(path.clone()),
        None => ConfigService::new()?,
    };
    let config = config_service.load().unwrap_or_else(|e| {
        eprintln!("{}", format!("Ignoring config file: {}", e).yellow());
        DevtrackConfig::default()
    });

    let log_level = cli.log_level.clone().unwrap_or_else(|| config.log_level.clone());
    let logs_dir = if config.log_to_file {
        Some(DevtrackPaths::logs_dir()?)
    } else {
        None
    };
    let _log_guard = init_logging(&log_level, logs_dir.as_deref())?;

    // ===== Store =====
    let store = if cli.in_memory {
        info!("Using in-memory storage");
        DeviceStore::load(MemoryDeviceStorage::new())
    } else {
        let storage = match cli.data_file.clone().or(config.data_file.clone()) {
            Some(path) => FileDeviceStorage::with_path(path),
            None => FileDeviceStorage::new()?,
        };
        info!(path = %storage.path().display(), "Using file storage");
        DeviceStore::load(storage)
    };

    let mut app = TrackerApp::new(store);

    // ===== REPL Setup =====
    let mut rl = Editor::new()?;
    rl.set_helper(Some(CliHelper::new()));

    println!(
        "{}",
        "Type '/help' for commands, '/add' to add a device, or 'quit' to exit.".bright_black()
    );
    println!();
    print!("{}", render::render_view(&app));

    // ===== Main REPL Loop =====
    loop {
        let readline = match app.editing_device_name() {
            Some(name) => {
                let prompt = format!("assign [{}]> ", name);
                let buffer = app.editor().buffer().to_string();
                rl.readline_with_initial(&prompt, (buffer.as_str(), ""))
            }
            None if app.form().is_visible() => rl.readline("add> "),
            None => rl.readline(">> "),
        };

        match readline {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = rl.add_history_entry(line.as_str());
                }

                let outputs = app.handle_line(&line);
                if print_outputs(&app, outputs) {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                if app.editor().editing_id().is_some() {
                    let outputs = app.handle_line("/cancel");
                    print_outputs(&app, outputs);
                } else {
                    println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
                }
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    info!(count = app.store().len(), "devtrack exiting");
    Ok(())
}

/// Prints handler output. Returns true when the REPL should exit.
fn print_outputs(app: &TrackerApp, outputs: Vec<Output>) -> bool {
    for output in outputs {
        match output {
            Output::View => print!("{}", render::render_view(app)),
            Output::Form => print!("{}", render::render_form(app)),
            Output::Help => print!("{}", render::render_help()),
            Output::Success(message) => println!("{}", message.green()),
            Output::Info(message) => println!("{}", message.bright_black()),
            Output::Warning(message) => println!("{}", message.yellow()),
            Output::Quit => {
                println!("{}", "Goodbye!".bright_green());
                return true;
            }
        }
    }
    false
}

/// Installs the global subscriber.
///
/// With a logs directory, output goes to a daily rolling file so it never
/// interleaves with the REPL; the returned guard must live until exit.
fn init_logging(level: &str, logs_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    match logs_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let appender = tracing_appender::rolling::daily(dir, "devtrack.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);

            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(writer)
                        .with_ansi(false),
                )
                .try_init()?;
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(false),
                )
                .try_init()?;
            Ok(None)
        }
    }
}
