use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use zcalc::calculator::{ClipboardWriter, copy_and_wait};
use zcalc::config::Config;
use zcalc::session::clipboard_texts;
use zcalc::{OperatorMode, Session, Step, logging};

#[derive(Parser, Debug)]
#[command(name = "zcalc", version, about = "Keypad calculator for the terminal")]
struct Cli {
    /// Operator set to offer (overrides the config file).
    #[arg(short, long, value_enum)]
    mode: Option<OperatorMode>,

    /// Path to a config file instead of the default location.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Copy the display to the clipboard after each "=".
    #[arg(long)]
    copy: bool,

    /// Print a readout after every key instead of only the last one.
    #[arg(long)]
    trace: bool,

    /// Keys to press, e.g. `7.5 / 2 =`. Reads lines from stdin when empty.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    keys: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("Failed to load config")?;
    logging::init(&config.log_level);

    let mode = cli.mode.unwrap_or(config.mode);
    let copy = cli.copy || config.copy_results;
    let mut session = Session::new(mode);

    tracing::debug!(%mode, copy, "starting session");

    if cli.keys.is_empty() {
        return run_interactive(&mut session, copy, cli.trace);
    }

    let steps = session.apply_line(&cli.keys.join(" "))?;
    print_steps(&steps, cli.trace);
    std::io::stdout().flush().context("Failed to flush stdout")?;

    // Later results replace earlier ones, so only the last one is served.
    if copy && let Some(text) = clipboard_texts(&steps).last() {
        if let Err(e) = copy_and_wait(text) {
            tracing::warn!("{}", e);
        }
    }

    Ok(())
}

fn run_interactive(session: &mut Session, copy: bool, trace: bool) -> Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    let mut clipboard = if copy { open_clipboard() } else { None };

    println!("{}", session.readout());

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read input")?;
        let line = line.trim();

        match line {
            ":quit" | ":q" => break,
            _ if line.starts_with(":mode") => {
                let name = line.trim_start_matches(":mode").trim();
                match OperatorMode::from_str(name, true) {
                    Ok(mode) => session.set_mode(mode),
                    Err(_) => eprintln!("unknown mode '{}' (reduced, extended)", name),
                }
                println!("mode: {}", session.mode());
            }
            _ => match session.apply_line(line) {
                Ok(steps) => {
                    print_steps(&steps, trace);
                    if let Some(clipboard) = clipboard.as_mut() {
                        for text in clipboard_texts(&steps) {
                            if let Err(e) = clipboard.copy(text) {
                                tracing::warn!("{}", e);
                            }
                        }
                    }
                }
                Err(e) => eprintln!("{}", e),
            },
        }

        stdout.flush().context("Failed to flush stdout")?;
    }

    Ok(())
}

fn open_clipboard() -> Option<ClipboardWriter> {
    match ClipboardWriter::new() {
        Ok(clipboard) => Some(clipboard),
        Err(e) => {
            tracing::warn!("{}, results will not be copied", e);
            None
        }
    }
}

fn print_steps(steps: &[Step], trace: bool) {
    if trace {
        for step in steps {
            println!("{}", step.readout);
        }
    } else if let Some(last) = steps.last() {
        println!("{}", last.readout);
    }
}
