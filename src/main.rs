use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use console::Term;
use tracing_subscriber::EnvFilter;

use pocketcalc::calculator::{CalculatorEngine, KEYPAD_ROWS};
use pocketcalc::config::Config;
use pocketcalc::ui::{Outcome, Shell, Skin, render_splash, splash_duration};

#[derive(Parser, Debug)]
#[command(name = "pocketcalc", version, about = "A pocket calculator for the terminal")]
struct Cli {
    /// Skin to start with (overrides the config file)
    #[arg(long, value_enum)]
    theme: Option<Skin>,

    /// Path to the config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip the splash screen
    #[arg(long)]
    no_splash: bool,

    /// Disable colors
    #[arg(long)]
    plain: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Press keys on a fresh calculator and print the result
    Press {
        /// Keypad labels, pressed in order
        #[arg(required = true)]
        labels: Vec<String>,

        /// Print the display state as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the keypad layout
    Keys,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load(cli.config.as_deref()).context("Failed to load config")?;
    if let Some(skin) = cli.theme {
        config.skin = skin;
    }
    if cli.plain {
        config.color = false;
    }
    if cli.no_splash {
        config.splash_ms = 0;
    }
    if !config.color {
        crossterm::style::force_color_output(false);
    }

    match cli.command {
        Some(Commands::Press { labels, json }) => press(&labels, json),
        Some(Commands::Keys) => {
            for row in KEYPAD_ROWS {
                println!("{}", row.join("  "));
            }
            Ok(())
        }
        None => run_interactive(&config),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "pocketcalc=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn press(labels: &[String], json: bool) -> Result<()> {
    let mut engine = CalculatorEngine::new();
    for label in labels {
        engine.handle_input(label);
    }

    let state = engine.snapshot();
    if json {
        let text = serde_json::to_string(&state).context("Failed to serialize display state")?;
        println!("{}", text);
    } else {
        println!("{}", state.visible_text());
    }
    Ok(())
}

fn run_interactive(config: &Config) -> Result<()> {
    let term = Term::stdout();
    let interactive = term.is_term();
    tracing::info!(skin = %config.skin, interactive, "Starting calculator session");

    if interactive && let Some(delay) = splash_duration(config.splash_ms) {
        term.clear_screen()?;
        term.write_line(&render_splash())?;
        std::thread::sleep(delay);
    }

    let mut shell = Shell::new(config.skin, config.show_keypad);
    redraw(&term, &shell, interactive, &[])?;

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read input")?;
        match shell.handle_line(&line) {
            Outcome::Continue { notices } => redraw(&term, &shell, interactive, &notices)?,
            Outcome::Quit => break,
        }
    }

    Ok(())
}

fn redraw(term: &Term, shell: &Shell, interactive: bool, notices: &[String]) -> Result<()> {
    if interactive {
        term.clear_screen()?;
        term.write_line(&shell.screen())?;
        for notice in notices {
            term.write_line(notice)?;
        }
        term.write_str("> ")?;
    } else {
        // Piped output only gets the display text, one line per input line.
        let state = shell.state();
        let mut out = std::io::stdout().lock();
        writeln!(out, "{}", state.visible_text())?;
        for notice in notices {
            tracing::warn!("{}", notice);
        }
    }
    Ok(())
}
