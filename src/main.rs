//! Interactive storefront shell.
//!
//! A line-oriented driver around the library: each line from stdin is parsed
//! into an [`Event`], handled, and the resulting frame is printed.
//!
//! # Lifecycle
//!
//! 1. **Load**: Read the config file, apply `key=value` overrides from the
//!    command line, initialize tracing, build `AppState`
//! 2. **Loop**: Advance the banner for elapsed time, parse a command,
//!    delegate to [`handle_event`], carry out actions, render
//! 3. **Exit**: On `quit` or end of input
//!
//! # Usage
//!
//! ```text
//! hellowshop [--config <file>] [key=value ...]
//! hellowshop theme=midnight catalog_file=~/shop/catalog.json
//! ```
//!
//! Without `--config`, `$XDG_CONFIG_HOME/hellowshop/config.toml` is read if
//! it exists. Frame width comes from `$COLUMNS` (default 100).

#![allow(clippy::multiple_crate_versions)]

use hellowshop::app::commands::HELP;
use hellowshop::app::{parse_command, Command};
use hellowshop::{handle_event, initialize, observability, Action, AppState, Config, Event, Result};
use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

const DEFAULT_COLUMNS: usize = 100;
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("hellowshop: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let config = load_config(std::env::args().skip(1))?;
    if let Some(trace_file) = observability::init_tracing(&config) {
        tracing::debug!(trace_file = %trace_file.display(), "tracing initialized");
    }

    let mut state = initialize(&config)?;
    let mut shell = Shell::new(&config);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    shell.draw(&mut stdout, &state, &[])?;

    for line in stdin.lock().lines() {
        let line = line?;
        shell.advance_banner(&mut state)?;

        let command = match parse_command(&line, &state.page) {
            Ok(command) => command,
            Err(e) => {
                shell.draw(&mut stdout, &state, &[e.to_string()])?;
                continue;
            }
        };

        let event = match command {
            Command::Event(event) => event,
            Command::Help => {
                shell.draw(&mut stdout, &state, &[HELP.to_string()])?;
                continue;
            }
            Command::Redraw => {
                shell.draw(&mut stdout, &state, &[])?;
                continue;
            }
        };

        let (_render, actions) = handle_event(&mut state, &event)?;
        let mut notices = Vec::new();
        let mut quit = false;
        for action in actions {
            match action {
                Action::PushUrl(location) => tracing::debug!(location = %location, "location changed"),
                Action::Notify(message) => notices.push(message),
                Action::Quit => quit = true,
            }
        }
        if quit {
            break;
        }

        shell.draw(&mut stdout, &state, &notices)?;
    }

    tracing::debug!("shell exited");
    Ok(())
}

/// Layers the config file and `key=value` arguments into one [`Config`].
fn load_config(mut args: impl Iterator<Item = String>) -> Result<Config> {
    let mut config_file: Option<PathBuf> = None;
    let mut overrides = BTreeMap::new();

    while let Some(arg) = args.next() {
        if arg == "--config" {
            config_file = args.next().map(|p| hellowshop::infrastructure::expand_tilde(&p));
        } else if let Some((key, value)) = arg.split_once('=') {
            overrides.insert(key.trim().to_string(), value.trim().to_string());
        } else {
            eprintln!("hellowshop: ignoring argument {arg:?} (expected key=value)");
        }
    }

    let mut map = match config_file {
        Some(path) => hellowshop::read_config_map(path)?,
        None => {
            let default_path = hellowshop::infrastructure::default_config_file();
            if default_path.exists() {
                hellowshop::read_config_map(default_path)?
            } else {
                BTreeMap::new()
            }
        }
    };
    map.extend(overrides);

    Ok(Config::from_map(&map))
}

struct Shell {
    columns: usize,
    banner_interval: Duration,
    last_banner: Instant,
}

impl Shell {
    fn new(config: &Config) -> Self {
        let columns = std::env::var("COLUMNS")
            .ok()
            .and_then(|c| c.parse().ok())
            .filter(|c: &usize| *c >= 40)
            .unwrap_or(DEFAULT_COLUMNS);

        Self {
            columns,
            banner_interval: Duration::from_secs(config.banner_interval_secs),
            last_banner: Instant::now(),
        }
    }

    /// Sends one `BannerTick` per full interval elapsed since the last one.
    fn advance_banner(&mut self, state: &mut AppState) -> Result<()> {
        if self.banner_interval.is_zero() {
            return Ok(());
        }

        while self.last_banner.elapsed() >= self.banner_interval {
            self.last_banner += self.banner_interval;
            handle_event(state, &Event::BannerTick)?;
        }
        Ok(())
    }

    fn draw(&self, out: &mut impl Write, state: &AppState, notices: &[String]) -> Result<()> {
        let frame = hellowshop::ui::render(state, self.columns);

        write!(out, "{CLEAR_SCREEN}{frame}")?;
        for notice in notices {
            writeln!(out, "{notice}")?;
        }
        write!(out, "> ")?;
        out.flush()?;
        Ok(())
    }
}
