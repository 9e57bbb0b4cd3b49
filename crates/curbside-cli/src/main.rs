//! Interactive shell for the curbside occupancy registry.
//!
//! All registry logic lives in `curbside-core`; this binary only collects
//! input, calls through the registry API, and renders the results.

mod menu;
mod render;

use std::io::{self, BufRead, Write};

use curbside_core::{setup, Registry, RegistryConfig};
use tracing::error;

const USAGE: &str = "usage: curbside [--config <path>]";

fn main() -> io::Result<()> {
    setup::init_tracing();

    let path = match config_path(std::env::args().skip(1)) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    };

    let config = match path.map(RegistryConfig::from_toml_file).transpose() {
        Ok(config) => config,
        Err(e) => {
            error!(%e, "failed to load config");
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    writeln!(out, "Welcome to the Curbside parking system")?;

    let config = match config {
        Some(config) => config,
        None => prompt_capacity(&mut input, &mut out)?,
    };

    let mut registry = Registry::new(&config);
    menu::run(&mut registry, &mut input, &mut out)
}

/// Extract the `--config <path>` argument; `None` means prompt instead.
/// A `--config` with no path following it is a usage error, not a fall
/// through to interactive mode.
fn config_path(mut args: impl Iterator<Item = String>) -> Result<Option<String>, &'static str> {
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return match args.next() {
                Some(path) => Ok(Some(path)),
                None => Err("--config requires a path"),
            };
        }
    }
    Ok(None)
}

fn prompt_capacity(input: &mut impl BufRead, out: &mut impl Write) -> io::Result<RegistryConfig> {
    write!(out, "Enter parking lot capacity: ")?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    // Non-numeric input maps to 0; effective_capacity applies the default.
    let capacity = line.trim().parse::<i64>().unwrap_or(0);
    Ok(RegistryConfig::new(capacity))
}
