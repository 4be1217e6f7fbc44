use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use tapcalc::calculator::{Calculator, copy_to_clipboard};
use tapcalc::config::Config;
use tapcalc::input::KeyMap;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tapcalc")]
#[command(version)]
#[command(about = "A button-press calculator for the terminal")]
struct Cli {
    /// Keys to press, e.g. `12 + 3 =`. Starts an interactive session if empty.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    keys: Vec<String>,

    /// Config file (defaults to the user config directory)
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Copy the final display to the clipboard
    #[arg(long)]
    copy: bool,

    /// Print the display after every key instead of every line
    #[arg(long)]
    trace: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tapcalc=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load_default().context("Failed to load config")?,
    };
    let keymap = KeyMap::from_config(&config).context("Invalid key aliases in config")?;

    let mut calculator = Calculator::new();
    if cli.trace {
        calculator.set_on_render(|text| println!("{}", text));
    }

    if cli.keys.is_empty() {
        run_interactive(&mut calculator, &keymap, &config.prompt, cli.trace)?;
    } else {
        press_keys(&mut calculator, &keymap, &cli.keys.join(" "));
        if !cli.trace {
            println!("{}", calculator.display_text());
        }
    }

    if cli.copy || config.copy_on_exit {
        copy_to_clipboard(calculator.display_text(), config.clipboard_hold())
            .context("Failed to copy result to clipboard")?;
    }

    Ok(())
}

/// Read key lines from stdin until EOF or `quit`.
fn run_interactive(
    calculator: &mut Calculator,
    keymap: &KeyMap,
    prompt: &str,
    trace: bool,
) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut stdout = io::stdout();

    if !trace {
        println!("{}", calculator.display_text());
    }

    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            write!(stdout, "{}", prompt)?;
            stdout.flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let trimmed = line.trim();

        match trimmed {
            "" => continue,
            "quit" | "exit" => break,
            _ => {}
        }

        press_keys(calculator, keymap, trimmed);
        if !trace {
            println!("{}", calculator.display_text());
        }
    }

    Ok(())
}

/// Press every key on the line. Unknown keys are reported and skipped.
fn press_keys(calculator: &mut Calculator, keymap: &KeyMap, line: &str) {
    for event in keymap.parse_line(line) {
        match event {
            Ok(event) => {
                calculator.handle(event);
            }
            Err(e) => eprintln!("{}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_may_start_with_minus() {
        let cli = Cli::try_parse_from(["tapcalc", "5", "-3", "="]).unwrap();
        assert_eq!(cli.keys, vec!["5", "-3", "="]);
    }

    #[test]
    fn test_flags_before_keys() {
        let cli = Cli::try_parse_from(["tapcalc", "--copy", "9", "-", "4"]).unwrap();
        assert!(cli.copy);
        assert_eq!(cli.keys, vec!["9", "-", "4"]);
    }
}
