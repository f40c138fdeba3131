use std::io::{self, BufRead, Write};

use anyhow::Result;
use erp_dash::prelude::*;

/// Drives the theme engine from stdin, one command per line.
///
/// - `{...}` lines are JSON update requests
/// - `describe` prints the agent summary
/// - `spec` prints the style specification as JSON
/// - `toggle` switches between light and dark
/// - anything else is interpreted as a natural-language command
fn main() -> Result<()> {
    env_logger::init();

    let mut manager = ThemeManager::with_config(ThemeConfig::from_env_or_default());
    manager.subscribe(|config, spec| {
        log::info!(
            "theme_agent: {} / {} (radius {}px, spacing {}px)",
            config.mode,
            config.variant,
            spec.shape_radius,
            spec.spacing_unit
        );
    });

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", manager.describe_for_agent())?;

    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line {
            "describe" => write!(stdout, "{}", manager.describe_for_agent())?,
            "spec" => writeln!(stdout, "{}", manager.style_spec().to_json()?)?,
            "toggle" => {
                manager.toggle_mode();
            },
            _ if line.starts_with('{') => {
                let applied = ThemeUpdateRequest::from_json(line)
                    .and_then(|request| manager.apply_request(&request));
                if let Err(err) = applied {
                    writeln!(stdout, "error: {}", err)?;
                }
            },
            _ => {
                if interpret(line).is_empty() {
                    writeln!(stdout, "no theme keywords recognised")?;
                } else {
                    manager.apply_natural_language_command(line);
                }
            },
        }
        stdout.flush()?;
    }

    Ok(())
}
