use std::io::{self, Write};

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::{EntryStore, parse_key};
use crate::errors::{AppError, AppResult};
use crate::utils::colors::{success, warning};
use crate::utils::path::expand_tilde;

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { key: key_str, yes } = cmd {
        let key = parse_key(key_str).ok_or_else(|| AppError::InvalidKey(key_str.clone()))?;

        if !*yes {
            let prompt = format!("Delete entry {key}? This action is irreversible.");
            if !ask_confirmation(&prompt) {
                println!("Operation cancelled.");
                return Ok(());
            }
        }

        let mut store = EntryStore::open(expand_tilde(&cfg.database))?;
        store.delete(key)?;
        store.close()?;

        success(format!("Entry {key} deleted"));
    }

    Ok(())
}
