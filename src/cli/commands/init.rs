use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::EntryStore;
use crate::errors::AppResult;
use crate::utils::colors::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite database, including schema migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;

    println!("Initializing feedlog…");
    println!("Config file : {}", Config::config_file().display());
    println!("Database    : {}", db_path.display());

    // Opening the store creates the schema and runs pending migrations.
    let store = EntryStore::open(&db_path)?;
    store.close()?;

    success(format!("Database initialized at {}", db_path.display()));
    Ok(())
}
