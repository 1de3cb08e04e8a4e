use crate::cli::commands::open_ledger;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::audit;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite sheet, its tables and the header row
pub fn handle(cli: &Cli) -> AppResult<()> {
    //
    // 1️⃣ Configuration
    //
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;

    let mut cfg = Config::load()?;
    cfg.database = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing rFuelLogger…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &cfg.database);

    //
    // 2️⃣ Sheet: tables, migrations, header row
    //
    let ledger = open_ledger(&cfg)?;

    println!("✅ Database initialized at {}", &cfg.database);

    //
    // 3️⃣ Internal log (non blocking)
    //
    audit(
        ledger.store().conn(),
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &cfg.database),
    );

    println!("🎉 rFuelLogger initialization completed!");
    Ok(())
}
